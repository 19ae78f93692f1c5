//! Replacing a category's words without touching the rest of the document.
//!
//! The document is treated as text: the words array of the category is found
//! with a pattern and only the span between its brackets is rewritten, so
//! every other byte of the hand-formatted file survives.
use std::sync::LazyLock;

use category_word_lists::WordEntry;
use regex_lite::Regex;
use serde_json::Value;

use crate::errors::CategoryNotFoundError;

static ID_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""id"\s*:"#).expect("id key pattern is valid")
});

/// Matches from the category's id through the opening bracket of its words
/// (1), the array's contents (2), and the closing bracket and brace (3).
fn category_pattern(category: &str) -> Regex {
    Regex::new(&format!(
        r#"("id"\s*:\s*"{}"[\s\S]*?"words"\s*:\s*\[)([\s\S]*?)(\n\s*\]\s*\n\s*\}})"#,
        regex_lite::escape(category),
    ))
    .expect("escaped category id always makes a valid pattern")
}

/// Format entries one per line, each as a compact JSON object, with a
/// leading newline and no trailing one.
#[must_use]
pub fn format_entries(entries: &[WordEntry], indent: &str) -> String {
    let last = entries.len().saturating_sub(1);
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let comma = if index < last { "," } else { "" };
            format!(
                "\n{indent}{{\"text\": {}, \"difficulty\": \"{}\"}}{comma}",
                Value::from(entry.text.as_str()),
                entry.difficulty,
            )
        })
        .collect()
}

/// Replace the contents of the first `category`'s words array in `text` with
/// `entries`.
///
/// Entries are indented one level (two spaces) deeper than the array's
/// closing bracket. Line endings are normalised to `\n`.
///
/// Fails if the category's words array can't be found, including when the
/// only match would reach into a neighbouring category.
pub fn replace_category_words(
    text: &str,
    category: &str,
    entries: &[WordEntry],
) -> Result<String, CategoryNotFoundError> {
    let not_found = || CategoryNotFoundError {
        category: category.to_owned(),
    };
    let text = text.replace("\r\n", "\n");

    let pattern = category_pattern(category);
    let captures = pattern.captures(&text).ok_or_else(not_found)?;
    let (Some(head), Some(body), Some(tail)) =
        (captures.get(1), captures.get(2), captures.get(3))
    else {
        return Err(not_found());
    };

    // The lazy matches will happily run on into the next category if this one
    // has no (multi-line) words array
    if ID_KEY.find_iter(head.as_str()).count() > 1
        || ID_KEY.is_match(body.as_str())
    {
        return Err(not_found());
    }

    let closing = tail.as_str();
    let closing = &closing[..closing.find(']').unwrap_or(closing.len())];
    let bracket_indent = closing.rsplit('\n').next().unwrap_or_default();
    let entries = format_entries(entries, &format!("{bracket_indent}  "));

    let mut edited =
        String::with_capacity(text.len() - body.as_str().len() + entries.len());
    edited.push_str(&text[..body.start()]);
    edited.push_str(&entries);
    edited.push_str(&text[body.end()..]);
    Ok(edited)
}
