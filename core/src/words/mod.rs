//! Editing the per-locale word-list documents.
//!
//! A word-list document holds every category of one locale. Updating it means
//! swapping out the whole words array of one category for the entries of a
//! [`CategoryWordList`], leaving the other categories as they were.
use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use category_word_lists::{
    CategoryWordList, Difficulty, TieredEntries, WordEntry,
};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use tempfile::NamedTempFile;

pub use self::{
    document::{Category, WordListDocument},
    splice::{format_entries, replace_category_words},
    validate::{TIER_SIZE, validate_tiers, validate_unique, validate_word_list},
};
use crate::errors::{AssetError, CategoryNotFoundError, InvalidDocumentError};

mod document;
pub mod splice;
mod validate;

/// How a word-list document is rewritten.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UpdateMode {
    /// Replace the text of the words array only; every other byte is kept.
    Splice,
    /// Parse the document, edit it, and print it back out with two-space
    /// indentation. Also renames the category if the word list has a display
    /// name.
    Reserialize,
}

impl UpdateMode {
    /// The mode a word list is written with unless told otherwise.
    ///
    /// Word lists that rename their category have to be reserialized.
    #[must_use]
    pub fn preferred_for(word_list: &CategoryWordList) -> Self {
        if word_list.display_name().is_some() {
            UpdateMode::Reserialize
        } else {
            UpdateMode::Splice
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UpdateMode::Splice => "splice",
            UpdateMode::Reserialize => "reserialize",
        })
    }
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "splice" => Ok(UpdateMode::Splice),
            "reserialize" => Ok(UpdateMode::Reserialize),
            other => Err(format!(
                "unknown update mode \"{other}\", expected splice or reserialize"
            )),
        }
    }
}

/// What [`update_word_list`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// The document that was rewritten.
    pub path: PathBuf,
    /// The category whose words were replaced.
    pub category: String,
    /// How many words the category had before.
    pub previous: usize,
    /// How many words the category has now.
    pub entries: usize,
    /// How the document was rewritten.
    pub mode: UpdateMode,
}

/// The document a word list belongs in: `<words_dir>/<locale>.json`.
#[must_use]
pub fn word_list_path(words_dir: &Path, word_list: &CategoryWordList) -> PathBuf {
    words_dir.join(format!("{}.json", word_list.locale()))
}

/// Replace the words of `word_list`'s category in the document at `path`.
///
/// The word list is validated first, and the edited document must parse
/// before it's written, so nothing is written when either fails.
pub fn update_word_list(
    path: &Path,
    word_list: &CategoryWordList,
    mode: UpdateMode,
) -> Result<UpdateReport, AssetError> {
    validate_word_list(word_list)?;

    let text =
        fs::read_to_string(path).map_err(|io_err| AssetError::io(path, io_err))?;
    let invalid = |inner| InvalidDocumentError {
        path: path.to_owned(),
        inner,
    };
    let previous = WordListDocument::from_json(&text)
        .map_err(invalid)?
        .category(word_list.category())
        .map_or(0, |category| category.words.len());

    if let (UpdateMode::Splice, Some(display_name)) =
        (mode, word_list.display_name())
    {
        warn!(
            "{}: splicing leaves the display name as it is, not renaming it \
             to \"{display_name}\"",
            word_list.name(),
        );
    }
    let edited = match mode {
        UpdateMode::Splice => replace_category_words(
            &text,
            word_list.category(),
            word_list.entries(),
        )?,
        UpdateMode::Reserialize => reserialize(&text, word_list)
            .map_err(invalid)?
            .ok_or_else(|| CategoryNotFoundError {
                category: word_list.category().to_owned(),
            })?,
    };

    let document = WordListDocument::from_json(&edited).map_err(invalid)?;
    debug_assert_eq!(
        document
            .category(word_list.category())
            .map(|category| category.words.as_slice()),
        Some(word_list.entries()),
    );
    debug!(
        "{} still has {} categories",
        path.display(),
        document.categories.len(),
    );

    replace_file(path, &edited)?;
    info!(
        "updated {} in {} ({previous} -> {} words)",
        word_list.category(),
        path.display(),
        word_list.len(),
    );
    Ok(UpdateReport {
        path: path.to_owned(),
        category: word_list.category().to_owned(),
        previous,
        entries: word_list.len(),
        mode,
    })
}

/// Write `contents` to a temporary file next to `path`, then move it over
/// `path`, so the document is never left half-written. The file keeps its
/// permissions.
fn replace_file(path: &Path, contents: &str) -> Result<(), AssetError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let permissions = fs::metadata(path)
        .map_err(|io_err| AssetError::io(path, io_err))?
        .permissions();

    let mut file = NamedTempFile::new_in(dir)
        .map_err(|io_err| AssetError::io(dir, io_err))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.as_file().set_permissions(permissions))
        .map_err(|io_err| AssetError::io(file.path(), io_err))?;
    file.persist(path)
        .map_err(|persist_err| AssetError::io(path, persist_err.error))?;
    Ok(())
}

/// Swap the category's words (and display name) in the parsed document and
/// print it back out.
///
/// Returns `Ok(None)` if the category isn't in the document.
fn reserialize(
    text: &str,
    word_list: &CategoryWordList,
) -> Result<Option<String>, serde_json::Error> {
    // Work on an untyped Value so key order and unknown fields survive
    let mut document: Value = serde_json::from_str(text)?;
    let Some(category) = document
        .get_mut("categories")
        .and_then(Value::as_array_mut)
        .and_then(|categories| {
            categories.iter_mut().find(|category| {
                category.get("id").and_then(Value::as_str)
                    == Some(word_list.category())
            })
        })
        .and_then(Value::as_object_mut)
    else {
        return Ok(None);
    };

    if let Some(display_name) = word_list.display_name() {
        category.insert("displayName".into(), display_name.into());
    }
    category.insert("words".into(), serde_json::to_value(word_list.entries())?);

    let mut buf = Vec::with_capacity(text.len());
    let mut serializer = serde_json::Serializer::with_formatter(
        &mut buf,
        PrettyFormatter::with_indent(b"  "),
    );
    document.serialize(&mut serializer)?;
    let mut edited =
        String::from_utf8(buf).expect("serde_json only writes UTF-8");
    edited.push('\n');
    Ok(Some(edited))
}
