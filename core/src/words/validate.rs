use category_word_lists::{CategoryWordList, Difficulty, TieredEntries};
use indexmap::IndexMap;

use crate::errors::ValidationError;

/// How many entries every tier of a tiered word list must have.
pub const TIER_SIZE: usize = 40;

// Keep the error message readable for badly broken lists
const MAX_REPORTED_DUPLICATES: usize = 20;

/// Check that every tier has exactly `expected` texts and that no text
/// appears twice, in the same tier or across tiers.
pub fn validate_tiers(
    locale: &str,
    tiers: &TieredEntries,
    expected: usize,
) -> Result<(), ValidationError> {
    if let Some((tier, texts)) =
        tiers.iter().find(|(_, texts)| texts.len() != expected)
    {
        return Err(ValidationError::TierCount {
            locale: locale.to_owned(),
            tier,
            expected,
            actual: texts.len(),
        });
    }
    validate_unique(
        locale,
        Difficulty::ALL
            .into_iter()
            .flat_map(|tier| tiers.get(tier))
            .map(String::as_str),
    )
}

/// Check that no text appears more than once.
pub fn validate_unique<'a>(
    locale: &str,
    texts: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut counts = IndexMap::<&str, usize>::new();
    texts.into_iter().for_each(|text| {
        *counts.entry(text).or_default() += 1;
    });
    let duplicates = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(text, _)| text.to_owned())
        .take(MAX_REPORTED_DUPLICATES)
        .collect::<Vec<_>>();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Duplicates {
            locale: locale.to_owned(),
            duplicates,
        })
    }
}

/// Run every check that applies to `word_list`.
///
/// Tiered word lists must have [`TIER_SIZE`] texts per tier. No word list
/// may repeat a text.
pub fn validate_word_list(
    word_list: &CategoryWordList,
) -> Result<(), ValidationError> {
    match word_list.tiers() {
        Some(tiers) => validate_tiers(word_list.locale(), tiers, TIER_SIZE),
        None => validate_unique(
            word_list.locale(),
            word_list.iter().map(|entry| entry.text.as_str()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(easy: usize, medium: usize, hard: usize) -> TieredEntries {
        let texts = |prefix: &str, n: usize| {
            (0..n).map(|i| format!("{prefix} {i}")).collect::<Vec<_>>()
        };
        TieredEntries {
            easy: texts("easy", easy),
            medium: texts("medium", medium),
            hard: texts("hard", hard),
        }
    }

    #[test]
    fn full_tiers_pass() {
        validate_tiers("es-AR", &tiers(40, 40, 40), TIER_SIZE).unwrap();
    }

    #[test]
    fn short_tier_fails() {
        let err = validate_tiers("es-AR", &tiers(40, 39, 40), TIER_SIZE)
            .unwrap_err();
        match err {
            ValidationError::TierCount {
                locale,
                tier,
                expected,
                actual,
            } => {
                assert_eq!(locale, "es-AR");
                assert_eq!(tier, Difficulty::Medium);
                assert_eq!(expected, 40);
                assert_eq!(actual, 39);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_across_tiers_fails() {
        let mut tiers = tiers(40, 40, 40);
        tiers.hard[7] = tiers.easy[3].clone();
        let err = validate_tiers("en-US", &tiers, TIER_SIZE).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"en-US: duplicates across difficulties: ["easy 3"]"#,
        );
    }

    #[test]
    fn duplicates_are_reported_in_order_and_capped() {
        let texts = (0..30)
            .flat_map(|i| [format!("word {i}"), format!("word {i}")])
            .collect::<Vec<_>>();
        let err = validate_unique("es-AR", texts.iter().map(String::as_str))
            .unwrap_err();
        let ValidationError::Duplicates { duplicates, .. } = err else {
            panic!("expected duplicates");
        };
        assert_eq!(duplicates.len(), MAX_REPORTED_DUPLICATES);
        assert_eq!(duplicates[0], "word 0");
        assert_eq!(duplicates[19], "word 19");
    }
}
