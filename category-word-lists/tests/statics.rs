#![allow(missing_docs)]

use std::collections::HashSet;

use category_word_lists::{ALL_WORD_LISTS, Difficulty, lookup};

#[test]
fn word_lists_parse() {
    ALL_WORD_LISTS.iter().for_each(|word_list| {
        assert!(!word_list.is_empty(), "{} is empty", word_list.name());
        assert_eq!(
            word_list.name(),
            format!("{}.{}", word_list.locale(), word_list.category()),
        );
    });
}

#[test]
fn word_list_names_are_unique() {
    let names = ALL_WORD_LISTS
        .iter()
        .map(|word_list| word_list.name())
        .collect::<HashSet<_>>();
    assert_eq!(names.len(), ALL_WORD_LISTS.len());
}

#[test]
fn no_repeated_texts() {
    ALL_WORD_LISTS.iter().for_each(|word_list| {
        let mut seen = HashSet::new();
        word_list.iter().for_each(|entry| {
            assert!(
                seen.insert(entry.text.as_str()),
                "{} repeats {:?}",
                word_list.name(),
                entry.text,
            );
        });
    });
}

#[test]
fn bands_have_forty_per_tier() {
    let bands = lookup("bandas_musica");
    assert_eq!(bands.len(), 2);
    bands.iter().for_each(|word_list| {
        let tiers = word_list.tiers().expect("bands are tiered");
        Difficulty::ALL.into_iter().for_each(|difficulty| {
            assert_eq!(tiers.get(difficulty).len(), 40);
        });
        assert!(word_list.requires_validation());
        assert!(word_list.display_name().is_some());
    });
}

#[test]
fn flat_lists_keep_file_order() {
    let athletes = lookup("deportistas");
    assert_eq!(athletes.len(), 1);
    let first = &athletes[0].entries()[0];
    assert_eq!(first.text, "Lionel Messi");
    assert_eq!(first.difficulty, Difficulty::Easy);
    assert!(!athletes[0].requires_validation());
}
