#![allow(missing_docs)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use asset_upkeep::{
    errors::{AssetError, ValidationError},
    words::{
        CategoryWordList, Difficulty, TieredEntries, UpdateMode, WordEntry,
        WordListDocument, update_word_list, word_list_path,
    },
};
use tempfile::TempDir;

const ES_AR: &str = r#"{
  "locale": "es-AR",
  "categories": [
    {
      "id": "bandas_musica",
      "displayName": "Bandas",
      "words": [
        {"text": "Soda Stereo", "difficulty": "easy"}
      ]
    },
    {
      "id": "deportistas",
      "displayName": "Deportistas",
      "icon": "sports",
      "words": [
        {"text": "Lionel Messi", "difficulty": "easy"},
        {"text": "Manu Ginóbili", "difficulty": "easy"}
      ]
    },
    {
      "id": "marcas",
      "displayName": "Marcas",
      "words": [
        {"text": "Arcor", "difficulty": "easy"}
      ]
    }
  ]
}
"#;

fn words_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("es-AR.json");
    fs::write(&path, ES_AR).unwrap();
    (tmp, path)
}

fn athletes() -> CategoryWordList {
    CategoryWordList::define("deportistas", "es-AR", [
        WordEntry::new("Gabriela Sabatini", Difficulty::Easy),
        WordEntry::new("Carlos Tevez", Difficulty::Medium),
        WordEntry::new("Juan Manuel Fangio", Difficulty::Hard),
    ])
}

fn bands(per_tier: usize) -> TieredEntries {
    let texts = |tier: &str| {
        (0..per_tier).map(|i| format!("{tier} band {i}")).collect()
    };
    TieredEntries {
        easy: texts("easy"),
        medium: texts("medium"),
        hard: texts("hard"),
    }
}

fn document(path: &Path) -> WordListDocument {
    WordListDocument::from_json(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn path_is_named_after_locale() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(
        word_list_path(tmp.path(), &athletes()),
        tmp.path().join("es-AR.json"),
    );
}

#[test]
fn splice_replaces_only_the_target_category() {
    let (_tmp, path) = words_dir();
    let before = document(&path);

    let report =
        update_word_list(&path, &athletes(), UpdateMode::Splice).unwrap();
    assert_eq!(report.previous, 2);
    assert_eq!(report.entries, 3);

    let after = document(&path);
    assert_eq!(
        after.category("deportistas").unwrap().words,
        athletes().entries(),
    );
    ["bandas_musica", "marcas"].iter().for_each(|id| {
        assert_eq!(after.category(id), before.category(id));
    });
    // Unknown fields are left alone
    assert_eq!(after.extra, before.extra);
    assert_eq!(
        after.category("deportistas").unwrap().extra,
        before.category("deportistas").unwrap().extra,
    );

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains(
        "\n        {\"text\": \"Gabriela Sabatini\", \"difficulty\": \"easy\"},\n"
    ));
    assert!(text.ends_with(&ES_AR[ES_AR.find("\n    },\n    {\n      \"id\": \"marcas\"").unwrap()..]));
}

#[test]
fn running_twice_is_the_same_as_once() {
    let (_tmp, path) = words_dir();
    update_word_list(&path, &athletes(), UpdateMode::Splice).unwrap();
    let once = fs::read_to_string(&path).unwrap();
    let report =
        update_word_list(&path, &athletes(), UpdateMode::Splice).unwrap();
    assert_eq!(report.previous, 3);
    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
fn reserialize_renames_the_category() {
    let (_tmp, path) = words_dir();
    let word_list = CategoryWordList::define_tiered(
        "bandas_musica",
        "es-AR",
        Some("Bandas de Música".into()),
        bands(40),
    );
    assert_eq!(UpdateMode::preferred_for(&word_list), UpdateMode::Reserialize);

    update_word_list(&path, &word_list, UpdateMode::Reserialize).unwrap();
    let after = document(&path);
    let category = after.category("bandas_musica").unwrap();
    assert_eq!(category.display_name, "Bandas de Música");
    assert_eq!(category.words.len(), 120);
    assert_eq!(category.words[40], WordEntry::new("medium band 0", Difficulty::Medium));
    assert_eq!(after.category("marcas").unwrap().words.len(), 1);

    let text = fs::read_to_string(&path).unwrap();
    // Key order survives, non-ASCII isn't escaped
    assert!(text.starts_with("{\n  \"locale\": \"es-AR\",\n  \"categories\": ["));
    assert!(text.contains("\"displayName\": \"Bandas de Música\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn splice_keeps_the_display_name() {
    let (_tmp, path) = words_dir();
    let word_list = CategoryWordList::define_tiered(
        "bandas_musica",
        "es-AR",
        Some("Bandas de Música".into()),
        bands(40),
    );

    update_word_list(&path, &word_list, UpdateMode::Splice).unwrap();
    let category = document(&path).category("bandas_musica").unwrap().clone();
    assert_eq!(category.display_name, "Bandas");
    assert_eq!(category.words, word_list.entries());
}

#[test]
fn rewrite_leaves_no_stray_files() {
    let (tmp, path) = words_dir();
    update_word_list(&path, &athletes(), UpdateMode::Splice).unwrap();
    let names = fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["es-AR.json"]);
}

#[cfg(unix)]
#[test]
fn rewrite_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_tmp, path) = words_dir();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    update_word_list(&path, &athletes(), UpdateMode::Splice).unwrap();
    assert_eq!(
        fs::metadata(&path).unwrap().permissions().mode() & 0o777,
        0o644,
    );
}

#[test]
fn short_tier_is_rejected_before_writing() {
    let (_tmp, path) = words_dir();
    let mut tiers = bands(40);
    tiers.hard.pop();
    let word_list =
        CategoryWordList::define_tiered("bandas_musica", "es-AR", None, tiers);

    let err =
        update_word_list(&path, &word_list, UpdateMode::Splice).unwrap_err();
    assert!(matches!(
        err,
        AssetError::Validation(ValidationError::TierCount {
            tier: Difficulty::Hard,
            actual: 39,
            ..
        }),
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), ES_AR);
}

#[test]
fn duplicate_is_rejected_before_writing() {
    let (_tmp, path) = words_dir();
    let mut tiers = bands(40);
    tiers.medium[0] = tiers.easy[0].clone();
    let word_list =
        CategoryWordList::define_tiered("bandas_musica", "es-AR", None, tiers);

    let err =
        update_word_list(&path, &word_list, UpdateMode::Splice).unwrap_err();
    assert!(matches!(
        err,
        AssetError::Validation(ValidationError::Duplicates { .. }),
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), ES_AR);
}

#[test]
fn missing_category_is_fatal() {
    let (_tmp, path) = words_dir();
    let word_list = CategoryWordList::define("lugares", "es-AR", [
        WordEntry::new("Obelisco", Difficulty::Easy),
    ]);
    [UpdateMode::Splice, UpdateMode::Reserialize]
        .into_iter()
        .for_each(|mode| {
            let err = update_word_list(&path, &word_list, mode).unwrap_err();
            assert!(matches!(err, AssetError::CategoryNotFound(_)));
        });
    assert_eq!(fs::read_to_string(&path).unwrap(), ES_AR);
}

#[test]
fn missing_document_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let err = update_word_list(
        &tmp.path().join("en-US.json"),
        &athletes(),
        UpdateMode::Splice,
    )
    .unwrap_err();
    assert!(matches!(err, AssetError::Io { .. }));
}

#[test]
fn bundled_word_lists_apply_cleanly() {
    let (_tmp, path) = words_dir();
    [
        &category_word_lists::ES_AR_DEPORTISTAS,
        &category_word_lists::ES_AR_BANDAS_MUSICA,
    ]
    .into_iter()
    .for_each(|word_list| {
        let mode = UpdateMode::preferred_for(word_list);
        update_word_list(&path, word_list, mode).unwrap();
        assert_eq!(
            document(&path).category(word_list.category()).unwrap().words,
            word_list.entries(),
        );
    });
}
