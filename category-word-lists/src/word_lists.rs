use std::{
    borrow::Cow,
    fmt, fs, io,
    path::{Path, PathBuf},
    slice,
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How hard a word is to guess.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Everyone knows it.
    Easy,
    /// Most people know it.
    Medium,
    /// Somebody in the room knows it.
    Hard,
}

impl Difficulty {
    /// Every tier, in the order they appear in a category.
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The name used for the tier in word-list documents.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single word of a category, as stored in a word-list document.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    /// What the players see.
    pub text: String,
    /// Which tier the word is drawn in.
    pub difficulty: Difficulty,
}

impl WordEntry {
    /// Create a new entry.
    pub fn new(text: impl Into<String>, difficulty: Difficulty) -> Self {
        WordEntry {
            text: text.into(),
            difficulty,
        }
    }
}

/// Word texts grouped by [`Difficulty`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TieredEntries {
    /// The [`Difficulty::Easy`] texts.
    #[serde(default)]
    pub easy: Vec<String>,
    /// The [`Difficulty::Medium`] texts.
    #[serde(default)]
    pub medium: Vec<String>,
    /// The [`Difficulty::Hard`] texts.
    #[serde(default)]
    pub hard: Vec<String>,
}

impl TieredEntries {
    /// Get the texts for one tier.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Iterate through the tiers in easy, medium, hard order.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &[String])> {
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| (difficulty, self.get(difficulty)))
    }

    /// Flatten the tiers into entries, easy first.
    #[must_use]
    pub fn to_entries(&self) -> Vec<WordEntry> {
        self.iter()
            .flat_map(|(difficulty, texts)| {
                texts.iter().map(move |text| WordEntry::new(text, difficulty))
            })
            .collect()
    }

    /// Total number of texts across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    /// Returns `true` if every tier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawListData {
    category: String,
    locale: String,
    display_name: Option<String>,
    #[serde(default)]
    words: Vec<WordEntry>,
    tiers: Option<TieredEntries>,
}

/// The parsed contents of a word list.
#[derive(Debug)]
pub(crate) struct ListData {
    category: String,
    locale: String,
    display_name: Option<String>,
    entries: Vec<WordEntry>,
    tiers: Option<TieredEntries>,
}

impl ListData {
    pub(crate) fn parse(
        name: &str,
        source: &str,
    ) -> Result<Self, CategoryWordListError> {
        let raw: RawListData = toml::from_str(source).map_err(|toml_err| {
            CategoryWordListError::Malformed(name.to_owned(), toml_err)
        })?;
        let (entries, tiers) = match (raw.words.is_empty(), raw.tiers) {
            (false, None) => (raw.words, None),
            (true, Some(tiers)) => (tiers.to_entries(), Some(tiers)),
            _ => {
                return Err(CategoryWordListError::AmbiguousEntries(
                    name.to_owned(),
                ));
            },
        };
        Ok(ListData {
            category: raw.category,
            locale: raw.locale,
            display_name: raw.display_name,
            entries,
            tiers,
        })
    }
}

#[derive(Debug)]
enum Contents {
    Eager(ListData),
    Lazy(LazyLock<ListData>),
}

impl Contents {
    fn get(&self) -> &ListData {
        match self {
            Contents::Eager(data) => data,
            Contents::Lazy(lazy) => LazyLock::force(lazy),
        }
    }
}

/// The replacement words for one category of one locale's word-list
/// document.
#[derive(Debug)]
pub struct CategoryWordList {
    name: Cow<'static, str>,
    contents: Contents,
}

impl CategoryWordList {
    pub(crate) const fn new_lazy(
        name: &'static str,
        contents: LazyLock<ListData>,
    ) -> Self {
        CategoryWordList {
            name: Cow::Borrowed(name),
            contents: Contents::Lazy(contents),
        }
    }

    /// Load a word list from a TOML file.
    ///
    /// A word list names its category and locale, and then either lists its
    /// entries one by one or groups their texts by tier:
    /// ```toml
    /// category = "bandas_musica"
    /// locale = "es-AR"
    /// display-name = "Bandas de Música"
    ///
    /// [tiers]
    /// easy = ["Soda Stereo"]
    /// medium = ["Almafuerte"]
    /// hard = ["Almendra"]
    /// ```
    #[allow(clippy::result_large_err)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CategoryWordListError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|io_err| {
            CategoryWordListError::FailedToRead(path.to_owned(), io_err)
        })?;
        let data = ListData::parse(&path.display().to_string(), &source)?;
        Ok(CategoryWordList {
            name: Cow::Owned(format!("{}.{}", data.locale, data.category)),
            contents: Contents::Eager(data),
        })
    }

    /// Create a new word list from an iterable of entries.
    pub fn define(
        category: impl Into<String>,
        locale: impl Into<String>,
        entries: impl IntoIterator<Item = WordEntry>,
    ) -> Self {
        let data = ListData {
            category: category.into(),
            locale: locale.into(),
            display_name: None,
            entries: entries.into_iter().collect(),
            tiers: None,
        };
        CategoryWordList {
            name: Cow::Owned(format!("{}.{}", data.locale, data.category)),
            contents: Contents::Eager(data),
        }
    }

    /// Create a new word list whose texts are grouped by tier.
    ///
    /// Tiered word lists are validated before they're written.
    pub fn define_tiered(
        category: impl Into<String>,
        locale: impl Into<String>,
        display_name: Option<String>,
        tiers: TieredEntries,
    ) -> Self {
        let data = ListData {
            category: category.into(),
            locale: locale.into(),
            display_name,
            entries: tiers.to_entries(),
            tiers: Some(tiers),
        };
        CategoryWordList {
            name: Cow::Owned(format!("{}.{}", data.locale, data.category)),
            contents: Contents::Eager(data),
        }
    }

    /// Get the name of the word list, `<locale>.<category>`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the id of the category this word list replaces.
    #[inline]
    pub fn category(&self) -> &str {
        &self.contents.get().category
    }

    /// Get the locale tag of the document this word list belongs in, e.g.
    /// `es-AR`.
    #[inline]
    pub fn locale(&self) -> &str {
        &self.contents.get().locale
    }

    /// Get the display name the category should be given, if any.
    #[inline]
    pub fn display_name(&self) -> Option<&str> {
        self.contents.get().display_name.as_deref()
    }

    /// Get the entries grouped by tier, if the word list was defined that
    /// way.
    #[inline]
    pub fn tiers(&self) -> Option<&TieredEntries> {
        self.contents.get().tiers.as_ref()
    }

    /// Returns `true` if the tiers must be checked before writing.
    #[inline]
    pub fn requires_validation(&self) -> bool {
        self.tiers().is_some()
    }

    /// Get all the entries, in the order they will be written.
    #[inline]
    pub fn entries(&self) -> &[WordEntry] {
        &self.contents.get().entries
    }

    /// Iterate through the entries.
    pub fn iter(&self) -> slice::Iter<'_, WordEntry> {
        self.entries().iter()
    }

    /// Get how many entries there are in the word list.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if there are no entries in the word list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryWordList {
    type IntoIter = slice::Iter<'a, WordEntry>;
    type Item = &'a WordEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An error encountered while loading a [`CategoryWordList`].
#[derive(Debug, Error)]
pub enum CategoryWordListError {
    /// Unable to read the word list file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
    /// Unable to parse the word list.
    #[error("failed to parse word list {0}: {1}")]
    Malformed(String, toml::de::Error),
    /// The word list had both `words` and `tiers`, or neither.
    #[error("word list {0} must have either [[words]] or [tiers], not both")]
    AmbiguousEntries(String),
}
