use category_word_lists::WordEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A locale's word-list document, e.g. `assets/words/es-AR.json`.
///
/// Fields this crate doesn't know about are kept, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordListDocument {
    /// Every category, in document order.
    pub categories: Vec<Category>,
    #[serde(flatten)]
    #[allow(missing_docs)]
    pub extra: Map<String, Value>,
}

impl WordListDocument {
    /// Parse a document from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Find a category by its id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

/// A named group of words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The stable identifier, e.g. `bandas_musica`.
    pub id: String,
    /// What the players see, e.g. `Bandas de Música`.
    pub display_name: String,
    /// The words, in document order.
    pub words: Vec<WordEntry>,
    #[serde(flatten)]
    #[allow(missing_docs)]
    pub extra: Map<String, Value>,
}
