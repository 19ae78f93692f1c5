#![doc = include_str!("../README.md")]

mod word_lists;

pub use word_lists::{
    CategoryWordList, CategoryWordListError, Difficulty, TieredEntries,
    WordEntry,
};

use crate::word_lists::ListData;

fn parse_embedded(name: &str, source: &str) -> ListData {
    ListData::parse(name, source).unwrap_or_else(|err| {
        // The data files are checked by this crate's tests
        ::std::panic!("embedded word list is malformed: {err}");
    })
}

macro_rules! category_word_list {
    (
        ident: $ident:ident,
        name: $name:literal,
        path: $path:literal $(,)?
    ) => {
        /// The
        #[doc = ::std::concat!("`", $name, "`")]
        /// category word list.
        ///
        /// Compiled into the binary as TOML, parsed at first use.
        pub static $ident: $crate::CategoryWordList =
            $crate::CategoryWordList::new_lazy(
                $name,
                ::std::sync::LazyLock::new(|| {
                    let data = $crate::parse_embedded(
                        $name,
                        ::std::include_str!($path),
                    );
                    ::log::debug!("loaded entries for {}", $name);
                    data
                }),
            );
    };
}

category_word_list! {
    ident: ES_AR_BANDAS_MUSICA,
    name: "es-AR.bandas_musica",
    path: "../data/es-AR.bandas_musica.toml",
}

category_word_list! {
    ident: EN_US_BANDAS_MUSICA,
    name: "en-US.bandas_musica",
    path: "../data/en-US.bandas_musica.toml",
}

category_word_list! {
    ident: ES_AR_DEPORTISTAS,
    name: "es-AR.deportistas",
    path: "../data/es-AR.deportistas.toml",
}

category_word_list! {
    ident: ES_AR_LUGARES,
    name: "es-AR.lugares",
    path: "../data/es-AR.lugares.toml",
}

category_word_list! {
    ident: ES_AR_MARCAS,
    name: "es-AR.marcas",
    path: "../data/es-AR.marcas.toml",
}

category_word_list! {
    ident: ES_AR_RANDOM,
    name: "es-AR.random",
    path: "../data/es-AR.random.toml",
}

/// Every crate-provided [`CategoryWordList`].
pub static ALL_WORD_LISTS: &[&CategoryWordList] = &[
    &ES_AR_BANDAS_MUSICA,
    &EN_US_BANDAS_MUSICA,
    &ES_AR_DEPORTISTAS,
    &ES_AR_LUGARES,
    &ES_AR_MARCAS,
    &ES_AR_RANDOM,
];

/// Get the crate-provided word lists that replace the given category, in
/// every locale they exist for.
pub fn lookup(category: &str) -> Vec<&'static CategoryWordList> {
    ALL_WORD_LISTS
        .iter()
        .copied()
        .filter(|word_list| word_list.category() == category)
        .collect()
}

/// Get a crate-provided word list by its `<locale>.<category>` name.
pub fn by_name(name: &str) -> Option<&'static CategoryWordList> {
    ALL_WORD_LISTS
        .iter()
        .copied()
        .find(|word_list| word_list.name() == name)
}
