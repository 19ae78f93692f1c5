//! Maintenance jobs for the guessing game's static assets.
//!
//! Every job is a single batch run over files on disk:
//!
//! - [`icons::fix_icons`] regenerates every icon in an app icon set from one
//!   square source image, sizing each from its file name.
//! - [`splash::generate_splash`] centers the same source on black portrait
//!   canvases at 1x, 2x, and 3x to make the launch images.
//! - [`logo::rescale_logo_file`] finds the logo inside the source by
//!   brightness and scales it up to fill most of the icon.
//! - [`words::update_word_list`] replaces one category's words in a locale's
//!   word-list document with a [`CategoryWordList`].
//!
//! Fatal problems (a missing source image, a category that can't be found, a
//! word list that breaks the rules) are returned before anything is written.
//! The icon job is the exception that keeps going: an icon that can't be
//! written is recorded and the rest are still processed.

pub use category_word_lists::{CategoryWordList, Difficulty, WordEntry};

pub mod errors;
pub mod icons;
pub mod logo;
mod raster;
pub mod splash;
pub mod words;
