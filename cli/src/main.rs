#![allow(missing_docs)]

mod fmt;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, bail};
use asset_upkeep::{
    CategoryWordList, icons,
    logo::{self, BRIGHTNESS_THRESHOLD},
    splash::{self, HEIGHT_1X, WIDTH_1X},
    words::{self, UpdateMode},
};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{debug, error, info, warn};

use crate::fmt::{FormatReport, OutputFormat};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type UpkeepVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type UpkeepVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

const SOURCE_ICON: &str = "assets/images/icon_square_ios.png";
const APP_ICON_SET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
const LAUNCH_IMAGE_SET: &str =
    "ios/Runner/Assets.xcassets/LaunchImage.imageset";
const WORDS_DIR: &str = "assets/words";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The project root that default paths are relative to
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    job: Job,

    #[command(flatten)]
    verbosity: UpkeepVerbosity,
}

#[derive(Debug, Subcommand)]
enum Job {
    /// Regenerate every icon in the iOS app icon set from the square source
    /// icon
    FixIcons {
        #[command(flatten)]
        source: SourceArg,

        /// The icon set to overwrite [default:
        /// <ROOT>/ios/Runner/Assets.xcassets/AppIcon.appiconset]
        #[arg(long)]
        icon_dir: Option<PathBuf>,
    },
    /// Generate the iOS launch images (1x, 2x, 3x) from the square source icon
    Splash {
        #[command(flatten)]
        source: SourceArg,

        /// Where to write the launch images [default:
        /// <ROOT>/ios/Runner/Assets.xcassets/LaunchImage.imageset]
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Enlarge the logo inside the square source icon
    RescaleLogo {
        #[command(flatten)]
        source: SourceArg,

        /// Where to write the result [default: overwrite the source]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels darker than this (0-255) are treated as background
        #[arg(long, default_value_t = BRIGHTNESS_THRESHOLD)]
        threshold: u8,
    },
    /// Replace categories' words in the locale word-list documents
    UpdateWords {
        /// Categories (e.g. marcas), word list names (e.g. es-AR.marcas), or
        /// "all"
        #[arg(required_unless_present = "word_list_files")]
        categories: Vec<String>,

        /// Additional word lists to apply, as TOML files
        #[arg(long = "word-list", value_name = "TOML")]
        word_list_files: Vec<PathBuf>,

        /// The directory holding <locale>.json [default: <ROOT>/assets/words]
        #[arg(long)]
        words_dir: Option<PathBuf>,

        /// How to rewrite the documents (splice, reserialize) [default:
        /// reserialize for word lists that rename their category, splice
        /// otherwise]
        #[arg(long)]
        mode: Option<UpdateMode>,
    },
    /// List the bundled word lists
    ListWords,
}

#[derive(Debug, clap::Args)]
struct SourceArg {
    /// The square source icon [default:
    /// <ROOT>/assets/images/icon_square_ios.png]
    #[arg(long)]
    source: Option<PathBuf>,
}

impl SourceArg {
    fn resolve(&self, root: &Path) -> PathBuf {
        resolve(root, self.source.as_deref(), SOURCE_ICON)
    }
}

/// Use the path the user gave, or else the default under the project root.
fn resolve(root: &Path, given: Option<&Path>, default: &str) -> PathBuf {
    given.map_or_else(|| root.join(default), Path::to_owned)
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("ASSET_UPKEEP_LOG"))
        .init();

    let start = Instant::now();
    match &args.job {
        Job::FixIcons { source, icon_dir } => {
            let source = source.resolve(&args.root);
            let icon_dir =
                resolve(&args.root, icon_dir.as_deref(), APP_ICON_SET);
            let report = icons::fix_icons(&source, &icon_dir)
                .context("failed to regenerate icons")?;
            println!("{}", report.format(OutputFormat::Human));
        },
        Job::Splash { source, out_dir } => {
            let source = source.resolve(&args.root);
            let out_dir =
                resolve(&args.root, out_dir.as_deref(), LAUNCH_IMAGE_SET);
            let written = splash::generate_splash(&source, &out_dir)
                .context("failed to generate launch images")?;
            written
                .iter()
                .for_each(|path| println!("wrote {}", path.display()));
            info!(
                "update the LaunchScreen storyboard image size to \
                 {WIDTH_1X}x{HEIGHT_1X}"
            );
        },
        Job::RescaleLogo {
            source,
            output,
            threshold,
        } => {
            let source = source.resolve(&args.root);
            let output = output.as_deref().unwrap_or(&source);
            let report = logo::rescale_logo_file(&source, output, *threshold)
                .context("failed to rescale logo")?;
            println!("{}", report.format(OutputFormat::Human));
        },
        Job::UpdateWords {
            categories,
            word_list_files,
            words_dir,
            mode,
        } => {
            let words_dir =
                resolve(&args.root, words_dir.as_deref(), WORDS_DIR);
            update_words(categories, word_list_files, &words_dir, *mode)?;
        },
        Job::ListWords => {
            category_word_lists::ALL_WORD_LISTS.iter().for_each(|word_list| {
                println!("{}", word_list.format(OutputFormat::Human));
            });
        },
    }
    debug!("took {:?}", start.elapsed());
    Ok(())
}

fn update_words(
    categories: &[String],
    word_list_files: &[PathBuf],
    words_dir: &Path,
    mode: Option<UpdateMode>,
) -> anyhow::Result<()> {
    let loaded = word_list_files
        .iter()
        .map(|path| {
            CategoryWordList::load(path).with_context(|| {
                format!("failed to load word list {}", path.display())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut word_lists = Vec::<&CategoryWordList>::new();
    for category in categories {
        let found = match category.as_str() {
            "all" => category_word_lists::ALL_WORD_LISTS.to_vec(),
            name => match category_word_lists::by_name(name) {
                Some(word_list) => vec![word_list],
                None => category_word_lists::lookup(name),
            },
        };
        if found.is_empty() {
            bail!("no word lists for \"{category}\", see list-words");
        }
        word_lists.extend(found);
    }
    word_lists.extend(&loaded);

    let mut seen = HashSet::new();
    word_lists.retain(|word_list| {
        let first = seen.insert(word_list.name().to_owned());
        if !first {
            warn!("{} was selected more than once", word_list.name());
        }
        first
    });

    // Check everything before writing anything
    word_lists.iter().try_for_each(|word_list| {
        words::validate_word_list(word_list)
            .with_context(|| format!("{} is invalid", word_list.name()))
    })?;

    word_lists.iter().try_for_each(|word_list| -> anyhow::Result<()> {
        let path = words::word_list_path(words_dir, word_list);
        let mode = mode.unwrap_or_else(|| UpdateMode::preferred_for(word_list));
        let report = words::update_word_list(&path, word_list, mode)
            .with_context(|| {
                format!("failed to update {}", word_list.name())
            })?;
        println!("{}", report.format(OutputFormat::Human));
        Ok(())
    })
}
