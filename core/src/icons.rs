//! Regenerating an app icon set from a single square image.
//!
//! Icon sets name their files after the size they hold, e.g.
//! `Icon-App-60x60@2x.png` is a 60pt icon at double density, so 120px square.
//! Every PNG in the set is overwritten by the source image resized to match.
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use image::{DynamicImage, imageops::FilterType};
use log::{debug, error, info, warn};
use regex_lite::Regex;

use crate::{
    errors::AssetError,
    raster::{open_source, save_png},
};

/// The size the source image is normalised to before anything is derived
/// from it.
pub const SOURCE_SIZE: u32 = 1024;
/// Icons named bigger than this are reported as failures instead of being
/// generated.
pub const MAX_ICON_SIZE: u32 = 4 * SOURCE_SIZE;

static ICON_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)x(\d+(?:\.\d+)?)@?(\d*)x?")
        .expect("icon size pattern is valid")
});

/// Work out the pixel size of an icon from its file name.
///
/// The first `<size>x<size>` in the name gives the logical size, which is
/// multiplied by the density of an optional `@<n>x` suffix. Returns `None` if
/// there's no size in the name (or it comes out as zero).
#[must_use]
pub fn icon_pixel_size(file_name: &str) -> Option<u32> {
    let captures = ICON_SIZE.captures(file_name)?;
    let logical = captures[1].parse::<f64>().ok()?;
    let density = match &captures[3] {
        "" => 1,
        digits => digits.parse::<u32>().ok()?,
    };
    // Truncation is intentional: 83.5pt @1x is an 83px file
    let pixels = (logical * f64::from(density)) as u32;
    (pixels > 0).then_some(pixels)
}

/// An icon that couldn't be regenerated.
#[derive(Debug)]
pub struct IconFailure {
    /// The icon file.
    pub path: PathBuf,
    /// What went wrong.
    pub error: AssetError,
}

/// The outcome of [`fix_icons`].
#[derive(Debug, Default)]
pub struct IconReport {
    /// How many icons were overwritten.
    pub updated: usize,
    /// The icons that were left alone because something went wrong.
    pub failures: Vec<IconFailure>,
}

/// Overwrite every PNG in `icon_dir` with the image at `source`, resized to
/// the size in each file's name.
///
/// Files without a size in their name get the (normalised) source image as
/// is. A file that can't be written is logged, recorded in the report, and
/// skipped. A missing `icon_dir` means there's nothing to do.
///
/// Fails if `source` doesn't exist or can't be decoded, or if `icon_dir`
/// can't be listed.
pub fn fix_icons(
    source: &Path,
    icon_dir: &Path,
) -> Result<IconReport, AssetError> {
    let source_image = normalise_source(open_source(source)?);

    let mut icon_paths = match fs::read_dir(icon_dir) {
        Ok(read_dir) => read_dir
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|io_err| AssetError::io(icon_dir, io_err))?,
        Err(io_err) if io_err.kind() == ErrorKind::NotFound => {
            warn!("icon directory {} does not exist", icon_dir.display());
            return Ok(IconReport::default());
        },
        Err(io_err) => return Err(AssetError::io(icon_dir, io_err)),
    };
    icon_paths.retain(|path| is_png(path));
    icon_paths.sort();

    let mut report = IconReport::default();
    for path in icon_paths {
        match fix_icon(&source_image, &path) {
            Ok(()) => report.updated += 1,
            Err(error) => {
                error!("failed to update {}: {error}", path.display());
                report.failures.push(IconFailure { path, error });
            },
        }
    }
    info!(
        "updated {} icons in {}",
        report.updated,
        icon_dir.display(),
    );
    Ok(report)
}

fn fix_icon(source: &DynamicImage, path: &Path) -> Result<(), AssetError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    match icon_pixel_size(&file_name) {
        Some(size) if size > MAX_ICON_SIZE => {
            Err(AssetError::IconTooLarge {
                size,
                max: MAX_ICON_SIZE,
            })
        },
        Some(size) => {
            debug!("{file_name}: {size}x{size}");
            let resized = source.resize_exact(size, size, FilterType::Lanczos3);
            save_png(&resized, path)
        },
        None => {
            debug!("{file_name}: no size in name, copying source");
            save_png(source, path)
        },
    }
}

fn normalise_source(source: DynamicImage) -> DynamicImage {
    if source.width() == SOURCE_SIZE && source.height() == SOURCE_SIZE {
        source
    } else {
        debug!(
            "resizing source from {}x{} to {SOURCE_SIZE}x{SOURCE_SIZE}",
            source.width(),
            source.height(),
        );
        source.resize_exact(SOURCE_SIZE, SOURCE_SIZE, FilterType::Lanczos3)
    }
}

fn is_png(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("png"))
}
