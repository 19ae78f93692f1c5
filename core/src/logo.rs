//! Enlarging the logo inside the square source icon.
//!
//! The logo is found by brightness (Rec. 601 luma, the same weighting as
//! PIL's `L` mode): anything darker than
//! [`BRIGHTNESS_THRESHOLD`] counts as background. This means a logo drawn in
//! (near-)black is invisible to the search, and the threshold was only ever
//! tuned against one icon.
use std::path::Path;

use image::{
    DynamicImage, GrayImage, Luma, Rgb, RgbImage, imageops,
    imageops::FilterType,
};
use log::{debug, info};

use crate::{
    errors::AssetError,
    raster::{open_source, save_png},
};

/// Pixels with a luma below this are background.
pub const BRIGHTNESS_THRESHOLD: u8 = 25;
/// How far the logo's bounding box is grown on every side before cropping.
pub const PADDING: u32 = 8;
/// The side of the square output canvas.
pub const CANVAS_SIZE: u32 = 1024;
/// How much of the canvas the logo's longer side should span.
pub const LOGO_FRACTION: f64 = 0.85;

/// An axis-aligned rectangle, `x0`/`y0` inclusive and `x1`/`y1` exclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds {
    /// Left edge.
    pub x0: u32,
    /// Top edge.
    pub y0: u32,
    /// One past the right edge.
    pub x1: u32,
    /// One past the bottom edge.
    pub y1: u32,
}

impl Bounds {
    /// Width of the rectangle.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Grow the rectangle by `pad` on every side, without leaving a
    /// `width`×`height` image.
    #[must_use]
    pub fn padded(self, pad: u32, width: u32, height: u32) -> Self {
        Bounds {
            x0: self.x0.saturating_sub(pad),
            y0: self.y0.saturating_sub(pad),
            x1: self.x1.saturating_add(pad).min(width),
            y1: self.y1.saturating_add(pad).min(height),
        }
    }
}

/// The Rec. 601 luma of every pixel, rounded the way PIL's `L` conversion
/// does it.
///
/// [`DynamicImage::to_luma8`] weights by Rec. 709, which makes saturated
/// blues much darker.
#[must_use]
pub fn brightness(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let luma = (u32::from(r) * 19595
            + u32::from(g) * 38470
            + u32::from(b) * 7471
            + 0x8000)
            >> 16;
        Luma([luma as u8])
    })
}

/// Find the smallest rectangle enclosing every pixel at least as bright as
/// `threshold`.
///
/// Returns `None` if there are no such pixels.
#[must_use]
pub fn foreground_bounds(gray: &GrayImage, threshold: u8) -> Option<Bounds> {
    gray.enumerate_pixels()
        .filter(|(_, _, luma)| luma.0[0] >= threshold)
        .fold(None, |bounds: Option<Bounds>, (x, y, _)| {
            Some(match bounds {
                None => Bounds {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1,
                },
                Some(bounds) => Bounds {
                    x0: bounds.x0.min(x),
                    y0: bounds.y0.min(y),
                    x1: bounds.x1.max(x + 1),
                    y1: bounds.y1.max(y + 1),
                },
            })
        })
}

/// The length the logo's longer side is scaled to.
#[inline]
#[must_use]
pub fn target_extent(canvas_size: u32, fraction: f64) -> u32 {
    (f64::from(canvas_size) * fraction) as u32
}

/// Scale `(width, height)` so the longer side is `target`, keeping the aspect
/// ratio. The shorter side never goes below 1.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    let scale = |short: u32, long: u32| {
        (u64::from(short) * u64::from(target) / u64::from(long)).max(1) as u32
    };
    if width >= height {
        (target, scale(height, width))
    } else {
        (scale(width, height), target)
    }
}

/// Where the logo was found, and how big it ended up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LogoReport {
    /// The logo's bounding box in the source, before padding.
    pub bounds: Bounds,
    /// The logo's size on the new canvas.
    pub scaled: (u32, u32),
}

/// Crop the logo out of `source`, scale it to [`LOGO_FRACTION`] of the
/// canvas, and center it on a fresh black [`CANVAS_SIZE`] square.
///
/// Fails with [`AssetError::NoForeground`] if nothing in the image is at
/// least as bright as `threshold`.
pub fn rescale_logo(
    source: &DynamicImage,
    threshold: u8,
) -> Result<(RgbImage, LogoReport), AssetError> {
    let rgb = source.to_rgb8();
    let gray = brightness(&rgb);
    let bounds = foreground_bounds(&gray, threshold)
        .ok_or(AssetError::NoForeground { threshold })?;
    debug!("logo bounds: {bounds:?}");

    let crop_bounds = bounds.padded(PADDING, rgb.width(), rgb.height());
    let crop = imageops::crop_imm(
        &rgb,
        crop_bounds.x0,
        crop_bounds.y0,
        crop_bounds.width(),
        crop_bounds.height(),
    )
    .to_image();

    let (width, height) = scaled_dimensions(
        crop.width(),
        crop.height(),
        target_extent(CANVAS_SIZE, LOGO_FRACTION),
    );
    let scaled = imageops::resize(&crop, width, height, FilterType::Lanczos3);

    let mut canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, Rgb([0, 0, 0]));
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from((CANVAS_SIZE - width) / 2),
        i64::from((CANVAS_SIZE - height) / 2),
    );
    Ok((canvas, LogoReport {
        bounds,
        scaled: (width, height),
    }))
}

/// Run [`rescale_logo`] on the image at `source` and write the result to
/// `output` (which may be `source` itself).
///
/// Nothing is written if the logo can't be found.
pub fn rescale_logo_file(
    source: &Path,
    output: &Path,
    threshold: u8,
) -> Result<LogoReport, AssetError> {
    let source_image = open_source(source)?;
    let (canvas, report) = rescale_logo(&source_image, threshold)?;
    save_png(&DynamicImage::ImageRgb8(canvas), output)?;
    info!(
        "updated {}: logo is now {}x{} (~{:.0}% of the icon)",
        output.display(),
        report.scaled.0,
        report.scaled.1,
        LOGO_FRACTION * 100.0,
    );
    Ok(report)
}
