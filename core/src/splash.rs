//! Launch-screen images: the icon centered on a black portrait canvas.
use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{
    DynamicImage, Rgb, RgbImage, Rgba, RgbaImage, imageops,
    imageops::FilterType,
};
use log::info;

use crate::{
    errors::AssetError,
    raster::{open_source, save_png},
};

/// Canvas width at 1x, in pixels.
pub const WIDTH_1X: u32 = 400;
/// Canvas height at 1x, in pixels.
pub const HEIGHT_1X: u32 = 800;

/// A pixel density that launch images are generated for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SplashDensity(u32);

impl SplashDensity {
    /// The densities an asset catalogue expects, in order.
    pub const ALL: [SplashDensity; 3] =
        [SplashDensity(1), SplashDensity(2), SplashDensity(3)];

    /// The multiplier applied to the 1x size.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> u32 {
        self.0
    }

    /// The `(width, height)` of the canvas at this density.
    #[inline]
    #[must_use]
    pub const fn canvas_size(self) -> (u32, u32) {
        (WIDTH_1X * self.0, HEIGHT_1X * self.0)
    }

    /// The file name of the launch image at this density.
    #[must_use]
    pub fn file_name(self) -> String {
        match self.0 {
            1 => String::from("LaunchImage.png"),
            scale => format!("LaunchImage@{scale}x.png"),
        }
    }
}

/// Where a square of `icon_size` goes to be centered on a canvas of
/// `canvas` size.
#[inline]
#[must_use]
pub const fn icon_offset(canvas: (u32, u32), icon_size: u32) -> (i64, i64) {
    let (width, height) = canvas;
    (
        (width as i64 - icon_size as i64) / 2,
        (height as i64 - icon_size as i64) / 2,
    )
}

/// Render the launch image for one density.
///
/// The source is stretched to a square as wide as the canvas. Transparent
/// sources are blended over the black background, opaque ones are pasted.
#[must_use]
pub fn render_splash(source: &DynamicImage, density: SplashDensity) -> RgbImage {
    let canvas_size @ (width, height) = density.canvas_size();
    let icon_size = width;
    let (x, y) = icon_offset(canvas_size, icon_size);

    if source.color().has_alpha() {
        let icon = imageops::resize(
            &source.to_rgba8(),
            icon_size,
            icon_size,
            FilterType::Lanczos3,
        );
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        imageops::overlay(&mut canvas, &icon, x, y);
        DynamicImage::ImageRgba8(canvas).to_rgb8()
    } else {
        let icon = imageops::resize(
            &source.to_rgb8(),
            icon_size,
            icon_size,
            FilterType::Lanczos3,
        );
        let mut canvas = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
        imageops::replace(&mut canvas, &icon, x, y);
        canvas
    }
}

/// Write a launch image for every [`SplashDensity`] into `out_dir`, creating
/// it if needed.
///
/// Returns the paths that were written. Fails if `source` doesn't exist.
pub fn generate_splash(
    source: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AssetError> {
    let source_image = open_source(source)?;
    fs::create_dir_all(out_dir).map_err(|io_err| AssetError::io(out_dir, io_err))?;

    SplashDensity::ALL
        .into_iter()
        .map(|density| {
            let canvas = render_splash(&source_image, density);
            let path = out_dir.join(density.file_name());
            save_png(&DynamicImage::ImageRgb8(canvas), &path)?;
            let (width, height) = density.canvas_size();
            info!("wrote {} ({width}x{height})", path.display());
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn canvas_sizes() {
        let sizes = SplashDensity::ALL.map(SplashDensity::canvas_size);
        assert_eq!(sizes, [(400, 800), (800, 1600), (1200, 2400)]);
    }

    #[test]
    fn file_names() {
        let names = SplashDensity::ALL.map(SplashDensity::file_name);
        assert_eq!(names, [
            "LaunchImage.png",
            "LaunchImage@2x.png",
            "LaunchImage@3x.png",
        ]);
    }

    #[test]
    fn offsets_center_the_icon() {
        SplashDensity::ALL.into_iter().for_each(|density| {
            let (width, height) = density.canvas_size();
            let (x, y) = icon_offset((width, height), width);
            assert_eq!(x, 0);
            assert_eq!(y, i64::from((height - width) / 2));
        });
        assert_eq!(icon_offset((400, 800), 100), (150, 350));
    }

    #[test]
    fn opaque_icon_is_pasted_centered() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            64,
            64,
            Rgb([255, 255, 255]),
        ));
        let canvas = render_splash(&source, SplashDensity(1));
        assert_eq!(canvas.dimensions(), (400, 800));
        // Above and below the icon stays black
        assert_eq!(canvas.get_pixel(200, 10), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(200, 790), &Rgb([0, 0, 0]));
        // The icon spans rows 200..600
        assert_eq!(canvas.get_pixel(200, 400), &Rgb([255, 255, 255]));
    }

    #[test]
    fn transparent_icon_is_blended_over_black() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            32,
            32,
            Rgba([255, 0, 0, 0]),
        ));
        let canvas = render_splash(&source, SplashDensity(2));
        assert_eq!(canvas.dimensions(), (800, 1600));
        assert_eq!(canvas.get_pixel(400, 800), &Rgb([0, 0, 0]));
    }

    #[test]
    fn writes_three_densities() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("icon.png");
        RgbImage::from_pixel(16, 16, Rgb([10, 200, 10]))
            .save(&source)
            .unwrap();
        let out_dir = tmp.path().join("LaunchImage.imageset");

        let written = generate_splash(&source, &out_dir).unwrap();
        assert_eq!(written.len(), 3);
        written.iter().zip(SplashDensity::ALL).for_each(|(path, density)| {
            assert_eq!(
                image::image_dimensions(path).unwrap(),
                density.canvas_size(),
            );
        });
    }

    #[test]
    fn missing_source_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let out_dir = tmp.path().join("out");
        let err =
            generate_splash(&tmp.path().join("icon.png"), &out_dir).unwrap_err();
        assert!(matches!(err, AssetError::SourceMissing(_)));
        assert!(!out_dir.exists());
    }
}
