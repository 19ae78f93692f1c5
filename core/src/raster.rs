//! Reading and writing PNGs.
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use log::debug;

use crate::errors::{AssetError, ImageError};

/// Open the image a job starts from.
///
/// Fails with [`AssetError::SourceMissing`] if there's no file at `path`.
pub(crate) fn open_source(path: &Path) -> Result<DynamicImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::SourceMissing(path.to_owned()));
    }
    let image = ImageReader::open(path)
        .map_err(|io_err| AssetError::io(path, io_err))?
        .with_guessed_format()
        .map_err(|io_err| AssetError::io(path, io_err))?
        .decode()
        .map_err(|inner| image_error(path, inner))?;
    debug!(
        "opened {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color(),
    );
    Ok(image)
}

/// Write `image` to `path` as a PNG, replacing anything already there.
pub(crate) fn save_png(
    image: &DynamicImage,
    path: &Path,
) -> Result<(), AssetError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|inner| image_error(path, inner))?;
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height(),
    );
    Ok(())
}

pub(crate) fn image_error(path: &Path, inner: image::ImageError) -> AssetError {
    AssetError::Image(ImageError {
        path: path.to_owned(),
        inner,
    })
}
