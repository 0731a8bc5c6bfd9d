use std::path::Path;

use crate::error::IoError;

/// Reads an image from the given file path in any supported format.
///
/// The decoded image keeps the channel layout of the source file, so a caller
/// can tell whether the original carried an alpha channel before converting
/// it to a concrete pixel layout.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image in its native color layout.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<image::DynamicImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;
    let img = image::ImageReader::new(std::io::Cursor::new(&data))
        .with_guessed_format()?
        .decode()?;

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::write_image_png_rgba8;
    use cammatch_image::{Image, ImageSize};

    #[test]
    fn read_any_keeps_alpha() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgba.png");

        let image = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 4,
                height: 3,
            },
            127u8,
        )?;
        write_image_png_rgba8(&file_path, &image)?;

        let decoded = read_image_any(&file_path)?;
        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 3);
        assert!(decoded.color().has_alpha());

        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let result = read_image_any("/tmp/this-file-does-not-exist.webp");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_any_invalid_data() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"definitely not an image")?;

        let result = read_image_any(&file_path);
        assert!(result.is_err());

        Ok(())
    }
}
