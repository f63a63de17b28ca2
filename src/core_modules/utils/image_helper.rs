// THEORY:
// The engine only ever sees a canonical 300x300 RGBA buffer. Getting a real photo
// into that shape is the job of this helper: decode whatever format the `image`
// crate understands, stretch it to the canvas (aspect ratio is not preserved, the
// same way a fixed-size canvas draw behaves) and hand back the raw RGBA bytes.
//
// It also writes RGBA buffers back out as PNG, which the tests and benches use to
// build fixtures on disk.

pub mod image_helper {
    use crate::config::defaults::CANVAS_SIZE;
    use crate::error::{AnalysisError, Result};
    use image::error::{ParameterError, ParameterErrorKind};
    use image::imageops::FilterType;
    use image::{DynamicImage, ImageEncoder};
    use std::path::Path;

    /// Decodes the image at `path` and resamples it to the canvas.
    pub fn load_canonical(path: &Path) -> Result<Vec<u8>> {
        let image = image::open(path)
            .map_err(|e| AnalysisError::image_load(format!("cannot open {}", path.display()), e))?;
        Ok(to_canvas(image))
    }

    /// Decodes an in-memory encoded image and resamples it to the canvas.
    pub fn decode_canonical(bytes: &[u8]) -> Result<Vec<u8>> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| AnalysisError::image_load("cannot decode image bytes", e))?;
        Ok(to_canvas(image))
    }

    fn to_canvas(image: DynamicImage) -> Vec<u8> {
        let (source_width, source_height) = (image.width(), image.height());
        let canvas = if source_width == CANVAS_SIZE && source_height == CANVAS_SIZE {
            image
        } else {
            image.resize_exact(CANVAS_SIZE, CANVAS_SIZE, FilterType::Triangle)
        };
        tracing::debug!(source_width, source_height, "Resampled image to canvas");
        canvas.to_rgba8().into_raw()
    }

    pub fn save_rgba_png(path: &Path, width: u32, height: u32, buffer: &[u8]) -> Result<()> {
        let to_error = |source: image::ImageError| AnalysisError::ImageSave {
            path: path.to_path_buf(),
            source,
        };
        if buffer.len() != (width as usize) * (height as usize) * 4 {
            return Err(to_error(image::ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))));
        }
        let output = std::fs::File::create(path)
            .map_err(|e| to_error(image::ImageError::IoError(e)))?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder
            .write_image(buffer, width, height, image::ExtendedColorType::Rgba8)
            .map_err(to_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::error::AnalysisError;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fridge_vision_{}_{name}", std::process::id()))
    }

    #[test]
    fn canvas_sized_png_survives_save_and_load() {
        let path = scratch("canvas.png");
        let mut buffer = vec![255u8; 300 * 300 * 4];
        for pixel in buffer.chunks_mut(4) {
            pixel[0] = 200;
            pixel[1] = 40;
        }

        save_rgba_png(&path, 300, 300, &buffer).expect("Error Saving File.");
        let loaded = load_canonical(&path).expect("Error Loading File.");
        assert_eq!(loaded, buffer);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn non_square_images_are_stretched_to_canvas() {
        let path = scratch("wide.png");
        let (width, height) = (640u32, 120u32);
        let buffer = vec![128u8; (width * height * 4) as usize];

        save_rgba_png(&path, width, height, &buffer).expect("Error Saving File.");
        let loaded = load_canonical(&path).expect("Error Loading File.");
        assert_eq!(loaded.len(), 300 * 300 * 4);
        assert!(loaded.iter().all(|&byte| byte == 128));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn garbage_bytes_are_an_image_load_error() {
        let err = decode_canonical(b"definitely not a png").unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoad { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn missing_file_is_an_image_load_error() {
        let err = load_canonical(&scratch("missing.png")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoad { .. }));
    }

    #[test]
    fn short_buffer_cannot_be_saved() {
        let path = scratch("short.png");
        let err = save_rgba_png(&path, 10, 10, &[0u8; 12]).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageSave { .. }));
        let _ = std::fs::remove_file(path);
    }
}
