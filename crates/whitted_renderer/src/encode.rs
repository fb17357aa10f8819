//! Image file output.
//!
//! Binary PPM is written directly; every other format goes through the
//! `image` crate, picked from the file extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::ImageBuffer;

/// Write `image` as a binary (P6) PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> RenderResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save `image` to `path`, choosing the format from the extension.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        let bytes = image.to_rgb8();
        let expected = image.pixels.len() * 3;
        let actual = bytes.len();
        let rgb = image::RgbImage::from_raw(image.width, image.height, bytes)
            .ok_or(RenderError::BufferSize { expected, actual })?;
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::Color;

    #[test]
    fn test_ppm_header_and_bytes() {
        let mut image = ImageBuffer::new(2, 1).unwrap();
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(2.0, -1.0, 0.2));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        // 0.5 * 255 = 127.5 truncates; out of range channels clamp
        assert_eq!(&out[header.len()..], &[255, 0, 127, 255, 0, 51]);
    }

    #[test]
    fn test_save_ppm_and_png() {
        let dir = std::env::temp_dir().join(format!("whitted_encode_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut image = ImageBuffer::new(3, 2).unwrap();
        image.set(2, 1, Color::ONE);

        let ppm = dir.join("out.ppm");
        save(&image, &ppm).unwrap();
        assert_eq!(std::fs::read(&ppm).unwrap().len(), "P6\n3 2\n255\n".len() + 18);

        let png = dir.join("out.png");
        save(&image, &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 255, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let image = ImageBuffer::new(1, 1).unwrap();
        let path = std::env::temp_dir().join("whitted_encode_test.nope");
        assert!(matches!(save(&image, &path), Err(RenderError::Image(_))));
    }
}
