use base64::Engine;
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// An accepted file, ready to be shown next to the upload form
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub name: String,
    pub size: u64,
    pub width: u32,
    pub height: u32,
    /// Thumbnail (or the original bytes) as a data URL
    pub data_url: String,
}

impl FilePreview {
    /// Size in megabytes with two decimals
    pub fn megabytes(&self) -> String {
        format_megabytes(self.size)
    }

    /// `WIDTHxHEIGHT`
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Formats a byte count as megabytes with two decimals (`2.50`)
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

/// Picks a MIME type from the file extension
fn guess_mime_from_name(name: &str) -> &'static str {
    match Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}

/// Data URL of the untouched file
pub fn raw_data_url(name: &str, bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or_else(|_| guess_mime_from_name(name));
    encode_data_url(mime, bytes)
}

/// Decodes the image and returns a WebP thumbnail no larger than `max_px`
pub fn thumbnail_data_url(bytes: &[u8], max_px: u32) -> Result<String, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    let thumb = img.resize(max_px, max_px, FilterType::Triangle);

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(thumb.to_rgba8()).write_to(&mut buffer, ImageFormat::WebP)?;

    Ok(encode_data_url("image/webp", &buffer.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::tests::png_bytes;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00");
        assert_eq!(format_megabytes(1024 * 1024), "1.00");
        assert_eq!(format_megabytes(256 * 1024), "0.25");
        assert_eq!(format_megabytes(5 * 1024 * 1024 + 512 * 1024), "5.50");
    }

    #[test]
    fn test_mime_from_name() {
        assert_eq!(guess_mime_from_name("a.JPG"), "image/jpeg");
        assert_eq!(guess_mime_from_name("a.webp"), "image/webp");
        assert_eq!(guess_mime_from_name("noext"), "image/jpeg");
    }

    #[test]
    fn test_raw_data_url_sniffs_content() {
        let url = raw_data_url("misnamed.jpg", &png_bytes(4, 4));
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_thumbnail_is_bounded() {
        let url = thumbnail_data_url(&png_bytes(2000, 10), 400).unwrap();
        assert!(url.starts_with("data:image/webp;base64,"));

        let b64 = url.trim_start_matches("data:image/webp;base64,");
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        let thumb = image::load_from_memory(&bytes).unwrap();
        assert!(thumb.width() <= 400);
        assert!(thumb.height() <= 400);
    }

    #[test]
    fn test_preview_labels() {
        let preview = FilePreview {
            name: "p.jpg".to_string(),
            size: 3 * 1024 * 1024,
            width: 4000,
            height: 3000,
            data_url: String::new(),
        };
        assert_eq!(preview.megabytes(), "3.00");
        assert_eq!(preview.dimensions(), "4000x3000");
    }
}
