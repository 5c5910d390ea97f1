use crate::preview::{self, FilePreview};
use crate::rules::IntakeRules;
use image::ImageReader;
use std::io::Cursor;

/// A file the user picked, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    /// Size as reported by the file picker
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }
}

/// Reasons a selected file is refused before upload
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeError {
    /// Nothing was selected
    Empty,
    TooSmall {
        name: String,
        size: u64,
        min_bytes: u64,
    },
    TooNarrow {
        name: String,
        width: u32,
        min_width: u32,
    },
    /// The header could not be read as an image
    Undecodable { name: String, reason: String },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Empty => write!(f, "No files selected"),
            IntakeError::TooSmall {
                name,
                size,
                min_bytes,
            } => write!(
                f,
                "File {} is too small: {} bytes (minimum {})",
                name, size, min_bytes
            ),
            IntakeError::TooNarrow {
                name,
                width,
                min_width,
            } => write!(
                f,
                "Photo {} is too narrow: {}px (minimum {}px)",
                name, width, min_width
            ),
            IntakeError::Undecodable { name, reason } => {
                write!(f, "File {} is not a readable image: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for IntakeError {}

impl IntakeError {
    /// Name of the offending file, if the error concerns one
    pub fn file_name(&self) -> Option<&str> {
        match self {
            IntakeError::Empty => None,
            IntakeError::TooSmall { name, .. }
            | IntakeError::TooNarrow { name, .. }
            | IntakeError::Undecodable { name, .. } => Some(name),
        }
    }
}

/// Reads width and height from the image header
fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}

/// Checks a single file and builds its preview
///
/// The size check runs first so tiny files are refused without touching the
/// image decoder.
pub fn inspect(rules: &IntakeRules, candidate: &CandidateFile) -> Result<FilePreview, IntakeError> {
    if candidate.size < rules.min_bytes {
        return Err(IntakeError::TooSmall {
            name: candidate.name.clone(),
            size: candidate.size,
            min_bytes: rules.min_bytes,
        });
    }

    let (width, height) =
        probe_dimensions(&candidate.bytes).map_err(|reason| IntakeError::Undecodable {
            name: candidate.name.clone(),
            reason,
        })?;

    if width < rules.min_width {
        return Err(IntakeError::TooNarrow {
            name: candidate.name.clone(),
            width,
            min_width: rules.min_width,
        });
    }

    let data_url = match preview::thumbnail_data_url(&candidate.bytes, rules.preview_max_px) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("Thumbnail for {} failed, using original: {}", candidate.name, e);
            preview::raw_data_url(&candidate.name, &candidate.bytes)
        }
    };

    Ok(FilePreview {
        name: candidate.name.clone(),
        size: candidate.size,
        width,
        height,
        data_url,
    })
}

/// Checks files one after another; the first refusal rejects the whole batch
pub fn validate_batch(
    rules: &IntakeRules,
    candidates: &[CandidateFile],
) -> Result<Vec<FilePreview>, IntakeError> {
    if candidates.is_empty() {
        return Err(IntakeError::Empty);
    }

    let mut previews = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let preview = inspect(rules, candidate).inspect_err(|e| {
            log::debug!("Rejected batch at {}: {}", candidate.name, e);
        })?;
        previews.push(preview);
    }
    Ok(previews)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbImage};

    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn candidate(name: &str, width: u32, height: u32, size: u64) -> CandidateFile {
        CandidateFile {
            name: name.to_string(),
            size,
            bytes: png_bytes(width, height),
        }
    }

    const BIG: u64 = 300 * 1024;

    #[test]
    fn test_accepts_wide_large_photo() {
        let rules = IntakeRules::default();
        let preview = inspect(&rules, &candidate("wide.png", 2000, 10, BIG)).unwrap();
        assert_eq!(preview.width, 2000);
        assert_eq!(preview.height, 10);
        assert_eq!(preview.size, BIG);
        assert!(preview.data_url.starts_with("data:image/"));
    }

    #[test]
    fn test_rejects_small_file_before_decoding() {
        let rules = IntakeRules::default();
        let file = CandidateFile {
            name: "tiny.jpg".to_string(),
            size: 250 * 1024 - 1,
            bytes: b"not an image at all".to_vec(),
        };
        match inspect(&rules, &file) {
            Err(IntakeError::TooSmall { size, min_bytes, .. }) => {
                assert_eq!(size, 250 * 1024 - 1);
                assert_eq!(min_bytes, 250 * 1024);
            }
            other => panic!("expected TooSmall, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_threshold_is_accepted() {
        let rules = IntakeRules::default();
        assert!(inspect(&rules, &candidate("edge.png", 2000, 4, 250 * 1024)).is_ok());
    }

    #[test]
    fn test_rejects_narrow_photo() {
        let rules = IntakeRules::default();
        let err = inspect(&rules, &candidate("narrow.png", 1999, 3000, BIG)).unwrap_err();
        assert_eq!(
            err,
            IntakeError::TooNarrow {
                name: "narrow.png".to_string(),
                width: 1999,
                min_width: 2000,
            }
        );
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        let rules = IntakeRules::default();
        let file = CandidateFile {
            name: "fake.jpg".to_string(),
            size: BIG,
            bytes: vec![0u8; 64],
        };
        assert!(matches!(
            inspect(&rules, &file),
            Err(IntakeError::Undecodable { .. })
        ));
    }

    #[test]
    fn test_batch_aborts_on_first_rejection() {
        let rules = IntakeRules::default();
        let files = vec![
            candidate("a.png", 2400, 4, BIG),
            candidate("b.png", 800, 4, BIG),
            candidate("c.png", 2400, 4, BIG),
        ];
        let err = validate_batch(&rules, &files).unwrap_err();
        assert_eq!(err.file_name(), Some("b.png"));
    }

    #[test]
    fn test_batch_rejects_small_file_in_any_position() {
        let rules = IntakeRules::default();
        for position in 0..3 {
            let mut files = vec![
                candidate("a.png", 2400, 4, BIG),
                candidate("b.png", 2400, 4, BIG),
            ];
            files.insert(position, candidate("small.png", 2400, 4, 1024));
            let err = validate_batch(&rules, &files).unwrap_err();
            assert_eq!(err.file_name(), Some("small.png"));
        }
    }

    #[test]
    fn test_batch_keeps_order() {
        let rules = IntakeRules::default();
        let files = vec![
            candidate("first.png", 2100, 4, BIG),
            candidate("second.png", 2200, 4, BIG),
        ];
        let previews = validate_batch(&rules, &files).unwrap();
        let names: Vec<_> = previews.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first.png", "second.png"]);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(
            validate_batch(&IntakeRules::default(), &[]),
            Err(IntakeError::Empty)
        );
    }
}
