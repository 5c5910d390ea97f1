/// Thresholds a photo has to meet before it may be uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeRules {
    /// Smallest accepted file size in bytes
    pub min_bytes: u64,
    /// Smallest accepted image width in pixels
    pub min_width: u32,
    /// Longest edge of generated preview thumbnails
    pub preview_max_px: u32,
}

impl IntakeRules {
    pub const DEFAULT_MIN_BYTES: u64 = 250 * 1024;
    pub const DEFAULT_MIN_WIDTH: u32 = 2000;
    pub const DEFAULT_PREVIEW_MAX_PX: u32 = 400;

    /// Smallest accepted size in whole kibibytes, for messages
    pub fn min_kib(&self) -> u64 {
        self.min_bytes / 1024
    }
}

impl Default for IntakeRules {
    fn default() -> Self {
        Self {
            min_bytes: Self::DEFAULT_MIN_BYTES,
            min_width: Self::DEFAULT_MIN_WIDTH,
            preview_max_px: Self::DEFAULT_PREVIEW_MAX_PX,
        }
    }
}
