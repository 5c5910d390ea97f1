/// Smallest allowed zoom factor
pub const MIN_SCALE: f64 = 0.2;
/// Largest allowed zoom factor
pub const MAX_SCALE: f64 = 4.0;
/// Zoom change for buttons and `+`/`-` keys
pub const STEP_ZOOM: f64 = 0.2;
/// Zoom change per wheel tick
pub const WHEEL_ZOOM: f64 = 0.15;

/// Pan offset of the image in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Interaction phase of the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Closed,
    Idle,
    /// A pointer is held down; `anchor` is pointer position minus offset at grab time
    Dragging { anchor: Offset },
}

/// State of the fullscreen photo viewer
///
/// `Closed -> Idle` on [`open`](Self::open), `Idle <-> Dragging` through the
/// drag calls, and any phase back to `Closed` on [`close`](Self::close).
/// Opening and closing always reset zoom and pan.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    phase: Phase,
    url: Option<String>,
    scale: f64,
    offset: Offset,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            phase: Phase::Closed,
            url: None,
            scale: 1.0,
            offset: Offset::default(),
        }
    }
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Shows `url`; an empty url leaves the viewer untouched
    pub fn open(&mut self, url: &str) {
        if url.trim().is_empty() {
            return;
        }
        self.url = Some(url.to_string());
        self.scale = 1.0;
        self.offset = Offset::default();
        self.phase = Phase::Idle;
    }

    pub fn close(&mut self) {
        self.url = None;
        self.scale = 1.0;
        self.offset = Offset::default();
        self.phase = Phase::Closed;
    }

    /// Clamps the zoom; at 100% or less a running drag ends
    pub fn set_scale(&mut self, scale: f64) {
        let scale = if scale.is_finite() { scale } else { 1.0 };
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        if self.scale <= 1.0 {
            self.end_drag();
        }
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.set_scale(self.scale + delta);
    }

    /// Back to 100% and centred
    pub fn reset_zoom(&mut self) {
        self.set_scale(1.0);
        self.offset = Offset::default();
    }

    /// Zoom as shown on the reset button, e.g. `120%`
    pub fn scale_label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i64)
    }

    /// CSS transform combining pan and zoom
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }

    /// Dragging only makes sense on an enlarged image
    pub fn can_drag(&self) -> bool {
        self.is_open() && self.scale > 1.0
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if !self.can_drag() {
            return;
        }
        self.phase = Phase::Dragging {
            anchor: Offset {
                x: x - self.offset.x,
                y: y - self.offset.y,
            },
        };
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Phase::Dragging { anchor } = self.phase else {
            return;
        };
        if self.scale <= 1.0 {
            self.phase = Phase::Idle;
            return;
        }
        self.offset = Offset {
            x: x - anchor.x,
            y: y - anchor.y,
        };
    }

    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.phase = Phase::Idle;
        }
    }

    /// Handles a key by its DOM name; returns true when the key was used
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => {
                self.close();
                true
            }
            "+" | "=" => {
                self.zoom_by(STEP_ZOOM);
                true
            }
            "-" | "_" => {
                self.zoom_by(-STEP_ZOOM);
                true
            }
            _ => false,
        }
    }

    /// Wheel up (negative delta) zooms in, wheel down zooms out
    pub fn handle_wheel(&mut self, delta_y: f64) {
        if !self.is_open() || delta_y == 0.0 {
            return;
        }
        if delta_y < 0.0 {
            self.zoom_by(WHEEL_ZOOM);
        } else {
            self.zoom_by(-WHEEL_ZOOM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> ViewerState {
        let mut state = ViewerState::new();
        state.open("/uploads/a.jpg");
        state
    }

    #[test]
    fn test_open_resets_zoom_and_pan() {
        let mut state = opened();
        state.zoom_by(1.0);
        state.begin_drag(10.0, 10.0);
        state.drag_to(60.0, 30.0);
        state.end_drag();
        assert_ne!(state.offset(), Offset::default());

        state.open("/uploads/b.jpg");
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Offset::default());
        assert_eq!(state.url(), Some("/uploads/b.jpg"));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_open_ignores_empty_url() {
        let mut state = ViewerState::new();
        state.open("  ");
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_clears_everything() {
        let mut state = opened();
        state.zoom_by(0.6);
        state.begin_drag(0.0, 0.0);
        state.drag_to(5.0, 5.0);
        state.close();
        assert!(!state.is_open());
        assert!(!state.is_dragging());
        assert_eq!(state.url(), None);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Offset::default());
    }

    #[test]
    fn test_scale_stays_in_bounds() {
        let mut state = opened();
        let deltas = [3.0, 2.5, -0.4, 10.0, -7.0, -0.2, 0.15, -100.0, 0.2, f64::NAN];
        for delta in deltas {
            state.zoom_by(delta);
            assert!(state.scale() >= MIN_SCALE && state.scale() <= MAX_SCALE);
        }
        for _ in 0..50 {
            state.handle_key("+");
        }
        assert_eq!(state.scale(), MAX_SCALE);
        for _ in 0..50 {
            state.handle_wheel(120.0);
        }
        assert_eq!(state.scale(), MIN_SCALE);
    }

    #[test]
    fn test_scale_label_rounds() {
        let mut state = opened();
        assert_eq!(state.scale_label(), "100%");
        state.zoom_by(STEP_ZOOM);
        assert_eq!(state.scale_label(), "120%");
        state.set_scale(0.333);
        assert_eq!(state.scale_label(), "33%");
        state.set_scale(9.0);
        assert_eq!(state.scale_label(), "400%");
    }

    #[test]
    fn test_drag_requires_zoom() {
        let mut state = opened();
        state.begin_drag(10.0, 10.0);
        assert!(!state.is_dragging());
        state.drag_to(100.0, 100.0);
        assert_eq!(state.offset(), Offset::default());

        state.zoom_by(STEP_ZOOM);
        state.begin_drag(10.0, 10.0);
        assert!(state.is_dragging());
        state.drag_to(40.0, -5.0);
        assert_eq!(state.offset(), Offset { x: 30.0, y: -15.0 });
        state.end_drag();
        assert_eq!(state.phase(), Phase::Idle);

        // a second grab continues from the current offset
        state.begin_drag(0.0, 0.0);
        state.drag_to(10.0, 10.0);
        assert_eq!(state.offset(), Offset { x: 40.0, y: -5.0 });
    }

    #[test]
    fn test_offset_frozen_outside_drag() {
        let mut state = opened();
        state.zoom_by(1.0);
        state.drag_to(50.0, 50.0);
        assert_eq!(state.offset(), Offset::default());
    }

    #[test]
    fn test_zooming_out_mid_drag_stops_panning() {
        let mut state = opened();
        state.zoom_by(STEP_ZOOM);
        state.begin_drag(0.0, 0.0);
        state.zoom_by(-STEP_ZOOM * 2.0);
        assert_eq!(state.phase(), Phase::Idle);
        state.drag_to(20.0, 20.0);
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), Offset::default());
    }

    #[test]
    fn test_keys_only_when_open() {
        let mut state = ViewerState::new();
        assert!(!state.handle_key("Escape"));
        assert!(!state.handle_key("+"));
        assert_eq!(state.scale(), 1.0);

        state.open("/x.jpg");
        assert!(state.handle_key("="));
        assert!(state.handle_key("_"));
        assert!(!state.handle_key("a"));
        assert!(state.handle_key("Escape"));
        assert!(!state.is_open());
    }

    #[test]
    fn test_wheel_direction() {
        let mut state = opened();
        state.handle_wheel(-1.0);
        assert!((state.scale() - 1.15).abs() < 1e-9);
        state.handle_wheel(1.0);
        state.handle_wheel(1.0);
        assert!((state.scale() - 0.85).abs() < 1e-9);

        state.close();
        state.handle_wheel(-1.0);
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn test_transform_string() {
        let mut state = opened();
        state.set_scale(2.0);
        state.begin_drag(0.0, 0.0);
        state.drag_to(12.5, -3.0);
        assert_eq!(state.transform(), "translate(12.5px, -3px) scale(2)");
    }
}
