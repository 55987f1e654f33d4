/// Run parameters for one rendering pass. Immutable for the pass's duration;
/// strategies borrow it read-only.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub zoom: f64,
}

impl RenderConfig {
    pub fn new(width: usize, height: usize, max_iterations: u32, zoom: f64) -> Self {
        assert!(width > 0 && height > 0, "empty image");
        assert!(zoom > 0.0, "non-positive zoom");
        Self {
            width,
            height,
            max_iterations,
            zoom,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(3840, 2160, 100, 0.9)
    }
}
