use crate::complex::{c, C};
use crate::config::RenderConfig;

/// Maps pixel coordinates to complex-plane constants.
///
/// Both axes are normalized by image height, so for non-square images the
/// X axis covers proportionally more of the plane. This matches the output
/// of the reference renderer and is kept as-is.
#[derive(Copy, Clone, Debug)]
pub struct PixelMap {
    height: f64,
    zoom: f64,
}

impl PixelMap {
    pub fn new(height: usize, zoom: f64) -> Self {
        Self {
            height: height as f64,
            zoom,
        }
    }

    pub fn locate(&self, x: usize, y: usize) -> C<f64> {
        let re = (x as f64 / self.height - 1.9) * self.zoom;
        let im = (y as f64 / self.height - 0.5) * self.zoom;
        c(re, im)
    }
}

impl From<&RenderConfig> for PixelMap {
    fn from(config: &RenderConfig) -> Self {
        Self::new(config.height, config.zoom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_origin_pixel_mapping() {
        let map = PixelMap::new(10, 0.9);
        let k = map.locate(0, 0);
        assert!((k.re - -1.71).abs() < 1e-12);
        assert!((k.im - -0.45).abs() < 1e-12);
    }

    #[test]
    fn test_vertical_center_maps_to_real_axis() {
        let map = PixelMap::new(10, 0.9);
        assert_eq!(map.locate(0, 5).im, 0.0);
    }

    #[test]
    fn test_x_normalizes_by_height_not_width() {
        // A 20x10 image spans twice the usual real range; x = 10 lands where
        // a square image's x = 10 would, not at the horizontal midpoint.
        let map = PixelMap::new(10, 1.0);
        let k = map.locate(10, 0);
        assert!((k.re - -0.9).abs() < 1e-12);
    }
}
