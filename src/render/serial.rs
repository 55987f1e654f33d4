use std::time::Instant;

use crate::config::RenderConfig;
use crate::coord::PixelMap;
use crate::error::RenderError;
use crate::image::{Color, Image};
use crate::render::{check_dimensions, Renderer, Timing};
use crate::solver::Evaluator;

/// Single-threaded scan: rows outer, columns inner, in increasing order.
pub struct SerialRenderer;

impl Renderer for SerialRenderer {
    fn render(&self, img: &mut Image, config: &RenderConfig) -> Result<Timing, RenderError> {
        check_dimensions(img, config);
        let map = PixelMap::from(config);
        let eval = Evaluator::with_budget(config.max_iterations);

        let start = Instant::now();
        for y in 0..config.height {
            for x in 0..config.width {
                if eval.escapes(map.locate(x, y)) {
                    img.put(x, y, Color::BLUE);
                }
            }
        }
        Ok(Timing::new(config, None, start.elapsed()))
    }
}
