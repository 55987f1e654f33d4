use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crate::config::RenderConfig;
use crate::coord::PixelMap;
use crate::error::RenderError;
use crate::image::{Color, Image};
use crate::render::{check_dimensions, Renderer, Timing};
use crate::solver::Evaluator;
use crate::threads::RangeSplitter;

/// Fork-join scan: the row range is split into one contiguous band per
/// worker. Bands are disjoint and each pixel is written at most once, so
/// workers never contend on the buffer; results are spliced back on the
/// calling thread after the join.
pub struct ThreadedRenderer {
    threads: usize,
}

impl ThreadedRenderer {
    pub fn new(threads: usize) -> Self {
        assert!(threads > 0, "no workers");
        Self { threads }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Default for ThreadedRenderer {
    fn default() -> Self {
        Self::new(num_cpus::get_physical())
    }
}

fn render_band(config: &RenderConfig, y0: usize, y1: usize) -> Vec<Color> {
    let map = PixelMap::from(config);
    let eval = Evaluator::with_budget(config.max_iterations);
    let mut band = vec![Color::BLACK; (y1 - y0) * config.width];
    for y in y0..y1 {
        for x in 0..config.width {
            if eval.escapes(map.locate(x, y)) {
                band[(y - y0) * config.width + x] = Color::BLUE;
            }
        }
    }
    band
}

impl Renderer for ThreadedRenderer {
    fn render(&self, img: &mut Image, config: &RenderConfig) -> Result<Timing, RenderError> {
        check_dimensions(img, config);

        let start = Instant::now();
        let (tx, rx) = mpsc::channel();
        let mut handles = vec![];
        for (y0, y1) in RangeSplitter::split(0, config.height, self.threads) {
            let tx = tx.clone();
            let config = config.clone();
            handles.push(thread::spawn(move || {
                let band = render_band(&config, y0, y1);
                tx.send((y0, band)).unwrap();
            }));
        }
        drop(tx);

        for (y0, band) in rx {
            img.fill_rows(y0, &band);
        }
        for handle in handles {
            handle.join().expect("worker panicked");
        }
        Ok(Timing::new(config, Some(self.threads), start.elapsed()))
    }
}
