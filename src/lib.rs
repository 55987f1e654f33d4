#![allow(clippy::new_without_default)]
pub mod bench;
pub mod complex;
pub mod config;
pub mod coord;
pub mod error;
pub mod image;
pub mod render;
pub mod report;
pub mod solver;
pub mod threads;

pub use config::RenderConfig;
pub use error::RenderError;
pub use image::{Color, Image};
pub use render::{Renderer, Strategy, Timing};

/// Runs one pass of the given strategy into a fresh image.
pub fn render(
    strategy: Strategy,
    config: &RenderConfig,
    threads: Option<usize>,
) -> Result<(Image, Timing), RenderError> {
    let mut img = Image::new(config.width, config.height);
    let timing = strategy.renderer(threads).render(&mut img, config)?;
    Ok((img, timing))
}
