use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::image::Image;

pub mod gpu;
pub mod serial;
pub mod threaded;

pub use gpu::GpuRenderer;
pub use serial::SerialRenderer;
pub use threaded::ThreadedRenderer;

/// An execution strategy: drives the evaluator over every pixel of the
/// borrowed image and reports how long the pass took. Implementations must
/// write only unbounded pixels; bounded pixels keep the cleared background.
pub trait Renderer {
    fn render(&self, img: &mut Image, config: &RenderConfig) -> Result<Timing, RenderError>;
}

/// Wall-clock measurement of one full pass.
#[derive(Clone, Debug)]
pub struct Timing {
    pub width: usize,
    pub height: usize,
    pub max_iterations: u32,
    pub threads: Option<usize>,
    pub elapsed: Duration,
}

impl Timing {
    pub fn new(config: &RenderConfig, threads: Option<usize>, elapsed: Duration) -> Self {
        Self {
            width: config.width,
            height: config.height,
            max_iterations: config.max_iterations,
            threads,
            elapsed,
        }
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Strategy selector, used by the CLI and the timing log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Serial,
    Parallel,
    Gpu,
}

impl Strategy {
    pub fn renderer(&self, threads: Option<usize>) -> Box<dyn Renderer> {
        match self {
            Strategy::Serial => Box::new(SerialRenderer),
            Strategy::Parallel => Box::new(match threads {
                Some(n) => ThreadedRenderer::new(n),
                None => ThreadedRenderer::default(),
            }),
            Strategy::Gpu => Box::new(GpuRenderer::default()),
        }
    }

    /// Header line preceding this strategy's timing record. The names are
    /// fixed by the log format consumed downstream.
    pub fn timing_header(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial (s)",
            Strategy::Parallel => "Parallel (s)",
            Strategy::Gpu => "OpenCL (s)",
        }
    }

    pub fn output_file(&self) -> &'static str {
        match self {
            Strategy::Serial => "serial_output.ppm",
            Strategy::Parallel => "parallel_output.ppm",
            Strategy::Gpu => "opencl_output.ppm",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "serial",
            Strategy::Parallel => "parallel",
            Strategy::Gpu => "gpu",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serial" => Ok(Strategy::Serial),
            "parallel" => Ok(Strategy::Parallel),
            "gpu" | "opencl" => Ok(Strategy::Gpu),
            other => Err(format!("unknown strategy {:?}", other)),
        }
    }
}

pub(crate) fn check_dimensions(img: &Image, config: &RenderConfig) {
    assert!(
        img.width() == config.width && img.height() == config.height,
        "image does not match run parameters"
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("serial".parse::<Strategy>().unwrap(), Strategy::Serial);
        assert_eq!("Parallel".parse::<Strategy>().unwrap(), Strategy::Parallel);
        assert_eq!("gpu".parse::<Strategy>().unwrap(), Strategy::Gpu);
        assert_eq!("opencl".parse::<Strategy>().unwrap(), Strategy::Gpu);
        assert!("fast".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_timing_headers_match_log_format() {
        assert_eq!(Strategy::Serial.timing_header(), "Serial (s)");
        assert_eq!(Strategy::Parallel.timing_header(), "Parallel (s)");
        assert_eq!(Strategy::Gpu.timing_header(), "OpenCL (s)");
    }
}
