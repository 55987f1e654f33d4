use std::process;

use structopt::StructOpt;

use mandelbench::render::Strategy;
use mandelbench::report::{self, TimingLog};
use mandelbench::{Image, RenderConfig, RenderError};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mandelbench",
    about = "Rasterize the Mandelbrot set and time each execution strategy"
)]
struct Opt {
    /// Image width in pixels
    #[structopt(short, long, default_value = "3840")]
    width: usize,

    /// Image height in pixels
    #[structopt(long, default_value = "2160")]
    height: usize,

    /// Escape-time iteration budget
    #[structopt(short, long, default_value = "100")]
    iterations: u32,

    /// Zoom factor applied to the plane mapping
    #[structopt(short, long, default_value = "0.9")]
    zoom: f64,

    /// Worker count for the parallel strategy (defaults to physical cores)
    #[structopt(short, long)]
    threads: Option<usize>,

    /// Strategies to run, in order: serial, parallel, gpu
    #[structopt(
        short,
        long,
        use_delimiter = true,
        default_value = "serial,parallel"
    )]
    strategy: Vec<Strategy>,

    /// Timing log path
    #[structopt(long, default_value = "timing.txt")]
    timing_file: String,
}

fn run(opt: &Opt) -> Result<(), RenderError> {
    let config = RenderConfig::new(opt.width, opt.height, opt.iterations, opt.zoom);
    let mut img = Image::new(config.width, config.height);
    let mut timing_log = TimingLog::create(&opt.timing_file)?;

    for strategy in &opt.strategy {
        // Each pass starts from a black image; bounded pixels are never
        // written, so stale pixels from the previous pass must not survive.
        img.clear();
        log::info!(
            "rendering {}x{} at {} iterations with {} strategy",
            config.width,
            config.height,
            config.max_iterations,
            strategy
        );
        let timing = strategy.renderer(opt.threads).render(&mut img, &config)?;
        timing_log.record(strategy.timing_header(), &timing)?;
        report::save_ppm(&img, strategy.output_file())?;
        log::info!(
            "{} pass finished in {:.3}s, wrote {}",
            strategy,
            timing.seconds(),
            strategy.output_file()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    if let Err(e) = run(&opt) {
        log::error!("{}", e);
        process::exit(1);
    }
}
