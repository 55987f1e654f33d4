use std::collections::HashSet;

use mandelbench::bench::{Benchmark, BenchmarkReport};
use mandelbench::render::{Renderer, SerialRenderer, ThreadedRenderer};
use mandelbench::{Image, RenderConfig};

static HEIGHT: usize = 600;
static REPEATS: usize = 5;

fn thread_counts() -> Vec<usize> {
    let cpus = num_cpus::get_physical();
    let threads = num_cpus::get();
    let mut tcounts: HashSet<usize> = HashSet::new();

    tcounts.insert(1);
    tcounts.insert(2);
    tcounts.insert(4);
    tcounts.insert(cpus);
    tcounts.insert(threads);

    let mut tcounts: Vec<usize> = tcounts.into_iter().collect();
    tcounts.sort();
    tcounts
}

fn benchmark_renderer<R>(name: &str, renderer: R, height: usize) -> Benchmark
where
    R: Renderer + 'static,
{
    let width = 3 * height / 2;
    let config = RenderConfig::new(width, height, 100, 0.9);
    let f = move || {
        let mut img = Image::new(config.width, config.height);
        renderer.render(&mut img, &config).unwrap();
    };
    Benchmark::iter(&format!("render-{}-{}", name, height), REPEATS, f)
}

fn main() {
    let mut benches = vec![benchmark_renderer("serial", SerialRenderer, HEIGHT)];
    for t in thread_counts() {
        benches.push(benchmark_renderer(
            &format!("mt{}", t),
            ThreadedRenderer::new(t),
            HEIGHT,
        ));
    }
    BenchmarkReport::with_benches(&benches).report("renderer");
}
