use std::fs;
use std::io::{stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct Benchmark {
    f: Rc<dyn Fn()>,
    name: String,
    iterations: usize,
}

impl Benchmark {
    pub fn iter<F: Fn() + 'static>(name: &str, n: usize, f: F) -> Self {
        Self {
            f: Rc::new(f),
            name: name.to_string(),
            iterations: n,
        }
    }

    pub fn once<F: Fn() + 'static>(name: &str, f: F) -> Self {
        Self::iter(name, 1, f)
    }

    pub fn run(&self) -> Duration {
        let start = Instant::now();
        for _ in 0..self.iterations {
            (self.f)();
        }
        start.elapsed()
    }
}

struct BenchResult {
    name: String,
    iterations: usize,
    total: Duration,
}

pub struct BenchmarkReport {
    benches: Vec<Benchmark>,
    results: Vec<BenchResult>,
}

impl BenchmarkReport {
    pub fn new() -> Self {
        Self {
            benches: vec![],
            results: vec![],
        }
    }

    pub fn with_benches(benches: &[Benchmark]) -> Self {
        let mut this = Self::new();
        for bench in benches {
            this.benches.push(bench.clone());
        }
        this
    }

    pub fn run(&mut self) {
        for bench in &self.benches {
            let total = bench.run();
            self.results.push(BenchResult {
                name: bench.name.clone(),
                iterations: bench.iterations,
                total,
            });
            print!(".");
            stdout().flush().unwrap();
        }
        print!("\n\n");
    }

    pub fn show(&self) {
        for r in &self.results {
            println!(
                "{}\n  per call: {}ms\n  total: {}ms\n",
                r.name,
                r.total.as_millis() / r.iterations as u128,
                r.total.as_millis()
            );
        }
    }

    pub fn write_csv(&self, filename: &str) {
        let mut lines: Vec<String> = vec!["benchmark,per_call_ms,iterations,total_ms".to_string()];
        for r in &self.results {
            lines.push(format!(
                "{},{},{},{}",
                r.name,
                r.total.as_millis() / r.iterations as u128,
                r.iterations,
                r.total.as_millis()
            ));
        }
        lines.push("".to_string());
        fs::write(filename, lines.join("\n")).unwrap();
    }

    pub fn report(mut self, name: &str) {
        self.run();
        self.show();
        self.write_csv(&format!("bench-{}.csv", name));
    }
}
