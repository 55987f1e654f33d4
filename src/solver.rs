use crate::complex::{cr, recurrence, C};

/// Escape radius for the bounded/unbounded classification.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time evaluator: iterates z ← z² + c from the origin and reports
/// whether the orbit leaves the escape radius within the iteration budget.
#[derive(Clone, Debug)]
pub struct Evaluator {
    max_iterations: u32,
    threshold: f64,
}

impl Evaluator {
    pub fn new(threshold: f64, max_iterations: u32) -> Self {
        Self {
            threshold,
            max_iterations,
        }
    }

    pub fn with_budget(max_iterations: u32) -> Self {
        Self::new(ESCAPE_RADIUS, max_iterations)
    }

    /// True if the orbit of `c` escapes within the budget. A budget of zero
    /// never iterates, so every point classifies as bounded.
    pub fn escapes(&self, c: C<f64>) -> bool {
        let mut z = cr(0.0);
        for _ in 0..self.max_iterations {
            z = recurrence(z, c);
            if z.norm() > self.threshold {
                return true;
            }
        }
        false
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ESCAPE_RADIUS, 100)
    }
}
