use num::complex::Complex;

pub type C<T> = Complex<T>;

pub fn c(re: f64, im: f64) -> C<f64> {
    Complex::new(re, im)
}

pub fn cr(re: f64) -> C<f64> {
    c(re, 0.0)
}

pub fn ci(im: f64) -> C<f64> {
    c(0.0, im)
}

/// One Mandelbrot recurrence step: z² + c.
pub fn recurrence(z: C<f64>, c: C<f64>) -> C<f64> {
    (z * z) + c
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_recurrence_squares_and_adds() {
        // (1 + 2i)² = -3 + 4i
        let z = c(1.0, 2.0);
        let k = c(0.5, -0.5);
        assert_eq!(recurrence(z, k), c(-2.5, 3.5));
    }

    #[test]
    fn test_recurrence_from_origin_yields_constant() {
        let k = c(-1.71, -0.45);
        assert_eq!(recurrence(cr(0.0), k), k);
    }
}
