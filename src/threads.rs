/// Splits a half-open range into n contiguous, disjoint, balanced pieces.
/// Used to hand each worker its band of image rows.
pub struct RangeSplitter;

impl RangeSplitter {
    pub fn split(start: usize, end: usize, n: usize) -> Vec<(usize, usize)> {
        assert!(n > 0, "no parts");
        assert!(start <= end);
        let len = end - start;
        let size = len / n;
        let size_xtra = len % n;

        let mut parts = vec![];
        let mut lo = start;
        for i in 0..n {
            let hi = lo + size + usize::from(i < size_xtra);
            parts.push((lo, hi));
            lo = hi;
        }
        parts
    }
}
