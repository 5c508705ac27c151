/// Cached lookup of the interval bracketing a query abscissa.
///
/// The accelerator remembers the last interval it returned. A query falling in
/// that same interval is answered without searching; otherwise a binary search
/// restricted to the side of the cached interval containing the query is run.
///
/// An accelerator belongs to exactly one interpolant evaluation sequence and is
/// dropped with it, it is never shared between calls.
#[derive(Debug, Default, Clone)]
pub(crate) struct IntervalAccel {
    cache: usize,
}

impl IntervalAccel {
    pub(crate) fn new() -> Self {
        IntervalAccel::default()
    }

    /// Return `i` such that `xs[i] <= x < xs[i + 1]`.
    ///
    /// The result is clamped to `[0, xs.len() - 2]`, so a query equal to the last
    /// abscissa maps to the last interval.
    ///
    /// Arguments
    /// -----------------
    /// * `xs`: strictly increasing abscissas, at least two of them.
    /// * `x`: query abscissa, within `[xs[0], xs[xs.len() - 1]]`.
    pub(crate) fn find(&mut self, xs: &[f64], x: f64) -> usize {
        if x < xs[self.cache] {
            self.cache = bracket_search(xs, x, 0, self.cache);
        } else if x >= xs[self.cache + 1] {
            self.cache = bracket_search(xs, x, self.cache, xs.len() - 1);
        }
        self.cache
    }
}

/// Binary search of `x` in `xs[lo..=hi]`, returns an index in `[lo, hi - 1]`.
fn bracket_search(xs: &[f64], x: f64, lo: usize, hi: usize) -> usize {
    let (mut ilo, mut ihi) = (lo, hi);
    while ihi > ilo + 1 {
        let mid = (ihi + ilo) / 2;
        if xs[mid] > x {
            ihi = mid;
        } else {
            ilo = mid;
        }
    }
    ilo
}
