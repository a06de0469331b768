/// Square grid of f64 samples, row-major. Every pipeline stage produces one
/// of these; after normalization all values sit in [0, 1] with no NaN/Inf.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    size: usize,
    data: Vec<f64>,
}

impl ScalarField {
    pub fn zeros(size: usize) -> Self {
        assert!(size >= 2, "field size must be at least 2, got {size}");
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f64) {
        self.data[row * self.size + col] = v;
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Divide every value by the field maximum. Used for escape-time counts,
    /// which are non-negative by construction; a zero maximum (no point ever
    /// iterated) leaves the field all-zero instead of dividing by zero.
    pub fn normalize_by_max(&mut self) {
        let max = self.max();
        if max <= 0.0 {
            self.data.fill(0.0);
            return;
        }
        for v in &mut self.data {
            *v /= max;
        }
    }

    /// Full (v - min) / (max - min) rescale into [0, 1]. A flat field has no
    /// range to stretch; it collapses to all-zero rather than to NaN.
    pub fn normalize_min_max(&mut self) {
        let min = self.min();
        let max = self.max();
        let range = max - min;
        if range <= 0.0 || !range.is_finite() {
            self.data.fill(0.0);
            return;
        }
        for v in &mut self.data {
            *v = (*v - min) / range;
        }
    }

    pub fn transposed(&self) -> Self {
        let mut out = Self::zeros(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.set(col, row, self.get(row, col));
            }
        }
        out
    }
}

/// Inclusive linear spacing over [lo, hi] with n samples, numpy-style.
pub(crate) fn linspace(lo: f64, hi: f64, n: usize, i: usize) -> f64 {
    lo + (hi - lo) * (i as f64) / ((n - 1) as f64)
}
