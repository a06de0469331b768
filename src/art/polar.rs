use crate::art::field::{linspace, ScalarField};
use std::f64::consts::TAU;

/// Superposed sinusoidal interference over a polar grid: for each layer k,
/// sin(k*theta + t) * cos(k*r*2pi - t) accumulates into the field.
///
/// The grid is built angle-major (rows = theta over [0, 2pi], columns = r
/// over [0, 1]) and transposed at the end so row/column orientation lines up
/// index-for-index with the fractal field. Zero layers leave a flat field,
/// which the min-max guard collapses to all-zero.
pub fn compute(size: usize, layers: u32, time_factor: f64) -> ScalarField {
    let mut field = ScalarField::zeros(size);

    for row in 0..size {
        let theta = linspace(0.0, TAU, size, row);
        for col in 0..size {
            let r = linspace(0.0, 1.0, size, col);

            let mut acc = 0.0;
            for k in 1..=layers {
                let k = k as f64;
                acc += (k * theta + time_factor).sin() * (k * r * TAU - time_factor).cos();
            }
            field.set(row, col, acc);
        }
    }

    field.normalize_min_max();
    field.transposed()
}
