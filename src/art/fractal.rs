use crate::art::field::{linspace, ScalarField};

const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Escape-time intensity map over the complex plane. The per-point constant
/// is the starting point rotated by `time_factor`, so the set morphs as the
/// phase advances instead of staying a fixed Mandelbrot slice.
///
/// Rows follow the imaginary axis, columns the real axis, both linspaced over
/// [-2, 2]. Counts are normalized by their maximum only; escape counts are
/// non-negative so a min-max stretch would change the reference behavior.
pub fn compute(size: usize, iterations: u32, time_factor: f64) -> ScalarField {
    let mut field = ScalarField::zeros(size);
    let (rot_cos, rot_sin) = (time_factor.cos(), time_factor.sin());

    for row in 0..size {
        let y = linspace(-2.0, 2.0, size, row);
        for col in 0..size {
            let x = linspace(-2.0, 2.0, size, col);

            // C = Z0 * e^(i * time_factor)
            let cr = x * rot_cos - y * rot_sin;
            let ci = x * rot_sin + y * rot_cos;

            let mut zr = x;
            let mut zi = y;
            let mut count = 0u32;
            for _ in 0..iterations {
                if zr * zr + zi * zi > ESCAPE_RADIUS_SQ {
                    break;
                }
                let zr2 = zr * zr - zi * zi + cr;
                zi = 2.0 * zr * zi + ci;
                zr = zr2;
                count += 1;
            }

            field.set(row, col, count as f64);
        }
    }

    field.normalize_by_max();
    field
}
