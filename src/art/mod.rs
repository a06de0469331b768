mod colorize;
mod compose;
mod field;
mod fractal;
mod polar;

use crate::params::Params;

pub use colorize::{colorize, list_colormaps, lookup, resolve_index, Colormap, ColormapError, RgbImage, COLORMAPS};
pub use compose::combine;
pub use field::ScalarField;

pub use fractal::compute as fractal_field;
pub use polar::compute as polar_field;

/// One full frame: fractal and polar fields at the same size, combined,
/// normalized and colorized. Pure in its inputs; identical Params snapshots
/// yield bit-identical images.
pub fn render_art(params: &Params) -> Result<RgbImage, ColormapError> {
    let fractal = fractal::compute(params.size, params.iterations, params.time_factor);
    let polar = polar::compute(params.size, params.layers, params.time_factor);
    let combined = compose::combine(&fractal, &polar);
    colorize::colorize(&combined, params.colormap_name(), params.time_factor)
}
