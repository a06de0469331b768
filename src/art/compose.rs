use crate::art::field::ScalarField;

/// Element-wise product of the two fields, restretched to [0, 1]. Both inputs
/// must come from the same `size`; a mismatch is a caller bug, not a runtime
/// condition, and fails loudly.
pub fn combine(fractal: &ScalarField, polar: &ScalarField) -> ScalarField {
    assert_eq!(
        fractal.size(),
        polar.size(),
        "compositor inputs differ in size"
    );

    let size = fractal.size();
    let mut out = ScalarField::zeros(size);
    for row in 0..size {
        for col in 0..size {
            out.set(row, col, fractal.get(row, col) * polar.get(row, col));
        }
    }

    out.normalize_min_max();
    out
}
