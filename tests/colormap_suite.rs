use std::f64::consts::TAU;

use polarbrot::art::{colorize, fractal_field, lookup, polar_field, resolve_index, ColormapError, COLORMAPS};

#[test]
fn registry_names_are_unique_and_resolvable() {
    for (i, cmap) in COLORMAPS.iter().enumerate() {
        assert!(!cmap.name.trim().is_empty());
        assert_eq!(
            COLORMAPS.iter().position(|c| c.name == cmap.name),
            Some(i),
            "duplicate colormap name '{}'",
            cmap.name
        );
        assert!(lookup(cmap.name).is_ok());
        assert_eq!(resolve_index(cmap.name).unwrap(), i);
    }
}

#[test]
fn resolve_index_wraps_numeric_values() {
    let n = COLORMAPS.len();
    assert_eq!(resolve_index("0").unwrap(), 0);
    assert_eq!(resolve_index(&format!("{}", n + 2)).unwrap(), 2);
}

#[test]
fn unknown_colormap_name_is_a_lookup_error() {
    let field = polar_field(8, 2, 0.0);
    let err = colorize(&field, "nonexistent_palette_xyz", 0.0)
        .expect_err("unknown colormap must not silently fall back");
    assert_eq!(
        err,
        ColormapError::Unknown("nonexistent_palette_xyz".to_string())
    );
    assert!(err.to_string().contains("nonexistent_palette_xyz"));
}

#[test]
fn colorize_preserves_field_shape() {
    let field = fractal_field(16, 20, 0.5);
    let img = colorize(&field, "prism", 0.5).unwrap();
    assert_eq!(img.size(), 16);
    assert_eq!(img.pixels().len(), 16 * 16);
}

#[test]
fn colorize_is_periodic_in_the_time_phase() {
    // sin has period 2*pi and every palette channel has period 1 in the
    // lookup index, so shifting the clock by a full turn may move each
    // channel by at most one quantization step.
    let field = polar_field(12, 4, 1.1);
    for cmap in &COLORMAPS {
        for &t in &[0.0, 0.37, 2.0] {
            let a = colorize(&field, cmap.name, t).unwrap();
            let b = colorize(&field, cmap.name, t + TAU).unwrap();
            for (pa, pb) in a.pixels().iter().zip(b.pixels()) {
                for ch in 0..3 {
                    let d = (pa[ch] as i16 - pb[ch] as i16).abs();
                    assert!(
                        d <= 1,
                        "colormap {} not periodic at t={t}: {pa:?} vs {pb:?}",
                        cmap.name
                    );
                }
            }
        }
    }
}

#[test]
fn palettes_wrap_without_a_seam() {
    for cmap in &COLORMAPS {
        let lo = cmap.sample(0.0);
        let hi = cmap.sample(1.0 - 1e-9);
        for ch in 0..3 {
            assert!(
                (lo[ch] - hi[ch]).abs() < 1e-6,
                "colormap {} has a seam at the wrap point",
                cmap.name
            );
        }
    }
}

#[test]
fn samples_stay_inside_unit_cube() {
    for cmap in &COLORMAPS {
        for i in 0..=100 {
            let rgb = cmap.sample(i as f64 / 100.0);
            for ch in rgb {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
