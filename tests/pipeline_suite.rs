use polarbrot::art::{render_art, COLORMAPS};
use polarbrot::params::{Params, Slider, ITERATIONS_MAX, LAYERS_MAX, LAYERS_MIN, SIZE_MAX, SIZE_MIN};

fn small_params() -> Params {
    Params {
        size: 16,
        iterations: 25,
        layers: 3,
        colormap: 0,
        time_factor: 0.8,
    }
}

#[test]
fn pipeline_is_a_pure_function_of_params() {
    let params = small_params();
    let a = render_art(&params).unwrap();
    let b = render_art(&params).unwrap();
    assert_eq!(a, b, "identical params must yield bit-identical frames");
}

#[test]
fn pipeline_output_shape_matches_size() {
    for &size in &[8usize, 16, 33] {
        let mut params = small_params();
        params.size = size;
        let img = render_art(&params).unwrap();
        assert_eq!(img.size(), size);
        assert_eq!(img.pixels().len(), size * size);
    }
}

#[test]
fn pipeline_responds_to_the_clock() {
    let mut params = small_params();
    let a = render_art(&params).unwrap();
    params.time_factor += 0.5;
    let b = render_art(&params).unwrap();
    assert_ne!(a, b, "advancing the phase should change the frame");
}

#[test]
fn params_snap_cli_values_onto_the_slider_grid() {
    let p = Params::new(275, 55, 99, COLORMAPS.len() + 1);
    assert_eq!(p.size, 300);
    assert_eq!(p.iterations, 60);
    assert_eq!(p.layers, LAYERS_MAX);
    assert_eq!(p.colormap, 1);
    assert_eq!(p.time_factor, 0.0);

    let p = Params::new(1, 1, 0, 0);
    assert_eq!(p.size, SIZE_MIN);
    assert_eq!(p.iterations, 10);
    assert_eq!(p.layers, LAYERS_MIN);
}

#[test]
fn bounded_sliders_saturate_at_their_limits() {
    let mut p = Params::new(SIZE_MAX, ITERATIONS_MAX, LAYERS_MAX, 0);
    p.step(Slider::Size, true);
    p.step(Slider::Iterations, true);
    p.step(Slider::Layers, true);
    assert_eq!(p.size, SIZE_MAX);
    assert_eq!(p.iterations, ITERATIONS_MAX);
    assert_eq!(p.layers, LAYERS_MAX);

    let mut p = Params::new(SIZE_MIN, 10, LAYERS_MIN, 0);
    p.step(Slider::Size, false);
    p.step(Slider::Iterations, false);
    p.step(Slider::Layers, false);
    assert_eq!(p.size, SIZE_MIN);
    assert_eq!(p.iterations, 10);
    assert_eq!(p.layers, LAYERS_MIN);
}

#[test]
fn colormap_slider_wraps_both_ways() {
    let n = COLORMAPS.len();
    let mut p = Params::new(300, 50, 6, n - 1);
    p.step(Slider::Colormap, true);
    assert_eq!(p.colormap, 0);
    p.step(Slider::Colormap, false);
    assert_eq!(p.colormap, n - 1);
}

#[test]
fn slider_selection_cycles_through_all_four() {
    let mut s = Slider::Size;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(s.label());
        s = s.next();
    }
    assert_eq!(s, Slider::Size);
    assert_eq!(seen, ["Size", "Iterations", "Layers", "Colormap"]);
    assert_eq!(Slider::Size.prev(), Slider::Colormap);
}
