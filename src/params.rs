use crate::art::COLORMAPS;

pub const SIZE_MIN: usize = 100;
pub const SIZE_MAX: usize = 1000;
pub const SIZE_STEP: usize = 50;

pub const ITERATIONS_MIN: u32 = 10;
pub const ITERATIONS_MAX: u32 = 200;
pub const ITERATIONS_STEP: u32 = 10;

pub const LAYERS_MIN: u32 = 1;
pub const LAYERS_MAX: u32 = 12;

/// Per-frame parameter snapshot. The app owns and mutates this between ticks;
/// the pipeline only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub size: usize,
    pub iterations: u32,
    pub layers: u32,
    pub colormap: usize,
    pub time_factor: f64,
}

impl Params {
    /// Clamp raw CLI values onto the slider grid so the first frame already
    /// sits on a reachable slider position.
    pub fn new(size: usize, iterations: u32, layers: u32, colormap: usize) -> Self {
        Self {
            size: snap(size, SIZE_MIN, SIZE_MAX, SIZE_STEP),
            iterations: snap(iterations as usize, ITERATIONS_MIN as usize, ITERATIONS_MAX as usize, ITERATIONS_STEP as usize) as u32,
            layers: layers.clamp(LAYERS_MIN, LAYERS_MAX),
            colormap: colormap % COLORMAPS.len(),
            time_factor: 0.0,
        }
    }

    pub fn colormap_name(&self) -> &'static str {
        COLORMAPS[self.colormap % COLORMAPS.len()].name
    }

    /// Step one slider by its grid step. Bounded sliders saturate at their
    /// limits; the colormap slider wraps.
    pub fn step(&mut self, slider: Slider, forward: bool) {
        match slider {
            Slider::Size => {
                self.size = if forward {
                    (self.size + SIZE_STEP).min(SIZE_MAX)
                } else {
                    self.size.saturating_sub(SIZE_STEP).max(SIZE_MIN)
                };
            }
            Slider::Iterations => {
                self.iterations = if forward {
                    (self.iterations + ITERATIONS_STEP).min(ITERATIONS_MAX)
                } else {
                    self.iterations.saturating_sub(ITERATIONS_STEP).max(ITERATIONS_MIN)
                };
            }
            Slider::Layers => {
                self.layers = if forward {
                    (self.layers + 1).min(LAYERS_MAX)
                } else {
                    self.layers.saturating_sub(1).max(LAYERS_MIN)
                };
            }
            Slider::Colormap => {
                let n = COLORMAPS.len();
                self.colormap = if forward {
                    (self.colormap + 1) % n
                } else {
                    (self.colormap + n - 1) % n
                };
            }
        }
    }
}

fn snap(v: usize, min: usize, max: usize, step: usize) -> usize {
    let v = v.clamp(min, max);
    min + ((v - min + step / 2) / step) * step
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Size,
    Iterations,
    Layers,
    Colormap,
}

impl Slider {
    const fn all() -> [Self; 4] {
        [Self::Size, Self::Iterations, Self::Layers, Self::Colormap]
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let mut idx = 0usize;
        while idx < all.len() {
            if all[idx] == self {
                return all[(idx + 1) % all.len()];
            }
            idx += 1;
        }
        Self::Size
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let mut idx = 0usize;
        while idx < all.len() {
            if all[idx] == self {
                return all[(idx + all.len() - 1) % all.len()];
            }
            idx += 1;
        }
        Self::Size
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Size => "Size",
            Self::Iterations => "Iterations",
            Self::Layers => "Layers",
            Self::Colormap => "Colormap",
        }
    }
}
