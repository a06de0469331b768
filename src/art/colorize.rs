use crate::art::field::ScalarField;
use std::f64::consts::TAU;
use std::fmt;

/// Final renderable output: size x size RGB pixels, rebuilt every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    size: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImage {
    fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![[0, 0, 0]; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> [u8; 3] {
        self.data[row * self.size + col]
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColormapError {
    Unknown(String),
}

impl fmt::Display for ColormapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown colormap '{name}'"),
        }
    }
}

impl std::error::Error for ColormapError {}

/// Continuous palette: [0,1] -> RGB via a cosine gradient,
/// ch = a + b * cos(2pi * (c*t + d)). Integer `c` keeps every channel
/// periodic with period 1, so the wrapped color phase never seams.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    pub name: &'static str,
    a: [f64; 3],
    b: [f64; 3],
    c: [f64; 3],
    d: [f64; 3],
}

impl Colormap {
    pub fn sample(&self, t: f64) -> [f64; 3] {
        let t = fract01(t);
        let mut rgb = [0.0; 3];
        for ch in 0..3 {
            let v = self.a[ch] + self.b[ch] * (TAU * (self.c[ch] * t + self.d[ch])).cos();
            rgb[ch] = v.clamp(0.0, 1.0);
        }
        rgb
    }
}

pub const COLORMAPS: [Colormap; 6] = [
    Colormap {
        name: "prism",
        a: [0.50, 0.50, 0.50],
        b: [0.50, 0.50, 0.50],
        c: [1.0, 1.0, 1.0],
        d: [0.00, 0.33, 0.67],
    },
    Colormap {
        name: "acid",
        a: [0.50, 0.50, 0.40],
        b: [0.50, 0.50, 0.40],
        c: [1.0, 1.0, 1.0],
        d: [0.30, 0.15, 0.55],
    },
    Colormap {
        name: "neon",
        a: [0.55, 0.45, 0.60],
        b: [0.45, 0.45, 0.40],
        c: [1.0, 1.0, 1.0],
        d: [0.85, 0.40, 0.10],
    },
    Colormap {
        name: "ember",
        a: [0.50, 0.24, 0.10],
        b: [0.50, 0.30, 0.12],
        c: [1.0, 1.0, 1.0],
        d: [0.00, 0.08, 0.18],
    },
    Colormap {
        name: "aurora",
        a: [0.22, 0.50, 0.42],
        b: [0.30, 0.48, 0.40],
        c: [1.0, 1.0, 1.0],
        d: [0.55, 0.02, 0.28],
    },
    Colormap {
        name: "cosmic",
        a: [0.32, 0.22, 0.28],
        b: [0.75, 0.65, 0.80],
        c: [1.0, 1.0, 1.0],
        d: [0.00, 0.33, 0.67],
    },
];

pub fn lookup(name: &str) -> Result<&'static Colormap, ColormapError> {
    COLORMAPS
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ColormapError::Unknown(name.to_string()))
}

/// Resolve a CLI value that may be a name or a registry index. Numeric
/// indices wrap modulo the registry length, matching the colormap slider.
pub fn resolve_index(name_or_index: &str) -> Result<usize, ColormapError> {
    if let Ok(i) = name_or_index.trim().parse::<usize>() {
        return Ok(i % COLORMAPS.len());
    }
    let name = name_or_index.trim();
    COLORMAPS
        .iter()
        .position(|c| c.name == name)
        .ok_or_else(|| ColormapError::Unknown(name.to_string()))
}

pub fn list_colormaps() {
    for cmap in &COLORMAPS {
        println!("{}", cmap.name);
    }
}

/// Map the normalized field through the named palette. The lookup index is
/// the field value shifted by sin(time_factor) and wrapped into [0,1), so
/// colors cycle continuously regardless of the field's own values.
pub fn colorize(
    field: &ScalarField,
    colormap: &str,
    time_factor: f64,
) -> Result<RgbImage, ColormapError> {
    let cmap = lookup(colormap)?;
    let phase = time_factor.sin();

    let size = field.size();
    let mut img = RgbImage::zeros(size);
    for row in 0..size {
        for col in 0..size {
            let index = fract01(field.get(row, col) + phase);
            let rgb = cmap.sample(index);
            img.data[row * size + col] = [
                (rgb[0] * 255.0) as u8,
                (rgb[1] * 255.0) as u8,
                (rgb[2] * 255.0) as u8,
            ];
        }
    }
    Ok(img)
}

fn fract01(x: f64) -> f64 {
    let f = x - x.floor();
    if f < 0.0 { f + 1.0 } else { f }
}
