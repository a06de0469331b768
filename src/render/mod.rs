mod ascii;
mod halfblock;

pub use ascii::AsciiRenderer;
pub use halfblock::HalfBlockRenderer;

use crate::art::RgbImage;
use std::io::Write;

/// Everything a backend needs to paint one tick: the cell geometry, the
/// pixel canvas (RGB, 3 bytes per pixel) and the HUD text for the bottom rows.
pub struct Frame<'a> {
    pub term_cols: u16,
    pub term_rows: u16,
    pub visual_rows: u16,
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub pixels_rgb: &'a [u8],
    pub hud: &'a str,
    pub hud_rows: u16,
    pub sync_updates: bool,
}

pub trait Renderer {
    fn name(&self) -> &'static str;
    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Nearest-neighbor blit of the square art image onto a w x h pixel canvas.
/// The image fills the largest centered square; the letterbox margin stays
/// black, mirroring how a plot window frames a square axes box.
pub fn scale_to_canvas(img: &RgbImage, w: usize, h: usize) -> Vec<u8> {
    let mut canvas = vec![0u8; w * h * 3];
    if w == 0 || h == 0 || img.size() == 0 {
        return canvas;
    }

    let side = w.min(h);
    let x0 = (w - side) / 2;
    let y0 = (h - side) / 2;
    let size = img.size();

    for dy in 0..side {
        let row = dy * size / side;
        for dx in 0..side {
            let col = dx * size / side;
            let [r, g, b] = img.get(row, col);
            let i = ((y0 + dy) * w + (x0 + dx)) * 3;
            canvas[i] = r;
            canvas[i + 1] = g;
            canvas[i + 2] = b;
        }
    }
    canvas
}

#[inline]
pub(crate) fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    // Rec. 601 integer approximation.
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8
}
