use crate::render::{luma_u8, Frame, Renderer};
use std::io::Write;

/// One pixel per cell, mapped to a dark-to-bright ASCII ramp with the pixel
/// color as foreground. Coarser than half-block but survives any terminal.
pub struct AsciiRenderer {
    last_fg: Option<(u8, u8, u8)>,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self { last_fg: None }
    }
}

impl Renderer for AsciiRenderer {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let cols = frame.term_cols as usize;
        let visual_rows = frame.visual_rows as usize;
        let w = frame.pixel_width;

        if cols == 0 || visual_rows == 0 || w != cols || frame.pixel_height != visual_rows {
            return Ok(());
        }
        if frame.pixels_rgb.len() < w.saturating_mul(visual_rows).saturating_mul(3) {
            return Ok(());
        }

        if frame.sync_updates {
            out.write_all(b"\x1b[?2026h")?;
        }
        out.write_all(b"\x1b[H\x1b[0m\x1b[?7l")?;
        self.last_fg = None;

        const RAMP: &[u8] = b" .,:;irsXA253hMHGS#9B&@";

        for y in 0..visual_rows {
            for x in 0..cols {
                let i = (y * w + x) * 3;
                let (r, g, b) = (
                    frame.pixels_rgb[i],
                    frame.pixels_rgb[i + 1],
                    frame.pixels_rgb[i + 2],
                );

                let l = luma_u8(r, g, b) as usize;
                let ch = RAMP[l * (RAMP.len() - 1) / 255];

                if self.last_fg != Some((r, g, b)) {
                    write!(out, "\x1b[38;2;{r};{g};{b}m")?;
                    self.last_fg = Some((r, g, b));
                }
                out.write_all(&[ch])?;
            }
            out.write_all(b"\r\n")?;
        }

        let mut hud_lines = frame.hud.lines();
        for i in 0..(frame.hud_rows as usize) {
            write!(out, "\x1b[{};1H\x1b[0m\x1b[2K", visual_rows + i + 1)?;
            if let Some(mut line) = hud_lines.next() {
                if line.len() > cols {
                    line = &line[..cols];
                }
                write!(out, "{line}")?;
            }
        }

        out.write_all(b"\x1b[?7h")?;
        if frame.sync_updates {
            out.write_all(b"\x1b[?2026l")?;
        }
        out.flush()?;
        Ok(())
    }
}
