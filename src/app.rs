use crate::art::{self, COLORMAPS};
use crate::config::{Config, RendererMode};
use crate::params::{Params, Slider};
use crate::render::{scale_to_canvas, AsciiRenderer, Frame, HalfBlockRenderer, Renderer};
use crate::terminal::TerminalGuard;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io::BufWriter;
use std::time::{Duration, Instant};

pub fn run(cfg: Config) -> anyhow::Result<()> {
    let colormap = art::resolve_index(&cfg.colormap)
        .with_context(|| format!("--colormap {}", cfg.colormap))?;
    let mut params = Params::new(cfg.size, cfg.iterations, cfg.layers, colormap);

    // Printed before the alternate screen so it survives in scrollback.
    println!("polarbrot: animated math art. Arrow keys adjust sliders, q quits.");

    let _term = TerminalGuard::new()?;
    let mut out = BufWriter::new(TerminalGuard::stdout());

    let mut renderer: Box<dyn Renderer> = match cfg.renderer {
        RendererMode::HalfBlock => Box::new(HalfBlockRenderer::new()),
        RendererMode::Ascii => Box::new(AsciiRenderer::new()),
    };
    let (px_w_mul, px_h_mul) = match cfg.renderer {
        RendererMode::HalfBlock => (1usize, 2usize),
        RendererMode::Ascii => (1usize, 1usize),
    };

    let mut last_size = crossterm::terminal::size().context("get terminal size")?;
    if last_size.1 < 2 || last_size.0 < 4 {
        return Err(anyhow::anyhow!(
            "terminal too small (need at least 4x2, got {}x{})",
            last_size.0,
            last_size.1
        ));
    }

    let mut selected = Slider::Size;
    let mut paused = false;
    let mut show_hud = true;
    let mut fps = FpsCounter::new();

    loop {
        let now = Instant::now();

        // Drain input events (non-blocking).
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    if handle_key(
                        k.code,
                        k.modifiers,
                        &mut params,
                        &mut selected,
                        &mut paused,
                        &mut show_hud,
                    ) {
                        return Ok(());
                    }
                }
                Event::Resize(c, r) => {
                    last_size = (c, r);
                }
                _ => {}
            }
        }

        // Size check once per frame (resize events can be missed in some terminals).
        let sz = crossterm::terminal::size()?;
        if sz != last_size {
            last_size = sz;
        }

        let (term_cols, term_rows) = last_size;
        let hud_rows: u16 = if show_hud { 2 } else { 0 };
        let visual_rows = term_rows.saturating_sub(hud_rows).max(1);
        let w = (term_cols as usize).saturating_mul(px_w_mul);
        let h = (visual_rows as usize).saturating_mul(px_h_mul);

        let img = art::render_art(&params)?;
        let pixels = scale_to_canvas(&img, w, h);

        let hud = if show_hud {
            build_hud(&params, selected, renderer.name(), fps.fps(), paused)
        } else {
            String::new()
        };

        let frame = Frame {
            term_cols,
            term_rows,
            visual_rows,
            pixel_width: w,
            pixel_height: h,
            pixels_rgb: &pixels,
            hud: &hud,
            hud_rows,
            sync_updates: cfg.sync_updates,
        };
        renderer.render(&frame, &mut out)?;

        fps.tick();
        if !paused {
            params.time_factor += cfg.time_step;
        }

        // Frame pacing.
        let target = Duration::from_secs_f32(1.0 / cfg.fps.max(1) as f32);
        let elapsed = now.elapsed();
        if elapsed < target {
            std::thread::sleep(target - elapsed);
        }
    }
}

fn handle_key(
    code: KeyCode,
    mods: KeyModifiers,
    params: &mut Params,
    selected: &mut Slider,
    paused: &mut bool,
    show_hud: &mut bool,
) -> bool {
    if mods.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return true;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Up => {
            *selected = selected.prev();
            false
        }
        KeyCode::Down | KeyCode::Tab => {
            *selected = selected.next();
            false
        }
        KeyCode::Left => {
            params.step(*selected, false);
            false
        }
        KeyCode::Right => {
            params.step(*selected, true);
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            params.colormap = fastrand::usize(..COLORMAPS.len());
            false
        }
        KeyCode::Char(' ') => {
            *paused = !*paused;
            false
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            *show_hud = !*show_hud;
            false
        }
        _ => false,
    }
}

fn build_hud(params: &Params, selected: Slider, renderer: &str, fps: f32, paused: bool) -> String {
    let mark = |s: Slider, text: String| {
        if s == selected {
            format!("[{text}]")
        } else {
            text
        }
    };

    let mut line = format!(
        "{} | {} | {} | {} | {renderer} | {fps:4.1} fps",
        mark(Slider::Size, format!("Size {}", params.size)),
        mark(Slider::Iterations, format!("Iter {}", params.iterations)),
        mark(Slider::Layers, format!("Layers {}", params.layers)),
        mark(Slider::Colormap, format!("Colormap {}", params.colormap_name())),
    );
    if paused {
        line.push_str(" | paused");
    }

    format!("{line}\nup/down select  left/right adjust  r random colormap  space pause  i hud  q quit")
}

struct FpsCounter {
    last: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        if dt >= 0.5 {
            self.fps = (self.frames as f32) / dt;
            self.frames = 0;
            self.last = now;
        }
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}
