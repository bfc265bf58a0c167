//! Interactive prism viewer.
//!
//! Controls  ←/→ ↑/↓ Z/C = turn  W/S A/D Q/E = move  = / - = zoom
//!           Tab = filled / wireframe  Esc = quit
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- prisms.json --mode wireframe
//! ```

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use prismview_rs::{
    config::Settings,
    control::{Command, HoldTimer},
    engine::{Engine, RenderMode},
    renderer::Software,
    world::{Axis, Scene},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Scene file: JSON list of prisms
    #[arg(value_name = "FILE", default_value = "prisms.json")]
    scene: PathBuf,

    /// JSON settings file; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Viewport width in pixels (overrides the settings file)
    #[arg(long)]
    width: Option<usize>,

    /// Viewport height in pixels (overrides the settings file)
    #[arg(long)]
    height: Option<usize>,

    #[arg(long, value_enum, default_value_t = RenderMode::Filled)]
    mode: RenderMode,
}

/// Key → command table; every entry auto-repeats while held.
const BINDINGS: [(Key, Command); 14] = [
    (Key::Left, Command::Rotate(Axis::Y, -1.0)),
    (Key::Right, Command::Rotate(Axis::Y, 1.0)),
    (Key::Up, Command::Rotate(Axis::X, -1.0)),
    (Key::Down, Command::Rotate(Axis::X, 1.0)),
    (Key::Z, Command::Rotate(Axis::Z, 1.0)),
    (Key::C, Command::Rotate(Axis::Z, -1.0)),
    (Key::W, Command::Move(Axis::Z, 1.0)),
    (Key::S, Command::Move(Axis::Z, -1.0)),
    (Key::A, Command::Move(Axis::X, 1.0)),
    (Key::D, Command::Move(Axis::X, -1.0)),
    (Key::Q, Command::Move(Axis::Y, 1.0)),
    (Key::E, Command::Move(Axis::Y, -1.0)),
    (Key::Equal, Command::Zoom(-1.0)),
    (Key::Minus, Command::Zoom(1.0)),
];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let mut settings = match &opts.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.width = opts.width.unwrap_or(settings.width);
    settings.height = opts.height.unwrap_or(settings.height);
    settings.validate()?;

    let scene = Scene::from_file(&opts.scene)
        .with_context(|| format!("loading scene {}", opts.scene.display()))?;

    let delay = Duration::from_millis(settings.hold_delay_ms);
    let interval = Duration::from_millis(settings.repeat_interval_ms);
    let (w, h) = (settings.width, settings.height);

    let mut engine = Engine::new(Software::default(), scene, settings, opts.mode);

    let mut win = Window::new("Prism Software Render", w, h, WindowOptions::default())?;
    win.set_target_fps(60);

    let mut timers = [HoldTimer::new(Instant::now()); BINDINGS.len()];

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let mut dirty = true;
    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* --------------- commands between frames ----------------------- */
        let now = Instant::now();
        for ((key, cmd), timer) in BINDINGS.iter().zip(timers.iter_mut()) {
            if timer.poll(win.is_key_down(*key), now, delay, interval) {
                engine.apply(*cmd);
                dirty = true;
            }
        }
        if win.is_key_pressed(Key::Tab, KeyRepeat::No) {
            engine.toggle_mode();
            dirty = true;
        }

        /* --------------- draw only when something changed -------------- */
        if !dirty {
            win.update();
            continue;
        }
        dirty = false;

        let t0 = Instant::now();
        let mut shown = Ok(());
        engine.render_frame(|fb, w, h| shown = win.update_with_buffer(fb, w, h));
        shown?;
        acc_time += t0.elapsed();
        acc_frames += 1;

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {avg_ms:.2} ms over {acc_frames} frames");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
