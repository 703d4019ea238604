//! Brick Rush entry point
//!
//! Headless demo: the autopilot plays a fixed number of frames and the run
//! is summarized in the log. Hosts with a window drive `FrameDriver`
//! directly.
//!
//! Usage: `brick-rush [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_rush::Settings;
    use brick_rush::driver::{Autopilot, FrameDriver};
    use brick_rush::render;

    env_logger::init();
    log::info!("Brick Rush (headless demo) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 120);

    let mut driver = FrameDriver::new(&settings);
    let mut pilot = Autopilot::new(0x5eed, settings.paddle.width);
    let frame_dt = 1.0 / 60.0;

    let mut vertex_bytes = 0usize;
    for i in 0..frames {
        pilot.drive(&mut driver);
        driver.frame(i as f64 * frame_dt);

        let vertices = render::frame_vertices(&driver.frame_descriptors());
        vertex_bytes = vertex_bytes.max(render::vertex::as_bytes(&vertices).len());
    }

    let stats = driver.stats();
    log::info!(
        "Ran {} frames: {} bricks, {} balls lost, {} clears, {} game overs",
        stats.frames,
        stats.bricks_destroyed,
        stats.balls_lost,
        stats.clears,
        stats.game_overs
    );
    log::info!(
        "Final phase {:?}, lives {}, bricks left {}, peak vertex buffer {} bytes",
        driver.state.phase(),
        driver.state.session.life(),
        driver.state.bricks.remaining(),
        vertex_bytes
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library; nothing to run here
}
