//! Block Sandbox entry point
//!
//! Headless native driver: polls a fixed set of held keys, advances the world
//! at the target frame rate, and tessellates every frame.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use glam::Vec2;

    use block_sandbox::platform::{FrameClock, HeldKeys, Key};
    use block_sandbox::renderer::{VertexBatch, render_world};
    use block_sandbox::sim::{World, tick};
    use block_sandbox::{Mode, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "block-sandbox")]
    #[command(version, about = "Real-time 2D block movement sandbox")]
    struct Cli {
        /// Settings file (JSON); defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Movement rules; overrides the settings file
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Number of frames to run
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Keys held for the whole run, comma separated (e.g. "right,w")
        #[arg(long, value_delimiter = ',')]
        hold: Vec<String>,

        /// Pace frames in real time instead of stepping as fast as possible
        #[arg(long)]
        realtime: bool,

        /// Write the effective settings to this path and exit
        #[arg(long)]
        dump_settings: Option<PathBuf>,
    }

    fn parse_keys(names: &[String]) -> Result<Vec<Key>> {
        names
            .iter()
            .map(|name| Key::from_str(name).with_context(|| format!("unknown key `{name}`")))
            .collect()
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();

        let mut settings =
            Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
        if let Some(mode) = cli.mode {
            settings.mode = mode;
        }
        settings.validate().context("Invalid settings")?;
        let palette = settings.palette().context("Invalid palette")?;

        if let Some(path) = cli.dump_settings.as_deref() {
            settings.save(path).context("Failed to write settings")?;
            return Ok(());
        }

        let keys = parse_keys(&cli.hold)?;
        if keys.iter().any(Key::is_quit) {
            log::info!("Quit key held; exiting before the first frame");
            return Ok(());
        }
        let held = HeldKeys::from_keys(&keys);

        let mut world = World::from_settings(&settings, &settings.size_table())
            .context("Failed to build world")?;
        let viewport = Vec2::new(settings.window.width as f32, settings.window.height as f32);

        let mut clock = if cli.realtime {
            FrameClock::new(settings.window.fps)
        } else {
            FrameClock::fixed(settings.window.fps)
        };
        let mut batch = VertexBatch::new();

        log::info!(
            "Block Sandbox starting: {} mode, {} frames",
            settings.mode.as_str(),
            cli.frames
        );

        // dt of the first frame is zero, like a freshly started clock
        let mut dt = 0.0;
        for _ in 0..cli.frames {
            tick(&mut world, &held, dt);

            batch.clear();
            render_world(&mut batch, &world, &palette, viewport);

            dt = clock.tick();
        }

        for (i, block) in world.blocks.iter().enumerate() {
            let p = block.position();
            let v = block.velocity();
            log::info!(
                "block {i}: position ({:.1}, {:.1}) velocity ({:.1}, {:.1})",
                p.x,
                p.y,
                v.x,
                v.y
            );
            println!("block {i}: position ({:.1}, {:.1})", p.x, p.y);
        }
        log::info!(
            "{} frames, last frame {} triangles",
            world.frame,
            batch.triangle_count()
        );

        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is usable directly
}
