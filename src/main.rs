/// Headless wireframe engine driver
/// Runs the simulation and projection pipeline for a fixed number of frames
/// without a window, counting what would have been drawn.
///
/// Usage: wireframe-engine [config.toml]

use anyhow::{Context, Result};
use wireframe_engine::scene::{Color, SceneEmitter};
use wireframe_engine::{
    apply_action, load_config, CameraAction, EngineConfig, FrameStats, RigidBody,
    ScreenPoint, SimulationContext, Vec3,
};

const FRAME_COUNT: u32 = 240;
const FRAME_DELTA: f32 = 1.0 / 60.0;

/// Counts primitives instead of rasterizing them
#[derive(Default)]
struct CountingEmitter {
    lines: usize,
    points: usize,
    labels: usize,
}

impl SceneEmitter for CountingEmitter {
    fn draw_line(&mut self, _a: ScreenPoint, _b: ScreenPoint, _color: Color) {
        self.lines += 1;
    }

    fn draw_point(&mut self, _p: ScreenPoint, _color: Color) {
        self.points += 1;
    }

    fn draw_label(&mut self, _text: &str, _at: ScreenPoint, _color: Color) {
        self.labels += 1;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path).with_context(|| format!("loading config from {}", path))?,
        None => {
            log::info!("No config file given, using defaults");
            EngineConfig::default()
        }
    };

    let mut ctx = SimulationContext::new(config).context("creating simulation context")?;

    for i in 0..5 {
        let x = i as f32 * 2.0 - 4.0;
        let body = RigidBody::dynamic(Vec3::new(x, 3.0 + i as f32, 4.0), 1.0)?
            .with_velocity(Vec3::new(0.5, 0.0, -0.25));
        ctx.spawn_body(body)?;
    }

    let mut totals = FrameStats::default();
    let mut emitter = CountingEmitter::default();

    for frame in 0..FRAME_COUNT {
        if frame == FRAME_COUNT / 2 {
            apply_action(&mut ctx, CameraAction::ToggleProjection);
        }
        // Slow pan so the frames differ
        apply_action(
            &mut ctx,
            CameraAction::Turn {
                yaw_steps: 0.25,
                pitch_steps: 0.0,
            },
        );

        ctx.step(FRAME_DELTA);
        let stats = ctx.render(&mut emitter);
        totals.segments_drawn += stats.segments_drawn;
        totals.segments_rejected += stats.segments_rejected;
        totals.labels_drawn += stats.labels_drawn;

        if frame % 60 == 0 {
            log::info!(
                "Frame {}: {} segments drawn, {} rejected, {} labels ({:?})",
                frame,
                stats.segments_drawn,
                stats.segments_rejected,
                stats.labels_drawn,
                ctx.mode
            );
        }
    }

    for (id, body) in ctx.bodies.iter() {
        log::info!(
            "Body {:?} settled at ({:.2}, {:.2}, {:.2})",
            id,
            body.position.x,
            body.position.y,
            body.position.z
        );
    }

    log::info!(
        "Done: {} frames, {} segments drawn, {} rejected, {} lines / {} points / {} labels emitted",
        ctx.frame(),
        totals.segments_drawn,
        totals.segments_rejected,
        emitter.lines,
        emitter.points,
        emitter.labels
    );
    Ok(())
}
