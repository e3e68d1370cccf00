/// Scene Module
///
/// World-space geometry (segments and text labels) plus the boundary to
/// whatever actually puts pixels on screen. The engine never draws; it
/// projects, expands thick lines and hands pixel coordinates to a
/// `SceneEmitter`.

pub mod stroke;

pub use stroke::{expand, Stroke};

use crate::config::SceneConfig;
use crate::constants::scene::{LABEL_OFFSET, MAX_AXIS_LENGTH, MAX_FLOOR_SIZE, TICK_HALF_LENGTH};
use crate::physics::{Vec3, FLOOR_HEIGHT};
use crate::projection::{project_point, project_segment, ScreenPoint};
use crate::simulation::SimulationContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const FLOOR: Color = Color::rgb(150, 150, 150);
    pub const AXIS_X: Color = Color::rgb(255, 0, 0);
    pub const AXIS_Y: Color = Color::rgb(0, 255, 0);
    pub const AXIS_Z: Color = Color::rgb(0, 0, 255);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Vec3,
    pub color: Color,
}

/// Static world geometry drawn every frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub labels: Vec<Label>,
}

impl Scene {
    /// Floor grid plus labelled X/Y/Z axes with unit ticks.
    /// Sizes past `MAX_FLOOR_SIZE` / `MAX_AXIS_LENGTH` are capped.
    pub fn standard(config: &SceneConfig) -> Self {
        let mut scene = Scene::default();
        scene.add_floor_grid(config.floor_size.min(MAX_FLOOR_SIZE), config.floor_spacing);
        scene.add_axes(config.axis_length.min(MAX_AXIS_LENGTH));
        log::debug!(
            "[SCENE] Built standard scene: {} segments, {} labels",
            scene.segments.len(),
            scene.labels.len()
        );
        scene
    }

    pub fn push_segment(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.segments.push(Segment { start, end, color });
    }

    pub fn push_label(&mut self, text: impl Into<String>, anchor: Vec3, color: Color) {
        self.labels.push(Label {
            text: text.into(),
            anchor,
            color,
        });
    }

    fn add_floor_grid(&mut self, size: u32, spacing: f32) {
        let size = size as i32;
        let extent = size as f32 * spacing;

        // Lines running along x
        for i in -size..=size {
            let z = i as f32 * spacing;
            self.push_segment(
                Vec3::new(-extent, FLOOR_HEIGHT, z),
                Vec3::new(extent, FLOOR_HEIGHT, z),
                Color::FLOOR,
            );
        }
        // Lines running along z
        for i in -size..=size {
            let x = i as f32 * spacing;
            self.push_segment(
                Vec3::new(x, FLOOR_HEIGHT, -extent),
                Vec3::new(x, FLOOR_HEIGHT, extent),
                Color::FLOOR,
            );
        }
    }

    fn add_axes(&mut self, length: u32) {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let len = length as f32;
        self.push_segment(origin, Vec3::new(len, 0.0, 0.0), Color::AXIS_X);
        self.push_segment(origin, Vec3::new(0.0, len, 0.0), Color::AXIS_Y);
        self.push_segment(origin, Vec3::new(0.0, 0.0, len), Color::AXIS_Z);

        let t = TICK_HALF_LENGTH;
        for i in 1..=length {
            let f = i as f32;
            let text = i.to_string();

            self.push_segment(Vec3::new(f, t, 0.0), Vec3::new(f, -t, 0.0), Color::AXIS_X);
            self.push_label(text.clone(), Vec3::new(f, -LABEL_OFFSET, 0.0), Color::AXIS_X);

            self.push_segment(Vec3::new(t, f, 0.0), Vec3::new(-t, f, 0.0), Color::AXIS_Y);
            self.push_label(text.clone(), Vec3::new(0.0, f, -LABEL_OFFSET), Color::AXIS_Y);

            self.push_segment(Vec3::new(t, 0.0, f), Vec3::new(-t, 0.0, f), Color::AXIS_Z);
            self.push_label(text, Vec3::new(0.0, -LABEL_OFFSET, f), Color::AXIS_Z);
        }

        let name_at = len + LABEL_OFFSET;
        self.push_label("X", Vec3::new(name_at, 0.0, 0.0), Color::AXIS_X);
        self.push_label("Y", Vec3::new(0.0, name_at, 0.0), Color::AXIS_Y);
        self.push_label("Z", Vec3::new(0.0, 0.0, name_at), Color::AXIS_Z);
    }
}

/// Receives pixel-space primitives for one frame.
/// Implemented by the windowing/raster layer, or by a recorder in tests.
pub trait SceneEmitter {
    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color);
    fn draw_point(&mut self, p: ScreenPoint, color: Color);
    /// `at` is the label centre
    fn draw_label(&mut self, text: &str, at: ScreenPoint, color: Color);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub segments_drawn: usize,
    pub segments_rejected: usize,
    pub labels_drawn: usize,
}

/// Project and emit every segment and label of the context's scene
pub fn render_scene(ctx: &SimulationContext, emitter: &mut impl SceneEmitter) -> FrameStats {
    let settings = ctx.projection_settings();
    let thickness = ctx.config().scene.line_thickness;
    let mut stats = FrameStats::default();

    for segment in &ctx.scene.segments {
        let Some((a, b)) = project_segment(segment.start, segment.end, &ctx.camera, &settings) else {
            stats.segments_rejected += 1;
            continue;
        };

        match expand(a, b, thickness) {
            Stroke::Lines(lines) => {
                for (start, end) in lines {
                    emitter.draw_line(start, end, segment.color);
                }
            }
            Stroke::Dots(dots) => {
                for dot in dots {
                    emitter.draw_point(dot, segment.color);
                }
            }
        }
        stats.segments_drawn += 1;
    }

    for label in &ctx.scene.labels {
        match project_point(label.anchor, &ctx.camera, &settings) {
            Some(at) if settings.viewport.contains(at) => {
                emitter.draw_label(&label.text, at, label.color);
                stats.labels_drawn += 1;
            }
            _ => {}
        }
    }

    log::trace!(
        "[SCENE] Frame: {} drawn, {} rejected, {} labels",
        stats.segments_drawn,
        stats.segments_rejected,
        stats.labels_drawn
    );
    stats
}
