use serde::{Deserialize, Serialize};

use crate::camera::{diagnostics, transform};
use crate::physics::Vec3;
use crate::simulation::SimulationContext;

/// How relative mouse motion turns the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookMode {
    /// Captured cursor, every motion event turns the camera
    #[default]
    MouseLook,
    /// Turn only while the left button is held
    Drag,
}

/// Camera controls, already decoupled from whatever key or button produced them.
/// Step counts are multiplied by the matching speed in `ControlsConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAction {
    /// Move along world axes, in `move_speed` units
    Translate(Vec3),
    /// Turn by `rotation_speed` degrees per step
    Turn { yaw_steps: f32, pitch_steps: f32 },
    /// Widen (positive) or narrow the field of view by `fov_step` degrees per step
    AdjustFov(f32),
    ToggleProjection,
    /// Relative mouse motion in pixels
    MouseMotion {
        dx: f32,
        dy: f32,
        left_button_held: bool,
    },
}

pub fn apply_action(ctx: &mut SimulationContext, action: CameraAction) {
    let controls = ctx.config().controls.clone();

    match action {
        CameraAction::Translate(steps) => {
            ctx.camera = transform::translate(&ctx.camera, steps * controls.move_speed);
        }
        CameraAction::Turn {
            yaw_steps,
            pitch_steps,
        } => {
            ctx.camera = transform::rotate(
                &ctx.camera,
                yaw_steps * controls.rotation_speed,
                pitch_steps * controls.rotation_speed,
            );
        }
        CameraAction::AdjustFov(steps) => {
            ctx.camera = transform::adjust_fov(&ctx.camera, steps * controls.fov_step);
        }
        CameraAction::ToggleProjection => {
            ctx.toggle_projection();
        }
        CameraAction::MouseMotion {
            dx,
            dy,
            left_button_held,
        } => match controls.look_mode {
            // Moving the mouse up (negative dy) looks up
            LookMode::MouseLook => {
                ctx.camera = transform::rotate(
                    &ctx.camera,
                    dx * controls.mouse_sensitivity,
                    -dy * controls.mouse_sensitivity,
                );
            }
            LookMode::Drag if left_button_held => {
                ctx.camera = transform::rotate(
                    &ctx.camera,
                    dx * controls.drag_yaw_sensitivity,
                    dy * controls.drag_pitch_sensitivity,
                );
            }
            LookMode::Drag => {}
        },
    }

    log::trace!("[INPUT] Applied {:?}", action);
    diagnostics::log_camera_context(&ctx.camera, "after input");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::projection::ProjectionMode;

    fn context(config: EngineConfig) -> SimulationContext {
        SimulationContext::new(config).unwrap()
    }

    #[test]
    fn test_mouse_look_turns_and_inverts_vertical() {
        let mut ctx = context(EngineConfig::mouse_look_preset());
        apply_action(
            &mut ctx,
            CameraAction::MouseMotion {
                dx: 100.0,
                dy: -50.0,
                left_button_held: false,
            },
        );
        assert!((ctx.camera.yaw_degrees - 10.0).abs() < 1e-4);
        assert!((ctx.camera.pitch_degrees - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_mouse_look_clamps_pitch_and_wraps_yaw() {
        let mut ctx = context(EngineConfig::mouse_look_preset());
        apply_action(
            &mut ctx,
            CameraAction::MouseMotion {
                dx: 1900.0,
                dy: -5000.0,
                left_button_held: false,
            },
        );
        assert!((ctx.camera.yaw_degrees + 170.0).abs() < 1e-3);
        assert_eq!(ctx.camera.pitch_degrees, 89.0);
    }

    #[test]
    fn test_drag_requires_button() {
        let mut ctx = context(EngineConfig::drag_preset());
        apply_action(
            &mut ctx,
            CameraAction::MouseMotion {
                dx: 10.0,
                dy: 10.0,
                left_button_held: false,
            },
        );
        assert_eq!(ctx.camera.yaw_degrees, 0.0);
        assert_eq!(ctx.camera.pitch_degrees, 0.0);

        apply_action(
            &mut ctx,
            CameraAction::MouseMotion {
                dx: 10.0,
                dy: 10.0,
                left_button_held: true,
            },
        );
        assert!((ctx.camera.yaw_degrees - 10.0).abs() < 1e-4);
        assert!((ctx.camera.pitch_degrees - 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_translate_uses_move_speed() {
        let mut ctx = context(EngineConfig::drag_preset());
        apply_action(&mut ctx, CameraAction::Translate(Vec3::new(1.0, 0.0, -1.0)));
        assert_eq!(ctx.camera.body.position, Vec3::new(5.0, 10.0, -10.0));
    }

    #[test]
    fn test_turn_and_fov_steps() {
        let mut ctx = context(EngineConfig::default());
        apply_action(
            &mut ctx,
            CameraAction::Turn {
                yaw_steps: -1.0,
                pitch_steps: 2.0,
            },
        );
        assert_eq!(ctx.camera.yaw_degrees, -2.0);
        assert_eq!(ctx.camera.pitch_degrees, 4.0);

        apply_action(&mut ctx, CameraAction::AdjustFov(-1.0));
        assert_eq!(ctx.camera.fov_degrees, 85.0);
    }

    #[test]
    fn test_toggle_projection() {
        let mut ctx = context(EngineConfig::default());
        apply_action(&mut ctx, CameraAction::ToggleProjection);
        assert_eq!(ctx.mode, ProjectionMode::Orthographic);
        apply_action(&mut ctx, CameraAction::ToggleProjection);
        assert_eq!(ctx.mode, ProjectionMode::Perspective);
    }
}
