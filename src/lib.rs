pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod physics;
pub mod projection;
pub mod scene;
pub mod simulation;

pub use camera::{from_camera_space, init_camera, rotate, to_camera_space, unrotate, CameraData};
pub use config::{load_config, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use input::{apply_action, CameraAction, LookMode};
pub use physics::{advance, BodyId, BodyKind, BodyPool, RigidBody, Vec3};
pub use projection::{
    clip_to_near_far, clipped_project_segment, project_point, project_segment, ProjectionMode,
    ProjectionSettings, ScreenPoint, Viewport,
};
pub use scene::{render_scene, Color, FrameStats, Scene, SceneEmitter};
pub use simulation::SimulationContext;
