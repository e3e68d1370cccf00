// Wireframe Engine Constants - SINGLE SOURCE OF TRUTH
//
// Every tunable number the core relies on lives here. Configuration
// defaults are built from these values, so a config file that omits a
// field falls back to exactly what is written below.

/// Physics constants, in world units (1 unit = 1 metre)
pub mod physics {
    /// Gravitational acceleration (units/s²)
    pub const GRAVITY: f32 = -9.81;

    /// Height of the ground plane
    pub const FLOOR_HEIGHT: f32 = 0.0;

    /// Fraction of vertical speed kept when a dynamic body bounces
    pub const BOUNCE_DAMPING: f32 = 0.5;

    /// Rebound speeds below this snap to zero (units/s)
    pub const REST_SPEED: f32 = 0.1;

    /// Horizontal velocity multiplier applied on contact frames
    pub const CONTACT_FRICTION: f32 = 0.9;

    /// Upper bound on the frame delta fed to the integrator (seconds)
    pub const MAX_DELTA_TIME: f32 = 0.25;

    /// Auxiliary body arena capacity
    pub const MAX_BODIES: usize = 100;

    /// Largest arena a config file may ask for
    pub const MAX_BODY_CAPACITY: usize = 100_000;
}

/// Projection and viewport constants
pub mod projection {
    pub const VIEWPORT_WIDTH: u32 = 900;
    pub const VIEWPORT_HEIGHT: u32 = 600;

    /// Near clip plane distance (perspective only)
    pub const NEAR_PLANE: f32 = 0.2;

    /// Far clip plane distance (perspective only)
    pub const FAR_PLANE: f32 = 500.0;

    /// Pixels per world unit in orthographic mode
    pub const ORTHO_SCALE: f32 = 100.0;

    /// Dz below this is treated as a degenerate segment when clipping
    pub const CLIP_EPSILON: f32 = 1e-6;

    /// Projected pixel coordinates are clamped to +/- this value (2^29, about i32::MAX / 4)
    pub const SCREEN_GUARD_BAND: f32 = 536_870_912.0;
}

/// Camera constants - angles in degrees
pub mod camera {
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const YAW_LIMIT: f32 = 180.0;
    pub const FOV_MIN: f32 = 30.0;
    pub const FOV_MAX: f32 = 120.0;
    pub const DEFAULT_FOV: f32 = 90.0;

    /// Eye height above the floor for the player body
    pub const PLAYER_HEIGHT: f32 = 1.7;
    pub const PLAYER_MASS: f32 = 1.0;

    pub const START_POSITION: [f32; 3] = [5.0, 0.0, -10.0];
}

/// Input sensitivities and step sizes
pub mod controls {
    /// Degrees per pixel of relative mouse motion
    pub const MOUSE_SENSITIVITY: f32 = 0.1;
    pub const DRAG_YAW_SENSITIVITY: f32 = 1.0;
    pub const DRAG_PITCH_SENSITIVITY: f32 = 1.1;

    pub const MOVE_SPEED: f32 = 1.0;
    /// Degrees per key press
    pub const ROTATION_SPEED: f32 = 2.0;
    /// Degrees of field of view per key press
    pub const FOV_STEP: f32 = 5.0;
}

/// Scene layout constants
pub mod scene {
    /// Grid half-extent in cells
    pub const FLOOR_SIZE: u32 = 20;
    pub const FLOOR_SPACING: f32 = 1.0;
    pub const AXIS_LENGTH: u32 = 10;
    pub const TICK_HALF_LENGTH: f32 = 0.2;
    pub const LABEL_OFFSET: f32 = 0.5;

    /// Line thickness in screen pixels
    pub const LINE_THICKNESS: u32 = 3;
    pub const MAX_LINE_THICKNESS: u32 = 64;

    pub const MAX_FLOOR_SIZE: u32 = 1000;
    pub const MAX_AXIS_LENGTH: u32 = 1000;

    /// Screen-space length below which a stroke collapses to a dot
    pub const MIN_STROKE_LENGTH: f32 = 1e-3;
}
