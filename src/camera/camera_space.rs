/// World <-> camera space
///
/// Camera space has its origin at the camera body and +z pointing forward
/// along the view direction. Clipping and projection both assume it.

use super::data_camera::CameraData;
use super::rotation::{rotate, unrotate};
use crate::physics::Vec3;

/// Translate a world point relative to the camera, then rotate by its yaw/pitch
pub fn to_camera_space(v: Vec3, camera: &CameraData) -> Vec3 {
    let relative = v - camera.body.position;
    rotate(relative, camera.pitch_degrees, camera.yaw_degrees)
}

/// Map a camera-space point back into the world
pub fn from_camera_space(r: Vec3, camera: &CameraData) -> Vec3 {
    unrotate(r, camera.pitch_degrees, camera.yaw_degrees) + camera.body.position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::data_camera::init_camera;
    use crate::config::CameraConfig;
    use cgmath::InnerSpace;

    fn camera_at(position: [f32; 3], yaw: f32, pitch: f32) -> CameraData {
        let mut camera = init_camera(&CameraConfig::default()).unwrap();
        camera.body.position = Vec3::from(position);
        camera.yaw_degrees = yaw;
        camera.pitch_degrees = pitch;
        camera
    }

    #[test]
    fn test_camera_position_maps_to_origin() {
        let camera = camera_at([5.0, 1.7, -10.0], 33.0, -12.0);
        let r = to_camera_space(Vec3::new(5.0, 1.7, -10.0), &camera);
        assert!(r.magnitude() < 1e-6);
    }

    #[test]
    fn test_point_ahead_has_positive_depth() {
        let camera = camera_at([0.0, 0.0, -10.0], 0.0, 0.0);
        let r = to_camera_space(Vec3::new(0.0, 0.0, 0.0), &camera);
        assert_eq!(r, Vec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_round_trip_recovers_world_point() {
        let camera = camera_at([5.0, 1.7, -10.0], -140.0, 47.5);
        for p in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-20.0, 0.0, 20.0),
            Vec3::new(3.5, 9.0, -4.0),
        ] {
            let back = from_camera_space(to_camera_space(p, &camera), &camera);
            assert!((back - p).magnitude() < 1e-4, "{:?} came back as {:?}", p, back);
        }
    }
}
