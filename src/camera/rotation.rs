/// Yaw/pitch rotation
///
/// Yaw turns the x/z plane about the vertical axis first, then pitch turns
/// the resulting y/z plane.

use crate::physics::Vec3;
use cgmath::{Deg, Rad};

/// Rotate a vector by pitch then yaw angles given in degrees (yaw applied first)
pub fn rotate(v: Vec3, pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let (sin_pitch, cos_pitch) = Rad::from(Deg(pitch_degrees)).0.sin_cos();
    let (sin_yaw, cos_yaw) = Rad::from(Deg(yaw_degrees)).0.sin_cos();

    let yawed = Vec3::new(
        v.x * cos_yaw + v.z * sin_yaw,
        v.y,
        -v.x * sin_yaw + v.z * cos_yaw,
    );

    Vec3::new(
        yawed.x,
        yawed.y * cos_pitch - yawed.z * sin_pitch,
        yawed.y * sin_pitch + yawed.z * cos_pitch,
    )
}

/// Inverse of [`rotate`]: undo pitch, then undo yaw
pub fn unrotate(v: Vec3, pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let (sin_pitch, cos_pitch) = Rad::from(Deg(pitch_degrees)).0.sin_cos();
    let (sin_yaw, cos_yaw) = Rad::from(Deg(yaw_degrees)).0.sin_cos();

    let unpitched = Vec3::new(
        v.x,
        v.y * cos_pitch + v.z * sin_pitch,
        -v.y * sin_pitch + v.z * cos_pitch,
    );

    Vec3::new(
        unpitched.x * cos_yaw - unpitched.z * sin_yaw,
        unpitched.y,
        unpitched.x * sin_yaw + unpitched.z * cos_yaw,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    const EPSILON: f32 = 1e-4;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(
            (a - b).magnitude() < EPSILON,
            "expected {:?}, got {:?}",
            b,
            a
        );
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.5, -2.0, 3.0);
        assert_vec_eq(rotate(v, 0.0, 0.0), v);
    }

    #[test]
    fn test_yaw_turns_xz_plane() {
        // +90 yaw maps +x onto -z and +z onto +x
        assert_vec_eq(rotate(Vec3::new(1.0, 0.0, 0.0), 0.0, 90.0), Vec3::new(0.0, 0.0, -1.0));
        assert_vec_eq(rotate(Vec3::new(0.0, 0.0, 1.0), 0.0, 90.0), Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(rotate(Vec3::new(0.0, 4.0, 0.0), 0.0, 90.0), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_pitch_turns_yz_plane() {
        assert_vec_eq(rotate(Vec3::new(0.0, 0.0, 1.0), 90.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert_vec_eq(rotate(Vec3::new(0.0, 1.0, 0.0), 90.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_yaw_is_applied_before_pitch() {
        // Yaw first sends +x to -z, pitch then lifts -z onto +y.
        // The other order would leave +x on the x/z plane.
        let v = rotate(Vec3::new(1.0, 0.0, 0.0), 90.0, 90.0);
        assert_vec_eq(v, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let samples = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-7.5, 0.25, 11.0),
            Vec3::new(0.0, -3.0, 0.5),
        ];
        let mut pitch = -88.0;
        while pitch < 89.0 {
            let mut yaw = -179.0;
            while yaw < 180.0 {
                for v in samples {
                    let rotated = rotate(v, pitch, yaw);
                    let diff = (rotated.magnitude() - v.magnitude()).abs();
                    assert!(diff < EPSILON * v.magnitude().max(1.0));
                }
                yaw += 17.0;
            }
            pitch += 11.0;
        }
    }

    #[test]
    fn test_unrotate_inverts_rotate() {
        let v = Vec3::new(3.0, -1.0, 8.0);
        for (pitch, yaw) in [(0.0, 0.0), (30.0, -45.0), (-89.0, 179.0), (60.0, 120.0)] {
            assert_vec_eq(unrotate(rotate(v, pitch, yaw), pitch, yaw), v);
        }
    }
}
