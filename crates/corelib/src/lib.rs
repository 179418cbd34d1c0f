//! Core types: math re-exports, fly camera, transforms, solar bodies.

pub use glam::{Mat4, Vec3, vec3};

pub mod camera;
pub mod solar;
pub mod transform;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tilted_body_keeps_its_radius() {
        let sun = solar::solar_system()
            .into_iter()
            .find(|b| b.name == "Sun")
            .unwrap();
        let p = sun.init_rotation().transform_point3(vec3(0.0, sun.radius, 0.0));
        assert_relative_eq!(p.length(), sun.radius, epsilon = 1e-3);
        assert_relative_eq!(p.z, sun.radius, epsilon = 1e-3);
    }

    #[test]
    fn solar_camera_sees_the_sun() {
        let cam = camera::FlyCamera::new(
            vec3(-840.0, 0.0, 3620.0),
            Vec3::NEG_Z,
            Vec3::Y,
            20.0,
        );
        let clip = cam.mvp(4.0 / 3.0) * Vec3::ZERO.extend(1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
    }
}
