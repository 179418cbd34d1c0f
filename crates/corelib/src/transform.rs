use crate::{Mat4, Vec3};

/// Rotation of `degrees` about `axis`. A zero axis gives the identity.
#[inline]
pub fn axis_angle(axis: Vec3, degrees: f32) -> Mat4 {
    match axis.try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, degrees.to_radians()),
        None => Mat4::IDENTITY,
    }
}

/// Scale about the origin, then translate.
#[inline]
pub fn scale_translation(scale: Vec3, translation: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * Mat4::from_scale(scale)
}

/// Wrap an angle accumulated in degrees back into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
