//! Solar-system body table and orbit animation.

use crate::{Mat4, Vec3, transform, vec3};

/// Every sphere in the scene shares this tessellation.
pub const BODY_GRADATION: f32 = 50.0;
pub const RING_SEGMENTS: u32 = 720;
pub const RING_GAP: f32 = 8.0;

/// Ring disk around a body. Radii are measured from the body centre.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub gap: f32,
    pub outer_radius: f32,
    pub segments: u32,
    pub color_texture: &'static str,
    pub mask_texture: &'static str,
}

impl RingSpec {
    #[inline]
    pub fn inner_radius(&self, body_radius: f32) -> f32 {
        body_radius + self.gap
    }
}

/// Static description of one body. Angles and speeds are in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub texture: &'static str,
    pub radius: f32,
    pub gradation: f32,
    pub origin: Vec3,
    pub spin_axis: Vec3,
    pub spin_speed: f32,
    pub spin_angle: f32,
    pub orbit_axis: Vec3,
    pub orbit_speed: f32,
    /// Tilt baked into the generated mesh.
    pub init_angle: f32,
    pub init_axis: Vec3,
    pub scale: f32,
    /// Lighting override; 0 means "lit normally".
    pub diffuse: f32,
    pub rings: Option<RingSpec>,
}

impl BodySpec {
    /// Rotation applied once to the generated sphere/ring vertices.
    #[inline]
    pub fn init_rotation(&self) -> Mat4 {
        transform::axis_angle(self.init_axis, self.init_angle)
    }
}

fn planet(
    name: &'static str,
    texture: &'static str,
    radius: f32,
    origin: Vec3,
    spin_speed: f32,
    orbit_axis: Vec3,
    orbit_speed: f32,
) -> BodySpec {
    BodySpec {
        name,
        texture,
        radius,
        gradation: BODY_GRADATION,
        origin,
        spin_axis: Vec3::Y,
        spin_speed,
        spin_angle: 0.0,
        orbit_axis,
        orbit_speed,
        init_angle: 90.0,
        init_axis: Vec3::X,
        scale: 1.0,
        diffuse: 0.0,
        rings: None,
    }
}

fn rings(outer_radius: f32, color_texture: &'static str, mask_texture: &'static str) -> RingSpec {
    RingSpec {
        gap: RING_GAP,
        outer_radius,
        segments: RING_SEGMENTS,
        color_texture,
        mask_texture,
    }
}

/// The twelve bodies of the solar scene, back to front.
pub fn solar_system() -> Vec<BodySpec> {
    let universe = BodySpec {
        init_angle: 0.0,
        init_axis: Vec3::ZERO,
        diffuse: 0.7,
        ..planet("Universe", "universe.bmp", 10000.0, Vec3::ZERO, 0.0, Vec3::Y, 0.0)
    };
    let sun = BodySpec {
        diffuse: 0.95,
        ..planet("Sun", "star_Sun.bmp", 500.0, Vec3::ZERO, 0.05, Vec3::Y, 0.0)
    };
    let saturn = BodySpec {
        spin_angle: 27.0,
        rings: Some(rings(100.0, "rings_SaturnColor.bmp", "rings_SaturnMask.bmp")),
        ..planet(
            "Saturn",
            "planet_Saturn.bmp",
            36.184,
            vec3(1600.0, 150.0, 0.0),
            1.21,
            Vec3::Y,
            0.42,
        )
    };
    let uranus = BodySpec {
        spin_axis: Vec3::X,
        init_axis: Vec3::Y,
        rings: Some(rings(30.0, "rings_UranusColor.bmp", "rings_UranusMask.bmp")),
        ..planet(
            "Uranus",
            "planet_Uranus.bmp",
            15.75,
            vec3(1800.0, 110.0, 0.0),
            1.21,
            Vec3::Y,
            0.52,
        )
    };

    vec![
        universe,
        sun,
        planet(
            "Mercury",
            "planet_Mercury.bmp",
            15.16,
            vec3(600.0, 0.0, 0.0),
            0.21,
            vec3(0.0, 1.0, 0.3),
            0.1,
        ),
        planet("Venus", "planet_Venus.bmp", 37.60, vec3(800.0, 0.0, 0.0), 0.41, Vec3::Y, 0.2),
        planet("Earth", "planet_Earth.bmp", 39.59, vec3(1000.0, 0.0, 200.0), 1.15, Vec3::Y, 0.30),
        planet("Moon", "planet_Moon.bmp", 15.0, vec3(1020.0, 100.0, 100.0), 0.0, Vec3::Y, 0.3),
        planet("Mars", "planet_Mars.bmp", 33.96, vec3(1200.0, 300.0, 0.0), 0.31, Vec3::Y, 0.21),
        planet(
            "Jupiter",
            "planet_Jupiter.bmp",
            43.441,
            vec3(1400.0, 200.0, 0.0),
            1.21,
            Vec3::Y,
            0.12,
        ),
        saturn,
        uranus,
        planet("Neptune", "planet_Neptune.bmp", 15.299, vec3(2000.0, 0.0, 0.0), 1.21, Vec3::Y, 0.32),
        planet("Pluto", "planet_Pluto.bmp", 9.299, vec3(2200.0, 0.0, 0.0), 1.41, Vec3::Y, 0.42),
    ]
}

/// Animated state of a body.
#[derive(Clone, Debug)]
pub struct BodyState {
    pub spec: BodySpec,
    pub spin_angle: f32,
    pub orbit_angle: f32,
}

impl BodyState {
    pub fn new(spec: BodySpec) -> Self {
        Self {
            spin_angle: spec.spin_angle,
            orbit_angle: 0.0,
            spec,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.spin_angle = transform::wrap_degrees(self.spin_angle + self.spec.spin_speed);
        self.orbit_angle = transform::wrap_degrees(self.orbit_angle + self.spec.orbit_speed);
    }

    /// orbit * (scale-translate * spin)
    pub fn model_matrix(&self) -> Mat4 {
        let placed = transform::scale_translation(Vec3::splat(self.spec.scale), self.spec.origin)
            * transform::axis_angle(self.spec.spin_axis, self.spin_angle);
        transform::axis_angle(self.spec.orbit_axis, self.orbit_angle) * placed
    }

    /// World-space centre.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.model_matrix().transform_point3(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn find(name: &str) -> BodySpec {
        solar_system()
            .into_iter()
            .find(|b| b.name == name)
            .unwrap()
    }

    #[test]
    fn table_has_twelve_bodies_and_two_ringed() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 12);
        let ringed: Vec<_> = bodies
            .iter()
            .filter(|b| b.rings.is_some())
            .map(|b| b.name)
            .collect();
        assert_eq!(ringed, ["Saturn", "Uranus"]);
        assert!(bodies.iter().all(|b| b.gradation == BODY_GRADATION));
    }

    #[test]
    fn ring_inner_radius_adds_gap() {
        let saturn = find("Saturn");
        let rings = saturn.rings.as_ref().unwrap();
        assert_relative_eq!(rings.inner_radius(saturn.radius), 44.184, epsilon = 1e-4);
        assert_eq!(rings.outer_radius, 100.0);
        assert_eq!(rings.segments, 720);
    }

    #[test]
    fn tick_wraps_angles() {
        let mut body = BodyState::new(BodySpec {
            spin_speed: 200.0,
            orbit_speed: 250.0,
            ..find("Earth")
        });
        body.tick();
        body.tick();
        assert_relative_eq!(body.spin_angle, 40.0, epsilon = 1e-4);
        assert_relative_eq!(body.orbit_angle, 140.0, epsilon = 1e-4);
    }

    #[test]
    fn saturn_starts_with_its_spin_angle() {
        let body = BodyState::new(find("Saturn"));
        assert_eq!(body.spin_angle, 27.0);
        assert_eq!(body.orbit_angle, 0.0);
    }

    #[test]
    fn orbit_moves_position_around_axis() {
        let mut body = BodyState::new(BodySpec {
            orbit_speed: 90.0,
            ..find("Venus")
        });
        assert_relative_eq!(body.position().x, 800.0, epsilon = 1e-3);
        body.tick();
        let p = body.position();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(p.z, -800.0, epsilon = 1e-3);
    }

    #[test]
    fn universe_has_no_tilt() {
        assert_eq!(find("Universe").init_rotation(), Mat4::IDENTITY);
    }
}
