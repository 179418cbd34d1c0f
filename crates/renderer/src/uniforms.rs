use asset::Material;
use bytemuck::{Pod, Zeroable};
use corelib::{Mat4, Vec3, camera::FlyCamera};

/// Fixed lighting terms of the model viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub position: Vec3,
    pub ambient: f32,
    pub color: f32,
    pub shininess: f32,
    pub specular: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 200.0, 0.0),
            ambient: 0.3,
            color: 0.9,
            shininess: 32.0,
            specular: 0.5,
        }
    }
}

/// Caps the sun-distance falloff in the body shader.
pub const DIFFUSE_LIMIT: f32 = 5.28;

/// Model viewer UBO. Every vec3 is padded to a vec4 (std140).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniforms {
    pub mvp: [[f32; 4]; 4],
    pub light_pos: [f32; 4],
    pub view_pos: [f32; 4],
    /// ambient, light colour, shininess, specular strength
    pub lighting: [f32; 4],
    pub ka: [f32; 4],
    /// Kd in xyz, dissolve in w.
    pub kd: [f32; 4],
    pub ks: [f32; 4],
}

impl ModelUniforms {
    pub fn new(camera: &FlyCamera, aspect: f32, light: &Lighting, material: &Material) -> Self {
        Self {
            mvp: camera.mvp(aspect).to_cols_array_2d(),
            light_pos: light.position.extend(1.0).to_array(),
            view_pos: camera.position.extend(1.0).to_array(),
            lighting: [light.ambient, light.color, light.shininess, light.specular],
            ka: pad(material.ka, 0.0),
            kd: pad(material.kd, material.d),
            ks: pad(material.ks, 0.0),
        }
    }
}

/// Solar body UBO.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BodyUniforms {
    pub mvp: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub light_pos: [f32; 4],
    /// diffuse override, diffuse limit, blend textures (0/1), unused
    pub params: [f32; 4],
}

impl BodyUniforms {
    pub fn new(view_proj: Mat4, model: Mat4, light: Vec3, diffuse: f32, blend: bool) -> Self {
        Self {
            mvp: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            light_pos: light.extend(1.0).to_array(),
            params: [diffuse, DIFFUSE_LIMIT, if blend { 1.0 } else { 0.0 }, 0.0],
        }
    }
}

fn pad(v: [f32; 3], w: f32) -> [f32; 4] {
    [v[0], v[1], v[2], w]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_blocks_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<ModelUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<BodyUniforms>(), 2 * 64 + 32);
    }

    #[test]
    fn model_uniforms_carry_material() {
        let camera = FlyCamera::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z, Vec3::Y, 10.0);
        let mut material = Material::new("m");
        material.kd = [0.2, 0.4, 0.6];
        material.d = 0.5;
        let u = ModelUniforms::new(&camera, 4.0 / 3.0, &Lighting::default(), &material);
        assert_eq!(u.kd, [0.2, 0.4, 0.6, 0.5]);
        assert_eq!(u.light_pos, [0.0, 200.0, 0.0, 1.0]);
        assert_eq!(u.lighting, [0.3, 0.9, 32.0, 0.5]);
        assert_eq!(u.view_pos[2], 100.0);
    }

    #[test]
    fn body_uniforms_flag_blending() {
        let u = BodyUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO, 0.7, true);
        assert_eq!(u.params, [0.7, DIFFUSE_LIMIT, 1.0, 0.0]);
        let bytes = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 160);
    }
}
