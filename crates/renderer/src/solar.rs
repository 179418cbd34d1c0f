//! Solar scene: per-body strip meshes and per-frame draw lists.

use asset::{ProceduralMesh, generate_rings, generate_sphere};
use corelib::{
    Mat4, Vec3,
    camera::FlyCamera,
    solar::{BodySpec, BodyState},
};

use crate::{
    draw::DrawCall,
    uniforms::BodyUniforms,
    vertex::{StripVertex, interleave_strip},
};

/// GPU-ready geometry of one body.
#[derive(Clone, Debug, Default)]
pub struct BodyMeshes {
    pub sphere: Vec<StripVertex>,
    pub rings: Option<Vec<StripVertex>>,
}

fn tilted(mut mesh: ProceduralMesh, rotation: Mat4) -> Vec<StripVertex> {
    mesh.transform_positions(|p| rotation.transform_point3(Vec3::from(p)).to_array());
    interleave_strip(&mesh)
}

/// Generate sphere and rings and bake in the initial tilt.
pub fn prepare_body(spec: &BodySpec) -> BodyMeshes {
    let rotation = spec.init_rotation();
    let sphere = tilted(generate_sphere(spec.radius, spec.gradation), rotation);
    let rings = spec.rings.as_ref().map(|r| {
        tilted(
            generate_rings(r.inner_radius(spec.radius), r.outer_radius, r.segments),
            rotation,
        )
    });
    let ring_verts = rings.as_ref().map_or(0, Vec::len);
    log::debug!(
        "{}: sphere {} verts, rings {} verts, {} bytes",
        spec.name,
        sphere.len(),
        ring_verts,
        (sphere.len() + ring_verts) as u64 * StripVertex::STRIDE
    );
    BodyMeshes { sphere, rings }
}

/// One body's uniforms and draws for the current frame.
#[derive(Clone, Debug)]
pub struct BodyFrame {
    pub uniforms: BodyUniforms,
    pub ring_uniforms: Option<BodyUniforms>,
    pub draws: Vec<DrawCall>,
}

pub fn plan_body_frame(
    slot: usize,
    body: &BodyState,
    meshes: &BodyMeshes,
    camera: &FlyCamera,
    aspect: f32,
    light: Vec3,
) -> BodyFrame {
    let view_proj = camera.mvp(aspect);
    let model = body.model_matrix();
    let diffuse = body.spec.diffuse;

    let mut draws = vec![DrawCall::strip(meshes.sphere.len(), slot, false)];
    let ring_uniforms = meshes.rings.as_ref().map(|rings| {
        draws.push(DrawCall::strip(rings.len(), slot, true));
        BodyUniforms::new(view_proj, model, light, diffuse, true)
    });

    BodyFrame {
        uniforms: BodyUniforms::new(view_proj, model, light, diffuse, false),
        ring_uniforms,
        draws,
    }
}
