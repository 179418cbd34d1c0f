//! OBJ model viewer scene.

use std::path::Path;

use anyhow::{Context, Result};
use asset::{Model, SceneHints};
use corelib::{
    Vec3,
    camera::{CameraCommand, FlyCamera},
    vec3,
};
use renderer::{Lighting, ModelBuffers, ModelUniforms};

const DEFAULT_CAM_DIST: f32 = 100.0;
const MOVE_STEP: f32 = 10.0;
/// Degrees per frame about the camera's up axis.
const AUTO_ROTATE: f32 = -0.5;

fn apply_hints(hints: &SceneHints, camera: &mut FlyCamera, light: &mut Lighting) {
    if let Some(p) = hints.light_pos {
        light.position = Vec3::from(p);
    }
    if let Some(p) = hints.cam_pos {
        camera.position = Vec3::from(p);
    }
    if let Some(f) = hints.cam_front {
        camera.front = Vec3::from(f);
    }
    if let Some(u) = hints.cam_up {
        camera.up = Vec3::from(u);
    }
    camera.update_basis();
}

fn setup_camera(model: &Model, cam_dist: Option<f32>) -> (FlyCamera, Lighting) {
    let mut camera =
        FlyCamera::new(vec3(0.0, 0.0, DEFAULT_CAM_DIST), Vec3::NEG_Z, Vec3::Y, MOVE_STEP);
    let mut light = Lighting::default();
    apply_hints(&model.scene, &mut camera, &mut light);
    if let Some(z) = cam_dist {
        camera.position.z = z;
        camera.update_basis();
    }
    (camera, light)
}

pub fn run(
    path: &Path,
    cam_dist: Option<f32>,
    moves: &[CameraCommand],
    frames: u32,
    aspect: f32,
) -> Result<()> {
    let model = asset::load_model(path)
        .with_context(|| format!("failed to load model {}", path.display()))?;
    let buffers = ModelBuffers::new(&model);

    let uploads: Vec<_> = model
        .textures
        .iter()
        .map(|t| t.as_ref().map(|t| t.to_rgba8()))
        .collect();
    for (material, texture) in model.materials.iter().zip(&uploads) {
        if let Some(t) = texture {
            log::info!("Texture for '{}': {}x{} RGBA", material.name, t.width, t.height);
        }
    }

    let (mut camera, light) = setup_camera(&model, cam_dist);
    for &command in moves {
        camera.apply(command);
    }

    for frame in 0..frames {
        camera.auto_rotate(AUTO_ROTATE);
        let mut blended = 0;
        for draw in &buffers.draws {
            let Some(material) = model.materials.get(draw.material) else {
                continue;
            };
            let _uniforms = ModelUniforms::new(&camera, aspect, &light, material);
            blended += usize::from(draw.blend);
        }
        log::info!(
            "frame {}: {} draws ({} blended), rotation {:.1}",
            frame,
            buffers.draws.len(),
            blended,
            camera.rotation_up
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset::{AssembledMesh, MaterialRuns};

    fn model(scene: SceneHints) -> Model {
        Model {
            mesh: AssembledMesh::default(),
            materials: Vec::new(),
            runs: MaterialRuns::new(),
            textures: Vec::new(),
            scene,
        }
    }

    #[test]
    fn defaults_without_hints() {
        let (camera, light) = setup_camera(&model(SceneHints::default()), None);
        assert_eq!(camera.position, vec3(0.0, 0.0, 100.0));
        assert_eq!(light.position, vec3(0.0, 200.0, 0.0));
    }

    #[test]
    fn cam_dist_applies_after_hints() {
        let hints = SceneHints {
            light_pos: Some([1.0, 2.0, 3.0]),
            cam_pos: Some([5.0, 0.0, 40.0]),
            ..SceneHints::default()
        };
        let (camera, light) = setup_camera(&model(hints), Some(250.0));
        assert_eq!(camera.position, vec3(5.0, 0.0, 250.0));
        assert_eq!(light.position, vec3(1.0, 2.0, 3.0));
    }
}
