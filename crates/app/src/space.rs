//! Solar-system scene.

use std::path::Path;

use anyhow::{Result, ensure};
use asset::TextureData;
use corelib::{
    Vec3,
    camera::{CameraCommand, FlyCamera},
    solar::{BodyState, solar_system},
    vec3,
};
use renderer::{BodyMeshes, plan_body_frame, prepare_body};

const MOVE_STEP: f32 = 20.0;
const PLACEHOLDER_SIZE: u32 = 64;

/// Load a BMP, falling back to a checkerboard so one missing file does not
/// take the whole scene down.
fn texture_or_placeholder(root: &Path, file: &str) -> TextureData {
    let path = root.join(file);
    match TextureData::load_bmp(&path) {
        Ok(t) => t,
        Err(err) => {
            log::warn!("{}; using placeholder", err);
            TextureData::checkerboard(PLACEHOLDER_SIZE)
        }
    }
}

struct Body {
    state: BodyState,
    meshes: BodyMeshes,
    textures: Vec<TextureData>,
}

pub fn run(texture_root: &Path, moves: &[CameraCommand], frames: u32, aspect: f32) -> Result<()> {
    let mut bodies: Vec<Body> = solar_system()
        .into_iter()
        .map(|spec| {
            log::info!("Creating {}", spec.name);
            let mut textures = vec![texture_or_placeholder(texture_root, spec.texture)];
            if let Some(rings) = &spec.rings {
                textures.push(texture_or_placeholder(texture_root, rings.color_texture));
                textures.push(texture_or_placeholder(texture_root, rings.mask_texture));
            }
            Body {
                meshes: prepare_body(&spec),
                state: BodyState::new(spec),
                textures,
            }
        })
        .collect();
    ensure!(
        bodies.iter().all(|b| !b.meshes.sphere.is_empty()),
        "body mesh generation produced no vertices"
    );
    let texels: usize = bodies
        .iter()
        .flat_map(|b| &b.textures)
        .map(|t| t.to_rgba8().data.len())
        .sum();
    log::info!("{} bodies, {} KiB of texture data", bodies.len(), texels / 1024);

    let mut camera = FlyCamera::new(vec3(-840.0, 0.0, 3620.0), Vec3::NEG_Z, Vec3::Y, MOVE_STEP)
        .with_rotation(50.0, -19.0);
    for &command in moves {
        camera.apply(command);
    }

    for frame in 0..frames {
        let mut draws = 0;
        let mut vertices = 0;
        for (slot, body) in bodies.iter_mut().enumerate() {
            body.state.tick();
            let planned =
                plan_body_frame(slot, &body.state, &body.meshes, &camera, aspect, Vec3::ZERO);
            draws += planned.draws.len();
            vertices += planned.draws.iter().map(|d| d.vertex_count as usize).sum::<usize>();
        }
        log::info!("frame {}: {} draws, {} vertices", frame, draws, vertices);
        if let Some(earth) = bodies.iter().find(|b| b.state.spec.name == "Earth") {
            log::debug!("Earth at {:?}", earth.state.position());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_texture_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let t = texture_or_placeholder(dir.path(), "planet_Nowhere.bmp");
        assert_eq!((t.width, t.height), (PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
        assert!(t.is_valid());
    }

    #[test]
    fn runs_without_textures_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), &[CameraCommand::Forward], 2, 4.0 / 3.0).unwrap();
    }
}
