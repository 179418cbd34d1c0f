//! Renderer: CPU side of GPU upload. Vertex/uniform layouts, draw planning
//! and solar-scene mesh preparation.

pub mod draw;
pub mod solar;
pub mod uniforms;
pub mod vertex;

use asset::Model;

pub use draw::{DrawCall, Topology, plan_model_draws};
pub use solar::{BodyFrame, BodyMeshes, plan_body_frame, prepare_body};
pub use uniforms::{BodyUniforms, Lighting, ModelUniforms};
pub use vertex::{ModelVertex, StripVertex, interleave_model, interleave_strip};

/// Vertex buffer and draw list of a loaded model.
#[derive(Clone, Debug)]
pub struct ModelBuffers {
    pub vertices: Vec<ModelVertex>,
    pub draws: Vec<DrawCall>,
}

impl ModelBuffers {
    pub fn new(model: &Model) -> Self {
        let vertices = interleave_model(&model.mesh);
        let draws = plan_model_draws(&model.runs, model.face_count() as u32, &model.materials);
        let buffers = Self { vertices, draws };
        log::info!(
            "Model buffers: {} vertices ({} bytes, stride {}), {} draws",
            buffers.vertices.len(),
            buffers.bytes().len(),
            ModelVertex::STRIDE,
            buffers.draws.len()
        );
        buffers
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset::{AssembledMesh, Material, MaterialRuns, SceneHints};

    #[test]
    fn draws_cover_the_vertex_buffer() {
        let mut runs = MaterialRuns::new();
        runs.push(0, 0);
        runs.push(1, 1);
        let model = Model {
            mesh: AssembledMesh {
                vertices: vec![0.0; 18],
                texcoords: vec![0.0; 12],
                normals: Vec::new(),
                face_count: 2,
            },
            materials: vec![Material::new("a"), Material::new("b")],
            runs,
            textures: vec![None, None],
            scene: SceneHints::default(),
        };
        let buffers = ModelBuffers::new(&model);
        assert_eq!(buffers.vertices.len(), 6);
        assert_eq!(buffers.bytes().len(), 6 * 32);
        let covered: u32 = buffers.draws.iter().map(|d| d.vertex_count).sum();
        assert_eq!(covered as usize, buffers.vertices.len());
        assert_eq!(buffers.draws[1].first_vertex, 3);
    }
}
