use asset::{AssembledMesh, ProceduralMesh};
use bytemuck::{Pod, Zeroable};

/// Loaded-model vertex: position + uv + normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ModelVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}
impl ModelVertex {
    pub const STRIDE: u64 = std::mem::size_of::<ModelVertex>() as u64;
}

/// Procedural strip vertex: position + uv.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct StripVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}
impl StripVertex {
    pub const STRIDE: u64 = std::mem::size_of::<StripVertex>() as u64;
}

/// Zip the flat arrays into one vertex per (face, corner).
/// Meshes without normals get a zero normal.
pub fn interleave_model(mesh: &AssembledMesh) -> Vec<ModelVertex> {
    let normals = mesh.has_normals();
    mesh.vertices
        .chunks_exact(3)
        .zip(mesh.texcoords.chunks_exact(2))
        .enumerate()
        .map(|(i, (p, t))| ModelVertex {
            pos: [p[0], p[1], p[2]],
            uv: [t[0], t[1]],
            normal: if normals {
                mesh.normals
                    .get(i * 3..i * 3 + 3)
                    .map_or([0.0; 3], |n| [n[0], n[1], n[2]])
            } else {
                [0.0; 3]
            },
        })
        .collect()
}

pub fn interleave_strip(mesh: &ProceduralMesh) -> Vec<StripVertex> {
    (0..mesh.vertex_count)
        .filter_map(|i| {
            Some(StripVertex {
                pos: mesh.position(i)?,
                uv: mesh.texcoord(i)?,
            })
        })
        .collect()
}
