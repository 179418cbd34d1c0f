//! CPU-side mesh representations handed to the renderer.

/// Floats per position/normal.
pub const POSITION_ELEMENTS: usize = 3;
/// Floats per texture coordinate.
pub const TEXCOORD_ELEMENTS: usize = 2;
/// Corners per triangle.
pub const VERTICES_PER_FACE: usize = 3;

/// Non-indexed triangle list: one entry per (face, corner) in face order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssembledMesh {
    pub vertices: Vec<f32>,
    pub texcoords: Vec<f32>,
    /// Empty when the source file carries no normals.
    pub normals: Vec<f32>,
    pub face_count: usize,
}

impl AssembledMesh {
    pub fn vertex_count(&self) -> usize {
        self.face_count * VERTICES_PER_FACE
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Returns `true` if every array matches the face count.
    pub fn is_valid(&self) -> bool {
        let n = self.vertex_count();
        self.vertices.len() == n * POSITION_ELEMENTS
            && self.texcoords.len() == n * TEXCOORD_ELEMENTS
            && (self.normals.is_empty() || self.normals.len() == n * POSITION_ELEMENTS)
    }
}

/// Generated triangle-strip geometry (spheres, rings).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProceduralMesh {
    pub vertices: Vec<f32>,
    pub texcoords: Vec<f32>,
    pub vertex_count: usize,
}

impl ProceduralMesh {
    pub fn position(&self, i: usize) -> Option<[f32; 3]> {
        let s = self.vertices.get(i * 3..i * 3 + 3)?;
        Some([s[0], s[1], s[2]])
    }

    pub fn texcoord(&self, i: usize) -> Option<[f32; 2]> {
        let s = self.texcoords.get(i * 2..i * 2 + 2)?;
        Some([s[0], s[1]])
    }

    /// Apply `f` to every position in place.
    pub fn transform_positions(&mut self, mut f: impl FnMut([f32; 3]) -> [f32; 3]) {
        for chunk in self.vertices.chunks_exact_mut(3) {
            let out = f([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&out);
        }
    }
}
