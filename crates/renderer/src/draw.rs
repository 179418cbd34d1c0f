//! Draw-call planning. No GPU work happens here; a backend replays the
//! list against its own buffers.

use asset::{Material, MaterialRuns, mesh::VERTICES_PER_FACE};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Topology {
    TriangleList,
    TriangleStrip,
}

/// One non-indexed draw over a contiguous vertex range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub first_vertex: u32,
    pub vertex_count: u32,
    /// Material (model) or body (solar) slot.
    pub material: usize,
    pub blend: bool,
    pub topology: Topology,
}

impl DrawCall {
    pub fn strip(vertex_count: usize, material: usize, blend: bool) -> Self {
        Self {
            first_vertex: 0,
            vertex_count: vertex_count as u32,
            material,
            blend,
            topology: Topology::TriangleStrip,
        }
    }

    #[inline]
    pub fn vertices(&self) -> std::ops::Range<u32> {
        self.first_vertex..self.first_vertex + self.vertex_count
    }
}

/// One triangle-list draw per material run; empty runs are dropped.
pub fn plan_model_draws(
    runs: &MaterialRuns,
    face_count: u32,
    materials: &[Material],
) -> Vec<DrawCall> {
    let per_face = VERTICES_PER_FACE as u32;
    runs.ranges(face_count)
        .filter(|(faces, _)| !faces.is_empty())
        .map(|(faces, material)| {
            let call = DrawCall {
                first_vertex: faces.start * per_face,
                vertex_count: (faces.end - faces.start) * per_face,
                material,
                blend: materials.get(material).is_some_and(Material::is_translucent),
                topology: Topology::TriangleList,
            };
            log::debug!(
                "run faces {:?} -> vertices {:?} material {}",
                faces,
                call.vertices(),
                material
            );
            call
        })
        .collect()
}
