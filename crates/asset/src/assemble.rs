//! Flatten raw faces into per-corner arrays ready for a non-indexed draw.

use crate::{
    error::{AssetError, AssetResult, RecordKind},
    mesh::{AssembledMesh, POSITION_ELEMENTS, TEXCOORD_ELEMENTS, VERTICES_PER_FACE},
    store::{AttributeKind, AttributeStore, FaceList},
};

/// Resolve every face corner against the attribute store.
///
/// Output is written face by face, corners in file winding order, so face
/// `i` occupies vertices `3*i..3*i+3`. Normals are emitted only when the
/// face layout carries them.
pub fn assemble(faces: &FaceList, attrs: &AttributeStore) -> AssetResult<AssembledMesh> {
    let Some(layout) = faces.layout() else {
        return Ok(AssembledMesh::default());
    };

    let face_count = faces.len();
    let corners = face_count * VERTICES_PER_FACE;
    let mut vertices = Vec::with_capacity(corners * POSITION_ELEMENTS);
    let mut texcoords = Vec::with_capacity(corners * TEXCOORD_ELEMENTS);
    let mut normals = if layout.has_normals() {
        Vec::with_capacity(corners * POSITION_ELEMENTS)
    } else {
        Vec::new()
    };

    let width = layout.corner_width();
    for (face, raw) in (0..face_count).map_while(|i| faces.face(i)).enumerate() {
        for corner in raw.chunks_exact(width) {
            vertices.extend_from_slice(lookup(attrs, AttributeKind::Position, corner[0], face)?);
            texcoords.extend_from_slice(lookup(attrs, AttributeKind::TexCoord, corner[1], face)?);
            if layout.has_normals() {
                normals.extend_from_slice(lookup(attrs, AttributeKind::Normal, corner[2], face)?);
            }
        }
    }

    log::debug!(
        "Assembled {} faces ({} vertices, normals: {})",
        face_count,
        corners,
        layout.has_normals()
    );

    Ok(AssembledMesh {
        vertices,
        texcoords,
        normals,
        face_count,
    })
}

/// 1-based lookup.
fn lookup(
    attrs: &AttributeStore,
    kind: AttributeKind,
    index: u32,
    face: usize,
) -> AssetResult<&[f32]> {
    index
        .checked_sub(1)
        .and_then(|i| attrs.record(kind, i as usize))
        .ok_or_else(|| AssetError::IndexOutOfRange {
            kind: match kind {
                AttributeKind::Position => RecordKind::Position,
                AttributeKind::TexCoord => RecordKind::TexCoord,
                AttributeKind::Normal => RecordKind::Normal,
            },
            index,
            len: attrs.count(kind),
            face,
        })
}
