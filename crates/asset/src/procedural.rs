//! Procedural triangle-strip geometry for celestial bodies.

use std::f32::consts::{PI, TAU};

use crate::mesh::ProceduralMesh;

/// UV sphere as one long triangle strip.
///
/// `alpha` and `beta` both sweep `steps = ceil(2 * gradation)` samples of
/// `PI / gradation`. Each sample emits the vertex on the current ring and
/// the one on the next ring, so the count is `2 * steps * steps`. Since
/// `alpha` runs past `PI` the surface is covered twice, closing the seam
/// left by the half-open `beta` sweep.
pub fn generate_sphere(radius: f32, gradation: f32) -> ProceduralMesh {
    if !(radius > 0.0 && gradation > 0.0 && gradation.is_finite()) {
        log::warn!("Sphere needs positive radius and gradation, got {radius}/{gradation}");
        return ProceduralMesh::default();
    }

    let step = PI / gradation;
    let steps = (2.0 * gradation).ceil() as usize;
    let mut vertices = Vec::with_capacity(steps * steps * 2 * 3);
    let mut texcoords = Vec::with_capacity(steps * steps * 2 * 2);

    for i in 0..steps {
        let alpha = i as f32 * step;
        let next = alpha + step;
        for j in 0..steps {
            let beta = j as f32 * step;
            let (sin_b, cos_b) = beta.sin_cos();

            vertices.extend_from_slice(&[
                radius * cos_b * alpha.sin(),
                radius * sin_b * alpha.sin(),
                radius * alpha.cos(),
            ]);
            vertices.extend_from_slice(&[
                radius * cos_b * next.sin(),
                radius * sin_b * next.sin(),
                radius * next.cos(),
            ]);

            let u = beta / TAU;
            texcoords.extend_from_slice(&[u, alpha / PI, u, alpha / PI + 1.0 / gradation]);
        }
    }

    let vertex_count = vertices.len() / 3;
    ProceduralMesh {
        vertices,
        texcoords,
        vertex_count,
    }
}

/// Flat annulus in the XY plane as a triangle strip.
///
/// For every `segment` in `0..=segments` an inner and an outer vertex are
/// emitted at `theta = 2PI - 2PI * segment / segments`, giving
/// `(segments + 1) * 2` vertices. Texture coordinates are the fixed corners
/// `(0,0)` inner and `(1,1)` outer.
pub fn generate_rings(inner_radius: f32, outer_radius: f32, segments: u32) -> ProceduralMesh {
    if segments == 0 {
        log::warn!("Rings need at least one segment");
        return ProceduralMesh::default();
    }

    let pairs = segments as usize + 1;
    let mut vertices = Vec::with_capacity(pairs * 2 * 3);
    let mut texcoords = Vec::with_capacity(pairs * 2 * 2);

    for segment in 0..=segments {
        let theta = TAU - TAU * segment as f32 / segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();

        vertices.extend_from_slice(&[inner_radius * cos_t, inner_radius * sin_t, 0.0]);
        vertices.extend_from_slice(&[outer_radius * cos_t, outer_radius * sin_t, 0.0]);
        texcoords.extend_from_slice(&[0.0, 0.0, 1.0, 1.0]);
    }

    let vertex_count = vertices.len() / 3;
    ProceduralMesh {
        vertices,
        texcoords,
        vertex_count,
    }
}
