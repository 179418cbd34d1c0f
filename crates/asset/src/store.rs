//! Raw attribute and face storage filled while reading an OBJ file.
//!
//! Both stores keep the file's own 1-based indexing; translation to 0-based
//! happens in [`crate::assemble`].

use crate::{
    error::{AssetError, AssetResult, RecordKind},
    line::Record,
};

/// Attribute family of a `v`/`vt`/`vn` line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl AttributeKind {
    /// Floats retained per record.
    pub const fn elements(self) -> usize {
        match self {
            AttributeKind::Position | AttributeKind::Normal => 3,
            AttributeKind::TexCoord => 2,
        }
    }

    const fn slot(self) -> usize {
        match self {
            AttributeKind::Position => 0,
            AttributeKind::TexCoord => 1,
            AttributeKind::Normal => 2,
        }
    }

    fn record_kind(self) -> RecordKind {
        match self {
            AttributeKind::Position => RecordKind::Position,
            AttributeKind::TexCoord => RecordKind::TexCoord,
            AttributeKind::Normal => RecordKind::Normal,
        }
    }
}

/// Growable flat float arrays for positions, texcoords and normals.
#[derive(Clone, Debug, Default)]
pub struct AttributeStore {
    values: [Vec<f32>; 3],
    /// Token count of the first line of each kind; later lines must match.
    arity: [Option<usize>; 3],
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record's worth of floats. `values` holds exactly
    /// `kind.elements()` entries.
    pub fn append(&mut self, kind: AttributeKind, values: &[f32]) {
        debug_assert_eq!(values.len(), kind.elements());
        self.values[kind.slot()].extend_from_slice(values);
    }

    /// Parse a classified `v`/`vt`/`vn` line and append it.
    pub fn append_record(&mut self, kind: AttributeKind, rec: &Record<'_>) -> AssetResult<()> {
        let found = rec.tokens.len();
        match self.arity[kind.slot()] {
            None => self.arity[kind.slot()] = Some(found),
            Some(expected) if expected != found => {
                return Err(AssetError::InconsistentStride {
                    file: rec.file().to_owned(),
                    line: rec.line,
                    kind: kind.record_kind(),
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        match kind {
            AttributeKind::TexCoord => self.append(kind, &rec.floats::<2>()?),
            AttributeKind::Position | AttributeKind::Normal => {
                self.append(kind, &rec.floats::<3>()?)
            }
        }
        Ok(())
    }

    /// Number of complete records of `kind`.
    pub fn count(&self, kind: AttributeKind) -> usize {
        self.values(kind).len() / kind.elements()
    }

    pub fn values(&self, kind: AttributeKind) -> &[f32] {
        &self.values[kind.slot()]
    }

    /// Record at a 0-based index.
    pub fn record(&self, kind: AttributeKind, index: usize) -> Option<&[f32]> {
        let n = kind.elements();
        self.values(kind).get(index * n..index * n + n)
    }

    pub fn has_normals(&self) -> bool {
        self.count(AttributeKind::Normal) > 0
    }
}

/// Corner form shared by every face in one file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaceLayout {
    /// `v/vt` corners, 6 indices per triangle.
    PositionTexCoord,
    /// `v/vt/vn` corners, 9 indices per triangle.
    PositionTexCoordNormal,
}

impl FaceLayout {
    pub const fn corner_width(self) -> usize {
        match self {
            FaceLayout::PositionTexCoord => 2,
            FaceLayout::PositionTexCoordNormal => 3,
        }
    }

    /// Raw indices per triangle.
    pub const fn stride(self) -> usize {
        self.corner_width() * 3
    }

    pub const fn has_normals(self) -> bool {
        matches!(self, FaceLayout::PositionTexCoordNormal)
    }
}

/// Flat sequence of raw 1-based face indices, one triangle per `stride` ints.
#[derive(Clone, Debug, Default)]
pub struct FaceList {
    raw: Vec<u32>,
    layout: Option<FaceLayout>,
}

impl FaceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout established by the first face, if any face was seen.
    pub fn layout(&self) -> Option<FaceLayout> {
        self.layout
    }

    /// Triangle count.
    pub fn len(&self) -> usize {
        self.layout.map_or(0, |layout| self.raw.len() / layout.stride())
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw indices of triangle `i`.
    pub fn face(&self, i: usize) -> Option<&[u32]> {
        let stride = self.layout?.stride();
        self.raw.get(i * stride..i * stride + stride)
    }

    /// Append one triangle given as flat corner groups; `indices.len()` must
    /// equal the layout's stride.
    pub fn append_face(&mut self, layout: FaceLayout, indices: &[u32]) {
        debug_assert_eq!(indices.len(), layout.stride());
        self.layout.get_or_insert(layout);
        self.raw.extend_from_slice(indices);
    }

    /// Parse an `f` line. Polygons are fan-triangulated; returns the number
    /// of triangles appended.
    pub fn append_record(&mut self, rec: &Record<'_>) -> AssetResult<usize> {
        if rec.tokens.len() < 3 {
            return Err(rec.malformed(format!(
                "face needs at least 3 corners, found {}",
                rec.tokens.len()
            )));
        }

        let mut corners: Vec<[u32; 3]> = Vec::with_capacity(rec.tokens.len());
        let mut line_layout: Option<FaceLayout> = None;
        for token in &rec.tokens {
            let (layout, corner) = parse_corner(rec, token)?;
            match line_layout {
                None => line_layout = Some(layout),
                Some(seen) if seen != layout => {
                    return Err(rec.malformed(format!(
                        "corner '{token}' mixes index forms within one face"
                    )));
                }
                Some(_) => {}
            }
            corners.push(corner);
        }
        let Some(layout) = line_layout else {
            return Err(rec.malformed("empty face"));
        };

        match self.layout {
            Some(expected) if expected != layout => {
                return Err(AssetError::InconsistentStride {
                    file: rec.file().to_owned(),
                    line: rec.line,
                    kind: RecordKind::Face,
                    expected: expected.stride(),
                    found: layout.stride(),
                });
            }
            _ => {}
        }

        let width = layout.corner_width();
        let mut tri = [0u32; 9];
        for k in 1..corners.len() - 1 {
            for (slot, corner) in [corners[0], corners[k], corners[k + 1]].iter().enumerate() {
                tri[slot * width..slot * width + width].copy_from_slice(&corner[..width]);
            }
            self.append_face(layout, &tri[..layout.stride()]);
        }
        Ok(corners.len() - 2)
    }
}

/// `a/b` or `a/b/c`; the third slot is 0 when absent.
fn parse_corner(rec: &Record<'_>, token: &str) -> AssetResult<(FaceLayout, [u32; 3])> {
    let parts: Vec<&str> = token.split('/').collect();
    let layout = match parts.len() {
        2 => FaceLayout::PositionTexCoord,
        3 => FaceLayout::PositionTexCoordNormal,
        _ => {
            return Err(rec.malformed(format!(
                "face corner '{token}' must be v/vt or v/vt/vn"
            )));
        }
    };

    let mut corner = [0u32; 3];
    for (slot, part) in corner.iter_mut().zip(&parts) {
        let raw = part
            .parse::<i64>()
            .map_err(|_| rec.malformed(format!("invalid index '{part}' in corner '{token}'")))?;
        if raw <= 0 {
            return Err(rec.malformed(format!(
                "indices are 1-based and positive; found {raw} in corner '{token}'"
            )));
        }
        *slot = u32::try_from(raw)
            .map_err(|_| rec.malformed(format!("index {raw} is too large")))?;
    }
    Ok((layout, corner))
}
