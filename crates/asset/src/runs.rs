//! Material runs: which contiguous face range is drawn with which material.

use std::ops::Range;

/// Start of a face range drawn with `material` (index into the material table).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MaterialRun {
    pub start_face: u32,
    pub material: usize,
}

/// Runs in `usemtl` order. A run ends where the next one starts, the last
/// one at the end of the face list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialRuns {
    runs: Vec<MaterialRun>,
}

impl MaterialRuns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run for every `usemtl`, repeated materials included.
    pub fn push(&mut self, start_face: u32, material: usize) {
        debug_assert!(self.runs.last().is_none_or(|r| r.start_face <= start_face));
        self.runs.push(MaterialRun {
            start_face,
            material,
        });
    }

    /// Insert a leading run at face 0 when faces precede the first `usemtl`.
    pub fn cover_leading_faces(&mut self, face_count: u32, material: impl FnOnce() -> usize) {
        let first = self.runs.first().map_or(face_count, |r| r.start_face);
        if face_count > 0 && first > 0 {
            self.runs.insert(
                0,
                MaterialRun {
                    start_face: 0,
                    material: material(),
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn as_slice(&self) -> &[MaterialRun] {
        &self.runs
    }

    /// Face range and material of every run, given the total face count.
    pub fn ranges(&self, face_count: u32) -> impl Iterator<Item = (Range<u32>, usize)> + '_ {
        self.runs.iter().enumerate().map(move |(i, run)| {
            let end = self
                .runs
                .get(i + 1)
                .map_or(face_count, |next| next.start_face);
            (run.start_face..end.max(run.start_face), run.material)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_partition_faces() {
        let mut runs = MaterialRuns::new();
        runs.push(0, 0);
        runs.push(4, 1);
        runs.push(4, 2);
        runs.push(9, 0);
        let ranges: Vec<_> = runs.ranges(12).collect();
        assert_eq!(ranges, vec![(0..4, 0), (4..4, 1), (4..9, 2), (9..12, 0)]);
        let total: u32 = ranges.iter().map(|(r, _)| r.end - r.start).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn leading_faces_get_a_run() {
        let mut runs = MaterialRuns::new();
        runs.push(3, 0);
        runs.cover_leading_faces(5, || 7);
        assert_eq!(runs.as_slice()[0], MaterialRun { start_face: 0, material: 7 });
        assert_eq!(runs.len(), 2);

        let mut none = MaterialRuns::new();
        none.cover_leading_faces(0, || 0);
        assert!(none.is_empty());
    }

    #[test]
    fn no_leading_run_when_first_starts_at_zero() {
        let mut runs = MaterialRuns::new();
        runs.push(0, 0);
        runs.cover_leading_faces(5, || unreachable!());
        assert_eq!(runs.len(), 1);
    }
}
