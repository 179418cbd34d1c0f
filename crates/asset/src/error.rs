//! Load errors shared by every parser in this crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Which record family a stride belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Position,
    TexCoord,
    Normal,
    Face,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Position => "position",
            RecordKind::TexCoord => "texcoord",
            RecordKind::Normal => "normal",
            RecordKind::Face => "face",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {file} on line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: usize,
        reason: String,
    },

    #[error(
        "Inconsistent {kind} stride in {file} on line {line}: expected {expected} fields, found {found}"
    )]
    InconsistentStride {
        file: String,
        line: usize,
        kind: RecordKind,
        expected: usize,
        found: usize,
    },

    #[error("{kind} index {index} out of range (len={len}) in face {face}")]
    IndexOutOfRange {
        kind: RecordKind,
        index: u32,
        len: usize,
        face: usize,
    },

    #[error("Failed to decode texture {}: {reason}", path.display())]
    TextureDecode { path: PathBuf, reason: String },
}

/// Fieldless view of [`AssetError`] for callers that only need the category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    FileNotFound,
    Io,
    MalformedRecord,
    InconsistentStride,
    TextureDecode,
}

impl AssetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssetError::FileNotFound { .. } => ErrorKind::FileNotFound,
            AssetError::Io { .. } => ErrorKind::Io,
            AssetError::MalformedRecord { .. } | AssetError::IndexOutOfRange { .. } => {
                ErrorKind::MalformedRecord
            }
            AssetError::InconsistentStride { .. } => ErrorKind::InconsistentStride,
            AssetError::TextureDecode { .. } => ErrorKind::TextureDecode,
        }
    }

    pub(crate) fn malformed(file: &str, line: usize, reason: impl Into<String>) -> Self {
        AssetError::MalformedRecord {
            file: file.to_owned(),
            line,
            reason: reason.into(),
        }
    }
}

pub type AssetResult<T> = Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = AssetError::malformed("cube.obj", 3, "missing z coordinate");
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert_eq!(
            err.to_string(),
            "Malformed record in cube.obj on line 3: missing z coordinate"
        );
    }
}
