//! Line classification shared by the OBJ and MTL readers.
//!
//! A line is classified by its first whitespace-delimited token only, so `v`
//! never shadows `vt`/`vn` the way a raw prefix test would.

use crate::error::{AssetError, AssetResult};

/// Every directive the readers act on. Anything else is skipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Keyword {
    // OBJ geometry
    Position,
    TexCoord,
    Normal,
    Face,
    UseMtl,
    MtlLib,
    // OBJ scene extensions
    LightPos,
    CamPos,
    CamFront,
    CamUp,
    // MTL
    NewMtl,
    MapKd,
    Shininess,
    Ambient,
    Diffuse,
    Specular,
    OpticalDensity,
    Dissolve,
    Illum,
}

impl Keyword {
    pub fn from_token(token: &str) -> Option<Self> {
        let keyword = match token {
            "v" => Keyword::Position,
            "vt" => Keyword::TexCoord,
            "vn" => Keyword::Normal,
            "f" => Keyword::Face,
            "usemtl" => Keyword::UseMtl,
            "mtllib" => Keyword::MtlLib,
            "lightpos" => Keyword::LightPos,
            "campos" => Keyword::CamPos,
            "camfront" => Keyword::CamFront,
            "camup" => Keyword::CamUp,
            "newmtl" => Keyword::NewMtl,
            "map_Kd" => Keyword::MapKd,
            "Ns" => Keyword::Shininess,
            "Ka" => Keyword::Ambient,
            "Kd" => Keyword::Diffuse,
            "Ks" => Keyword::Specular,
            "Ni" => Keyword::OpticalDensity,
            "d" => Keyword::Dissolve,
            "illum" => Keyword::Illum,
            _ => return None,
        };
        Some(keyword)
    }
}

/// One classified line: the keyword plus its remaining tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Record<'a> {
    pub keyword: Keyword,
    pub tokens: Vec<&'a str>,
    pub line: usize,
    file: &'a str,
}

/// Strip the line terminator and any trailing `#` comment.
pub fn strip(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// `true` only for an empty line once CR/LF are gone. Comment and
/// whitespace-only lines are not blank.
pub fn is_blank(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).is_empty()
}

/// Classify a line. Comments, blank lines and unknown directives yield `None`.
/// `line_no` is 1-based and only used for error reporting.
pub fn classify<'a>(file: &'a str, line_no: usize, line: &'a str) -> Option<Record<'a>> {
    let mut parts = strip(line).split_whitespace();
    let keyword = Keyword::from_token(parts.next()?)?;
    Some(Record {
        keyword,
        tokens: parts.collect(),
        line: line_no,
        file,
    })
}

impl<'a> Record<'a> {
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Error for this line.
    pub fn malformed(&self, reason: impl Into<String>) -> AssetError {
        AssetError::malformed(self.file, self.line, reason)
    }

    /// Parse the first `N` tokens as floats. Extra tokens are ignored.
    pub fn floats<const N: usize>(&self) -> AssetResult<[f32; N]> {
        if self.tokens.len() < N {
            return Err(self.malformed(format!(
                "expected {} values, found {}",
                N,
                self.tokens.len()
            )));
        }
        let mut out = [0.0f32; N];
        for (slot, token) in out.iter_mut().zip(&self.tokens) {
            *slot = token
                .parse::<f32>()
                .map_err(|e| self.malformed(format!("invalid number '{token}': {e}")))?;
        }
        Ok(out)
    }

    pub fn float(&self) -> AssetResult<f32> {
        let [value] = self.floats::<1>()?;
        Ok(value)
    }

    /// First token as a name (material or file name).
    pub fn name(&self) -> AssetResult<&'a str> {
        self.tokens
            .first()
            .copied()
            .ok_or_else(|| self.malformed("missing name"))
    }
}
