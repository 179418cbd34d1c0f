//! Material table and MTL reader.

use std::{
    collections::HashMap,
    io::BufRead,
    path::{Path, PathBuf},
};

use crate::{
    error::{AssetError, AssetResult},
    line::{self, Keyword},
};

/// Shading parameters of one named material.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Resolved texture path from `map_Kd`.
    pub texture: Option<PathBuf>,
    pub ns: f32,
    pub ka: [f32; 3],
    pub kd: [f32; 3],
    pub ks: [f32; 3],
    pub ni: f32,
    pub d: f32,
    pub illum: f32,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        let mut material = Self {
            name: name.into(),
            texture: None,
            ns: 0.0,
            ka: [0.0; 3],
            kd: [0.0; 3],
            ks: [0.0; 3],
            ni: 0.0,
            d: 0.0,
            illum: 0.0,
        };
        material.reset();
        material
    }

    /// Restore shading defaults. The texture binding is left alone.
    pub fn reset(&mut self) {
        self.ns = 100.0;
        self.ka = [0.0, 0.0, 0.0];
        self.kd = [1.0, 1.0, 1.0];
        self.ks = [0.01, 0.01, 0.01];
        self.ni = 1.0;
        self.d = 1.0;
        self.illum = 1.0;
    }

    /// Partially transparent materials need blending.
    pub fn is_translucent(&self) -> bool {
        self.d != 1.0
    }
}

/// A single recognised MTL key and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialProperty {
    Shininess(f32),
    Ambient([f32; 3]),
    Diffuse([f32; 3]),
    Specular([f32; 3]),
    OpticalDensity(f32),
    Dissolve(f32),
    Illum(f32),
}

/// Named materials in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
    by_name: HashMap<String, usize>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `name`, declaring it with defaults if unseen.
    pub fn declare(&mut self, name: &str) -> usize {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }
        let index = self.materials.len();
        self.materials.push(Material::new(name));
        self.by_name.insert(name.to_owned(), index);
        index
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn set_property(&mut self, index: usize, property: MaterialProperty) {
        let Some(m) = self.materials.get_mut(index) else {
            return;
        };
        match property {
            MaterialProperty::Shininess(v) => m.ns = v,
            MaterialProperty::Ambient(v) => m.ka = v,
            MaterialProperty::Diffuse(v) => m.kd = v,
            MaterialProperty::Specular(v) => m.ks = v,
            MaterialProperty::OpticalDensity(v) => m.ni = v,
            MaterialProperty::Dissolve(v) => m.d = v,
            MaterialProperty::Illum(v) => m.illum = v,
        }
    }

    /// Bind a texture, resolved against `base_dir`.
    pub fn bind_texture(&mut self, index: usize, base_dir: &Path, relative: &str) {
        if let Some(m) = self.materials.get_mut(index) {
            m.texture = Some(base_dir.join(relative));
        }
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn into_vec(self) -> Vec<Material> {
        self.materials
    }
}

/// Apply an MTL file to the materials already declared in `table`.
///
/// Each `newmtl` block for a declared name resets that material to defaults
/// and overrides the keys it lists; the block ends at the first blank line.
/// Blocks for names the object never uses are skipped. Returns the indices
/// of the materials a block was applied to.
pub fn parse_mtl<R: BufRead>(
    reader: R,
    file: &str,
    base_dir: &Path,
    table: &mut MaterialTable,
) -> AssetResult<Vec<usize>> {
    let mut current: Option<usize> = None;
    let mut defined = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| AssetError::Io {
            path: PathBuf::from(file),
            source,
        })?;

        if line::is_blank(&line) {
            current = None;
            continue;
        }
        let Some(rec) = line::classify(file, line_no, &line) else {
            continue;
        };

        if rec.keyword == Keyword::NewMtl {
            let name = rec.name()?;
            current = table.find(name);
            match current {
                Some(index) => {
                    if let Some(m) = table.materials.get_mut(index) {
                        m.reset();
                    }
                    defined.push(index);
                }
                None => log::warn!("{file}:{line_no}: material '{name}' is never used, skipping"),
            }
            continue;
        }

        let Some(index) = current else {
            continue;
        };
        let property = match rec.keyword {
            Keyword::Shininess => MaterialProperty::Shininess(rec.float()?),
            Keyword::Ambient => MaterialProperty::Ambient(rec.floats::<3>()?),
            Keyword::Diffuse => MaterialProperty::Diffuse(rec.floats::<3>()?),
            Keyword::Specular => MaterialProperty::Specular(rec.floats::<3>()?),
            Keyword::OpticalDensity => MaterialProperty::OpticalDensity(rec.float()?),
            Keyword::Dissolve => MaterialProperty::Dissolve(rec.float()?),
            Keyword::Illum => MaterialProperty::Illum(rec.float()?),
            Keyword::MapKd => {
                table.bind_texture(index, base_dir, rec.name()?);
                continue;
            }
            _ => continue,
        };
        table.set_property(index, property);
    }

    Ok(defined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn declare_keeps_first_seen_order() {
        let mut table = MaterialTable::new();
        assert_eq!(table.declare("stone"), 0);
        assert_eq!(table.declare("wood"), 1);
        assert_eq!(table.declare("stone"), 0);
        assert_eq!(table.len(), 2);
        let names: Vec<_> = table.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["stone", "wood"]);
    }

    #[test]
    fn defaults_before_any_property() {
        let mut table = MaterialTable::new();
        let i = table.declare("plain");
        let m = table.get(i).unwrap();
        assert_eq!(m.kd, [1.0, 1.0, 1.0]);
        assert_eq!(m.d, 1.0);
        assert_eq!(m.ns, 100.0);
        assert_eq!(m.ks, [0.01, 0.01, 0.01]);
        assert!(m.texture.is_none());
        assert!(!m.is_translucent());
    }

    #[test]
    fn set_property_overrides_one_field() {
        let mut table = MaterialTable::new();
        let i = table.declare("glass");
        table.set_property(i, MaterialProperty::Dissolve(0.5));
        let m = table.get(i).unwrap();
        assert_eq!(m.d, 0.5);
        assert_eq!(m.kd, [1.0, 1.0, 1.0]);
        assert!(m.is_translucent());
    }

    #[test]
    fn block_ends_at_blank_line() {
        let src = "newmtl body\r\nKd 0.5 0.25 0.125\r\nmap_Kd body.bmp\r\n\r\nd 0.3\r\nnewmtl unused\nKd 0 0 0\n";
        let mut table = MaterialTable::new();
        let i = table.declare("body");
        let defined =
            parse_mtl(Cursor::new(src), "t.mtl", Path::new("models"), &mut table).unwrap();
        assert_eq!(defined, vec![i]);

        let m = table.get(i).unwrap();
        assert_eq!(m.kd, [0.5, 0.25, 0.125]);
        assert_eq!(m.d, 1.0, "d after the blank line belongs to no block");
        assert_eq!(m.texture.as_deref(), Some(Path::new("models/body.bmp")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn comment_line_keeps_block_open() {
        let src = "newmtl body\nKd 0.5 0.5 0.5\n# diffuse texture follows\nmap_Kd body.bmp\nd 0.3\n\n";
        let mut table = MaterialTable::new();
        let i = table.declare("body");
        parse_mtl(Cursor::new(src), "t.mtl", Path::new("m"), &mut table).unwrap();
        let m = table.get(i).unwrap();
        assert_eq!(m.texture.as_deref(), Some(Path::new("m/body.bmp")));
        assert_eq!(m.d, 0.3);
    }

    #[test]
    fn whitespace_line_keeps_block_open() {
        let src = "newmtl body\r\nKd .5 .5 .5\r\n   \r\nmap_Kd body.bmp\r\n\r\n";
        let mut table = MaterialTable::new();
        let i = table.declare("body");
        parse_mtl(Cursor::new(src), "t.mtl", Path::new("m"), &mut table).unwrap();
        let m = table.get(i).unwrap();
        assert_eq!(m.texture.as_deref(), Some(Path::new("m/body.bmp")));
        assert_eq!(m.kd, [0.5, 0.5, 0.5]);
    }

    #[test]
    fn malformed_value_fails() {
        let src = "newmtl body\nNs shiny\n";
        let mut table = MaterialTable::new();
        table.declare("body");
        let err = parse_mtl(Cursor::new(src), "t.mtl", Path::new(""), &mut table).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedRecord);
    }
}
