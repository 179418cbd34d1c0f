//! OBJ reader: raw attributes, faces, material runs and scene hints.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    error::{AssetError, AssetResult},
    line::{self, Keyword},
    material::MaterialTable,
    runs::MaterialRuns,
    store::{AttributeKind, AttributeStore, FaceList},
};

/// Material assigned to faces that precede any `usemtl`.
pub const DEFAULT_MATERIAL: &str = "default";

/// Camera/light settings piggybacked on OBJ syntax. Last occurrence wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneHints {
    pub light_pos: Option<[f32; 3]>,
    pub cam_pos: Option<[f32; 3]>,
    pub cam_front: Option<[f32; 3]>,
    pub cam_up: Option<[f32; 3]>,
}

/// Everything read from one OBJ file, before assembly.
#[derive(Clone, Debug, Default)]
pub struct ObjDocument {
    pub attributes: AttributeStore,
    pub faces: FaceList,
    pub materials: MaterialTable,
    pub runs: MaterialRuns,
    /// `mtllib` file name as written in the OBJ.
    pub material_lib: Option<String>,
    pub scene: SceneHints,
}

/// Load an OBJ document from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> AssetResult<ObjDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AssetError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_obj_from_reader(BufReader::new(file), &path.display().to_string())
}

/// Load an OBJ document from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R, file: &str) -> AssetResult<ObjDocument> {
    parse_obj(reader, file)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> AssetResult<ObjDocument> {
    parse_obj(io::Cursor::new(contents), "<memory>")
}

fn parse_obj<R: BufRead>(reader: R, file: &str) -> AssetResult<ObjDocument> {
    let mut doc = ObjDocument::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AssetError::Io {
            path: PathBuf::from(file),
            source,
        })?;
        let Some(rec) = line::classify(file, idx + 1, &line) else {
            continue;
        };

        match rec.keyword {
            Keyword::Position => doc
                .attributes
                .append_record(AttributeKind::Position, &rec)?,
            Keyword::TexCoord => doc
                .attributes
                .append_record(AttributeKind::TexCoord, &rec)?,
            Keyword::Normal => doc.attributes.append_record(AttributeKind::Normal, &rec)?,
            Keyword::Face => {
                doc.faces.append_record(&rec)?;
            }
            Keyword::UseMtl => {
                let material = doc.materials.declare(rec.name()?);
                doc.runs.push(face_offset(&doc.faces), material);
            }
            Keyword::MtlLib => doc.material_lib = Some(rec.name()?.to_owned()),
            Keyword::LightPos => doc.scene.light_pos = Some(rec.floats::<3>()?),
            Keyword::CamPos => doc.scene.cam_pos = Some(rec.floats::<3>()?),
            Keyword::CamFront => doc.scene.cam_front = Some(rec.floats::<3>()?),
            Keyword::CamUp => doc.scene.cam_up = Some(rec.floats::<3>()?),
            _ => {}
        }
    }

    let ObjDocument {
        faces,
        materials,
        runs,
        ..
    } = &mut doc;
    runs.cover_leading_faces(face_offset(faces), || materials.declare(DEFAULT_MATERIAL));

    log::info!(
        "Parsed {}: {} vertices, {} tex coords, {} normals, {} faces, {} materials",
        file,
        doc.attributes.count(AttributeKind::Position),
        doc.attributes.count(AttributeKind::TexCoord),
        doc.attributes.count(AttributeKind::Normal),
        doc.faces.len(),
        doc.materials.len()
    );

    Ok(doc)
}

fn face_offset(faces: &FaceList) -> u32 {
    u32::try_from(faces.len()).unwrap_or(u32::MAX)
}
