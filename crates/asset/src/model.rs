//! Full model load: OBJ, then MTL, then textures, then assembly.

use std::{
    fs::File,
    io::BufReader,
    ops::Range,
    path::{Path, PathBuf},
};

use crate::{
    assemble::assemble,
    error::{AssetError, AssetResult},
    material::{Material, parse_mtl},
    mesh::AssembledMesh,
    obj::{DEFAULT_MATERIAL, ObjDocument, SceneHints, load_obj_from_path},
    runs::MaterialRuns,
    store::AttributeKind,
    texture::TextureData,
};

/// Progress of a [`ModelLoader`]. `Failed` is reachable from every state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadState {
    Idle,
    ParsingGeometry,
    ParsingMaterials,
    TexturesPending,
    Ready,
    Failed,
}

/// A loaded, assembled model. Read-only once built.
#[derive(Clone, Debug)]
pub struct Model {
    pub mesh: AssembledMesh,
    pub materials: Vec<Material>,
    pub runs: MaterialRuns,
    /// Decoded texture per material, `None` when the material has none.
    pub textures: Vec<Option<TextureData>>,
    pub scene: SceneHints,
}

impl Model {
    pub fn face_count(&self) -> usize {
        self.mesh.face_count
    }

    /// Face range and material of every run.
    pub fn run_ranges(&self) -> impl Iterator<Item = (Range<u32>, &Material)> + '_ {
        self.runs
            .ranges(self.mesh.face_count as u32)
            .filter_map(|(range, i)| self.materials.get(i).map(|m| (range, m)))
    }
}

/// Drives one load through its states.
#[derive(Debug)]
pub struct ModelLoader {
    path: PathBuf,
    state: LoadState,
}

impl ModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run the load to completion. Any failure aborts it; nothing partial
    /// is returned.
    pub fn load(&mut self) -> AssetResult<Model> {
        match self.run() {
            Ok(model) => Ok(model),
            Err(err) => {
                log::error!("Loading {} failed: {}", self.path.display(), err);
                self.transition(LoadState::Failed);
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: LoadState) {
        log::debug!("{}: {:?} -> {:?}", self.path.display(), self.state, next);
        self.state = next;
    }

    fn run(&mut self) -> AssetResult<Model> {
        log::info!("Loading object file: {}", self.path.display());
        self.transition(LoadState::ParsingGeometry);
        let mut doc = load_obj_from_path(&self.path)?;

        let base_dir = self.path.parent().unwrap_or(Path::new("")).to_path_buf();
        let textures = match doc.material_lib.clone() {
            Some(lib) => {
                self.transition(LoadState::ParsingMaterials);
                load_materials(&mut doc, &base_dir.join(lib), &base_dir)?;
                log_summary(&doc);

                self.transition(LoadState::TexturesPending);
                load_textures(&doc)?
            }
            None => vec![None; doc.materials.len()],
        };
        let mesh = assemble(&doc.faces, &doc.attributes)?;
        self.transition(LoadState::Ready);
        Ok(Model {
            mesh,
            materials: doc.materials.into_vec(),
            runs: doc.runs,
            textures,
            scene: doc.scene,
        })
    }
}

/// Load an OBJ file with its material library and textures.
pub fn load_model(path: impl AsRef<Path>) -> AssetResult<Model> {
    ModelLoader::new(path.as_ref()).load()
}

/// Texture paths in the MTL file resolve against `texture_dir`, the
/// object file's directory.
fn load_materials(doc: &mut ObjDocument, mtl_path: &Path, texture_dir: &Path) -> AssetResult<()> {
    log::info!("Loading mtl file: {}", mtl_path.display());
    let file = File::open(mtl_path).map_err(|source| AssetError::FileNotFound {
        path: mtl_path.to_path_buf(),
        source,
    })?;
    let defined = parse_mtl(
        BufReader::new(file),
        &mtl_path.display().to_string(),
        texture_dir,
        &mut doc.materials,
    )?;

    for (index, material) in doc.materials.iter().enumerate() {
        if material.name != DEFAULT_MATERIAL && !defined.contains(&index) {
            log::warn!(
                "Material '{}' is not defined in {}, using defaults",
                material.name,
                mtl_path.display()
            );
        }
    }
    Ok(())
}

fn log_summary(doc: &ObjDocument) {
    log::info!("\tvertices:   {}", doc.attributes.count(AttributeKind::Position));
    log::info!("\ttex coords: {}", doc.attributes.count(AttributeKind::TexCoord));
    log::info!("\tnormals:    {}", doc.attributes.count(AttributeKind::Normal));
    log::info!("\tfaces:      {}", doc.faces.len());
    log::info!("\tmaterials:  {}", doc.materials.len());
    for (i, m) in doc.materials.iter().enumerate() {
        match &m.texture {
            Some(path) => log::info!("\t{:3}:   {}\tfilename: {}", i, m.name, path.display()),
            None => log::info!("\t{:3}:   {}\tfilename: -", i, m.name),
        }
    }
}

/// Decode every bound texture; the first failure aborts.
fn load_textures(doc: &ObjDocument) -> AssetResult<Vec<Option<TextureData>>> {
    doc.materials
        .iter()
        .map(|m| m.texture.as_ref().map(TextureData::load_bmp).transpose())
        .collect()
}
