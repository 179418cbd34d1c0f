//! Asset loading: Wavefront OBJ/MTL parsing, mesh assembly, BMP textures
//! and procedural sphere/ring geometry.
//!
//! [`load_model`] is the entry point for file-backed meshes; the
//! [`procedural`] generators need no input files.

pub mod assemble;
pub mod error;
pub mod line;
pub mod material;
pub mod mesh;
pub mod model;
pub mod obj;
pub mod procedural;
pub mod runs;
pub mod store;
pub mod texture;

pub use error::{AssetError, AssetResult, ErrorKind};
pub use material::Material;
pub use mesh::{AssembledMesh, ProceduralMesh};
pub use model::{LoadState, Model, ModelLoader, load_model};
pub use obj::SceneHints;
pub use procedural::{generate_rings, generate_sphere};
pub use runs::{MaterialRun, MaterialRuns};
pub use texture::TextureData;
