use std::{fs, path::Path};

use asset::{ErrorKind, LoadState, ModelLoader, load_model};

const CUBE_FACE_OBJ: &str = "\
# two textured quads, one translucent
mtllib scene.mtl
lightpos 0 50 0
campos 0 0 40
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
usemtl wall
f 1/1/1 2/2/1 3/3/1
f 1/1/1 3/3/1 4/4/1
usemtl glass
f 1/1/1 2/2/1 3/3/1 4/4/1
";

const SCENE_MTL: &str = "\
newmtl wall\r
Ns 10\r
Kd 0.8 0.7 0.6\r
map_Kd textures/wall.bmp\r
\r
newmtl glass\r
d 0.4\r
\r
";

fn bmp(width: u32, height: u32) -> Vec<u8> {
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out.extend(std::iter::repeat_n([0u8, 128, 255], (width * height) as usize).flatten());
    out
}

fn write_scene(dir: &Path, with_texture: bool) -> std::path::PathBuf {
    let obj = dir.join("scene.obj");
    fs::write(&obj, CUBE_FACE_OBJ).unwrap();
    fs::write(dir.join("scene.mtl"), SCENE_MTL).unwrap();
    if with_texture {
        fs::create_dir_all(dir.join("textures")).unwrap();
        fs::write(dir.join("textures/wall.bmp"), bmp(2, 2)).unwrap();
    }
    obj
}

#[test]
fn loads_obj_mtl_and_textures() {
    let dir = tempfile::tempdir().unwrap();
    let obj = write_scene(dir.path(), true);

    let model = load_model(&obj).unwrap();
    assert_eq!(model.face_count(), 4);
    assert_eq!(model.mesh.vertices.len(), 4 * 9);
    assert_eq!(model.mesh.texcoords.len(), 4 * 6);
    assert_eq!(model.mesh.normals.len(), 4 * 9);

    let names: Vec<_> = model.materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["wall", "glass"]);
    assert_eq!(model.materials[0].kd, [0.8, 0.7, 0.6]);
    assert_eq!(model.materials[0].ns, 10.0);
    assert_eq!(model.materials[1].d, 0.4);
    assert!(model.materials[1].is_translucent());

    let wall = model.textures[0].as_ref().expect("wall texture");
    assert_eq!((wall.width, wall.height), (2, 2));
    assert_eq!(&wall.data[..3], &[255, 128, 0]);
    assert!(model.textures[1].is_none());

    let ranges: Vec<_> = model.run_ranges().map(|(r, m)| (r, m.name.as_str())).collect();
    assert_eq!(ranges, vec![(0..2, "wall"), (2..4, "glass")]);

    assert_eq!(model.scene.light_pos, Some([0.0, 50.0, 0.0]));
    assert_eq!(model.scene.cam_pos, Some([0.0, 0.0, 40.0]));
}

#[test]
fn runs_partition_faces_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let obj = write_scene(dir.path(), true);
    let model = load_model(&obj).unwrap();

    let runs = model.runs.as_slice();
    assert!(runs.windows(2).all(|w| w[0].start_face <= w[1].start_face));
    let covered: u32 = model
        .runs
        .ranges(model.face_count() as u32)
        .map(|(r, _)| r.end - r.start)
        .sum();
    assert_eq!(covered as usize, model.face_count());
}

#[test]
fn missing_texture_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let obj = write_scene(dir.path(), false);

    let mut loader = ModelLoader::new(&obj);
    let err = loader.load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(loader.state(), LoadState::Failed);
}

#[test]
fn truncated_texture_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let obj = write_scene(dir.path(), true);
    let mut short = bmp(2, 2);
    short.truncate(60);
    fs::write(dir.path().join("textures/wall.bmp"), short).unwrap();

    let err = load_model(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TextureDecode);
}

#[test]
fn missing_mtllib_exposes_no_mesh() {
    let dir = tempfile::tempdir().unwrap();
    let obj = dir.path().join("lonely.obj");
    fs::write(
        &obj,
        "mtllib nowhere.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nusemtl x\nf 1/1 2/2 3/3\n",
    )
    .unwrap();

    let result = load_model(&obj);
    assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::FileNotFound));
}

#[test]
fn single_triangle_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let obj = dir.path().join("tri.obj");
    fs::write(
        &obj,
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n",
    )
    .unwrap();

    let model = load_model(&obj).unwrap();
    assert_eq!(
        model.mesh.vertices,
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(model.mesh.texcoords, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    assert!(model.mesh.normals.is_empty());
}

#[test]
fn inconsistent_face_stride_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let obj = dir.path().join("mixed.obj");
    fs::write(
        &obj,
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1 2/1 3/1\nf 1/1/1 2/1/1 3/1/1\n",
    )
    .unwrap();

    let err = load_model(&obj).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InconsistentStride);
}
