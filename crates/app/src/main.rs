//! Entry point for solarview.
//! Runs the OBJ viewer or the solar scene headlessly for `--frames` frames.

mod space;
mod viewer;

use std::path::PathBuf;

use anyhow::{Result, bail};
use corelib::camera::CameraCommand;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Scene {
    Model,
    Solar,
}

fn parse_scene_arg(args: &[String], model: Option<&PathBuf>) -> Scene {
    // --scene=model|solar, by default model when --model is given
    let fallback = if model.is_some() {
        Scene::Model
    } else {
        Scene::Solar
    };
    let mut scene = fallback;
    for arg in args {
        if let Some(val) = arg.strip_prefix("--scene=") {
            scene = match val.to_ascii_lowercase().as_str() {
                "model" | "obj" | "viewer" => Scene::Model,
                "solar" | "space" => Scene::Solar,
                other => {
                    log::warn!("Unknown scene '{}', falling back to {:?}.", other, fallback);
                    fallback
                }
            };
        }
    }
    scene
}

fn parse_path_arg(args: &[String], key: &str) -> Option<PathBuf> {
    args.iter()
        .rev()
        .find_map(|arg| arg.strip_prefix(key))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_cam_dist_arg(args: &[String]) -> Option<f32> {
    let mut dist = None;
    for arg in args {
        if let Some(v) = arg.strip_prefix("--cam-dist=") {
            match v.parse::<f32>() {
                Ok(d) if d.is_finite() => dist = Some(d),
                _ => log::warn!("Ignoring bad --cam-dist '{}'.", v),
            }
        }
    }
    dist
}

fn parse_frames_arg(args: &[String]) -> u32 {
    let mut frames = 1;
    for arg in args {
        if let Some(v) = arg.strip_prefix("--frames=") {
            if let Ok(n) = v.parse::<u32>() {
                frames = n;
            }
        }
    }
    frames
}

fn parse_size_args(args: &[String]) -> (u32, u32) {
    let mut w: Option<u32> = None;
    let mut h: Option<u32> = None;

    for arg in args {
        if let Some(v) = arg.strip_prefix("--size=") {
            if let Some((sw, sh)) = v.split_once('x').or_else(|| v.split_once('X')) {
                if let (Ok(pw), Ok(ph)) = (sw.parse::<u32>(), sh.parse::<u32>()) {
                    w = Some(pw);
                    h = Some(ph);
                }
            }
        } else if let Some(v) = arg.strip_prefix("--width=") {
            if let Ok(pw) = v.parse::<u32>() {
                w = Some(pw);
            }
        } else if let Some(v) = arg.strip_prefix("--height=") {
            if let Ok(ph) = v.parse::<u32>() {
                h = Some(ph);
            }
        }
    }

    let ww = w.unwrap_or(1024).max(1);
    let hh = h.unwrap_or(768).max(1);
    (ww, hh)
}

/// --moves=forward,left,rotate-up,... replayed once before the first frame.
fn parse_moves_arg(args: &[String]) -> Result<Vec<CameraCommand>> {
    let Some(list) = args.iter().rev().find_map(|a| a.strip_prefix("--moves=")) else {
        return Ok(Vec::new());
    };
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            Ok(match s.to_ascii_lowercase().as_str() {
                "forward" | "w" => CameraCommand::Forward,
                "backward" | "s" => CameraCommand::Backward,
                "left" | "a" => CameraCommand::Left,
                "right" | "d" => CameraCommand::Right,
                "rotate-up" | "i" => CameraCommand::RotateUp,
                "rotate-down" | "k" => CameraCommand::RotateDown,
                "rotate-left" | "j" => CameraCommand::RotateLeft,
                "rotate-right" | "l" => CameraCommand::RotateRight,
                other => bail!("unknown camera move '{}'", other),
            })
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let model = parse_path_arg(&args, "--model=");
    let scene = parse_scene_arg(&args, model.as_ref());
    let frames = parse_frames_arg(&args);
    let (width, height) = parse_size_args(&args);
    let moves = parse_moves_arg(&args)?;
    let aspect = width as f32 / height as f32;
    log::info!(
        "Starting solarview. Scene: {:?}, frames={}, size={}x{}",
        scene,
        frames,
        width,
        height
    );

    match scene {
        Scene::Model => {
            let Some(path) = model else {
                bail!("--scene=model needs --model=<file.obj>");
            };
            let cam_dist = parse_cam_dist_arg(&args);
            viewer::run(&path, cam_dist, &moves, frames, aspect)?;
        }
        Scene::Solar => {
            let textures = parse_path_arg(&args, "--textures=").unwrap_or_else(|| "textures".into());
            space::run(&textures, &moves, frames, aspect)?;
        }
    }

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scene_defaults_follow_model_flag() {
        let a = args(&["--model=cube.obj"]);
        let model = parse_path_arg(&a, "--model=");
        assert_eq!(model, Some(PathBuf::from("cube.obj")));
        assert_eq!(parse_scene_arg(&a, model.as_ref()), Scene::Model);
        assert_eq!(parse_scene_arg(&args(&[]), None), Scene::Solar);
        assert_eq!(
            parse_scene_arg(&args(&["--scene=SOLAR"]), model.as_ref()),
            Scene::Solar
        );
    }

    #[test]
    fn size_defaults_and_overrides() {
        assert_eq!(parse_size_args(&args(&[])), (1024, 768));
        assert_eq!(parse_size_args(&args(&["--size=800x600"])), (800, 600));
        assert_eq!(
            parse_size_args(&args(&["--size=800x600", "--height=0"])),
            (800, 1)
        );
    }

    #[test]
    fn numeric_flags() {
        assert_eq!(parse_frames_arg(&args(&["--frames=12"])), 12);
        assert_eq!(parse_frames_arg(&args(&["--frames=x"])), 1);
        assert_eq!(parse_cam_dist_arg(&args(&["--cam-dist=250"])), Some(250.0));
        assert_eq!(parse_cam_dist_arg(&args(&["--cam-dist=far"])), None);
    }

    #[test]
    fn moves_parse_in_order() {
        let moves = parse_moves_arg(&args(&["--moves=w,rotate-left,d"])).unwrap();
        assert_eq!(
            moves,
            [
                CameraCommand::Forward,
                CameraCommand::RotateLeft,
                CameraCommand::Right
            ]
        );
        assert!(parse_moves_arg(&args(&["--moves=jump"])).is_err());
        assert!(parse_moves_arg(&args(&[])).unwrap().is_empty());
    }
}
