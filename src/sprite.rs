//! Sprite frame descriptions and asset loading
//!
//! The simulation never touches textures. It only tracks which [`Frame`] of
//! which [`FrameSet`] an entity shows; the front end maps a frame set's
//! [`SpriteSource`] to a texture (or a flat colored rect for placeholders).
//!
//! Sheets are described by a small JSON manifest next to the image:
//!
//! ```json
//! { "image": "player_right.png", "frame_width": 93, "frame_height": 93,
//!   "frames": [ { "x": 0, "y": 0 }, { "x": 93, "y": 0 } ] }
//! ```

use crate::animation::{AnimationState, Direction};
use crate::collision::CollisionMask;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Source rectangle of one animation frame inside a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Frame {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where a frame set's pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteSource {
    Sheet(PathBuf),
    Placeholder(Color),
}

/// An ordered list of frames drawn from one source. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    source: SpriteSource,
    frames: Vec<Frame>,
}

impl FrameSet {
    /// Returns `None` for an empty frame list.
    pub fn new(source: SpriteSource, frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(FrameSet { source, frames })
        }
    }

    /// A single full-size frame filled with `color`.
    pub fn placeholder(color: Color, width: u32, height: u32) -> Self {
        FrameSet {
            source: SpriteSource::Placeholder(color),
            frames: vec![Frame::new(0, 0, width, height)],
        }
    }

    pub fn source(&self) -> &SpriteSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

/// Placeholder colors for directional sprites.
pub fn placeholder_color_for_direction(direction: Direction) -> Color {
    match direction {
        Direction::Right => Color::RED,
        Direction::Left => Color::GREEN,
        Direction::Up => Color::BLUE,
        Direction::Down => Color::YELLOW,
    }
}

/// Placeholder colors for non-directional (enemy) sprites.
pub fn placeholder_color_for_state(state: AnimationState) -> Color {
    match state {
        AnimationState::Idle => Color::rgb(120, 0, 120),
        AnimationState::Moving => Color::rgb(180, 60, 180),
        AnimationState::Attack => Color::rgb(255, 80, 80),
    }
}

/// Loads frame sets for a sprite path
pub trait SpriteLoader {
    fn load_frames(&mut self, path: &Path) -> Result<FrameSet, AssetError>;
}

#[derive(Debug, Deserialize)]
struct SheetManifest {
    image: PathBuf,
    frame_width: u32,
    frame_height: u32,
    frames: Vec<ManifestFrame>,
}

#[derive(Debug, Deserialize)]
struct ManifestFrame {
    x: i32,
    y: i32,
}

/// Reads JSON sheet manifests from disk
#[derive(Debug, Default)]
pub struct ManifestLoader;

impl SpriteLoader for ManifestLoader {
    fn load_frames(&mut self, path: &Path) -> Result<FrameSet, AssetError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| AssetError::NotFound(path.to_path_buf()))?;
        let manifest: SheetManifest =
            serde_json::from_str(&content).map_err(|e| AssetError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let image = match path.parent() {
            Some(dir) => dir.join(&manifest.image),
            None => manifest.image.clone(),
        };
        let frames = manifest
            .frames
            .iter()
            .map(|f| Frame::new(f.x, f.y, manifest.frame_width, manifest.frame_height))
            .collect();

        FrameSet::new(SpriteSource::Sheet(image), frames).ok_or_else(|| AssetError::Decode {
            path: path.to_path_buf(),
            reason: "manifest has no frames".to_string(),
        })
    }
}

/// Loads `path`, degrading to a one-frame placeholder on any failure.
pub fn load_or_placeholder(
    loader: &mut dyn SpriteLoader,
    path: &Path,
    fallback: Color,
    width: u32,
    height: u32,
) -> FrameSet {
    match loader.load_frames(path) {
        Ok(set) => set,
        Err(e) => {
            warn!("{}; using placeholder", e);
            FrameSet::placeholder(fallback, width, height)
        }
    }
}

/// Reads a text collision mask (`#` solid, anything else clear).
///
/// A missing file means the entity collides by its box alone.
pub fn load_mask(path: &Path) -> Option<CollisionMask> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No collision mask at {}", path.display());
            return None;
        }
    };
    let rows: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let mask = CollisionMask::from_rows(&rows);
    if mask.is_none() {
        warn!("Ignoring malformed collision mask {}", path.display());
    }
    mask
}

/// Frame sets per facing (player) and per motion state (enemies), plus
/// optional collision masks.
///
/// An empty bank installs nothing, so actors keep their placeholders.
#[derive(Debug, Clone, Default)]
pub struct SpriteBank {
    pub player: HashMap<Direction, FrameSet>,
    pub enemy: HashMap<AnimationState, FrameSet>,
    pub player_mask: Option<CollisionMask>,
    pub enemy_mask: Option<CollisionMask>,
}

impl SpriteBank {
    /// Reads `player_<dir>.json` and `enemy_<state>.json` from `dir`.
    pub fn load(loader: &mut dyn SpriteLoader, dir: &Path, width: u32, height: u32) -> Self {
        let player = Direction::ALL
            .iter()
            .map(|d| {
                let path = dir.join(format!("player_{:?}.json", d).to_lowercase());
                let fallback = placeholder_color_for_direction(*d);
                (*d, load_or_placeholder(loader, &path, fallback, width, height))
            })
            .collect();

        let enemy = AnimationState::ALL
            .iter()
            .map(|s| {
                let path = dir.join(format!("enemy_{:?}.json", s).to_lowercase());
                let fallback = placeholder_color_for_state(*s);
                (*s, load_or_placeholder(loader, &path, fallback, width, height))
            })
            .collect();

        SpriteBank {
            player,
            enemy,
            player_mask: load_mask(&dir.join("player.mask")),
            enemy_mask: load_mask(&dir.join("enemy.mask")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_sheet_uses_placeholder() {
        let mut loader = ManifestLoader;
        let set = load_or_placeholder(
            &mut loader,
            Path::new("no/such/sheet.json"),
            placeholder_color_for_direction(Direction::Up),
            93,
            93,
        );

        assert_eq!(set.len(), 1);
        assert_eq!(set.source(), &SpriteSource::Placeholder(Color::BLUE));
        assert_eq!(set.frame(0), Some(&Frame::new(0, 0, 93, 93)));
    }

    #[test]
    fn test_manifest_loads_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"image":"walk.png","frame_width":93,"frame_height":93,"frames":[{{"x":0,"y":0}},{{"x":93,"y":0}}]}}"#
        )
        .unwrap();

        let set = ManifestLoader.load_frames(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.frame(1), Some(&Frame::new(93, 0, 93, 93)));
        assert_eq!(set.source(), &SpriteSource::Sheet(dir.path().join("walk.png")));
    }

    #[test]
    fn test_bad_manifest_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = ManifestLoader.load_frames(file.path());
        assert!(matches!(result, Err(AssetError::Decode { .. })));
    }

    #[test]
    fn test_placeholder_colors() {
        assert_eq!(placeholder_color_for_direction(Direction::Right), Color::RED);
        assert_eq!(placeholder_color_for_direction(Direction::Left), Color::GREEN);
        assert_eq!(placeholder_color_for_direction(Direction::Down), Color::YELLOW);
    }

    #[test]
    fn test_bank_mixes_sheets_and_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("player_right.json"),
            r#"{"image":"right.png","frame_width":93,"frame_height":93,"frames":[{"x":0,"y":0},{"x":93,"y":0},{"x":186,"y":0}]}"#,
        )
        .unwrap();

        let bank = SpriteBank::load(&mut ManifestLoader, dir.path(), 93, 93);
        assert_eq!(bank.player[&Direction::Right].len(), 3);
        assert_eq!(
            bank.player[&Direction::Left].source(),
            &SpriteSource::Placeholder(Color::GREEN)
        );
        assert_eq!(bank.enemy.len(), 3);
        assert!(bank.player_mask.is_none());
    }

    #[test]
    fn test_load_mask_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enemy.mask");
        std::fs::write(&path, "..##\n.###\n\n").unwrap();

        let mask = load_mask(&path).unwrap();
        assert_eq!((mask.width(), mask.height()), (4, 2));
        assert!(mask.is_solid(2, 0));
        assert!(!mask.is_solid(0, 1));

        std::fs::write(&path, "##\n#\n").unwrap();
        assert!(load_mask(&path).is_none());
    }
}
