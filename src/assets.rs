//! Named sprite assets. Every sprite must resolve at startup; a missing one
//! is fatal since levels 2, 4 and 5 cannot be drawn without them.

use std::collections::HashMap;
use std::path::PathBuf;

use glam::Vec2;

use crate::consts::{BALL_SIZE, BOSS_SIZE};
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Boss,
    Ball,
    LightRed,
    LightGreen,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [SpriteId::Boss, SpriteId::Ball, SpriteId::LightRed, SpriteId::LightGreen];

    pub fn name(self) -> &'static str {
        match self {
            SpriteId::Boss => "boss",
            SpriteId::Ball => "ball",
            SpriteId::LightRed => "light_red",
            SpriteId::LightGreen => "light_green",
        }
    }

    /// Size the sprite is drawn at, in field pixels.
    pub fn size(self) -> Vec2 {
        match self {
            SpriteId::Boss => Vec2::splat(BOSS_SIZE),
            SpriteId::Ball => Vec2::splat(BALL_SIZE),
            SpriteId::LightRed | SpriteId::LightGreen => Vec2::splat(150.0),
        }
    }
}

/// A loaded, fixed-size drawable. `art` is the text rendition, one string
/// per row.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    pub size: Vec2,
    pub art: Vec<String>,
}

pub trait AssetLoader {
    fn load(&mut self, id: SpriteId) -> Result<Sprite, GameError>;
}

/// Reads `<root>/<name>.txt` text-art files.
pub struct FileAssetLoader {
    root: PathBuf,
}

impl FileAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FileAssetLoader {
    fn load(&mut self, id: SpriteId) -> Result<Sprite, GameError> {
        let path = self.root.join(format!("{}.txt", id.name()));
        let text = std::fs::read_to_string(&path).map_err(|source| GameError::MissingAsset {
            name: id.name(),
            path: path.clone(),
            source,
        })?;
        sprite_from_art(id, &text)
    }
}

/// Parse text art, dropping trailing blank rows.
pub fn sprite_from_art(id: SpriteId, text: &str) -> Result<Sprite, GameError> {
    let mut art: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while art.last().is_some_and(|l| l.is_empty()) {
        art.pop();
    }
    if art.is_empty() {
        return Err(GameError::InvalidAsset {
            name: id.name(),
            reason: "no visible rows".to_string(),
        });
    }
    Ok(Sprite { id, size: id.size(), art })
}

/// Every sprite the match needs, resolved up front.
#[derive(Clone, Debug)]
pub struct Assets {
    sprites: HashMap<SpriteId, Sprite>,
}

impl Assets {
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, GameError> {
        let mut sprites = HashMap::new();
        for id in SpriteId::ALL {
            let sprite = loader.load(id)?;
            log::info!("loaded sprite `{}` ({} rows)", id.name(), sprite.art.len());
            sprites.insert(id, sprite);
        }
        Ok(Self { sprites })
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(&id)
    }
}
