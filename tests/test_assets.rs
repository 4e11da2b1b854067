use duel_minigames::assets::*;
use duel_minigames::GameError;

struct InMemory;

impl AssetLoader for InMemory {
    fn load(&mut self, id: SpriteId) -> Result<Sprite, GameError> {
        sprite_from_art(id, "##\n##\n\n")
    }
}

#[test]
fn trailing_blank_rows_are_dropped() {
    let sprite = sprite_from_art(SpriteId::Ball, " () \n(  )\n   \n\n").unwrap();
    assert_eq!(sprite.art, vec![" ()", "(  )"]);
    assert_eq!(sprite.size, SpriteId::Ball.size());
}

#[test]
fn blank_art_is_rejected() {
    let err = sprite_from_art(SpriteId::Boss, "\n  \n").unwrap_err();
    assert!(matches!(err, GameError::InvalidAsset { name: "boss", .. }));
}

#[test]
fn missing_file_is_fatal() {
    let mut loader = FileAssetLoader::new("no/such/dir");
    let err = Assets::load(&mut loader).unwrap_err();
    assert!(matches!(err, GameError::MissingAsset { name: "boss", .. }));
}

#[test]
fn every_sprite_resolves() {
    let assets = Assets::load(&mut InMemory).unwrap();
    for id in SpriteId::ALL {
        assert_eq!(assets.get(id).map(|s| s.id), Some(id));
    }
}

#[test]
fn shipped_assets_load() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
    assert!(Assets::load(&mut FileAssetLoader::new(dir)).is_ok());
}
