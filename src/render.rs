/// Render lists: what a level wants drawn this tick, in field pixels.
///
/// Levels only append commands; turning them into pixels or terminal cells
/// is the platform's business.

use glam::Vec2;

use crate::assets::SpriteId;
use crate::consts::*;
use crate::entities::{Boss, Color, Duelist, MatchState, Projectile, Side};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    Normal,
    Big,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Fill { rect: Rect, color: Color },
    Outline { rect: Rect, color: Color },
    Sprite { id: SpriteId, pos: Vec2 },
    /// `pos` is the centre of the text.
    Text { text: String, size: FontSize, color: Color, pos: Vec2 },
}

/// One tick's worth of draw calls, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Fill { rect, color });
    }

    pub fn outline(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Outline { rect, color });
    }

    pub fn sprite(&mut self, id: SpriteId, pos: Vec2) {
        self.cmds.push(DrawCmd::Sprite { id, pos });
    }

    pub fn text(&mut self, text: impl Into<String>, size: FontSize, color: Color, pos: Vec2) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            size,
            color,
            pos,
        });
    }

    pub fn shots(&mut self, shots: &[Projectile]) {
        for shot in shots {
            self.fill(shot.hitbox(), shot.color);
        }
    }

    /// Duelist body plus the lives pips above it.
    pub fn duelist(&mut self, d: &Duelist) {
        self.fill(d.hitbox(), d.color);
        let pip = match d.lives {
            n if n >= 3 => Color::Green,
            2 => Color::Yellow,
            _ => Color::Red,
        };
        for i in 0..d.lives {
            self.fill(Rect::new(d.pos.x + i as f32 * 10.0, d.pos.y - 15.0, 8.0, 8.0), pip);
        }
    }

    /// Boss sprite (solid orange once enraged) with its health bar.
    pub fn boss(&mut self, boss: &Boss) {
        let hb = boss.hitbox();
        if boss.enraged() {
            self.fill(hb, Color::Orange);
        } else {
            self.sprite(SpriteId::Boss, boss.pos);
        }
        let ratio = boss.health.max(0) as f32 / BOSS_HEALTH as f32;
        self.fill(Rect::new(hb.x, hb.y - 10.0, hb.w, 5.0), Color::Red);
        self.fill(Rect::new(hb.x, hb.y - 10.0, hb.w * ratio, 5.0), Color::Green);
    }

    pub fn score_line(&mut self, state: &MatchState, y: f32) {
        let (one, two) = (state.score(Side::One), state.score(Side::Two));
        self.text(
            format!("Score: P1 {one} x P2 {two}"),
            FontSize::Normal,
            Color::White,
            Vec2::new(WIDTH / 2.0, y),
        );
    }
}
