/// Shared actor rules: movement, emitters and projectile collision.
///
/// Every function mutates the actors it is handed and nothing else.  All
/// randomness comes through an injected `Rng` so tests can seed it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::entities::{Boss, Color, Duelist, Enemy, Facing, Obstacle, Owner, Projectile};
use crate::geometry::{clamp_to_field, Rect};
use crate::platform::ControlIntent;

// ── Emitter capability ───────────────────────────────────────────────────────

/// Anything that fires projectiles, owns them, and can be hit.
pub trait Emitter {
    fn hitbox(&self) -> Rect;
    fn shots_mut(&mut self) -> &mut Vec<Projectile>;
    fn cooldown_mut(&mut self) -> &mut u32;

    /// Fire this emitter's pattern unless it is still cooling down.
    /// Returns whether anything was spawned.
    fn try_emit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool;

    /// React to being struck by one hostile projectile.
    fn on_hit(&mut self);

    /// One tick of cooldown, regardless of whether a shot was attempted.
    fn cool_down(&mut self) {
        let cooldown = self.cooldown_mut();
        *cooldown = cooldown.saturating_sub(1);
    }

    /// Move every shot by its velocity and drop the ones that left the field.
    fn advance(&mut self) {
        let shots = self.shots_mut();
        for shot in shots.iter_mut() {
            shot.pos += shot.vel;
        }
        shots.retain(|s| !s.hitbox().outside_field());
    }
}

impl Emitter for Duelist {
    fn hitbox(&self) -> Rect {
        Duelist::hitbox(self)
    }

    fn shots_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.shots
    }

    fn cooldown_mut(&mut self) -> &mut u32 {
        &mut self.cooldown
    }

    /// One shot from the edge the duelist is facing.
    fn try_emit<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        let r = Duelist::hitbox(self);
        let c = r.center();
        let pos = match self.facing {
            Facing::Right => Vec2::new(r.right(), c.y - 2.0),
            Facing::Left => Vec2::new(r.left() - SHOT_SIZE, c.y - 2.0),
            Facing::Up => Vec2::new(c.x - 2.0, r.top() - SHOT_SIZE),
            Facing::Down => Vec2::new(c.x - 2.0, r.bottom()),
        };
        self.shots.push(Projectile {
            pos,
            vel: self.facing.unit() * DUELIST_SHOT_SPEED,
            owner: Owner::Duelist(self.side),
            color: self.color,
        });
        self.cooldown = DUELIST_COOLDOWN;
        true
    }

    fn on_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

impl Emitter for Enemy {
    fn hitbox(&self) -> Rect {
        Enemy::hitbox(self)
    }

    fn shots_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.shots
    }

    fn cooldown_mut(&mut self) -> &mut u32 {
        &mut self.cooldown
    }

    /// Orthogonal burst from the middle of each edge.
    fn try_emit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        let r = Enemy::hitbox(self);
        let c = r.center();
        let burst = [
            (Vec2::new(c.x, r.top()), Facing::Up),
            (Vec2::new(c.x, r.bottom()), Facing::Down),
            (Vec2::new(r.left(), c.y), Facing::Left),
            (Vec2::new(r.right(), c.y), Facing::Right),
        ];
        self.shots.extend(burst.into_iter().map(|(pos, facing)| Projectile {
            pos,
            vel: facing.unit() * ENEMY_SHOT_SPEED,
            owner: Owner::Enemy,
            color: Color::Yellow,
        }));
        self.cooldown = rng.gen_range(60..=120);
        true
    }

    fn on_hit(&mut self) {
        self.alive = false;
    }
}

impl Emitter for Boss {
    fn hitbox(&self) -> Rect {
        Boss::hitbox(self)
    }

    fn shots_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.shots
    }

    fn cooldown_mut(&mut self) -> &mut u32 {
        &mut self.cooldown
    }

    /// Radial burst of `BOSS_BURST` shots, evenly spaced, from the centre.
    fn try_emit<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> bool {
        if self.start_delay > 0 || self.cooldown > 0 {
            return false;
        }
        let origin = Boss::hitbox(self).center();
        let step = TAU / BOSS_BURST as f32;
        self.shots.extend((0..BOSS_BURST).map(|i| {
            let angle = step * i as f32;
            Projectile {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * BOSS_SHOT_SPEED,
                owner: Owner::Boss,
                color: Color::Yellow,
            }
        }));
        self.cooldown = BOSS_COOLDOWN;
        true
    }

    fn on_hit(&mut self) {
        self.health -= 1;
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Displacement requested by the held direction keys. Opposite keys cancel.
pub fn intent_delta(intent: &ControlIntent, speed: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if intent.up {
        delta.y -= speed;
    }
    if intent.down {
        delta.y += speed;
    }
    if intent.left {
        delta.x -= speed;
    }
    if intent.right {
        delta.x += speed;
    }
    delta
}

/// Turn toward the held keys; the last of up/down/left/right held wins.
pub fn face_toward(duelist: &mut Duelist, intent: &ControlIntent) {
    let held = [
        (intent.up, Facing::Up),
        (intent.down, Facing::Down),
        (intent.left, Facing::Left),
        (intent.right, Facing::Right),
    ];
    if let Some((_, facing)) = held.iter().rev().find(|(on, _)| *on) {
        duelist.facing = *facing;
    }
}

/// All-or-nothing move: if the destination box touches any obstacle the
/// duelist stays put, otherwise it moves and is clamped to the field.
pub fn try_move(duelist: &mut Duelist, delta: Vec2, obstacles: &[Obstacle]) -> bool {
    let candidate = duelist.hitbox().translated(delta);
    if obstacles.iter().any(|o| candidate.intersects(&o.rect)) {
        return false;
    }
    duelist.pos = clamp_to_field(duelist.pos + delta, Duelist::size());
    true
}

/// Obstacle-free move, clamped per axis.
pub fn move_clamped(duelist: &mut Duelist, delta: Vec2) {
    duelist.pos = clamp_to_field(duelist.pos + delta, Duelist::size());
}

// ── Projectile collision ─────────────────────────────────────────────────────

/// Obstacles swallow every shot that touches them and are left intact.
pub fn absorb_shots(shots: &mut Vec<Projectile>, obstacles: &[Obstacle]) {
    if obstacles.is_empty() {
        return;
    }
    shots.retain(|s| {
        let hb = s.hitbox();
        !obstacles.iter().any(|o| hb.intersects(&o.rect))
    });
}

/// Every live enemy touched by a shot dies, and all shots touching it are
/// spent. Returns the number of enemies killed.
pub fn strike_enemies(shots: &mut Vec<Projectile>, enemies: &mut [Enemy]) -> usize {
    let mut killed = 0;
    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        let hb = Enemy::hitbox(enemy);
        let before = shots.len();
        shots.retain(|s| !s.hitbox().intersects(&hb));
        if shots.len() != before {
            enemy.on_hit();
            killed += 1;
        }
    }
    killed
}

/// Target takes at most one hit per call however many shots overlap it;
/// all overlapping shots are spent.
pub fn strike<T: Emitter>(shots: &mut Vec<Projectile>, target: &mut T) -> bool {
    let hb = target.hitbox();
    let before = shots.len();
    shots.retain(|s| !s.hitbox().intersects(&hb));
    let hit = shots.len() != before;
    if hit {
        target.on_hit();
    }
    hit
}

/// Target takes one hit per overlapping shot.
pub fn strike_each<T: Emitter>(shots: &mut Vec<Projectile>, target: &mut T) -> u32 {
    let hb = target.hitbox();
    let before = shots.len();
    shots.retain(|s| !s.hitbox().intersects(&hb));
    let hits = (before - shots.len()) as u32;
    for _ in 0..hits {
        target.on_hit();
    }
    hits
}

/// True if any of `shots` currently overlaps `target`.
pub fn any_touching(shots: &[Projectile], target: &Rect) -> bool {
    shots.iter().any(|s| s.hitbox().intersects(target))
}

/// Per-tick bookkeeping for a duelist's shots: cool down, advance, then
/// resolve against obstacles, enemies and finally the opponent.
/// Returns whether the opponent was hit.
pub fn update_duelist_shots(
    shooter: &mut Duelist,
    obstacles: &[Obstacle],
    enemies: &mut [Enemy],
    opponent: Option<&mut Duelist>,
) -> bool {
    shooter.cool_down();
    shooter.advance();
    absorb_shots(&mut shooter.shots, obstacles);
    strike_enemies(&mut shooter.shots, enemies);
    match opponent {
        Some(other) => strike(&mut shooter.shots, other),
        None => false,
    }
}
