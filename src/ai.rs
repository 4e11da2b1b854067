/// Non-player behaviour: enemies that hunt, the patrolling boss, and the
/// ball's physics.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::compute::{absorb_shots, strike, Emitter};
use crate::consts::*;
use crate::entities::{Ball, Boss, Duelist, Enemy, Obstacle};

// ── Enemy ────────────────────────────────────────────────────────────────────

/// Index of the duelist whose centre is closest to `from`. On a tie the
/// earlier duelist in the slice wins.
pub fn nearest_duelist(from: Vec2, duelists: &[Duelist]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, d) in duelists.iter().enumerate() {
        let dist = from.distance(d.hitbox().center());
        match best {
            Some((_, closest)) if dist >= closest => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// Step straight toward the nearest duelist. Enemies ignore obstacles.
pub fn hunt(enemy: &mut Enemy, duelists: &[Duelist]) {
    let center = enemy.hitbox().center();
    let Some(target) = nearest_duelist(center, duelists) else {
        return;
    };
    let to_target = duelists[target].hitbox().center() - center;
    let dist = to_target.length().max(1.0);
    enemy.pos += to_target / dist * enemy.speed;
}

/// Fire, cool down, then resolve the enemy's shots against obstacles and
/// both duelists.
pub fn update_enemy<R: Rng + ?Sized>(
    enemy: &mut Enemy,
    obstacles: &[Obstacle],
    duelists: &mut [Duelist; 2],
    rng: &mut R,
) {
    hunt(enemy, duelists);
    enemy.try_emit(rng);
    enemy.cool_down();
    enemy.advance();
    absorb_shots(&mut enemy.shots, obstacles);
    for d in duelists.iter_mut() {
        strike(&mut enemy.shots, d);
    }
}

/// Candidate spawn points whose enemy-sized box clears every obstacle.
pub fn valid_spawn_points(candidates: &[Vec2], obstacles: &[Obstacle]) -> Vec<Vec2> {
    candidates
        .iter()
        .copied()
        .filter(|&p| {
            let hb = Enemy::new(p, 0).hitbox();
            !obstacles.iter().any(|o| hb.intersects(&o.rect))
        })
        .collect()
}

/// Draw `count` enemies (with replacement) from the valid pool. An empty
/// pool yields no enemies.
pub fn draw_enemies<R: Rng + ?Sized>(pool: &[Vec2], count: usize, rng: &mut R) -> Vec<Enemy> {
    (0..count)
        .filter_map(|_| pool.choose(rng).map(|&p| Enemy::new(p, rng.gen_range(30..=90))))
        .collect()
}

// ── Boss ─────────────────────────────────────────────────────────────────────

/// Sit out the start delay, then sweep horizontally, turning at the edges.
pub fn patrol(boss: &mut Boss) {
    if boss.start_delay > 0 {
        boss.start_delay -= 1;
        if boss.start_delay == 0 {
            log::debug!("boss is awake");
        }
        return;
    }
    boss.pos.x += boss.speed * boss.direction;
    let hb = boss.hitbox();
    if hb.left() <= 0.0 {
        boss.direction = 1.0;
    } else if hb.right() >= WIDTH {
        boss.direction = -1.0;
    }
}

/// Move, fire and resolve the boss's shots against both duelists.
pub fn update_boss<R: Rng + ?Sized>(boss: &mut Boss, duelists: &mut [Duelist; 2], rng: &mut R) {
    patrol(boss);
    boss.try_emit(rng);
    boss.cool_down();
    boss.advance();
    for d in duelists.iter_mut() {
        strike(&mut boss.shots, d);
    }
}

// ── Ball ─────────────────────────────────────────────────────────────────────

/// New ball at the field centre with a random diagonal velocity.
pub fn serve<R: Rng + ?Sized>(rng: &mut R) -> Ball {
    let mut pick = || *BALL_SERVE_SPEEDS.choose(rng).unwrap_or(&BALL_KICK_SPEED);
    let vel = Vec2::new(pick(), pick());
    Ball { pos: Ball::center_spot(), vel }
}

/// Move one tick, bounce off the edges, and keep the ball on the field.
pub fn roll(ball: &mut Ball) {
    ball.pos += ball.vel;
    let hb = ball.hitbox();
    if hb.top() <= 0.0 || hb.bottom() >= HEIGHT {
        ball.vel.y = -ball.vel.y;
    }
    if hb.left() <= 0.0 || hb.right() >= WIDTH {
        ball.vel.x = -ball.vel.x;
    }
    ball.pos = crate::geometry::clamp_to_field(ball.pos, Vec2::splat(BALL_SIZE));
}

pub fn touching(ball: &Ball, duelist: &Duelist) -> bool {
    ball.pos.distance(duelist.pos) < BALL_REACH
}

/// Knock the ball directly away from the duelist: each velocity component
/// takes the sign of the ball's offset on that axis. Coincident positions
/// send it to the right.
pub fn kick(ball: &mut Ball, duelist: &Duelist) {
    let offset = ball.pos - duelist.pos;
    let sign = |v: f32| {
        if v > 0.0 {
            1.0
        } else if v < 0.0 {
            -1.0
        } else {
            0.0
        }
    };
    let dir = Vec2::new(sign(offset.x), sign(offset.y));
    ball.vel = if dir == Vec2::ZERO {
        Vec2::new(BALL_KICK_SPEED, 0.0)
    } else {
        dir * BALL_KICK_SPEED
    };
}
