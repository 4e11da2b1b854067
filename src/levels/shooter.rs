//! Level 1: free-roam shooter in a walled arena with hunting enemies.

use glam::Vec2;
use rand::Rng;

use crate::ai::{draw_enemies, update_enemy, valid_spawn_points};
use crate::compute::{face_toward, intent_delta, try_move, update_duelist_shots, Emitter};
use crate::consts::*;
use crate::entities::{Color, Duelist, Enemy, MatchState, Obstacle, Outcome};
use crate::platform::ControlIntent;
use crate::render::Frame;

/// Enemies queued for the level.
pub const ENEMY_COUNT: usize = 5;
/// Ticks before the first enemy appears.
pub const FIRST_SPAWN_DELAY: u32 = 3 * FPS;
/// Ticks between later spawns.
pub const SPAWN_INTERVAL: u32 = FPS;

const PLACEMENT_ATTEMPTS: usize = 1000;

/// Border walls plus the interior blocks.
pub fn arena() -> Vec<Obstacle> {
    vec![
        Obstacle::new(0.0, 0.0, 20.0, HEIGHT),
        Obstacle::new(0.0, 0.0, WIDTH, 20.0),
        Obstacle::new(WIDTH - 20.0, 0.0, 20.0, HEIGHT),
        Obstacle::new(0.0, HEIGHT - 20.0, WIDTH, 20.0),
        Obstacle::new(0.0, 480.0, 350.0, 50.0),
        Obstacle::new(110.0, 632.0, 320.0, 60.0),
        Obstacle::new(550.0, 360.0, 50.0, 320.0),
        Obstacle::new(180.0, 160.0, 390.0, 60.0),
        Obstacle::new(340.0, 220.0, 50.0, 160.0),
        Obstacle::new(690.0, 100.0, 200.0, 280.0),
        Obstacle::new(150.0, 320.0, 100.0, 90.0),
    ]
}

/// Fixed candidate enemy spawn points, filtered against the arena at entry.
pub fn spawn_candidates() -> [Vec2; 10] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(900.0, 100.0),
        Vec2::new(200.0, 300.0),
        Vec2::new(700.0, 200.0),
        Vec2::new(300.0, 400.0),
        Vec2::new(600.0, 100.0),
        Vec2::new(100.0, 600.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(400.0, 700.0),
        Vec2::new(700.0, 500.0),
    ]
}

#[derive(Clone, Debug)]
pub struct ShooterLevel {
    pub obstacles: Vec<Obstacle>,
    /// Enemies on the field.
    pub enemies: Vec<Enemy>,
    /// Enemies still waiting to spawn; released from the back.
    pub pending: Vec<Enemy>,
    pub spawn_timer: u32,
}

impl ShooterLevel {
    pub fn new<R: Rng + ?Sized>(duelists: &mut [Duelist; 2], rng: &mut R) -> Self {
        Self::with_obstacles(arena(), duelists, rng)
    }

    pub fn with_obstacles<R: Rng + ?Sized>(
        obstacles: Vec<Obstacle>,
        duelists: &mut [Duelist; 2],
        rng: &mut R,
    ) -> Self {
        let pool = valid_spawn_points(&spawn_candidates(), &obstacles);
        if pool.is_empty() {
            log::warn!("every enemy spawn point is blocked; level 1 runs without enemies");
        }
        let pending = draw_enemies(&pool, ENEMY_COUNT, rng);

        for d in duelists.iter_mut() {
            d.speed = DUELIST_SPEED;
            d.pos = free_spot(&obstacles, rng);
        }

        Self { obstacles, enemies: Vec::new(), pending, spawn_timer: FIRST_SPAWN_DELAY }
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        duelists: &mut [Duelist; 2],
        intents: &[ControlIntent; 2],
        rng: &mut R,
    ) -> Option<Outcome> {
        for (d, intent) in duelists.iter_mut().zip(intents) {
            if intent.fire {
                d.try_emit(rng);
            }
        }
        for (d, intent) in duelists.iter_mut().zip(intents) {
            face_toward(d, intent);
            let delta = intent_delta(intent, d.speed);
            if delta != Vec2::ZERO {
                try_move(d, delta, &self.obstacles);
            }
        }

        {
            let [one, two] = &mut *duelists;
            update_duelist_shots(one, &self.obstacles, &mut self.enemies, Some(&mut *two));
            update_duelist_shots(two, &self.obstacles, &mut self.enemies, Some(one));
        }
        self.enemies.retain(|e| e.alive);

        if self.spawn_timer > 0 {
            self.spawn_timer -= 1;
        } else if let Some(enemy) = self.pending.pop() {
            log::debug!("enemy spawned at ({}, {})", enemy.pos.x, enemy.pos.y);
            self.enemies.push(enemy);
            self.spawn_timer = SPAWN_INTERVAL;
        }

        for enemy in &mut self.enemies {
            update_enemy(enemy, &self.obstacles, duelists, rng);
        }

        let [one, two] = &*duelists;
        if one.is_out() || two.is_out() {
            return Some(Outcome::by_knockout(one, two));
        }
        None
    }

    pub fn render(&self, duelists: &[Duelist; 2], state: &MatchState, frame: &mut Frame) {
        for o in &self.obstacles {
            frame.fill(o.rect, Color::White);
        }
        for e in &self.enemies {
            frame.fill(e.hitbox(), Color::Red);
        }
        for d in duelists {
            frame.duelist(d);
        }
        for d in duelists {
            frame.shots(&d.shots);
        }
        for e in &self.enemies {
            frame.shots(&e.shots);
        }
        frame.score_line(state, 10.0);
    }
}

/// Random obstacle-free spot for a duelist. Falls back to scanning the
/// field if random draws keep landing on walls.
fn free_spot<R: Rng + ?Sized>(obstacles: &[Obstacle], rng: &mut R) -> Vec2 {
    let size = Duelist::size();
    let clear = |pos: Vec2| {
        let hb = crate::geometry::Rect::at(pos, size);
        !obstacles.iter().any(|o| hb.intersects(&o.rect))
    };
    for _ in 0..PLACEMENT_ATTEMPTS {
        let pos = Vec2::new(
            rng.gen_range(0..=(WIDTH - size.x) as i32) as f32,
            rng.gen_range(0..=(HEIGHT - size.y) as i32) as f32,
        );
        if clear(pos) {
            return pos;
        }
    }
    log::warn!("random duelist placement failed; scanning for a free spot");
    let step = 10;
    (0..=(HEIGHT - size.y) as i32)
        .step_by(step)
        .flat_map(|y| (0..=(WIDTH - size.x) as i32).step_by(step).map(move |x| Vec2::new(x as f32, y as f32)))
        .find(|&p| clear(p))
        .unwrap_or(Vec2::ZERO)
}
