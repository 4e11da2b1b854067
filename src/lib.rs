//! Duel Minigames - a local two-player arcade duel
//!
//! Core modules:
//! - `geometry`: axis-aligned rectangles and the field bounds tests
//! - `entities`: plain data for duelists, projectiles, enemies, boss and ball
//! - `compute`: movement, emitters and projectile collision resolution
//! - `ai`: enemy hunting, boss patrol and ball physics
//! - `levels`: the five level state machines
//! - `orchestrator`: runs the levels in sequence and keeps the match score
//! - `platform` / `render` / `assets`: the narrow seams to the outside world

pub mod ai;
pub mod assets;
pub mod compute;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod levels;
pub mod logging;
pub mod orchestrator;
pub mod platform;
pub mod render;

pub use error::GameError;

/// Fixed game rules. Not configurable.
pub mod consts {
    /// Play field size in pixels.
    pub const WIDTH: f32 = 1000.0;
    pub const HEIGHT: f32 = 800.0;
    /// Simulation rate.
    pub const FPS: u32 = 60;

    pub const DUELIST_SIZE: f32 = 30.0;
    pub const DUELIST_SPEED: f32 = 5.0;
    pub const DUELIST_LIVES: u32 = 3;
    pub const DUELIST_COOLDOWN: u32 = 15;
    pub const DUELIST_SHOT_SPEED: f32 = 7.0;

    pub const SHOT_SIZE: f32 = 5.0;

    pub const ENEMY_SIZE: f32 = 25.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_SHOT_SPEED: f32 = 4.0;

    pub const BOSS_SIZE: f32 = 60.0;
    pub const BOSS_SPEED: f32 = 4.0;
    pub const BOSS_HEALTH: i32 = 20;
    pub const BOSS_ENRAGE_HEALTH: i32 = 10;
    pub const BOSS_COOLDOWN: u32 = 30;
    pub const BOSS_START_DELAY: u32 = 2 * FPS;
    pub const BOSS_BURST: usize = 12;
    pub const BOSS_SHOT_SPEED: f32 = 5.0;

    pub const BALL_SIZE: f32 = 30.0;
    /// Velocity components a freshly served ball may take.
    pub const BALL_SERVE_SPEEDS: [f32; 4] = [-4.0, -3.0, 3.0, 4.0];
    pub const BALL_KICK_SPEED: f32 = 4.0;
    /// Top-left to top-left distance under which a duelist touches the ball.
    pub const BALL_REACH: f32 = 40.0;

    /// Frames shown between two levels.
    pub const INTERMISSION_TICKS: u32 = FPS;
}
