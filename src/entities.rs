/// Game entity types. Pure data, no game rules.

use glam::Vec2;

use crate::consts::*;
use crate::geometry::Rect;

// ── Identity & palette ────────────────────────────────────────────────────────

/// Which of the two duelists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
}

// ── Input binding ─────────────────────────────────────────────────────────────

/// The platform-neutral key set the game listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

/// Four movement keys and one fire key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl Controls {
    pub const fn wasd() -> Self {
        Self { up: Key::W, down: Key::S, left: Key::A, right: Key::D, fire: Key::Space }
    }

    pub const fn arrows() -> Self {
        Self { up: Key::Up, down: Key::Down, left: Key::Left, right: Key::Right, fire: Key::Enter }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Owner {
    Duelist(Side),
    Enemy,
    Boss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    /// Top-left corner.
    pub pos: Vec2,
    /// Displacement applied every tick.
    pub vel: Vec2,
    pub owner: Owner,
    pub color: Color,
}

impl Projectile {
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, SHOT_SIZE, SHOT_SIZE)
    }
}

// ── Duelist ───────────────────────────────────────────────────────────────────

/// A player-controlled actor. Only carries fields that every level uses;
/// anything level-specific lives in that level's own state.
#[derive(Clone, Debug)]
pub struct Duelist {
    pub side: Side,
    pub pos: Vec2,
    pub facing: Facing,
    pub speed: f32,
    pub lives: u32,
    /// Ticks until the next shot is allowed.
    pub cooldown: u32,
    pub shots: Vec<Projectile>,
    pub controls: Controls,
    pub color: Color,
}

impl Duelist {
    pub fn new(side: Side) -> Self {
        let (pos, facing, controls, color) = match side {
            Side::One => (Vec2::new(100.0, HEIGHT / 2.0), Facing::Right, Controls::wasd(), Color::Blue),
            Side::Two => (
                Vec2::new(WIDTH - 130.0, HEIGHT / 2.0),
                Facing::Left,
                Controls::arrows(),
                Color::Red,
            ),
        };
        Self {
            side,
            pos,
            facing,
            speed: DUELIST_SPEED,
            lives: DUELIST_LIVES,
            cooldown: 0,
            shots: Vec::new(),
            controls,
            color,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::splat(DUELIST_SIZE)
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, Self::size())
    }

    pub fn is_out(&self) -> bool {
        self.lives == 0
    }
}

/// Fresh duelist pair for a new match.
pub fn duelist_pair() -> [Duelist; 2] {
    [Duelist::new(Side::One), Duelist::new(Side::Two)]
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Static wall. Blocks duelists and absorbs every projectile that touches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }
}

// ── Enemy & boss ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Vec2,
    pub speed: f32,
    pub cooldown: u32,
    pub shots: Vec<Projectile>,
    /// Cleared by a single hit; dead enemies are dropped with their shots.
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, cooldown: u32) -> Self {
        Self { pos, speed: ENEMY_SPEED, cooldown, shots: Vec::new(), alive: true }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, Vec2::splat(ENEMY_SIZE))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPhase {
    /// Waiting out the start delay; neither moves nor fires.
    Dormant,
    Patrolling,
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub pos: Vec2,
    pub speed: f32,
    /// +1.0 moving right, -1.0 moving left.
    pub direction: f32,
    pub health: i32,
    pub cooldown: u32,
    pub start_delay: u32,
    pub shots: Vec<Projectile>,
}

impl Boss {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0 - BOSS_SIZE / 2.0, HEIGHT / 2.0 - BOSS_SIZE / 2.0),
            speed: BOSS_SPEED,
            direction: 1.0,
            health: BOSS_HEALTH,
            cooldown: 0,
            start_delay: BOSS_START_DELAY,
            shots: Vec::new(),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, Vec2::splat(BOSS_SIZE))
    }

    pub fn phase(&self) -> BossPhase {
        if self.start_delay > 0 {
            BossPhase::Dormant
        } else {
            BossPhase::Patrolling
        }
    }

    /// Visual state switch at half health.
    pub fn enraged(&self) -> bool {
        self.health <= BOSS_ENRAGE_HEALTH
    }

    pub fn defeated(&self) -> bool {
        self.health <= 0
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

// ── Ball ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, Vec2::splat(BALL_SIZE))
    }

    /// Top-left corner that puts the ball's centre on the field centre.
    pub fn center_spot() -> Vec2 {
        Vec2::new(WIDTH / 2.0 - BALL_SIZE / 2.0, HEIGHT / 2.0 - BALL_SIZE / 2.0)
    }
}

// ── Match bookkeeping ─────────────────────────────────────────────────────────

/// Result of one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    Won(Side),
}

impl Outcome {
    /// 0 = draw, 1 = duelist one, 2 = duelist two.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::Won(Side::One) => 1,
            Outcome::Won(Side::Two) => 2,
        }
    }

    /// Winner when one side may be knocked out: the side still standing
    /// wins, anything else is a draw.
    pub fn by_knockout(one: &Duelist, two: &Duelist) -> Outcome {
        match (one.is_out(), two.is_out()) {
            (false, true) => Outcome::Won(Side::One),
            (true, false) => Outcome::Won(Side::Two),
            _ => Outcome::Draw,
        }
    }
}

/// Running score carried from level to level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchState {
    pub scores: [u32; 2],
    /// Zero-based index of the level being played.
    pub level_index: usize,
    /// Levels finished so far, draws included.
    pub levels_played: usize,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// Add a level result: +1 for the winner, nothing for a draw.
    pub fn record(&mut self, outcome: Outcome) {
        self.levels_played += 1;
        if let Outcome::Won(side) = outcome {
            self.scores[side.index()] += 1;
        }
    }

    /// Final verdict: higher score wins, equal scores draw.
    pub fn final_outcome(&self) -> Outcome {
        let [one, two] = self.scores;
        if one > two {
            Outcome::Won(Side::One)
        } else if two > one {
            Outcome::Won(Side::Two)
        } else {
            Outcome::Draw
        }
    }
}
