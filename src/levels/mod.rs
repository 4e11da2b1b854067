//! The five level state machines.
//!
//! Each level owns only the state it needs, is built on entry and dropped on
//! exit. A `tick` reads the duelists' intents, advances every actor,
//! resolves collisions and checks the level's terminal condition, in that
//! order. `render` turns the current state into a draw list.

pub mod boss_fight;
pub mod float_duel;
pub mod reaction;
pub mod shooter;
pub mod soccer;

use rand::Rng;

use crate::entities::{Duelist, MatchState, Outcome, Side};
use crate::platform::ControlIntent;
use crate::render::Frame;

pub use boss_fight::BossLevel;
pub use float_duel::FloatLevel;
pub use reaction::{Light, ReactionLevel};
pub use shooter::ShooterLevel;
pub use soccer::SoccerLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    Shooter,
    BossFight,
    FloatDuel,
    Reaction,
    Soccer,
}

impl LevelKind {
    /// Play order.
    pub const ALL: [LevelKind; 5] = [
        LevelKind::Shooter,
        LevelKind::BossFight,
        LevelKind::FloatDuel,
        LevelKind::Reaction,
        LevelKind::Soccer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LevelKind::Shooter => "Free-roam shooter",
            LevelKind::BossFight => "Boss fight",
            LevelKind::FloatDuel => "Float duel",
            LevelKind::Reaction => "Reaction duel",
            LevelKind::Soccer => "Ball game",
        }
    }
}

/// A running level.
#[derive(Clone, Debug)]
pub enum Level {
    Shooter(ShooterLevel),
    BossFight(BossLevel),
    FloatDuel(FloatLevel),
    Reaction(ReactionLevel),
    Soccer(SoccerLevel),
}

impl Level {
    /// Build the level and place the duelists for it.
    pub fn enter<R: Rng + ?Sized>(kind: LevelKind, duelists: &mut [Duelist; 2], rng: &mut R) -> Self {
        match kind {
            LevelKind::Shooter => Level::Shooter(ShooterLevel::new(duelists, rng)),
            LevelKind::BossFight => Level::BossFight(BossLevel::new(duelists)),
            LevelKind::FloatDuel => Level::FloatDuel(FloatLevel::new(duelists)),
            LevelKind::Reaction => Level::Reaction(ReactionLevel::new(duelists, rng)),
            LevelKind::Soccer => Level::Soccer(SoccerLevel::new(duelists, rng)),
        }
    }

    pub fn kind(&self) -> LevelKind {
        match self {
            Level::Shooter(_) => LevelKind::Shooter,
            Level::BossFight(_) => LevelKind::BossFight,
            Level::FloatDuel(_) => LevelKind::FloatDuel,
            Level::Reaction(_) => LevelKind::Reaction,
            Level::Soccer(_) => LevelKind::Soccer,
        }
    }

    /// Advance one tick. `Some` once the level is decided.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        duelists: &mut [Duelist; 2],
        intents: &[ControlIntent; 2],
        rng: &mut R,
    ) -> Option<Outcome> {
        match self {
            Level::Shooter(l) => l.tick(duelists, intents, rng),
            Level::BossFight(l) => l.tick(duelists, intents, rng),
            Level::FloatDuel(l) => l.tick(duelists, intents, rng),
            Level::Reaction(l) => l.tick(duelists, intents, rng),
            Level::Soccer(l) => l.tick(duelists, intents, rng),
        }
    }

    pub fn render(&self, duelists: &[Duelist; 2], state: &MatchState) -> Frame {
        let mut frame = Frame::new();
        match self {
            Level::Shooter(l) => l.render(duelists, state, &mut frame),
            Level::BossFight(l) => l.render(duelists, state, &mut frame),
            Level::FloatDuel(l) => l.render(duelists, state, &mut frame),
            Level::Reaction(l) => l.render(duelists, state, &mut frame),
            Level::Soccer(l) => l.render(duelists, state, &mut frame),
        }
        frame
    }
}

/// Decide a tick in which either duelist may have landed the winning hit.
/// Simultaneous hits cancel out into a draw.
pub(crate) fn first_hit(one_hit: bool, two_hit: bool) -> Option<Outcome> {
    match (one_hit, two_hit) {
        (true, false) => Some(Outcome::Won(Side::One)),
        (false, true) => Some(Outcome::Won(Side::Two)),
        (true, true) => Some(Outcome::Draw),
        (false, false) => None,
    }
}
