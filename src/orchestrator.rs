//! Runs the five levels back to back against one pair of duelists and keeps
//! the match score.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::entities::{duelist_pair, Color, Duelist, MatchState, Outcome};
use crate::error::GameError;
use crate::levels::{Level, LevelKind};
use crate::platform::Platform;
use crate::render::{FontSize, Frame};

/// How a single level ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelEnd {
    Finished(Outcome),
    /// The platform asked to quit at a frame boundary.
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// All levels played; `outcome` compares the final scores.
    Finished { outcome: Outcome, scores: [u32; 2] },
    /// Quit mid-match. The score so far is kept for display only.
    Aborted { scores: [u32; 2] },
}

pub struct Match {
    pub state: MatchState,
    pub duelists: [Duelist; 2],
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    pub fn new() -> Self {
        Self { state: MatchState::new(), duelists: duelist_pair() }
    }

    /// Per-level reset done before every level; the level itself places
    /// the duelists and sets their speed and facing.
    pub fn reset_duelists(&mut self) {
        for d in &mut self.duelists {
            d.lives = DUELIST_LIVES;
            d.shots.clear();
            d.cooldown = 0;
        }
    }

    /// Play every level in order, then compare scores.
    pub fn run<P: Platform, R: Rng + ?Sized>(
        &mut self,
        platform: &mut P,
        rng: &mut R,
    ) -> Result<MatchResult, GameError> {
        self.run_levels(&LevelKind::ALL, platform, rng)
    }

    /// Play `kinds` in order with an intermission after each, then compare
    /// scores.
    pub fn run_levels<P: Platform, R: Rng + ?Sized>(
        &mut self,
        kinds: &[LevelKind],
        platform: &mut P,
        rng: &mut R,
    ) -> Result<MatchResult, GameError> {
        for (index, &kind) in kinds.iter().enumerate() {
            self.state.level_index = index;
            match self.run_level(kind, platform, rng)? {
                LevelEnd::Quit => {
                    log::info!("match aborted during level {}", index + 1);
                    return Ok(MatchResult::Aborted { scores: self.state.scores });
                }
                LevelEnd::Finished(outcome) => self.state.record(outcome),
            }
            if self.intermission(platform)? {
                return Ok(MatchResult::Aborted { scores: self.state.scores });
            }
        }

        let outcome = self.state.final_outcome();
        log::info!(
            "match over: {:?} ({} x {})",
            outcome,
            self.state.scores[0],
            self.state.scores[1]
        );
        Ok(MatchResult::Finished { outcome, scores: self.state.scores })
    }

    /// Drive one level to its terminal state.
    ///
    /// Each tick polls input, advances the simulation and presents the
    /// resulting frame. Quit is only observed at the start of a tick.
    pub fn run_level<P: Platform, R: Rng + ?Sized>(
        &mut self,
        kind: LevelKind,
        platform: &mut P,
        rng: &mut R,
    ) -> Result<LevelEnd, GameError> {
        self.reset_duelists();
        let mut level = Level::enter(kind, &mut self.duelists, rng);
        log::info!("level {} ({}) starts", self.state.level_index + 1, kind.name());

        loop {
            let input = platform.poll()?;
            if input.quit {
                return Ok(LevelEnd::Quit);
            }
            let intents = [
                input.intent(&self.duelists[0].controls),
                input.intent(&self.duelists[1].controls),
            ];

            let outcome = level.tick(&mut self.duelists, &intents, rng);
            platform.present(&level.render(&self.duelists, &self.state))?;

            if let Some(outcome) = outcome {
                log::info!("level {} ends: {:?}", self.state.level_index + 1, outcome);
                return Ok(LevelEnd::Finished(outcome));
            }
            platform.wait_next_tick();
        }
    }

    /// Show the running score for a moment between levels. Returns `true`
    /// if the player quit meanwhile.
    fn intermission<P: Platform>(&self, platform: &mut P) -> Result<bool, GameError> {
        let mut frame = Frame::new();
        frame.text(
            format!("Level {} complete", self.state.level_index + 1),
            FontSize::Big,
            Color::White,
            Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 - 40.0),
        );
        frame.score_line(&self.state, HEIGHT / 2.0 + 20.0);

        for _ in 0..INTERMISSION_TICKS {
            if platform.poll()?.quit {
                return Ok(true);
            }
            platform.present(&frame)?;
            platform.wait_next_tick();
        }
        Ok(false)
    }
}
