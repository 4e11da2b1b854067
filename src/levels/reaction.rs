//! Level 4: red light / green light. Shots only count while the light is
//! green, and only the first press of a green phase gets through.

use glam::Vec2;
use rand::Rng;

use crate::assets::SpriteId;
use crate::compute::{update_duelist_shots, Emitter};
use crate::consts::*;
use crate::entities::{Color, Duelist, MatchState, Outcome};
use crate::levels::first_hit;
use crate::levels::float_duel::face_off;
use crate::platform::ControlIntent;
use crate::render::{FontSize, Frame};

pub const GREEN_TICKS: u32 = FPS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Light {
    Red,
    Green,
}

#[derive(Clone, Debug)]
pub struct ReactionLevel {
    pub light: Light,
    /// Ticks spent in the current light phase.
    pub elapsed: u32,
    /// Length of the current light phase.
    pub phase_len: u32,
    /// Closed by the first accepted shot of a green phase.
    pub shot_fired: bool,
}

/// Red lasts a random whole number of seconds, two to four.
fn red_len<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(2..=4) * FPS
}

impl ReactionLevel {
    pub fn new<R: Rng + ?Sized>(duelists: &mut [Duelist; 2], rng: &mut R) -> Self {
        face_off(duelists);
        Self { light: Light::Red, elapsed: 0, phase_len: red_len(rng), shot_fired: false }
    }

    pub fn can_shoot(&self) -> bool {
        self.light == Light::Green && !self.shot_fired
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        duelists: &mut [Duelist; 2],
        intents: &[ControlIntent; 2],
        rng: &mut R,
    ) -> Option<Outcome> {
        // Presses during red, or after the latch closed, do nothing at all.
        if self.can_shoot() {
            for (d, intent) in duelists.iter_mut().zip(intents) {
                if intent.fire {
                    d.try_emit(rng);
                    self.shot_fired = true;
                    log::debug!("{:?} fired on green", d.side);
                }
            }
        }

        self.elapsed += 1;
        if self.elapsed >= self.phase_len {
            self.elapsed = 0;
            match self.light {
                Light::Red => {
                    self.light = Light::Green;
                    self.shot_fired = false;
                    self.phase_len = GREEN_TICKS;
                }
                Light::Green => {
                    self.light = Light::Red;
                    self.phase_len = red_len(rng);
                }
            }
            log::debug!("light is now {:?}", self.light);
        }

        let [one, two] = &mut *duelists;
        let one_hit = update_duelist_shots(one, &[], &mut [], Some(&mut *two));
        let two_hit = update_duelist_shots(two, &[], &mut [], Some(&mut *one));
        if let Some(outcome) = first_hit(one_hit, two_hit) {
            return Some(outcome);
        }

        if one.is_out() || two.is_out() {
            return Some(Outcome::by_knockout(one, two));
        }
        None
    }

    pub fn render(&self, duelists: &[Duelist; 2], state: &MatchState, frame: &mut Frame) {
        for d in duelists {
            frame.duelist(d);
        }
        for d in duelists {
            frame.shots(&d.shots);
        }

        let light = match self.light {
            Light::Green => SpriteId::LightGreen,
            Light::Red => SpriteId::LightRed,
        };
        frame.sprite(light, Vec2::new(WIDTH / 2.0 - 85.0, HEIGHT / 2.0 - 175.0));

        let (status, color) = match (self.light, self.shot_fired) {
            (Light::Green, false) => ("FIRE NOW!", Color::White),
            (Light::Green, true) => ("SHOT FIRED!", Color::Yellow),
            (Light::Red, _) => ("Wait for green...", Color::White),
        };
        frame.text(status, FontSize::Normal, color, Vec2::new(WIDTH / 2.0, HEIGHT / 2.0 + 70.0));
        frame.score_line(state, 10.0);
    }
}
