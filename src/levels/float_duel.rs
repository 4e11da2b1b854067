//! Level 3: after a countdown both duelists bob up and down in mirror
//! image, each allowed a single shot in flight. First hit wins.

use glam::Vec2;
use rand::Rng;

use crate::compute::{any_touching, update_duelist_shots, Emitter};
use crate::consts::*;
use crate::entities::{Color, Duelist, Facing, MatchState, Outcome};
use crate::levels::first_hit;
use crate::platform::ControlIntent;
use crate::render::{FontSize, Frame};

pub const COUNTDOWN_TICKS: u32 = 3 * FPS;
pub const FLOAT_SPEED: f32 = 2.0;
/// Vertical band the bobbing reverses at.
pub const FLOAT_TOP: f32 = HEIGHT / 4.0;
pub const FLOAT_BOTTOM: f32 = 3.0 * HEIGHT / 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPhase {
    Countdown,
    Active,
}

#[derive(Clone, Debug)]
pub struct FloatLevel {
    /// Ticks left before the duel starts.
    pub countdown: u32,
    /// +1.0 while duelist one sinks and duelist two rises, -1.0 reversed.
    pub direction: f32,
    pub float_speed: f32,
}

/// Duelists face each other across the middle of the field.
pub(crate) fn face_off(duelists: &mut [Duelist; 2]) {
    let y = HEIGHT / 2.0 - DUELIST_SIZE / 2.0;
    let [one, two] = &mut *duelists;
    one.pos = Vec2::new(WIDTH / 4.0 - DUELIST_SIZE / 2.0, y);
    one.facing = Facing::Right;
    two.pos = Vec2::new(3.0 * WIDTH / 4.0 - DUELIST_SIZE / 2.0, y);
    two.facing = Facing::Left;
    for d in duelists.iter_mut() {
        d.speed = DUELIST_SPEED;
    }
}

impl FloatLevel {
    pub fn new(duelists: &mut [Duelist; 2]) -> Self {
        face_off(duelists);
        Self { countdown: COUNTDOWN_TICKS, direction: 1.0, float_speed: FLOAT_SPEED }
    }

    pub fn phase(&self) -> FloatPhase {
        if self.countdown > 0 {
            FloatPhase::Countdown
        } else {
            FloatPhase::Active
        }
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        duelists: &mut [Duelist; 2],
        intents: &[ControlIntent; 2],
        rng: &mut R,
    ) -> Option<Outcome> {
        let [one, two] = &mut *duelists;

        if self.phase() == FloatPhase::Active {
            // A shot spawned on top of the opponent lands at once.
            let one_hit = intents[0].fire && fire_single(one, two, rng);
            let two_hit = intents[1].fire && fire_single(two, one, rng);
            if let Some(outcome) = first_hit(one_hit, two_hit) {
                return Some(outcome);
            }

            one.pos.y += self.float_speed * self.direction;
            two.pos.y -= self.float_speed * self.direction;
            let out_of_band = |d: &Duelist| d.pos.y <= FLOAT_TOP || d.pos.y >= FLOAT_BOTTOM;
            if out_of_band(&*one) || out_of_band(&*two) {
                self.direction = -self.direction;
            }
        } else {
            self.countdown -= 1;
            if self.countdown == 0 {
                log::debug!("float duel started");
            }
        }

        if self.phase() == FloatPhase::Active {
            let one_hit = update_duelist_shots(one, &[], &mut [], Some(&mut *two));
            let two_hit = update_duelist_shots(two, &[], &mut [], Some(&mut *one));
            if let Some(outcome) = first_hit(one_hit, two_hit) {
                return Some(outcome);
            }
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
        if self.phase() == FloatPhase::Countdown {
            frame.text(
                (self.countdown / FPS + 1).to_string(),
                FontSize::Big,
                Color::White,
                Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
            );
        }
        frame.score_line(state, 10.0);
    }
}

/// Fire only when nothing of ours is in flight; reports an immediate hit.
fn fire_single<R: Rng + ?Sized>(shooter: &mut Duelist, target: &Duelist, rng: &mut R) -> bool {
    if !shooter.shots.is_empty() || !shooter.try_emit(rng) {
        return false;
    }
    any_touching(&shooter.shots, &target.hitbox())
}
