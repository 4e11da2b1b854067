//! Level 2: both duelists hold a horizontal lane and fight a shared boss.

use std::cmp::Ordering;

use glam::Vec2;
use rand::Rng;

use crate::ai::update_boss;
use crate::compute::{intent_delta, move_clamped, strike_each, update_duelist_shots, Emitter};
use crate::consts::*;
use crate::entities::{Boss, Duelist, Facing, MatchState, Outcome, Side};
use crate::platform::ControlIntent;
use crate::render::Frame;

#[derive(Clone, Debug)]
pub struct BossLevel {
    pub boss: Boss,
}

impl BossLevel {
    /// Duelist one takes the bottom lane facing up, duelist two the top lane
    /// facing down.
    pub fn new(duelists: &mut [Duelist; 2]) -> Self {
        let x = WIDTH / 2.0 - DUELIST_SIZE / 2.0;
        let [one, two] = &mut *duelists;
        one.pos = Vec2::new(x, HEIGHT - 50.0);
        one.facing = Facing::Up;
        two.pos = Vec2::new(x, 20.0);
        two.facing = Facing::Down;
        for d in duelists.iter_mut() {
            d.speed = DUELIST_SPEED;
        }
        Self { boss: Boss::new() }
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
            let delta = intent_delta(intent, d.speed);
            move_clamped(d, Vec2::new(delta.x, 0.0));
        }

        {
            let [one, two] = &mut *duelists;
            update_duelist_shots(one, &[], &mut [], Some(&mut *two));
            update_duelist_shots(two, &[], &mut [], Some(&mut *one));
            strike_each(&mut one.shots, &mut self.boss);
            strike_each(&mut two.shots, &mut self.boss);
        }

        update_boss(&mut self.boss, duelists, rng);

        let [one, two] = &*duelists;
        if one.is_out() || two.is_out() || self.boss.defeated() {
            if self.boss.defeated() {
                log::info!("boss defeated");
            }
            return Some(settle(one, two));
        }
        None
    }

    pub fn render(&self, duelists: &[Duelist; 2], state: &MatchState, frame: &mut Frame) {
        for d in duelists {
            frame.duelist(d);
        }
        frame.boss(&self.boss);
        for d in duelists {
            frame.shots(&d.shots);
        }
        frame.shots(&self.boss.shots);
        frame.score_line(state, 10.0);
    }
}

/// A knocked-out duelist loses outright; otherwise more lives left wins.
fn settle(one: &Duelist, two: &Duelist) -> Outcome {
    match Outcome::by_knockout(one, two) {
        Outcome::Draw => match one.lives.cmp(&two.lives) {
            Ordering::Greater => Outcome::Won(Side::One),
            Ordering::Less => Outcome::Won(Side::Two),
            Ordering::Equal => Outcome::Draw,
        },
        decided => decided,
    }
}
