//! Level 5: a ball game. Knock the ball into the far goal mouth three times.

use glam::Vec2;
use rand::Rng;

use crate::ai::{kick, roll, serve, touching};
use crate::assets::SpriteId;
use crate::compute::{intent_delta, move_clamped};
use crate::consts::*;
use crate::entities::{Ball, Color, Duelist, Facing, MatchState, Outcome, Side};
use crate::geometry::Rect;
use crate::platform::ControlIntent;
use crate::render::{FontSize, Frame};

pub const GOALS_TO_WIN: u32 = 3;
pub const SOCCER_SPEED: f32 = 8.0;
pub const GOAL_WIDTH: f32 = 30.0;
pub const GOAL_HEIGHT: f32 = 150.0;

#[derive(Clone, Debug)]
pub struct SoccerLevel {
    pub ball: Ball,
    /// Goals scored, indexed by `Side::index`.
    pub goals: [u32; 2],
}

impl SoccerLevel {
    pub fn new<R: Rng + ?Sized>(duelists: &mut [Duelist; 2], rng: &mut R) -> Self {
        let y = HEIGHT / 2.0 - DUELIST_SIZE / 2.0;
        let [one, two] = &mut *duelists;
        one.pos = Vec2::new(50.0, y);
        one.facing = Facing::Right;
        two.pos = Vec2::new(WIDTH - 50.0 - DUELIST_SIZE, y);
        two.facing = Facing::Left;
        for d in duelists.iter_mut() {
            d.speed = SOCCER_SPEED;
        }
        Self { ball: serve(rng), goals: [0, 0] }
    }

    /// The goal mouth `side` shoots at. Duelist one attacks the right edge.
    pub fn goal_of(side: Side) -> Rect {
        let y = HEIGHT / 2.0 - GOAL_HEIGHT / 2.0;
        match side {
            Side::One => Rect::new(WIDTH - GOAL_WIDTH, y, GOAL_WIDTH, GOAL_HEIGHT),
            Side::Two => Rect::new(0.0, y, GOAL_WIDTH, GOAL_HEIGHT),
        }
    }

    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        duelists: &mut [Duelist; 2],
        intents: &[ControlIntent; 2],
        rng: &mut R,
    ) -> Option<Outcome> {
        for (d, intent) in duelists.iter_mut().zip(intents) {
            let delta = intent_delta(intent, d.speed);
            move_clamped(d, delta);
        }

        roll(&mut self.ball);
        for d in duelists.iter() {
            if touching(&self.ball, d) {
                kick(&mut self.ball, d);
            }
        }

        for side in [Side::Two, Side::One] {
            if self.ball.hitbox().intersects(&Self::goal_of(side)) {
                self.goals[side.index()] += 1;
                log::debug!("goal for {:?}: {} x {}", side, self.goals[0], self.goals[1]);
                self.ball = serve(rng);
                if self.goals[side.index()] >= GOALS_TO_WIN {
                    return Some(Outcome::Won(side));
                }
            }
        }
        None
    }

    pub fn render(&self, duelists: &[Duelist; 2], state: &MatchState, frame: &mut Frame) {
        for d in duelists {
            frame.fill(d.hitbox(), d.color);
        }
        frame.sprite(SpriteId::Ball, self.ball.pos);
        for side in Side::BOTH {
            frame.outline(Self::goal_of(side), Color::White);
        }
        frame.text(
            format!("{} x {}", self.goals[0], self.goals[1]),
            FontSize::Normal,
            Color::White,
            Vec2::new(WIDTH / 2.0, 20.0),
        );
        frame.score_line(state, HEIGHT - 30.0);
    }
}
