/// Axis-aligned rectangle maths shared by every actor.

use glam::Vec2;

use crate::consts::{HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True once no part of the rectangle is left inside the play field.
    pub fn outside_field(&self) -> bool {
        self.right() < 0.0 || self.left() > WIDTH || self.bottom() < 0.0 || self.top() > HEIGHT
    }
}

/// Clamp a top-left position so a box of `size` stays inside the field.
pub fn clamp_to_field(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(0.0, WIDTH - size.x),
        pos.y.clamp(0.0, HEIGHT - size.y),
    )
}
