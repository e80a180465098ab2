//! Axis-aligned grid element geometry
//!
//! Every entity is an anchor point plus a hit box relative to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Absolute hit box rectangle in grid units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Inclusive on all four edges, so zero-width boxes still match on their line
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A rectangular entity on the virtual grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridElement {
    /// Top-left anchor
    pub pos: Vec2,
    /// Hit box offset from the anchor
    pub box_offset: Vec2,
    /// Hit box width/height
    pub box_size: Vec2,
}

impl GridElement {
    pub fn new(pos: Vec2, box_offset: Vec2, box_size: Vec2) -> Self {
        Self {
            pos,
            box_offset,
            box_size,
        }
    }

    #[inline]
    pub fn grid_x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn grid_y(&self) -> f32 {
        self.pos.y
    }

    /// Move the anchor (hit box follows)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
    }

    pub fn bounds(&self) -> Bounds {
        let origin = self.pos + self.box_offset;
        Bounds {
            x: origin.x,
            y: origin.y,
            width: self.box_size.x,
            height: self.box_size.y,
        }
    }

    /// Center of the hit box
    pub fn center(&self) -> Vec2 {
        self.pos + self.box_offset + self.box_size * 0.5
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }
}
