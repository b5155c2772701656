//! Shared motion integration and ground/platform resolution
//!
//! The knight and every enemy move through the same code path: apply gravity
//! to vertical velocity, integrate position (explicit Euler, one tick), then
//! resolve landings against the ground line and platform tops. Platforms are
//! one-way: only a falling body whose top edge is still above the platform
//! top lands on it. Side and underside contact is not resolved, so a body
//! can overlap a platform's flank.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;
use super::state::{Platform, World};

/// Common physical state embedded in the knight and every enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
        }
    }

    /// Bounding box at the current position
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Advance a body by one tick: gravity, integration, landing resolution
pub fn step_body(body: &mut Body, gravity: f32, world: &World, platforms: &[Platform]) {
    body.vel.y += gravity;
    body.pos += body.vel;

    body.on_ground = false;

    // Ground line
    if body.pos.y + body.size.y >= world.ground_y {
        body.pos.y = world.ground_y - body.size.y;
        body.vel.y = 0.0;
        body.on_ground = true;
    }

    // Platform tops: landing from above only
    for platform in platforms {
        if body.aabb().intersects(&platform.rect)
            && body.vel.y > 0.0
            && body.pos.y < platform.rect.pos.y
        {
            body.pos.y = platform.rect.pos.y - body.size.y;
            body.vel.y = 0.0;
            body.on_ground = true;
        }
    }
}
