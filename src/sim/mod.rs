//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod physics;
pub mod rect;
pub mod state;
pub mod tick;

pub use physics::{Body, step_body};
pub use rect::Aabb;
pub use state::{
    Attack, EffectKind, Enemy, EnemyKind, GamePhase, GameState, KindStats, Knight, MAX_PARTICLES,
    Particle, Platform, World,
};
pub use tick::{TickInput, tick};
