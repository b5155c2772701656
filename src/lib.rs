//! Knight Brawl - a side-scrolling arena brawler
//!
//! Core module:
//! - `sim`: Deterministic simulation (physics, combat, spawning, game state)
//!
//! Rendering, raw keyboard capture, HUD updates, and the outer frame
//! scheduler are external front-ends: they feed a [`sim::TickInput`] into
//! [`sim::tick`] once per frame and read the public [`sim::GameState`]
//! afterwards to draw the scene.

pub mod sim;

pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Logical simulation rate. One tick is one frame; velocities are in
    /// pixels per tick and timers count ticks.
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Arena dimensions
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    pub const GROUND_Y: f32 = 720.0;

    /// Knight defaults
    pub const KNIGHT_WIDTH: f32 = 40.0;
    pub const KNIGHT_HEIGHT: f32 = 50.0;
    pub const KNIGHT_SPAWN_X: f32 = 200.0;
    pub const KNIGHT_SPAWN_Y: f32 = 600.0;
    pub const KNIGHT_MAX_HEALTH: u32 = 100;
    /// Maximum horizontal speed
    pub const KNIGHT_SPEED: f32 = 6.0;
    /// Horizontal acceleration while a direction is held
    pub const KNIGHT_ACCEL: f32 = 0.8;
    /// Multiplicative damping when no direction is held
    pub const KNIGHT_FRICTION: f32 = 0.82;
    /// Upward impulse applied on jump
    pub const KNIGHT_JUMP_POWER: f32 = 22.0;
    /// Knight gravity is lighter than enemy gravity - floatier jump arc
    pub const KNIGHT_GRAVITY: f32 = 0.7;
    pub const ENEMY_GRAVITY: f32 = 0.9;

    /// Sword swing animation duration (ticks)
    pub const ATTACK_SWING_TICKS: u32 = 25;
    /// Minimum ticks between swings
    pub const ATTACK_COOLDOWN_TICKS: u32 = 30;
    /// Active window of a swing hitbox (ticks)
    pub const ATTACK_HITBOX_TICKS: u32 = 20;
    pub const ATTACK_WIDTH: f32 = 30.0;
    pub const ATTACK_HEIGHT: f32 = 25.0;
    /// Hitbox offset below the knight's top edge
    pub const ATTACK_OFFSET_Y: f32 = 15.0;

    /// Invulnerability window after taking damage (ticks)
    pub const INVULN_TICKS: u32 = 90;

    /// Spawn/difficulty curve
    pub const SPAWN_INTERVAL_START: u32 = 240;
    pub const SPAWN_INTERVAL_MIN: u32 = 120;
    pub const SPAWN_INTERVAL_STEP: u32 = 30;
    /// Ticks per difficulty wave
    pub const WAVE_LENGTH_TICKS: u64 = 1800;
    /// Chance of an extra burst spawn following a regular spawn (wave 3+)
    pub const BURST_SPAWN_CHANCE: f64 = 0.4;
    /// Burst spawns land this many ticks after the spawn that queued them
    pub const BURST_SPAWN_DELAY_TICKS: u64 = 4;

    /// Enemies enter the arena this far outside the horizontal bounds
    pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;
    /// Enemies this far outside the bounds are despawned
    pub const ENEMY_DESPAWN_MARGIN: f32 = 200.0;
    /// Pursuit dead zone - enemies closer than this stop steering
    pub const ENEMY_CHASE_DEADZONE: f32 = 10.0;
    /// Enemies spawn this far above the ground line and drop in
    pub const ENEMY_SPAWN_DROP: f32 = 40.0;

    /// Particle ballistics
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    pub const PARTICLE_DAMPING: f32 = 0.98;

    /// Animation cadences (ticks per frame)
    pub const KNIGHT_ANIM_PERIOD: u8 = 8;
    pub const ENEMY_ANIM_PERIOD: u8 = 15;
    pub const ANIM_FRAMES: u8 = 4;
}
