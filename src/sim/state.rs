//! Game state and core simulation types
//!
//! Everything an external renderer or HUD needs to draw a frame lives here,
//! owned by [`GameState`] and mutated only inside the tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::Body;
use super::rect::Aabb;
use crate::consts::*;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active simulation
    Playing,
    /// Knight health reached zero; only an explicit restart leaves this
    GameOver,
}

/// Fixed arena bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Y of the ground line; bodies rest with their bottom edge here
    pub ground_y: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
        }
    }
}

/// A static one-way platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
}

/// The arena's fixed platform layout
pub fn default_platforms() -> Vec<Platform> {
    [
        (300.0, 600.0, 200.0, 20.0),
        (600.0, 500.0, 150.0, 20.0),
        (900.0, 580.0, 180.0, 20.0),
        (100.0, 450.0, 120.0, 20.0),
        (800.0, 350.0, 160.0, 20.0),
    ]
    .into_iter()
    .map(|(x, y, w, h)| Platform {
        rect: Aabb::new(x, y, w, h),
    })
    .collect()
}

/// The player-controlled knight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Knight {
    pub body: Body,
    /// Horizontal facing: 1.0 right, -1.0 left
    pub facing: f32,
    pub health: u32,
    pub max_health: u32,
    /// True while the swing animation plays
    pub attacking: bool,
    /// Swing animation ticks remaining
    pub attack_timer: u32,
    /// Ticks until the next swing is allowed
    pub attack_cooldown: u32,
    pub invulnerable: bool,
    pub invuln_timer: u32,
    pub anim_frame: u8,
    pub anim_timer: u8,
    /// Kills since last taking damage; display-only
    pub combo: u32,
}

impl Knight {
    pub fn new() -> Self {
        Self {
            body: Body::new(
                Vec2::new(KNIGHT_SPAWN_X, KNIGHT_SPAWN_Y),
                Vec2::new(KNIGHT_WIDTH, KNIGHT_HEIGHT),
            ),
            facing: 1.0,
            health: KNIGHT_MAX_HEALTH,
            max_health: KNIGHT_MAX_HEALTH,
            attacking: false,
            attack_timer: 0,
            attack_cooldown: 0,
            invulnerable: false,
            invuln_timer: 0,
            anim_frame: 0,
            anim_timer: 0,
            combo: 0,
        }
    }
}

impl Default for Knight {
    fn default() -> Self {
        Self::new()
    }
}

/// Enemy variants, each with a fixed stat profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Slime,
    Skeleton,
}

/// Per-kind stat record
#[derive(Debug, Clone, Copy)]
pub struct KindStats {
    pub size: Vec2,
    /// Pursuit speed
    pub speed: f32,
    /// Contact damage to the knight
    pub damage: u32,
    /// Score awarded on defeat
    pub points: u64,
    pub health: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Goblin,
        EnemyKind::Orc,
        EnemyKind::Slime,
        EnemyKind::Skeleton,
    ];

    pub fn stats(&self) -> KindStats {
        match self {
            EnemyKind::Goblin => KindStats {
                size: Vec2::new(30.0, 35.0),
                speed: 2.5,
                damage: 15,
                points: 10,
                health: 1,
            },
            EnemyKind::Orc => KindStats {
                size: Vec2::new(45.0, 55.0),
                speed: 1.8,
                damage: 25,
                points: 25,
                health: 2,
            },
            EnemyKind::Slime => KindStats {
                size: Vec2::new(25.0, 25.0),
                speed: 1.2,
                damage: 10,
                points: 5,
                health: 1,
            },
            EnemyKind::Skeleton => KindStats {
                size: Vec2::new(35.0, 45.0),
                speed: 3.0,
                damage: 20,
                points: 15,
                health: 1,
            },
        }
    }
}

/// A spawned enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Body,
    pub health: u32,
    pub max_health: u32,
    pub anim_frame: u8,
    pub anim_timer: u8,
    /// Reserved for scripted behaviors; the current pursuit AI ignores it
    pub behavior_timer: u32,
}

impl Enemy {
    /// Spawn at the given x, dropping in just above the ground line
    pub fn spawn(kind: EnemyKind, x: f32, ground_y: f32) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            body: Body::new(Vec2::new(x, ground_y - ENEMY_SPAWN_DROP), stats.size),
            health: stats.health,
            max_health: stats.health,
            anim_frame: 0,
            anim_timer: 0,
            behavior_timer: 0,
        }
    }
}

/// A sword swing hitbox, anchored where the knight stood when it was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attack {
    pub rect: Aabb,
    /// Ticks remaining in the active window
    pub ttl: u32,
    /// Facing at creation, for the renderer's slash arc
    pub facing: f32,
}

/// Which impact produced a particle burst (also selects its palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Sword connecting with an enemy (gold)
    Hit,
    /// Enemy connecting with the knight (red)
    Damage,
}

/// A short-lived visual particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: EffectKind,
    /// Ticks remaining
    pub life: u32,
    pub size: f32,
}

/// Particle cap; the oldest are recycled first
pub const MAX_PARTICLES: usize = 256;

fn detached_rng() -> Pcg32 {
    // Snapshots are for rendering, not resuming; a deserialized state gets a
    // fresh stream
    Pcg32::seed_from_u64(0)
}

/// Complete simulation state, owned exclusively by the tick loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub world: World,
    pub platforms: Vec<Platform>,
    pub knight: Knight,
    pub enemies: Vec<Enemy>,
    pub attacks: Vec<Attack>,
    pub particles: Vec<Particle>,
    /// Total points scored this run
    pub score: u64,
    pub enemies_defeated: u32,
    /// Difficulty tier; starts at 1 and only climbs
    pub wave: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last regular spawn
    pub spawn_timer: u32,
    /// Ticks between regular spawns; shrinks each wave down to a floor
    pub spawn_interval: u32,
    /// Target ticks for queued burst spawns, drained at the top of each tick
    pub pending_spawns: Vec<u64>,
    pub phase: GamePhase,
    #[serde(skip, default = "detached_rng")]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            world: World::default(),
            platforms: default_platforms(),
            knight: Knight::new(),
            enemies: Vec::new(),
            attacks: Vec::new(),
            particles: Vec::new(),
            score: 0,
            enemies_defeated: 0,
            wave: 1,
            time_ticks: 0,
            spawn_timer: 0,
            spawn_interval: SPAWN_INTERVAL_START,
            pending_spawns: Vec::new(),
            phase: GamePhase::Playing,
            rng: Pcg32::seed_from_u64(seed),
        };

        // The arena opens with a couple of enemies already closing in
        state.spawn_enemy();
        state.spawn_enemy();

        state
    }

    /// Spawn one enemy of uniform-random kind at a uniform-random edge
    pub fn spawn_enemy(&mut self) {
        let kind = EnemyKind::ALL[self.rng.random_range(0..EnemyKind::ALL.len())];
        let x = if self.rng.random_bool(0.5) {
            -ENEMY_SPAWN_MARGIN
        } else {
            self.world.width + ENEMY_SPAWN_MARGIN
        };
        self.enemies.push(Enemy::spawn(kind, x, self.world.ground_y));
    }

    /// True while the simulation is advancing
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// True once the knight has fallen
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Knight health as a 0..=1 proportion, for HUD bars
    pub fn health_fraction(&self) -> f32 {
        if self.knight.max_health == 0 {
            0.0
        } else {
            self.knight.health as f32 / self.knight.max_health as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_stats_table() {
        let goblin = EnemyKind::Goblin.stats();
        assert_eq!(goblin.size, Vec2::new(30.0, 35.0));
        assert_eq!(goblin.damage, 15);
        assert_eq!(goblin.points, 10);
        assert_eq!(goblin.health, 1);

        let orc = EnemyKind::Orc.stats();
        assert_eq!(orc.health, 2);
        assert_eq!(orc.points, 25);

        let slime = EnemyKind::Slime.stats();
        assert_eq!(slime.speed, 1.2);
        assert_eq!(slime.points, 5);

        let skeleton = EnemyKind::Skeleton.stats();
        assert_eq!(skeleton.speed, 3.0);
        assert_eq!(skeleton.damage, 20);
    }

    #[test]
    fn test_new_state_invariants() {
        let state = GameState::new(7);
        assert_eq!(state.wave, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemies_defeated, 0);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert_eq!(state.enemies.len(), 2);
        assert!(state.attacks.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.is_running());
        assert!(!state.is_game_over());
        assert_eq!(state.knight.health, KNIGHT_MAX_HEALTH);
        assert_eq!(state.platforms.len(), 5);
    }

    #[test]
    fn test_spawned_enemies_start_at_an_edge() {
        let state = GameState::new(99);
        for enemy in &state.enemies {
            let x = enemy.body.pos.x;
            assert!(
                x == -ENEMY_SPAWN_MARGIN || x == state.world.width + ENEMY_SPAWN_MARGIN,
                "enemy spawned inside the arena at x={x}"
            );
            assert_eq!(enemy.body.pos.y, state.world.ground_y - ENEMY_SPAWN_DROP);
        }
    }

    #[test]
    fn test_health_fraction() {
        let mut state = GameState::new(1);
        assert_eq!(state.health_fraction(), 1.0);
        state.knight.health = 25;
        assert_eq!(state.health_fraction(), 0.25);
        state.knight.health = 0;
        assert_eq!(state.health_fraction(), 0.0);
    }

    #[test]
    fn test_same_seed_same_opening() {
        let a = GameState::new(424242);
        let b = GameState::new(424242);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.kind, eb.kind);
            assert_eq!(ea.body.pos, eb.body.pos);
        }
    }
}
