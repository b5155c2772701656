//! Fixed timestep simulation tick
//!
//! Advances the arena by one frame in a fixed order: queued burst spawns,
//! the knight, every enemy, attack windows, the spawner, combat resolution,
//! particles, and finally the game-over check. While the game is over the
//! tick is a no-op apart from the restart check, so callers may keep
//! invoking it every frame.

use glam::Vec2;
use rand::Rng;

use super::physics::step_body;
use super::rect::Aabb;
use super::state::{Attack, EffectKind, GamePhase, GameState, MAX_PARTICLES, Particle};
use crate::consts::*;

/// Held input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    /// Only honored while the game is over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            *state = GameState::new(state.seed);
            log::info!("restarting run with seed {}", state.seed);
        }
        return;
    }

    state.time_ticks += 1;

    drain_burst_spawns(state);
    update_knight(state, input);
    update_enemies(state);
    update_attacks(state);
    update_spawner(state);
    resolve_combat(state);
    update_particles(state);

    if state.knight.health == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at tick {}: score {}, wave {}, {} defeated",
            state.time_ticks,
            state.score,
            state.wave,
            state.enemies_defeated
        );
    }
}

/// Burst spawns land "soon after" the spawn that queued them, with no
/// guarantee about which tick; due entries are drained before the main
/// update so they never interleave with it.
fn drain_burst_spawns(state: &mut GameState) {
    let now = state.time_ticks;
    let due = state.pending_spawns.iter().filter(|&&t| t <= now).count();
    state.pending_spawns.retain(|&t| t > now);
    for _ in 0..due {
        state.spawn_enemy();
    }
}

fn update_knight(state: &mut GameState, input: &TickInput) {
    let knight = &mut state.knight;

    // Held directions accelerate toward max speed; facing follows the last
    // pressed direction
    let mut steering = false;
    if input.left {
        knight.body.vel.x = (knight.body.vel.x - KNIGHT_ACCEL).max(-KNIGHT_SPEED);
        knight.facing = -1.0;
        steering = true;
    }
    if input.right {
        knight.body.vel.x = (knight.body.vel.x + KNIGHT_ACCEL).min(KNIGHT_SPEED);
        knight.facing = 1.0;
        steering = true;
    }
    if !steering {
        knight.body.vel.x *= KNIGHT_FRICTION;
    }

    if input.jump && knight.body.on_ground {
        knight.body.vel.y = -KNIGHT_JUMP_POWER;
        knight.body.on_ground = false;
    }

    if input.attack && knight.attack_cooldown == 0 {
        knight.attacking = true;
        knight.attack_timer = ATTACK_SWING_TICKS;
        knight.attack_cooldown = ATTACK_COOLDOWN_TICKS;

        // The hitbox is anchored in front of the knight at swing time and
        // does not follow him afterwards
        let x = if knight.facing > 0.0 {
            knight.body.pos.x + knight.body.size.x
        } else {
            knight.body.pos.x - ATTACK_WIDTH
        };
        state.attacks.push(Attack {
            rect: Aabb::new(
                x,
                knight.body.pos.y + ATTACK_OFFSET_Y,
                ATTACK_WIDTH,
                ATTACK_HEIGHT,
            ),
            ttl: ATTACK_HITBOX_TICKS,
            facing: knight.facing,
        });
    }

    step_body(
        &mut knight.body,
        KNIGHT_GRAVITY,
        &state.world,
        &state.platforms,
    );

    // Arena walls apply to the knight only
    knight.body.pos.x = knight
        .body
        .pos
        .x
        .clamp(0.0, state.world.width - knight.body.size.x);

    if knight.attack_timer > 0 {
        knight.attack_timer -= 1;
    } else {
        knight.attacking = false;
    }
    knight.attack_cooldown = knight.attack_cooldown.saturating_sub(1);
    if knight.invulnerable {
        knight.invuln_timer = knight.invuln_timer.saturating_sub(1);
        if knight.invuln_timer == 0 {
            knight.invulnerable = false;
        }
    }

    knight.anim_timer += 1;
    if knight.anim_timer >= KNIGHT_ANIM_PERIOD {
        knight.anim_frame = (knight.anim_frame + 1) % ANIM_FRAMES;
        knight.anim_timer = 0;
    }
}

fn update_enemies(state: &mut GameState) {
    let knight_x = state.knight.body.pos.x;

    for enemy in state.enemies.iter_mut() {
        // Straight-line pursuit; platforms and ledges are ignored on purpose
        let dx = knight_x - enemy.body.pos.x;
        if dx.abs() > ENEMY_CHASE_DEADZONE {
            let speed = enemy.kind.stats().speed;
            enemy.body.vel.x = if dx > 0.0 { speed } else { -speed };
        }

        step_body(
            &mut enemy.body,
            ENEMY_GRAVITY,
            &state.world,
            &state.platforms,
        );

        enemy.anim_timer += 1;
        if enemy.anim_timer >= ENEMY_ANIM_PERIOD {
            enemy.anim_frame = (enemy.anim_frame + 1) % ANIM_FRAMES;
            enemy.anim_timer = 0;
        }
    }

    // Drop stragglers that wandered far outside the arena
    let min_x = -ENEMY_DESPAWN_MARGIN;
    let max_x = state.world.width + ENEMY_DESPAWN_MARGIN;
    state
        .enemies
        .retain(|e| e.body.pos.x >= min_x && e.body.pos.x <= max_x);
}

fn update_attacks(state: &mut GameState) {
    for attack in state.attacks.iter_mut() {
        attack.ttl = attack.ttl.saturating_sub(1);
    }
    state.attacks.retain(|a| a.ttl > 0);
}

fn update_spawner(state: &mut GameState) {
    state.spawn_timer += 1;

    // Difficulty ramp: each wave boundary shortens the spawn interval down
    // to a floor
    if state.time_ticks % WAVE_LENGTH_TICKS == 0 {
        state.wave += 1;
        state.spawn_interval = state
            .spawn_interval
            .saturating_sub(SPAWN_INTERVAL_STEP)
            .max(SPAWN_INTERVAL_MIN);
        log::info!(
            "wave {} (spawn interval {} ticks)",
            state.wave,
            state.spawn_interval
        );
    }

    if state.spawn_timer >= state.spawn_interval {
        state.spawn_enemy();
        state.spawn_timer = 0;

        // Later waves sometimes double up with a short-delay burst spawn
        if state.wave > 2 && state.rng.random_bool(BURST_SPAWN_CHANCE) {
            state
                .pending_spawns
                .push(state.time_ticks + BURST_SPAWN_DELAY_TICKS);
        }
    }
}

fn resolve_combat(state: &mut GameState) {
    // Impact positions collected here and emitted once the entity borrows end
    let mut bursts: Vec<(EffectKind, Vec2)> = Vec::new();

    // Sword vs enemies. A swing is never consumed: it keeps landing every
    // tick its window overlaps an enemy, and can hit several enemies in the
    // same tick.
    for attack in &state.attacks {
        for enemy in state.enemies.iter_mut() {
            if enemy.health == 0 {
                continue;
            }
            if attack.rect.intersects(&enemy.body.aabb()) {
                enemy.health -= 1;
                bursts.push((EffectKind::Hit, enemy.body.center()));
                if enemy.health == 0 {
                    state.score += enemy.kind.stats().points;
                    state.enemies_defeated += 1;
                    state.knight.combo += 1;
                }
            }
        }
    }
    state.enemies.retain(|e| e.health > 0);

    // Enemy contact vs the knight. The invulnerability window opens on the
    // first hit and blocks the rest of the pile-on.
    let knight_box = state.knight.body.aabb();
    for enemy in &state.enemies {
        if state.knight.invulnerable {
            break;
        }
        if knight_box.intersects(&enemy.body.aabb()) {
            let damage = enemy.kind.stats().damage;
            state.knight.health = state.knight.health.saturating_sub(damage);
            state.knight.invulnerable = true;
            state.knight.invuln_timer = INVULN_TICKS;
            state.knight.combo = 0;
            bursts.push((EffectKind::Damage, state.knight.body.center()));
        }
    }

    for (kind, center) in bursts {
        emit_burst(state, kind, center);
    }
}

/// Spray a particle burst at an impact point
fn emit_burst(state: &mut GameState, kind: EffectKind, center: Vec2) {
    let (count, spread, lift, life, size_base, size_range) = match kind {
        EffectKind::Hit => (8, 10.0, -3.0, 40, 3.0, 6.0),
        EffectKind::Damage => (6, 6.0, -2.0, 30, 2.0, 4.0),
    };

    for _ in 0..count {
        if state.particles.len() >= MAX_PARTICLES {
            state.particles.remove(0);
        }
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * spread,
            (state.rng.random::<f32>() - 0.5) * spread + lift,
        );
        let size = state.rng.random::<f32>() * size_range + size_base;
        state.particles.push(Particle {
            pos: center,
            vel,
            kind,
            life,
            size,
        });
    }
}

fn update_particles(state: &mut GameState) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life -= 1;
        particle.vel *= PARTICLE_DAMPING;
    }
    state.particles.retain(|p| p.life > 0);
}
