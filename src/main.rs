//! Knight Brawl entry point
//!
//! Headless smoke runner: drives the simulation with a scripted input for up
//! to a minute of game time and dumps the final frame snapshot as JSON.
//! Real front-ends (renderer, keyboard capture, HUD) wrap the same two
//! calls: build a `TickInput` per frame, call `tick`, read the state.

use knight_brawl::consts::TICKS_PER_SECOND;
use knight_brawl::sim::{GameState, TickInput, tick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    log::info!("Knight Brawl (headless) starting with seed {seed}");

    let mut state = GameState::new(seed);
    let ticks = 60 * TICKS_PER_SECOND as u64;

    // Scripted session: hold right and swing, hop once a second
    for t in 0..ticks {
        let input = TickInput {
            right: true,
            attack: true,
            jump: t % TICKS_PER_SECOND as u64 == 0,
            ..Default::default()
        };
        tick(&mut state, &input);
        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "finished at tick {}: score {}, wave {}, {} defeated, {} enemies on field",
        state.time_ticks,
        state.score,
        state.wave,
        state.enemies_defeated,
        state.enemies.len()
    );

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
