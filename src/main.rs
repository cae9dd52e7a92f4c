//! Concepts Trainer entry point
//!
//! Window, GPU and font integration live outside this crate. Natively this
//! binary drives one headless session: it starts a round, picks a cell,
//! lets the countdown run out on an irregular frame cadence and reports.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use concepts_trainer::Settings;
    use concepts_trainer::platform::{ManualClock, ScriptedInput, capture};
    use concepts_trainer::renderer::{DrawList, Labels, MonoRasterizer, draw_frame};
    use concepts_trainer::sim::{GamePhase, GameState, TileState, tick};

    env_logger::init();
    log::info!("Concepts Trainer (headless) starting...");

    let settings = Settings::load();
    let seed = std::env::var("TRAINER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Session seed {}", seed);

    let labels = Labels::render(&mut MonoRasterizer::default(), &settings);
    let clock = ManualClock::new(Instant::now());
    let mut state = GameState::new(seed);
    let mut frame = DrawList::new();

    // Press the start button
    let button = settings.button_origin() + settings.button_size / 2.0;
    tick(&mut state, &capture(&ScriptedInput::click(button), &clock), &settings);

    // Pick the winning cell if there is one, otherwise any free cell
    let pick = state
        .round()
        .and_then(|round| winning_cell(round).or_else(|| round.board.find(TileState::Empty)));
    if let Some(pos) = pick {
        let cursor = settings.tile_position(pos.row, pos.col);
        clock.advance(Duration::from_millis(16));
        tick(&mut state, &capture(&ScriptedInput::click(cursor), &clock), &settings);
        log::info!("Picked cell ({}, {})", pos.row, pos.col);
    }

    let cadence_ms = [16u64, 17, 33, 250, 16, 1000];
    let mut frames = 0usize;
    while state.phase == GamePhase::Playing {
        clock.advance(Duration::from_millis(cadence_ms[frames % cadence_ms.len()]));
        tick(&mut state, &capture(&ScriptedInput::default(), &clock), &settings);

        frame.clear();
        draw_frame(&mut frame, &state, &labels, &settings);
        frames += 1;
    }

    let Some(round) = state.round() else {
        log::error!("Session ended without a round");
        std::process::exit(1);
    };
    println!(
        "{} after {} frames ({} draw calls, {} bytes of vertices in the last frame)",
        if round.won() { "Great Success!" } else { "Oh, my bad!" },
        frames,
        frame.commands.len(),
        frame.vertex_bytes().len()
    );
}

/// Brute-force the cell that would win the round as it stands
#[cfg(not(target_arch = "wasm32"))]
fn winning_cell(
    round: &concepts_trainer::sim::RoundSession,
) -> Option<concepts_trainer::sim::BoardPosition> {
    use concepts_trainer::sim::{Board, TileState, resolve};

    Board::positions()
        .filter(|&p| round.board.state(p) == TileState::Empty)
        .find(|&p| {
            let mut board = round.board.clone();
            board.set_tile(p, TileState::PlayerChoice);
            resolve(&mut board, round.objective).won
        })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end yet; the library is the product on wasm32
}
