//! Quiet Rooms entry point
//!
//! Headless native driver: walks the lore table up to the first puzzle, shows
//! its intro page, then lets the autopilot play the puzzle on a recording
//! surface. Windowing hosts drive the same library API frame by frame.

#[cfg(not(target_arch = "wasm32"))]
use quiet_rooms::{
    SaveData, Settings,
    consts::FRAME_MS,
    lore::LoreProgress,
    renderer::{DrawList, Palette},
    sim::{PuzzleEvent, PuzzleScene, TickInput, tick},
    ui::TextScreen,
};

/// Simulated ticks before the autopilot gives up (two minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 60 * 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quiet Rooms (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Could not load settings from {path}: {e}, using defaults");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    let save = match args.next() {
        Some(path) => SaveData::load_or_default(path),
        None => SaveData::default(),
    };

    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!(
        "Difficulty {}, screen {}x{}, seed {}",
        settings.difficulty.as_str(),
        settings.screen_width,
        settings.screen_height,
        seed
    );

    // Pick up lore until something starts a puzzle
    let mut lore = LoreProgress::new();
    let puzzle = loop {
        let Some(next) = lore.next_visible() else {
            log::info!("No puzzle left in the lore table");
            return;
        };
        let Some(obj) = lore.collect(next.ordinal) else {
            return;
        };
        log::debug!("{}: {}", obj.name, obj.text_for(&save));
        if let Some(puzzle) = obj.starts_puzzle {
            break puzzle;
        }
    };
    log::info!("Lore object {} starts {}", lore.collected_count(), puzzle.as_str());

    let mut scene = match PuzzleScene::new(&settings, seed) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Failed to build puzzle: {e}");
            std::process::exit(1);
        }
    };

    let screen_size = (settings.screen_width, settings.screen_height);
    let palette = Palette::for_settings(settings.grayscale);
    let mut surface = DrawList::new(settings.screen_width, settings.screen_height);

    if let Some(intro) = TextScreen::intro(&puzzle, screen_size) {
        intro.draw(&mut surface, &palette);
        let (origin, size) = intro.button_rect();
        if intro.handle_click(origin + size / 2.0) {
            scene.begin();
        }
    } else {
        scene.begin();
    }

    let input = TickInput::idle();
    let mut now_ms = 0;
    let mut activations = 0;
    let mut timeouts = 0;
    while !scene.is_puzzle_solved() && scene.time_ticks() < MAX_TICKS {
        now_ms += FRAME_MS;
        tick(&mut scene, &input, now_ms);
        for event in scene.drain_events() {
            match event {
                PuzzleEvent::TargetActivated { .. } => activations += 1,
                PuzzleEvent::TargetTimedOut { .. } => timeouts += 1,
                PuzzleEvent::Solved => {}
            }
        }
        surface.clear();
        scene.draw(&mut surface, now_ms);
    }

    if scene.is_puzzle_solved() {
        log::info!(
            "Puzzle solved after {} ticks ({} ms, {} activations, {} timeouts)",
            scene.time_ticks(),
            now_ms,
            activations,
            timeouts
        );

        // The completion page is the lore object right after the one that
        // started the puzzle
        scene.set_visible(false);
        let done = lore.next_visible().and_then(|next| lore.collect(next.ordinal));
        if let Some(done) = done {
            let outro = TextScreen::lore(done, &save, screen_size);
            surface.clear();
            outro.draw(&mut surface, &palette);
            let (origin, size) = outro.button_rect();
            if outro.handle_click(origin + size / 2.0) {
                log::info!("{} dismissed", done.name);
            }
        }
    } else {
        log::warn!(
            "Autopilot gave up after {} ticks ({} of {} targets active)",
            scene.time_ticks(),
            scene.targets().active_count(),
            scene.targets().len()
        );
    }
    log::info!(
        "Final frame: {} draw commands, {} vertex bytes",
        surface.len(),
        surface.vertex_bytes().len()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts link the library and drive `tick` from their own frame loop
}
