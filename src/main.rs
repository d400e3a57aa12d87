use arboard::Clipboard;
use macroquad::prelude::*;
use maze_arrow::event_log::EventLog;
use maze_arrow::view::{maze_origin, window_size, HUD_HEIGHT};
use maze_arrow::{Config, Game, GameEvent, Intent};
use std::fs;

/// Upper bound on ticks run in one frame after a stall
const MAX_TICKS_PER_FRAME: u32 = 5;

fn window_conf() -> Conf {
    // Quiet read: the full load (with its console notices) happens in main
    let config = fs::read_to_string("config.toml")
        .ok()
        .and_then(|contents| Config::from_toml_str(&contents).ok())
        .unwrap_or_default();

    let (width, height) = window_size(&config);
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: width.ceil() as i32,
        window_height: height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Parse `--seed <n>` from the command line
fn seed_from_args() -> Option<u64> {
    let args: Vec<String> = std::env::args().collect();
    let pos = args.iter().position(|arg| arg == "--seed")?;
    match args.get(pos + 1).map(|value| value.parse::<u64>()) {
        Some(Ok(seed)) => Some(seed),
        _ => {
            eprintln!("Warning: --seed expects an unsigned integer, ignoring");
            None
        }
    }
}

fn read_intent() -> Intent {
    Intent {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
    }
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Maze layout copied to clipboard!");
                // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

/// Draw the current game state, centring the maze below the HUD
fn draw(game: &Game, config: &Config) {
    let visual = &config.visual;
    clear_background(Color::from_rgba(visual.background_r, visual.background_g, visual.background_b, 255));

    let bounds = game.play_bounds();
    let (ox, oy) = maze_origin(screen_width(), screen_height(), &bounds, config.maze.wall_thickness);

    for wall in game.walls() {
        draw_rectangle(ox + wall.x, oy + wall.y, wall.width, wall.height, Color::from_rgba(34, 34, 34, 255));
    }

    let gem = game.gem().rect();
    draw_rectangle(ox + gem.x, oy + gem.y, gem.width, gem.height, YELLOW);

    let player = game.player().rect();
    draw_rectangle(ox + player.x, oy + player.y, player.width, player.height, RED);

    let baseline = HUD_HEIGHT - 10.0;
    draw_text(&format!("Level: {}", game.level()), 10.0, baseline, 36.0, BLACK);

    let version = format!("v{}", visual.version_label);
    let size = measure_text(&version, None, 24, 1.0);
    draw_text(&version, screen_width() - size.width - 10.0, baseline, 24.0, BLACK);
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let seed = seed_from_args();

    let game = match seed {
        Some(seed) => {
            println!("Using maze seed {}", seed);
            Game::with_seed(config.clone(), seed)
        }
        None => Game::new(config.clone()),
    };
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let mut event_log = EventLog::new();
    event_log.record(0, GameEvent::LevelStarted { level: game.level(), maze_size: game.maze_size() });

    let step = 1.0 / config.visual.ticks_per_second;
    let mut accumulator = 0.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Copy maze to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&game.grid().to_ascii());
        }

        accumulator += get_frame_time();
        let mut ran = 0;
        while accumulator >= step && ran < MAX_TICKS_PER_FRAME {
            match game.tick(read_intent()) {
                Ok(events) => {
                    for event in &events {
                        if let GameEvent::LevelStarted { level, maze_size } = event {
                            println!("Level {} ({}x{} maze)", level, maze_size, maze_size);
                        }
                    }
                    event_log.record_all(game.ticks(), events);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return;
                }
            }
            accumulator -= step;
            ran += 1;
        }
        if ran == MAX_TICKS_PER_FRAME {
            accumulator = 0.0;
        }

        draw(&game, &config);

        next_frame().await
    }

    if config.logging.enable_event_log {
        event_log.print();
        match event_log.save_to_file(&config.logging.event_log_path) {
            Ok(()) => println!("Event log saved to {}", config.logging.event_log_path),
            Err(e) => eprintln!("Failed to save event log: {}", e),
        }
    }
    println!("{}", event_log.summary());
}
