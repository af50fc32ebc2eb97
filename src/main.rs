//! Glamrun: a tiny side-scrolling run-and-gun platformer
//!
//! Three hand-authored levels of running, jumping, stomping and shooting.
//! The simulation lives in `game` and runs in fixed per-frame increments;
//! this file owns the window, assets, audio, and the 60 FPS frame loop.

mod assets;
mod game;
mod input;
mod render;

use macroquad::audio::{play_sound, play_sound_once, PlaySoundParams};
use macroquad::prelude::*;

use assets::Assets;
use game::constants::{MUSIC_VOLUME, TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{Events, Mode, World};

fn window_conf() -> Conf {
    Conf {
        window_title: "Glamrun".to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let assets = Assets::load().await;

    // Background track loops for the whole run; silence if it didn't load
    if let Some(music) = &assets.music {
        play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: MUSIC_VOLUME,
            },
        );
    }

    let mut world = World::new();
    let mut events = Events::new();

    println!("=== Glamrun ===");

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        match world.mode {
            Mode::Playing => {
                let snapshot = input::sample();
                world.tick(&snapshot, &mut events);

                if !events.jumped.is_empty() {
                    if let Some(jump) = &assets.jump {
                        play_sound_once(jump);
                    }
                }
                for e in events.level_advanced.drain() {
                    println!("Entering level {}", e.level);
                }
                if !events.game_won.is_empty() {
                    println!("All three levels complete");
                }
                events.clear_all();

                render::draw_world(&world, &assets);
            }
            Mode::Won => {
                // Terminal sub-state: hold the last frame until the player
                // acknowledges, then exit cleanly
                if input::action_pressed(input::Action::Acknowledge) {
                    break;
                }
                render::draw_world(&world, &assets);
                render::draw_win_screen();
            }
        }

        // Fixed 60 FPS pacing: sleep for the bulk, spin-wait for precision
        let target_frame_time = 1.0 / TARGET_FPS;
        let elapsed = get_time() - frame_start;
        if target_frame_time - elapsed > 0.0 {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < target_frame_time {
                    // Busy wait - browser will handle frame pacing
                }
            }
        }

        next_frame().await;
    }
}
