//! Pre-run track selection menu.

use std::path::PathBuf;

use macroquad::prelude::*;

/// Lists the PNG files in the maps directory, sorted by file name.
pub fn discover_maps(dir: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut maps: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    maps.sort();
    Ok(maps)
}

/// Runs the keyboard-driven selection screen until the user confirms a map
/// with Enter or leaves with Escape.
pub async fn select_map(maps: &[PathBuf]) -> Option<PathBuf> {
    let mut selected: i32 = 0;
    let font_size = 40.0;
    let option_height = 50.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            return None;
        }
        if is_key_pressed(KeyCode::Enter) {
            return Some(maps[selected as usize].clone());
        }
        if is_key_pressed(KeyCode::Up) {
            selected = (selected - 1).rem_euclid(maps.len() as i32);
        }
        if is_key_pressed(KeyCode::Down) {
            selected = (selected + 1).rem_euclid(maps.len() as i32);
        }

        clear_background(BLACK);

        let start_y = (screen_height() - maps.len() as f32 * option_height) / 2.0;
        for (i, map) in maps.iter().enumerate() {
            let label = map
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("map");
            let color = if i as i32 == selected { WHITE } else { GRAY };
            let text_size = measure_text(label, None, font_size as u16, 1.0);
            draw_text(
                label,
                screen_width() / 2.0 - text_size.width / 2.0,
                start_y + i as f32 * option_height,
                font_size,
                color,
            );
        }

        next_frame().await;
    }
}
