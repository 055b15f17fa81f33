use std::time::Duration;

use macroquad::prelude::*;

use evodrive::simulation::episode::{Episode, EpisodeStatus};
use evodrive::simulation::evolution::Population;
use evodrive::simulation::params::Params;
use evodrive::simulation::track::Track;

mod graphics;
mod menu;

const PARAMS_PATH: &str = "params.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Evolutionary Drivers".to_string(),
        window_width: 1920,
        window_height: 1080,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let params = if std::path::Path::new(PARAMS_PATH).exists() {
        match Params::load_from_file(PARAMS_PATH) {
            Ok(params) => params,
            Err(err) => {
                eprintln!("failed to load {PARAMS_PATH}: {err}");
                return;
            }
        }
    } else {
        Params::default()
    };

    let maps = match menu::discover_maps(&params.maps_dir) {
        Ok(maps) if !maps.is_empty() => maps,
        Ok(_) => {
            eprintln!("no PNG maps found in {}", params.maps_dir);
            return;
        }
        Err(err) => {
            eprintln!("failed to read {}: {err}", params.maps_dir);
            return;
        }
    };

    let Some(map_path) = menu::select_map(&maps).await else {
        return;
    };

    let image = match load_image(&map_path.to_string_lossy()).await {
        Ok(image) => image,
        Err(err) => {
            eprintln!("failed to load {}: {err}", map_path.display());
            return;
        }
    };
    let track = match Track::from_rgba(
        image.width(),
        image.height(),
        &image.bytes,
        params.border_color,
    ) {
        Ok(track) => track,
        Err(err) => {
            eprintln!("failed to build track from {}: {err}", map_path.display());
            return;
        }
    };
    let texture = Texture2D::from_image(&image);

    println!(
        "Starting evolutionary driving simulation on {}",
        map_path.display()
    );

    let mut population = Population::new(&params);

    'generations: while population.generation < params.max_generations {
        let mut episode = Episode::new(population.brains(), &params);

        while episode.status() == EpisodeStatus::Running {
            let frame_start = get_time();

            if is_key_pressed(KeyCode::Escape) {
                break 'generations;
            }

            episode.step(&track, &params);

            graphics::draw_track(&texture);
            graphics::draw_cars(&episode.cars, &params);
            graphics::draw_hud(population.generation + 1, episode.still_alive);

            pace_frame(frame_start, params.tick_rate);
            next_frame().await;
        }

        population.assign_fitness(&episode.fitness);
        println!(
            "generation {}: best fitness {:.2}, mean fitness {:.2}, survivors {}/{}",
            population.generation + 1,
            population.best_fitness(),
            population.mean_fitness(),
            episode.still_alive,
            episode.cars.len(),
        );

        if population.best_fitness() >= params.fitness_threshold {
            println!(
                "fitness threshold {:.0} reached after {} generations",
                params.fitness_threshold,
                population.generation + 1
            );
            break;
        }

        population.evolve(&params);
    }
}

/// Sleeps away the remainder of the tick budget. Missing the budget only
/// degrades smoothness, never simulation correctness.
fn pace_frame(frame_start: f64, tick_rate: f32) {
    let budget = 1.0 / f64::from(tick_rate);
    let elapsed = get_time() - frame_start;
    if elapsed < budget {
        std::thread::sleep(Duration::from_secs_f64(budget - elapsed));
    }
}
