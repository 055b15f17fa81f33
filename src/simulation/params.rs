//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Strategy for deriving a car's collision corners from its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerModel {
    /// Corners at fixed 30/150/210/330 degree offsets from the heading, at a
    /// radius of half the body width. Not a true oriented rectangle; evolved
    /// strategies depend on this shape, so it is the default.
    ApproximateDiamond,
    /// Corners of the exact oriented bounding rectangle.
    TrueRectangle,
}

/// Simulation parameters that control cars, episodes, and evolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Window and track width in pixels.
    pub screen_width: f32,
    /// Window and track height in pixels.
    pub screen_height: f32,
    /// Car body width in pixels.
    pub car_size_x: f32,
    /// Car body height in pixels.
    pub car_size_y: f32,
    /// Top-left starting position of every car's bounding box.
    pub start_position: (f32, f32),
    /// RGBA color that marks impassable border pixels.
    pub border_color: [u8; 4],
    /// Forward speed every car starts with.
    pub default_speed: f32,
    /// Lowest speed the slow-down action may reach.
    pub min_speed: f32,
    /// Speed change per slow-down or speed-up action.
    pub speed_step: f32,
    /// Heading change in degrees per turn action.
    pub turn_step: f32,
    /// Horizontal position clamp (min, max).
    pub x_clamp: (f32, f32),
    /// Vertical position clamp (min, max). The default upper bound derives
    /// from the screen width, not the height, keeping a square playable area.
    pub y_clamp: (f32, f32),
    /// Maximum radar ray length in pixels.
    pub radar_cap: i32,
    /// Divisor applied to radar distances in the sensor export.
    pub sensor_scale: i32,
    /// Corner derivation strategy for collision checks.
    pub corner_model: CornerModel,
    /// Episode length in ticks.
    pub episode_horizon: u32,
    /// Target simulation cadence in ticks per second.
    pub tick_rate: f32,
    /// Number of policies per generation.
    pub population_size: usize,
    /// Hidden layer width of each policy network.
    pub hidden_size: usize,
    /// Uniform range for initial network weights.
    pub init_weight_scale: f32,
    /// Genomes carried into the next generation unchanged.
    pub elite_count: usize,
    /// Fraction of the population eligible as crossover parents.
    pub parent_fraction: f32,
    /// Lower bound of the log-sampled mutation scale.
    pub mutation_scale_min: f32,
    /// Upper bound of the log-sampled mutation scale.
    pub mutation_scale_max: f32,
    /// Evolution stops once the best fitness reaches this value.
    pub fitness_threshold: f32,
    /// Evolution stops after this many generations.
    pub max_generations: u32,
    /// Directory scanned for PNG track images.
    pub maps_dir: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            screen_width: 1920.0,
            screen_height: 1080.0,
            car_size_x: 64.0,
            car_size_y: 64.0,
            start_position: (830.0, 920.0),
            border_color: [255, 255, 255, 255],
            default_speed: 20.0,
            min_speed: 12.0,
            speed_step: 2.0,
            turn_step: 10.0,
            x_clamp: (15.0, 1920.0 - 120.0),
            y_clamp: (20.0, 1920.0 - 120.0),
            radar_cap: 300,
            sensor_scale: 30,
            corner_model: CornerModel::ApproximateDiamond,
            episode_horizon: 1200,
            tick_rate: 30.0,
            population_size: 30,
            hidden_size: 8,
            init_weight_scale: 0.5,
            elite_count: 2,
            parent_fraction: 0.15,
            mutation_scale_min: 0.002,
            mutation_scale_max: 0.2,
            fitness_threshold: 100_000.0,
            max_generations: 1000,
            maps_dir: "maps".to_string(),
        }
    }
}

impl Params {
    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }
}
