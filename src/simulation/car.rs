//! Car kinematics, radar sensing, collision state, and reward.
//!
//! A car advances one tick at a time: kinematic update, derived geometry,
//! collision check against the track border, then a fresh sweep of radar
//! rays. The episode loop only updates cars that are still alive, so the
//! alive flag moves from `true` to `false` at most once per episode.

use ndarray::Array1;

use super::geometry;
use super::params::{CornerModel, Params};
use super::track::Raster;

/// Angular offsets of the radar rays relative to the heading, in degrees,
/// in the order they are cast each tick.
pub const RADAR_OFFSETS: [f32; 5] = [-90.0, -45.0, 0.0, 45.0, 90.0];

/// Number of values in the sensor export, one per radar ray.
pub const SENSOR_COUNT: usize = RADAR_OFFSETS.len();

/// Number of discrete actions a policy can choose from.
pub const ACTION_COUNT: usize = 4;

/// One of the four mutually exclusive per-tick actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Increase the heading by the turn step.
    TurnLeft,
    /// Decrease the heading by the turn step.
    TurnRight,
    /// Decrease the speed by the speed step, never below the minimum.
    SlowDown,
    /// Increase the speed by the speed step.
    SpeedUp,
}

impl Action {
    /// Picks the action with the highest score. Ties break toward the lowest
    /// index, so equal scores always produce the same choice.
    pub fn from_scores(scores: &Array1<f32>) -> Self {
        let mut choice = 0;
        let mut best = f32::NEG_INFINITY;
        for (index, &score) in scores.iter().enumerate().take(ACTION_COUNT) {
            if score > best {
                best = score;
                choice = index;
            }
        }
        match choice {
            0 => Action::TurnLeft,
            1 => Action::TurnRight,
            2 => Action::SlowDown,
            _ => Action::SpeedUp,
        }
    }
}

/// A single radar measurement: the hit point on the ray and the truncated
/// Euclidean distance from the car center to it.
#[derive(Debug, Clone)]
pub struct RadarReading {
    /// Point where the ray met the border, or the capped endpoint.
    pub hit: Array1<f32>,
    /// Distance from the car center to the hit point, in whole pixels.
    pub distance: i32,
}

/// One simulated car with its own kinematic state and radar readings.
#[derive(Debug, Clone)]
pub struct Car {
    /// Top-left of the bounding sprite box.
    pub position: Array1<f32>,
    /// Heading in degrees, clockwise-positive on screen.
    pub angle: f32,
    /// Scalar forward speed in pixels per tick.
    pub speed: f32,
    /// Body center, recomputed every tick from the truncated position.
    pub center: Array1<f32>,
    /// Four collision corners, recomputed every tick.
    pub corners: Vec<Array1<f32>>,
    /// Radar readings from the latest tick, one per ray offset.
    pub radars: Vec<RadarReading>,
    /// Total distance driven while alive.
    pub distance: f32,
    /// Ticks survived.
    pub time: u32,
    alive: bool,
}

impl Car {
    /// Creates a car at the configured start position with the default speed.
    pub fn new(params: &Params) -> Self {
        let position = Array1::from_vec(vec![params.start_position.0, params.start_position.1]);
        let center = derive_center(&position, params);
        let corners = derive_corners(&center, 0.0, params);

        Self {
            position,
            angle: 0.0,
            speed: params.default_speed,
            center,
            corners,
            radars: Vec::with_capacity(SENSOR_COUNT),
            distance: 0.0,
            time: 0,
            alive: true,
        }
    }

    /// Whether the car has not yet crashed this episode.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Applies one discrete action to the heading or speed.
    pub fn apply(&mut self, action: Action, params: &Params) {
        match action {
            Action::TurnLeft => self.angle += params.turn_step,
            Action::TurnRight => self.angle -= params.turn_step,
            Action::SlowDown => {
                if self.speed - params.speed_step >= params.min_speed {
                    self.speed -= params.speed_step;
                }
            }
            Action::SpeedUp => self.speed += params.speed_step,
        }
    }

    /// Advances the car by one tick: move and clamp the position, accumulate
    /// distance and time, recompute center and corners, check for collision,
    /// then rebuild the radar readings.
    ///
    /// Callers must only invoke this while the car is alive; distance and
    /// time accumulate unconditionally.
    pub fn update<R: Raster>(&mut self, track: &R, params: &Params) {
        let dir = geometry::direction(self.angle);

        self.position[0] += dir[0] * self.speed;
        self.position[0] = self.position[0].clamp(params.x_clamp.0, params.x_clamp.1);

        self.distance += self.speed;
        self.time += 1;

        self.position[1] += dir[1] * self.speed;
        self.position[1] = self.position[1].clamp(params.y_clamp.0, params.y_clamp.1);

        self.center = derive_center(&self.position, params);
        self.corners = derive_corners(&self.center, self.angle, params);

        self.check_collision(track);

        self.radars.clear();
        for offset in RADAR_OFFSETS {
            self.cast_radar(offset, track, params);
        }
    }

    /// Tests the four corners against the border in order, marking the car
    /// dead at the first hit and skipping the remaining corners.
    pub fn check_collision<R: Raster>(&mut self, track: &R) {
        self.alive = true;
        for corner in &self.corners {
            if track.is_border(corner[0] as i32, corner[1] as i32) {
                self.alive = false;
                break;
            }
        }
    }

    /// Casts one radar ray at the given angular offset from the heading.
    ///
    /// Steps outward from the center in unit increments until the sampled
    /// pixel is border or the length reaches the cap, then appends the hit
    /// point and its distance to the readings.
    pub fn cast_radar<R: Raster>(&mut self, offset_deg: f32, track: &R, params: &Params) {
        let dir = geometry::direction(self.angle + offset_deg);
        let mut length = 0;
        let mut x = self.center[0] as i32;
        let mut y = self.center[1] as i32;

        while !track.is_border(x, y) && length < params.radar_cap {
            length += 1;
            x = (self.center[0] + dir[0] * length as f32) as i32;
            y = (self.center[1] + dir[1] * length as f32) as i32;
        }

        let dx = x as f32 - self.center[0];
        let dy = y as f32 - self.center[1];
        let distance = (dx * dx + dy * dy).sqrt() as i32;

        self.radars.push(RadarReading {
            hit: Array1::from_vec(vec![x as f32, y as f32]),
            distance,
        });
    }

    /// Exports the radar readings as the policy observation: one integer per
    /// ray, `distance / sensor_scale`. Missing readings export as zero.
    pub fn sensor_data(&self, params: &Params) -> [i32; SENSOR_COUNT] {
        let mut values = [0; SENSOR_COUNT];
        for (value, radar) in values.iter_mut().zip(self.radars.iter()) {
            *value = radar.distance / params.sensor_scale;
        }
        values
    }

    /// Incremental fitness for this tick: distance driven in units of half
    /// the body width. Non-decreasing while the car stays alive.
    pub fn reward(&self, params: &Params) -> f32 {
        self.distance / (params.car_size_x / 2.0)
    }
}

fn derive_center(position: &Array1<f32>, params: &Params) -> Array1<f32> {
    // The position is truncated to whole pixels before the half-size offset.
    Array1::from_vec(vec![
        position[0].trunc() + params.car_size_x / 2.0,
        position[1].trunc() + params.car_size_y / 2.0,
    ])
}

fn derive_corners(center: &Array1<f32>, angle: f32, params: &Params) -> Vec<Array1<f32>> {
    let (offsets, radius) = match params.corner_model {
        CornerModel::ApproximateDiamond => {
            ([30.0, 150.0, 210.0, 330.0], 0.5 * params.car_size_x)
        }
        CornerModel::TrueRectangle => {
            let half_x = 0.5 * params.car_size_x;
            let half_y = 0.5 * params.car_size_y;
            let base = (half_y / half_x).atan().to_degrees();
            (
                [base, 180.0 - base, 180.0 + base, 360.0 - base],
                (half_x * half_x + half_y * half_y).sqrt(),
            )
        }
    };

    offsets
        .iter()
        .map(|&offset| center + &(geometry::direction(angle + offset) * radius))
        .collect()
}
