#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use evodrive::simulation::brain::Decision;
use evodrive::simulation::car::{ACTION_COUNT, Car};
use evodrive::simulation::episode::{Episode, EpisodeStatus};
use evodrive::simulation::params::Params;
use evodrive::simulation::track::{Raster, Track};
use ndarray::Array1;

const BORDER: [u8; 4] = [255, 255, 255, 255];
const ROAD: [u8; 4] = [0, 0, 0, 255];

/// Builds a track from a per-pixel border predicate.
fn build_track(width: usize, height: usize, border_at: impl Fn(usize, usize) -> bool) -> Track {
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let pixel = if border_at(x, y) { BORDER } else { ROAD };
            rgba.extend_from_slice(&pixel);
        }
    }
    Track::from_rgba(width, height, &rgba, BORDER).expect("valid raster data")
}

struct ScriptedPolicy {
    scores: Vec<f32>,
}

impl ScriptedPolicy {
    fn favoring(action_index: usize) -> Self {
        let mut scores = vec![0.0; ACTION_COUNT];
        scores[action_index] = 1.0;
        Self { scores }
    }
}

impl Decision for ScriptedPolicy {
    fn activate(&self, _observation: &Array1<f32>) -> Array1<f32> {
        Array1::from_vec(self.scores.clone())
    }
}

#[test]
fn from_rgba_rejects_mismatched_dimensions() {
    let rgba = vec![0u8; 5 * 5 * 4];
    assert!(Track::from_rgba(10, 10, &rgba, BORDER).is_err());
}

#[test]
fn border_pixels_are_detected_by_color() {
    let track = build_track(10, 10, |x, _| x == 5);

    assert!(track.is_border(5, 3));
    assert!(!track.is_border(4, 3));
    assert_eq!(track.width(), 10);
    assert_eq!(track.height(), 10);
}

#[test]
fn out_of_bounds_pixels_count_as_border() {
    let track = build_track(10, 10, |_, _| false);

    assert!(track.is_border(-1, 0));
    assert!(track.is_border(0, -1));
    assert!(track.is_border(10, 0));
    assert!(track.is_border(0, 10));
    assert!(!track.is_border(9, 9));
}

#[test]
fn radar_measures_the_distance_to_a_wall() {
    let params = Params {
        car_size_x: 4.0,
        car_size_y: 4.0,
        start_position: (10.0, 10.0),
        ..Params::default()
    };
    // Vertical wall at x = 50; car center lands at (12, 12).
    let track = build_track(100, 100, |x, _| x == 50);
    let mut car = Car::new(&params);

    car.cast_radar(0.0, &track, &params);

    let reading = &car.radars[0];
    assert_eq!(reading.distance, 38);
    assert_eq!(reading.hit[0], 50.0);
    assert_eq!(car.sensor_data(&params)[0], 38 / params.sensor_scale);
}

#[test]
fn a_walled_box_ends_the_episode_before_the_horizon() {
    let params = Params {
        car_size_x: 4.0,
        car_size_y: 4.0,
        start_position: (100.0, 100.0),
        ..Params::default()
    };
    let track = build_track(200, 200, |x, y| {
        x == 0 || y == 0 || x == 199 || y == 199
    });
    // Drive straight at full throttle into the right wall.
    let mut episode = Episode::new(vec![ScriptedPolicy::favoring(3)], &params);

    let status = episode.run_to_completion(&track, &params);

    assert_eq!(status, EpisodeStatus::AllCrashed);
    assert!(episode.ticks < params.episode_horizon);
    assert_eq!(episode.still_alive, 0);
}
