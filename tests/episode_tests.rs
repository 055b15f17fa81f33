#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use evodrive::simulation::brain::Decision;
use evodrive::simulation::car::{ACTION_COUNT, SENSOR_COUNT};
use evodrive::simulation::episode::{Episode, EpisodeStatus};
use evodrive::simulation::params::Params;
use evodrive::simulation::track::Raster;
use ndarray::Array1;

struct OpenRaster;

impl Raster for OpenRaster {
    fn is_border(&self, _x: i32, _y: i32) -> bool {
        false
    }
}

struct WallRaster;

impl Raster for WallRaster {
    fn is_border(&self, _x: i32, _y: i32) -> bool {
        true
    }
}

/// Policy that always returns the same fixed scores.
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

/// Policy that records every observation it is handed.
struct RecordingPolicy {
    observations: RefCell<Vec<Array1<f32>>>,
}

impl RecordingPolicy {
    fn new() -> Self {
        Self {
            observations: RefCell::new(Vec::new()),
        }
    }
}

impl Decision for RecordingPolicy {
    fn activate(&self, observation: &Array1<f32>) -> Array1<f32> {
        self.observations.borrow_mut().push(observation.clone());
        Array1::from_vec(vec![0.0; ACTION_COUNT])
    }
}

#[test]
fn lone_survivor_runs_the_full_horizon() {
    let params = Params::default();
    // Speed up forever; with no border anywhere the car can never crash.
    let mut episode = Episode::new(vec![ScriptedPolicy::favoring(3)], &params);

    let status = episode.run_to_completion(&OpenRaster, &params);

    assert_eq!(status, EpisodeStatus::HorizonReached);
    assert_eq!(episode.ticks, params.episode_horizon);
    assert_eq!(episode.still_alive, 1);
}

#[test]
fn all_crashing_on_the_first_tick_terminates_immediately() {
    let params = Params::default();
    let policies = vec![
        ScriptedPolicy::favoring(0),
        ScriptedPolicy::favoring(1),
        ScriptedPolicy::favoring(3),
    ];
    let mut episode = Episode::new(policies, &params);

    let status = episode.step(&WallRaster, &params);

    assert_eq!(status, EpisodeStatus::AllCrashed);
    assert_eq!(episode.ticks, 1);
    assert_eq!(episode.still_alive, 0);
}

#[test]
fn terminated_episodes_ignore_further_steps() {
    let params = Params::default();
    let mut episode = Episode::new(vec![ScriptedPolicy::favoring(3)], &params);

    episode.step(&WallRaster, &params);
    let fitness_after_crash = episode.fitness.clone();
    let ticks_after_crash = episode.ticks;

    let status = episode.step(&WallRaster, &params);

    assert_eq!(status, EpisodeStatus::AllCrashed);
    assert_eq!(episode.ticks, ticks_after_crash);
    assert_eq!(episode.fitness, fitness_after_crash);
}

#[test]
fn fitness_accumulates_the_per_tick_reward() {
    let params = Params::default();
    let mut episode = Episode::new(vec![ScriptedPolicy::favoring(3)], &params);

    let mut expected = 0.0;
    for _ in 0..5 {
        episode.step(&OpenRaster, &params);
        expected += episode.cars[0].reward(&params);
    }

    assert!((episode.fitness[0] - expected).abs() < 1e-3);
}

#[test]
fn alive_flag_is_monotonic_across_an_episode() {
    let params = Params::default();
    let mut episode = Episode::new(vec![ScriptedPolicy::favoring(3)], &params);

    let mut was_dead = false;
    for _ in 0..10 {
        episode.step(&WallRaster, &params);
        if was_dead {
            assert!(!episode.cars[0].is_alive());
        }
        was_dead = was_dead || !episode.cars[0].is_alive();
    }
    assert!(was_dead);
}

#[test]
fn policies_receive_one_observation_per_ray() {
    let params = Params::default();
    let mut episode = Episode::new(vec![RecordingPolicy::new()], &params);

    episode.step(&OpenRaster, &params);
    episode.step(&OpenRaster, &params);

    let observations = episode.policies()[0].observations.borrow();
    assert_eq!(observations.len(), 2);
    for observation in observations.iter() {
        assert_eq!(observation.len(), SENSOR_COUNT);
        assert!(observation.iter().all(|&value| value >= 0.0));
    }
}
