//! Fixed-horizon episode loop over a batch of cars.
//!
//! One episode runs a set of cars, each bound to its own decision function,
//! over a shared track for at most a fixed number of ticks. Per tick, every
//! alive car first picks an action from its sensor observation, then moves
//! and accumulates fitness. The episode ends when all cars have crashed or
//! the tick horizon is reached.

use ndarray::Array1;

use super::brain::Decision;
use super::car::{Action, Car};
use super::params::Params;
use super::track::Raster;

/// State of an episode after the latest step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// At least one car is alive and the horizon has not been reached.
    Running,
    /// Every car has crashed.
    AllCrashed,
    /// The tick budget ran out with at least one survivor.
    HorizonReached,
}

/// One generation's simulated run: a batch of cars, their policies, and the
/// fitness accumulated per policy.
pub struct Episode<D: Decision> {
    /// Cars, one per policy, in policy order.
    pub cars: Vec<Car>,
    /// Fitness accumulated per policy, in policy order.
    pub fitness: Vec<f32>,
    /// Ticks simulated so far.
    pub ticks: u32,
    /// Cars alive after the latest step.
    pub still_alive: usize,
    policies: Vec<D>,
    status: EpisodeStatus,
}

impl<D: Decision> Episode<D> {
    /// Creates an episode with one fresh car per policy and zeroed fitness.
    pub fn new(policies: Vec<D>, params: &Params) -> Self {
        let cars = policies.iter().map(|_| Car::new(params)).collect();
        let fitness = vec![0.0; policies.len()];
        let still_alive = policies.len();

        Self {
            cars,
            fitness,
            ticks: 0,
            still_alive,
            policies,
            status: EpisodeStatus::Running,
        }
    }

    /// Current episode state.
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// The policies driving the cars, in car order.
    pub fn policies(&self) -> &[D] {
        &self.policies
    }

    /// Advances the episode by one tick. No-op once terminated.
    pub fn step<R: Raster>(&mut self, track: &R, params: &Params) -> EpisodeStatus {
        if self.status != EpisodeStatus::Running {
            return self.status;
        }

        // Decision phase: every alive car picks exactly one action.
        for (car, policy) in self.cars.iter_mut().zip(self.policies.iter()) {
            if !car.is_alive() {
                continue;
            }
            let observation: Array1<f32> = car
                .sensor_data(params)
                .iter()
                .map(|&value| value as f32)
                .collect();
            let scores = policy.activate(&observation);
            car.apply(Action::from_scores(&scores), params);
        }

        // Kinematic phase: move alive cars and accumulate their fitness.
        for (car, fitness) in self.cars.iter_mut().zip(self.fitness.iter_mut()) {
            if !car.is_alive() {
                continue;
            }
            car.update(track, params);
            *fitness += car.reward(params);
        }

        self.still_alive = self.cars.iter().filter(|car| car.is_alive()).count();
        self.ticks += 1;

        if self.still_alive == 0 {
            self.status = EpisodeStatus::AllCrashed;
        } else if self.ticks >= params.episode_horizon {
            self.status = EpisodeStatus::HorizonReached;
        }

        self.status
    }

    /// Steps the episode until it terminates. Headless driver for tests and
    /// batch evolution without rendering.
    pub fn run_to_completion<R: Raster>(&mut self, track: &R, params: &Params) -> EpisodeStatus {
        while self.status == EpisodeStatus::Running {
            self.step(track, params);
        }
        self.status
    }
}
