//! # Evodrive - Evolutionary 2D Driving Simulation
//!
//! A simulation of cars that learn to drive around raster tracks with neural
//! network policies evolved through a genetic algorithm.
//!
//! ## Features
//!
//! - Neural network policies (MLP with tanh activation)
//! - Genetic algorithm evolution (mutation and crossover)
//! - Radar-based perception against a bitmap track
//! - Corner-based collision detection with a configurable corner model
//! - Fixed-horizon generation episodes with distance-based fitness
//! - Real-time visualization with macroquad
//!
//! ## Core Modules
//!
//! - [`simulation::car`] - Car kinematics, radar sensing, and collision state
//! - [`simulation::track`] - Raster track and the border-test abstraction
//! - [`simulation::episode`] - Fixed-horizon generation runner
//! - [`simulation::brain`] - Neural network policies
//! - [`simulation::evolution`] - Generational evolution driver

/// Core simulation logic and data structures.
pub mod simulation {
    /// Neural network policies that map radar readings to action scores.
    pub mod brain;
    /// Car kinematics, radar sensing, collision state, and reward.
    pub mod car;
    /// Fixed-horizon episode loop over a batch of cars.
    pub mod episode;
    /// Generational evolution of car policies.
    pub mod evolution;
    /// Heading-to-direction conversion in screen-space convention.
    pub mod geometry;
    /// Simulation parameters.
    pub mod params;
    /// Raster track representation and border queries.
    pub mod track;
}
