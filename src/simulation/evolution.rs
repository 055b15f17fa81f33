//! Generational evolution of car policies.
//!
//! After each episode the accumulated fitness is written back to the
//! population, the fittest genomes are carried over unchanged, and the rest
//! of the next generation is bred by crossover of top performers with a
//! log-sampled mutation scale.

use rand::Rng;

use super::brain::Brain;
use super::car::{ACTION_COUNT, SENSOR_COUNT};
use super::params::Params;

/// A policy network paired with the fitness it earned in the last episode.
#[derive(Debug, Clone)]
pub struct Genome {
    /// The policy network.
    pub brain: Brain,
    /// Fitness accumulated over the last episode.
    pub fitness: f32,
}

/// A generation of genomes.
#[derive(Debug, Clone)]
pub struct Population {
    /// Current genomes, unordered between generations.
    pub genomes: Vec<Genome>,
    /// Completed generation count.
    pub generation: u32,
}

impl Population {
    /// Creates a population of random policies sized per the parameters.
    pub fn new(params: &Params) -> Self {
        let layer_sizes = [SENSOR_COUNT, params.hidden_size, ACTION_COUNT];
        let genomes = (0..params.population_size)
            .map(|_| Genome {
                brain: Brain::new(&layer_sizes, params.init_weight_scale),
                fitness: 0.0,
            })
            .collect();

        Self {
            genomes,
            generation: 0,
        }
    }

    /// Clones the policies for an episode, in genome order.
    pub fn brains(&self) -> Vec<Brain> {
        self.genomes.iter().map(|genome| genome.brain.clone()).collect()
    }

    /// Writes episode fitness back to the genomes, in the same order the
    /// policies were handed out.
    pub fn assign_fitness(&mut self, fitness: &[f32]) {
        for (genome, &value) in self.genomes.iter_mut().zip(fitness.iter()) {
            genome.fitness = value;
        }
    }

    /// Highest fitness in the current generation.
    pub fn best_fitness(&self) -> f32 {
        self.genomes
            .iter()
            .map(|genome| genome.fitness)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Mean fitness of the current generation.
    pub fn mean_fitness(&self) -> f32 {
        if self.genomes.is_empty() {
            return 0.0;
        }
        let total: f32 = self.genomes.iter().map(|genome| genome.fitness).sum();
        total / self.genomes.len() as f32
    }

    /// Breeds the next generation in place.
    ///
    /// Sorts by fitness, keeps the configured elites unchanged, and fills the
    /// remaining slots with mutated crossover children of two distinct
    /// parents drawn from the top fraction of the population.
    pub fn evolve(&mut self, params: &Params) {
        self.genomes.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let size = self.genomes.len();
        let elite_count = params.elite_count.min(size);
        let parent_count = ((size as f32 * params.parent_fraction) as usize)
            .max(2)
            .min(size);

        let mut next: Vec<Genome> = self.genomes[..elite_count]
            .iter()
            .map(|genome| Genome {
                brain: genome.brain.clone(),
                fitness: 0.0,
            })
            .collect();

        let mut rng = rand::rng();
        while next.len() < size {
            let parent_1 = rng.random_range(0..parent_count);
            let mut parent_2 = rng.random_range(0..parent_count);
            while parent_2 == parent_1 && parent_count > 1 {
                parent_2 = rng.random_range(0..parent_count);
            }

            let alpha = rng.random::<f32>();
            let mut brain = Brain::crossover(
                &self.genomes[parent_1].brain,
                &self.genomes[parent_2].brain,
                alpha,
            );
            brain.mutate(sample_mutation_scale(params));

            next.push(Genome {
                brain,
                fitness: 0.0,
            });
        }

        self.genomes = next;
        self.generation += 1;
    }
}

/// Samples a mutation scale using logarithmic random distribution.
fn sample_mutation_scale(params: &Params) -> f32 {
    let log_min = params.mutation_scale_min.ln();
    let log_max = params.mutation_scale_max.ln();
    let log_mutation_scale = rand::rng().random_range(log_min..log_max);
    log_mutation_scale.exp()
}
