//! SPEA generational loop and strength/fitness assignment.

use super::config::SpeaConfig;
use crate::instance::TspInstance;
use crate::operators::breed;
use crate::random::create_rng;
use crate::selection::tournament_select;
use crate::solution::{evaluate_cost, pareto_front_of, random_population, Cost, ParetoFront};
use rand::Rng;

/// Strength of each solution: how many members of `costs` it dominates.
pub fn strength_values(costs: &[Cost]) -> Vec<usize> {
    costs
        .iter()
        .map(|&ci| {
            costs
                .iter()
                .filter(|&&cj| crate::pareto::dominates(ci, cj))
                .count()
        })
        .collect()
}

/// Fitness of each solution: the sum of strengths of all solutions that
/// dominate it. Fitness 0 means non-dominated; lower is better.
pub fn fitness_values(costs: &[Cost], strengths: &[usize]) -> Vec<usize> {
    costs
        .iter()
        .map(|&ci| {
            costs
                .iter()
                .zip(strengths)
                .filter(|(&cj, _)| crate::pareto::dominates(cj, ci))
                .map(|(_, &s)| s)
                .sum()
        })
        .collect()
}

/// Executes the SPEA loop.
///
/// # Usage
///
/// ```ignore
/// let front = SpeaRunner::run(&instance, &SpeaConfig::default().with_seed(42));
/// ```
pub struct SpeaRunner;

impl SpeaRunner {
    /// Runs SPEA and returns the non-dominated subset of the final archive.
    ///
    /// With `config.seed = Some(s)` the run is fully deterministic.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`SpeaConfig::validate`] first to get a descriptive error).
    pub fn run(instance: &TspInstance, config: &SpeaConfig) -> ParetoFront {
        config.validate().expect("invalid SpeaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs SPEA with a caller-owned RNG.
    pub fn run_with_rng<R: Rng>(
        instance: &TspInstance,
        config: &SpeaConfig,
        rng: &mut R,
    ) -> ParetoFront {
        let n = config.population_size;
        let mut population = random_population(instance.num_cities, n, rng);
        let mut archive: Vec<Vec<usize>> = Vec::new();

        for _ in 0..config.generations {
            archive = next_archive(&archive, &population, instance, config.archive_size);
            if archive.is_empty() {
                // Degenerate union: refill by uniform resampling from the
                // population rather than failing the run.
                archive = (0..config.archive_size)
                    .map(|_| population[rng.random_range(0..population.len())].clone())
                    .collect();
            }

            let parents = select_parents(archive.len(), n, config.tournament_size, rng);
            population = breed(&archive, &parents, config.mutation_prob, n, rng);
        }

        pareto_front_of(&archive, instance)
    }
}

/// Environmental truncation: unions archive and population, assigns
/// strength then fitness over the union, and keeps the lowest-fitness
/// prefix up to `capacity` (stable on ties, so union order decides).
fn next_archive(
    archive: &[Vec<usize>],
    population: &[Vec<usize>],
    instance: &TspInstance,
    capacity: usize,
) -> Vec<Vec<usize>> {
    let union: Vec<&Vec<usize>> = archive.iter().chain(population.iter()).collect();
    let costs: Vec<Cost> = union.iter().map(|t| evaluate_cost(t, instance)).collect();

    let strengths = strength_values(&costs);
    let fitness = fitness_values(&costs, &strengths);

    let mut order: Vec<usize> = (0..union.len()).collect();
    order.sort_by_key(|&i| fitness[i]);
    order
        .into_iter()
        .take(capacity)
        .map(|i| union[i].clone())
        .collect()
}

/// Draws `target` parent indices into the archive.
///
/// The tournament runs with uniform rank/distance signals: the archive is
/// already fitness-filtered, so each draw is effectively uniform and the
/// selection pressure lives in [`next_archive`]. Each call yields
/// `archive_len` indices; draws accumulate until `target` is reached.
fn select_parents<R: Rng>(
    archive_len: usize,
    target: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    let ranks = vec![0usize; archive_len];
    let crowding = vec![1.0f64; archive_len];

    let mut parents = Vec::with_capacity(target + archive_len);
    while parents.len() < target {
        parents.extend(tournament_select(&ranks, &crowding, tournament_size, rng));
    }
    parents.truncate(target);
    parents
}
