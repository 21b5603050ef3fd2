//! NSGA-II generational loop.

use super::config::Nsga2Config;
use crate::instance::TspInstance;
use crate::operators::breed;
use crate::pareto::{crowding_distance, non_dominated_sort};
use crate::random::create_rng;
use crate::selection::tournament_select;
use crate::solution::{evaluate_cost, pareto_front_of, random_population, Cost, ParetoFront};
use rand::Rng;

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```ignore
/// let front = Nsga2Runner::run(&instance, &Nsga2Config::default().with_seed(42));
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs NSGA-II and returns front 0 of the final population.
    ///
    /// With `config.seed = Some(s)` the run is fully deterministic.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`Nsga2Config::validate`] first to get a descriptive error).
    pub fn run(instance: &TspInstance, config: &Nsga2Config) -> ParetoFront {
        config.validate().expect("invalid Nsga2Config");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs NSGA-II with a caller-owned RNG.
    pub fn run_with_rng<R: Rng>(
        instance: &TspInstance,
        config: &Nsga2Config,
        rng: &mut R,
    ) -> ParetoFront {
        let n = config.population_size;
        let mut population = random_population(instance.num_cities, n, rng);

        for _ in 0..config.generations {
            let costs = evaluate(&population, instance);
            population = crowding_truncate(&population, &costs, n);

            // Rank and crowding signals for the truncated population;
            // indices below refer to this population.
            let costs = evaluate(&population, instance);
            let sorted = non_dominated_sort(&costs);
            let mut crowding = vec![0.0f64; population.len()];
            for front in &sorted.fronts {
                let dist = crowding_distance(&costs, front);
                for (slot, &idx) in front.members.iter().enumerate() {
                    crowding[idx] = dist[slot];
                }
            }

            let parents =
                tournament_select(&sorted.ranks, &crowding, config.tournament_size, rng);

            population = breed(&population, &parents, config.mutation_prob, n, rng);
        }

        pareto_front_of(&population, instance)
    }
}

fn evaluate(population: &[Vec<usize>], instance: &TspInstance) -> Vec<Cost> {
    population
        .iter()
        .map(|t| evaluate_cost(t, instance))
        .collect()
}

/// Environmental selection: appends whole fronts in rank order and
/// truncates the last admitted front by descending crowding distance, so
/// exactly `target` tours survive. Only the overflowing front is split.
fn crowding_truncate(
    population: &[Vec<usize>],
    costs: &[Cost],
    target: usize,
) -> Vec<Vec<usize>> {
    let sorted = non_dominated_sort(costs);
    let mut survivors: Vec<Vec<usize>> = Vec::with_capacity(target);

    for front in &sorted.fronts {
        let remaining = target - survivors.len();
        if front.members.len() <= remaining {
            survivors.extend(front.members.iter().map(|&i| population[i].clone()));
        } else {
            let dist = crowding_distance(costs, front);
            let mut order: Vec<usize> = (0..front.members.len()).collect();
            order.sort_by(|&a, &b| {
                dist[b]
                    .partial_cmp(&dist[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            survivors.extend(
                order
                    .iter()
                    .take(remaining)
                    .map(|&slot| population[front.members[slot]].clone()),
            );
        }
        if survivors.len() == target {
            break;
        }
    }

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::dominates;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn uniform_instance(n: usize) -> TspInstance {
        let mut m = vec![vec![1.0; n]; n];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 0.0;
        }
        TspInstance::from_matrices(m.clone(), m).unwrap()
    }

    fn conflicting_instance() -> TspInstance {
        // Objective A favors the identity cycle, objective B its reverse.
        let n = 6;
        let mut a = vec![vec![10.0; n]; n];
        let mut b = vec![vec![10.0; n]; n];
        for i in 0..n {
            a[i][i] = 0.0;
            b[i][i] = 0.0;
            a[i][(i + 1) % n] = 1.0;
            b[(i + 1) % n][i] = 1.0;
        }
        TspInstance::from_matrices(a, b).unwrap()
    }

    fn small_config() -> Nsga2Config {
        Nsga2Config::default()
            .with_population_size(24)
            .with_generations(15)
            .with_seed(42)
    }

    #[test]
    fn test_output_tours_are_permutations() {
        let instance = conflicting_instance();
        let front = Nsga2Runner::run(&instance, &small_config());
        assert!(!front.is_empty());
        for sol in &front.solutions {
            let set: HashSet<usize> = sol.tour.iter().copied().collect();
            assert_eq!(sol.tour.len(), 6);
            assert_eq!(set.len(), 6);
        }
    }

    #[test]
    fn test_output_is_mutually_non_dominated() {
        let instance = conflicting_instance();
        let front = Nsga2Runner::run(&instance, &small_config());
        for a in &front.solutions {
            for b in &front.solutions {
                assert!(!dominates(a.cost, b.cost) || a.cost == b.cost);
            }
        }
    }

    #[test]
    fn test_uniform_instance_collapses_to_single_point() {
        // All tours cost (n, n): the front is the single point (4, 4).
        let instance = uniform_instance(4);
        let front = Nsga2Runner::run(&instance, &small_config());
        assert!(!front.is_empty());
        for sol in &front.solutions {
            assert_eq!(sol.cost, [4.0, 4.0]);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let instance = conflicting_instance();
        let config = small_config();
        let a = Nsga2Runner::run(&instance, &config);
        let b = Nsga2Runner::run(&instance, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_costs_match_tours() {
        let instance = conflicting_instance();
        let front = Nsga2Runner::run(&instance, &small_config());
        for sol in &front.solutions {
            assert_eq!(sol.cost, evaluate_cost(&sol.tour, &instance));
        }
    }

    #[test]
    #[should_panic(expected = "invalid Nsga2Config")]
    fn test_invalid_config_panics() {
        let instance = uniform_instance(4);
        let config = Nsga2Config::default().with_population_size(0);
        Nsga2Runner::run(&instance, &config);
    }

    // ---- crowding_truncate ----

    #[test]
    fn test_truncate_never_splits_inner_fronts() {
        let mut rng = create_rng(42);
        let population = random_population(4, 6, &mut rng);
        // Chain of dominance: one individual per front, admitted in order.
        let costs: Vec<Cost> = (0..6).map(|i| [i as f64, i as f64]).collect();
        let survivors = crowding_truncate(&population, &costs, 3);
        assert_eq!(survivors.len(), 3);
        assert_eq!(survivors[0], population[0]);
        assert_eq!(survivors[1], population[1]);
        assert_eq!(survivors[2], population[2]);
    }

    #[test]
    fn test_truncate_prefers_spread_in_overflow_front() {
        let mut rng = create_rng(42);
        let population = random_population(5, 5, &mut rng);
        // One front of five points on a line; boundary points have
        // infinite crowding and must survive a cut to 2.
        let costs: Vec<Cost> = vec![
            [0.0, 4.0],
            [1.0, 3.0],
            [2.0, 2.0],
            [3.0, 1.0],
            [4.0, 0.0],
        ];
        let survivors = crowding_truncate(&population, &costs, 2);
        assert_eq!(survivors.len(), 2);
        assert!(survivors.contains(&population[0]));
        assert!(survivors.contains(&population[4]));
    }

    #[test]
    fn test_truncate_exact_fit_keeps_everything() {
        let mut rng = create_rng(42);
        let population = random_population(4, 4, &mut rng);
        let costs: Vec<Cost> = vec![[1.0, 4.0], [2.0, 3.0], [3.0, 2.0], [4.0, 1.0]];
        let survivors = crowding_truncate(&population, &costs, 4);
        assert_eq!(survivors.len(), 4);
        for tour in &population {
            assert!(survivors.contains(tour));
        }
    }
}
