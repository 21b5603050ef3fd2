//! Tours, objective vectors, and population initialization.
//!
//! A tour is a permutation of `0..N` interpreted as a closed cycle: the
//! last city connects back to the first. Its objective vector is the pair
//! of cycle costs under the instance's two distance matrices. Costs are
//! recomputed whenever needed rather than cached across generations,
//! since population composition changes every generation.

use crate::instance::TspInstance;
use rand::seq::SliceRandom;
use rand::Rng;

/// A 2D objective vector: `[cost_a, cost_b]`, both minimized.
pub type Cost = [f64; 2];

/// A tour paired with its objective vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Permutation of `0..num_cities`, read as a closed cycle.
    pub tour: Vec<usize>,

    /// Cycle costs under the two distance matrices.
    pub cost: Cost,
}

/// The non-dominated output of one engine run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoFront {
    /// Mutually non-dominated solutions, in engine output order.
    pub solutions: Vec<Solution>,
}

impl ParetoFront {
    /// The objective vectors of the front, in solution order.
    pub fn costs(&self) -> Vec<Cost> {
        self.solutions.iter().map(|s| s.cost).collect()
    }

    /// Number of solutions in the front.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Whether the front is empty.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

/// Generates one uniformly random tour over `0..num_cities`.
pub fn random_tour<R: Rng>(num_cities: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..num_cities).collect();
    tour.shuffle(rng);
    tour
}

/// Generates an initial population of random tours.
pub fn random_population<R: Rng>(
    num_cities: usize,
    population_size: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    (0..population_size)
        .map(|_| random_tour(num_cities, rng))
        .collect()
}

/// Evaluates the two cycle costs of a tour.
///
/// `cost_k = sum of matrix_k[tour[i]][tour[i+1]]` over consecutive pairs,
/// plus the closing edge back to `tour[0]`. O(N).
///
/// # Panics
///
/// Panics if the tour is empty or indexes outside the matrices; the
/// engines only ever pass valid permutations of `0..num_cities`.
pub fn evaluate_cost(tour: &[usize], instance: &TspInstance) -> Cost {
    assert!(!tour.is_empty(), "cannot evaluate an empty tour");

    let mut cost = [0.0, 0.0];
    for w in tour.windows(2) {
        cost[0] += instance.matrix_a[w[0]][w[1]];
        cost[1] += instance.matrix_b[w[0]][w[1]];
    }
    let last = tour[tour.len() - 1];
    let first = tour[0];
    cost[0] += instance.matrix_a[last][first];
    cost[1] += instance.matrix_b[last][first];
    cost
}

/// Evaluates a batch of tours into `Solution` records.
pub fn evaluate_all(tours: &[Vec<usize>], instance: &TspInstance) -> Vec<Solution> {
    tours
        .iter()
        .map(|t| Solution {
            tour: t.clone(),
            cost: evaluate_cost(t, instance),
        })
        .collect()
}

/// Evaluates a tour collection and keeps its non-dominated subset as an
/// owned [`ParetoFront`]. Both engines extract their final output this
/// way: NSGA-II from the last population, SPEA from the last archive.
pub fn pareto_front_of(tours: &[Vec<usize>], instance: &TspInstance) -> ParetoFront {
    let solutions = evaluate_all(tours, instance);
    let costs: Vec<Cost> = solutions.iter().map(|s| s.cost).collect();
    let keep = crate::pareto::filter_non_dominated(&costs);
    ParetoFront {
        solutions: keep.into_iter().map(|i| solutions[i].clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn instance_3() -> TspInstance {
        TspInstance::from_matrices(
            vec![
                vec![0.0, 1.0, 4.0],
                vec![1.0, 0.0, 2.0],
                vec![4.0, 2.0, 0.0],
            ],
            vec![
                vec![0.0, 3.0, 1.0],
                vec![3.0, 0.0, 5.0],
                vec![1.0, 5.0, 0.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_cost_closes_cycle() {
        let inst = instance_3();
        // 0 -> 1 -> 2 -> 0
        let cost = evaluate_cost(&[0, 1, 2], &inst);
        assert_eq!(cost, [1.0 + 2.0 + 4.0, 3.0 + 5.0 + 1.0]);
    }

    #[test]
    fn test_evaluate_cost_rotation_invariant() {
        let inst = instance_3();
        // Symmetric matrices: rotating the cycle keeps both costs.
        assert_eq!(
            evaluate_cost(&[0, 1, 2], &inst),
            evaluate_cost(&[1, 2, 0], &inst)
        );
    }

    #[test]
    fn test_evaluate_cost_single_city() {
        let inst = TspInstance::from_matrices(vec![vec![0.0]], vec![vec![0.0]]).unwrap();
        assert_eq!(evaluate_cost(&[0], &inst), [0.0, 0.0]);
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let tour = random_tour(12, &mut rng);
            let set: HashSet<usize> = tour.iter().copied().collect();
            assert_eq!(tour.len(), 12);
            assert_eq!(set.len(), 12);
            assert!(tour.iter().all(|&c| c < 12));
        }
    }

    #[test]
    fn test_random_population_size() {
        let mut rng = create_rng(42);
        let pop = random_population(8, 30, &mut rng);
        assert_eq!(pop.len(), 30);
    }

    #[test]
    fn test_evaluate_all_pairs_records() {
        let inst = instance_3();
        let tours = vec![vec![0, 1, 2], vec![2, 1, 0]];
        let evaluated = evaluate_all(&tours, &inst);
        assert_eq!(evaluated.len(), 2);
        assert_eq!(evaluated[0].tour, tours[0]);
        assert_eq!(evaluated[0].cost, evaluate_cost(&tours[0], &inst));
    }

    #[test]
    fn test_pareto_front_of_keeps_non_dominated() {
        // Asymmetric matrices: [0,1,2] and [0,2,1] traverse different
        // edges, giving conflicting objective vectors.
        let inst = TspInstance::from_matrices(
            vec![
                vec![0.0, 1.0, 9.0],
                vec![9.0, 0.0, 1.0],
                vec![1.0, 9.0, 0.0],
            ],
            vec![
                vec![0.0, 9.0, 1.0],
                vec![1.0, 0.0, 9.0],
                vec![9.0, 1.0, 0.0],
            ],
        )
        .unwrap();
        let tours = vec![vec![0, 1, 2], vec![0, 2, 1]];
        let front = pareto_front_of(&tours, &inst);
        // (3, 27) and (27, 3): mutually non-dominated, both kept.
        assert_eq!(front.len(), 2);
        for sol in &front.solutions {
            assert_eq!(sol.cost, evaluate_cost(&sol.tour, &inst));
        }
    }

    #[test]
    fn test_pareto_front_costs() {
        let front = ParetoFront {
            solutions: vec![
                Solution {
                    tour: vec![0, 1],
                    cost: [1.0, 2.0],
                },
                Solution {
                    tour: vec![1, 0],
                    cost: [2.0, 1.0],
                },
            ],
        };
        assert_eq!(front.costs(), vec![[1.0, 2.0], [2.0, 1.0]]);
        assert_eq!(front.len(), 2);
        assert!(!front.is_empty());
    }
}
