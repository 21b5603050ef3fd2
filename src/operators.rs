//! Permutation-preserving genetic operators.
//!
//! Order crossover and swap mutation shared by both engines. Operators
//! never mutate their inputs: parents are read-only and children are
//! freshly allocated, so populations keep value semantics.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::seq::index::sample;
use rand::Rng;

/// Order Crossover (OX): produces one child from two parents.
///
/// Picks a random segment `[start, end]` (two distinct positions, sorted),
/// copies `parent1`'s segment verbatim into the child at the same
/// positions, then fills the remaining positions starting from
/// `(end + 1) % n`, scanning `parent2` circularly from the same point and
/// skipping cities already present. The child is always a valid
/// permutation combining both parents' relative orderings.
///
/// The sibling child of a pairing comes from a second call with the
/// parents swapped, drawing its own segment.
///
/// # Panics
///
/// Panics if the parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let picks = sample(rng, n, 2);
    let (start, end) = if picks.index(0) <= picks.index(1) {
        (picks.index(0), picks.index(1))
    } else {
        (picks.index(1), picks.index(0))
    };

    ox_build_child(parent1, parent2, start, end)
}

/// Builds one OX child for a fixed segment `[start, end]`.
fn ox_build_child(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    let mut child = vec![usize::MAX; n];
    let mut taken = vec![false; n];

    for i in start..=end {
        child[i] = parent1[i];
        taken[parent1[i]] = true;
    }

    // Fill sequentially after the segment, scanning parent2 circularly
    // from the same point; wraps correctly when end == n - 1.
    let mut fill_pos = (end + 1) % n;
    for offset in 0..n {
        let city = parent2[(end + 1 + offset) % n];
        if !taken[city] {
            child[fill_pos] = city;
            taken[city] = true;
            fill_pos = (fill_pos + 1) % n;
        }
    }

    child
}

/// Breeds the next generation from a selected parent list.
///
/// Parents are paired sequentially stepping by two, with the sibling index
/// wrapping (`i`, `(i + 1) % len`). Each pair yields two OX offspring, one
/// per parent order and each drawing its own segment, which are then swap
/// mutated. The offspring list is truncated to exactly `target`.
///
/// Shared by both engines; NSGA-II breeds from its truncated population,
/// SPEA from its archive.
pub fn breed<R: Rng>(
    population: &[Vec<usize>],
    parents: &[usize],
    mutation_prob: f64,
    target: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    assert!(!parents.is_empty(), "cannot breed from an empty selection");

    let m = parents.len();
    let mut offspring = Vec::with_capacity(target + 1);
    for i in (0..m).step_by(2) {
        let p1 = &population[parents[i]];
        let p2 = &population[parents[(i + 1) % m]];
        let c1 = order_crossover(p1, p2, rng);
        let c2 = order_crossover(p2, p1, rng);
        offspring.push(swap_mutation(&c1, mutation_prob, rng));
        offspring.push(swap_mutation(&c2, mutation_prob, rng));
        if offspring.len() >= target {
            break;
        }
    }
    offspring.truncate(target);
    offspring
}

/// Swap mutation: with probability `prob`, exchanges two distinct random
/// positions; otherwise returns the tour unchanged. Either way the result
/// is a fresh copy, never an alias of the input.
pub fn swap_mutation<R: Rng>(tour: &[usize], prob: f64, rng: &mut R) -> Vec<usize> {
    let mut mutated = tour.to_vec();
    if mutated.len() >= 2 && rng.random_range(0.0..1.0) < prob {
        let picks = sample(rng, mutated.len(), 2);
        mutated.swap(picks.index(0), picks.index(1));
    }
    mutated
}
