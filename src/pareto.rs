//! Pareto dominance and front analysis.
//!
//! Shared by both engines: dominance testing, fast non-dominated sorting
//! into ranked fronts, standalone non-dominated filtering, and crowding
//! distance. Both objectives are **minimized**: lower values are better.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Trans. Evol. Comput. 6(2), 182-197

use crate::solution::Cost;

/// Pareto dominance test (minimization).
///
/// `a` dominates `b` iff `a` is no worse in either coordinate and strictly
/// better in at least one. Irreflexive, asymmetric, transitive.
pub fn dominates(a: Cost, b: Cost) -> bool {
    (a[0] <= b[0] && a[1] <= b[1]) && (a[0] < b[0] || a[1] < b[1])
}

/// One Pareto front: a rank plus the member indices into the objective
/// collection it was sorted from.
///
/// Rank 0 is the non-dominated set; every member of a rank-`k` front is
/// dominated by at least one member of some smaller-rank front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Front {
    /// Front rank (0 = best).
    pub rank: usize,

    /// Indices of front members, in discovery order.
    pub members: Vec<usize>,
}

/// Result of non-dominated sorting.
///
/// `ranks[i]` is the Pareto rank of the solution at index `i`; `fronts`
/// holds the same partition grouped by rank. The fronts partition the
/// full index set.
#[derive(Debug, Clone)]
pub struct NonDominatedSort {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Fronts in rank order; `fronts[k].rank == k`.
    pub fronts: Vec<Front>,
}

/// Fast non-dominated sorting (Deb et al., 2002).
///
/// For each solution `p`, tracks the set of solutions it dominates and a
/// count of solutions dominating it. Front 0 contains every solution with
/// count 0; subsequent fronts peel off by decrementing the counts of the
/// dominated sets. O(n²) for two objectives.
///
/// Ties in objective values are not broken here: identical solutions do
/// not dominate each other and land in the same front.
///
/// # Panics
///
/// Panics if `costs` is empty.
pub fn non_dominated_sort(costs: &[Cost]) -> NonDominatedSort {
    let n = costs.len();
    assert!(n > 0, "costs must not be empty");

    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(costs[i], costs[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(costs[j], costs[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }
    for (i, &count) in domination_count.iter().enumerate() {
        if count == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![Front {
        rank: 0,
        members: front_0,
    }];
    loop {
        let current = fronts.last().expect("fronts starts with front 0");
        let next_rank = fronts.len();
        let mut next_members = Vec::new();

        for &i in &current.members {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = next_rank;
                    next_members.push(j);
                }
            }
        }

        if next_members.is_empty() {
            break;
        }
        fronts.push(Front {
            rank: next_rank,
            members: next_members,
        });
    }

    NonDominatedSort { ranks, fronts }
}

/// Returns the indices of solutions with no dominator in `costs`.
///
/// Equivalent to front 0 of [`non_dominated_sort`] but usable standalone;
/// the reference-front construction and SPEA both use it. O(n²) pairwise
/// scan; preserves input order.
pub fn filter_non_dominated(costs: &[Cost]) -> Vec<usize> {
    (0..costs.len())
        .filter(|&i| {
            !costs
                .iter()
                .enumerate()
                .any(|(j, &cj)| j != i && dominates(cj, costs[i]))
        })
        .collect()
}

/// Crowding distance of each front member within its front (Deb et al.).
///
/// For each objective, members are sorted by that objective's value; the
/// two extremes receive infinite distance, and interior members accumulate
/// `(next - prev) / (max - min)`. A zero-range objective contributes
/// nothing (degenerate front, no division by zero).
///
/// Returns one distance per front member, aligned with `front.members`.
/// Only meaningful for comparing individuals within the same front.
pub fn crowding_distance(costs: &[Cost], front: &Front) -> Vec<f64> {
    let n = front.members.len();
    let mut dist = vec![0.0f64; n];
    if n == 0 {
        return dist;
    }

    for obj in 0..2 {
        // Positions within the front, ordered by this objective.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            let va = costs[front.members[a]][obj];
            let vb = costs[front.members[b]][obj];
            va.partial_cmp(&vb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let min_val = costs[front.members[order[0]]][obj];
        let max_val = costs[front.members[order[n - 1]]][obj];
        let range = max_val - min_val;
        // Zero-range objective contributes nothing, not even boundary
        // infinities: a fully degenerate front keeps distance 0 everywhere.
        if range == 0.0 {
            continue;
        }

        dist[order[0]] = f64::INFINITY;
        dist[order[n - 1]] = f64::INFINITY;

        for i in 1..n.saturating_sub(1) {
            let prev = costs[front.members[order[i - 1]]][obj];
            let next = costs[front.members[order[i + 1]]][obj];
            dist[order[i]] += (next - prev) / range;
        }
    }

    dist
}
