//! Front quality metrics and reference-front construction.
//!
//! A run's output front is judged against a synthesized reference front
//! `Ytrue`: the non-dominated union of every front observed across runs
//! (and across algorithms, when comparing them). Four metrics, all
//! lower-is-better except none:
//!
//! - **M1** (convergence): mean distance from the run's points to Ytrue
//! - **M2** (coverage): mean distance from Ytrue to the run's points
//! - **M3** (spread): mean consecutive gap along the run's front
//! - **Error**: fraction of Ytrue points missing from the run's front

use crate::pareto::filter_non_dominated;
use crate::solution::Cost;

/// Euclidean distance between two objective vectors.
pub fn euclidean(a: Cost, b: Cost) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

fn min_distance_to(point: Cost, set: &[Cost]) -> f64 {
    set.iter()
        .map(|&s| euclidean(point, s))
        .fold(f64::INFINITY, f64::min)
}

/// M1, convergence: mean over the run's points of the minimum distance to
/// any reference point. 0 when the front lies on the reference front.
///
/// # Panics
///
/// Panics if either set is empty.
pub fn convergence_m1(front: &[Cost], reference: &[Cost]) -> f64 {
    assert!(!front.is_empty(), "front must not be empty");
    assert!(!reference.is_empty(), "reference front must not be empty");
    front.iter().map(|&a| min_distance_to(a, reference)).sum::<f64>() / front.len() as f64
}

/// M2, coverage: mean over the reference points of the minimum distance to
/// any of the run's points. Symmetric counterpart to [`convergence_m1`].
///
/// # Panics
///
/// Panics if either set is empty.
pub fn coverage_m2(front: &[Cost], reference: &[Cost]) -> f64 {
    assert!(!front.is_empty(), "front must not be empty");
    assert!(!reference.is_empty(), "reference front must not be empty");
    reference.iter().map(|&y| min_distance_to(y, front)).sum::<f64>() / reference.len() as f64
}

/// M3, spread: sorts the front by the first objective and returns the
/// mean consecutive Euclidean gap. 0 for fronts of size <= 1.
pub fn spread_m3(front: &[Cost]) -> f64 {
    if front.len() <= 1 {
        return 0.0;
    }
    let mut sorted = front.to_vec();
    sorted.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap_or(std::cmp::Ordering::Equal));
    let gaps: f64 = sorted.windows(2).map(|w| euclidean(w[0], w[1])).sum();
    gaps / (sorted.len() - 1) as f64
}

/// Error: fraction of reference points with no exact match in the run's
/// front. 0 when the front covers the reference front point for point.
///
/// # Panics
///
/// Panics if the reference front is empty.
pub fn error_ratio(front: &[Cost], reference: &[Cost]) -> f64 {
    assert!(!reference.is_empty(), "reference front must not be empty");
    let missing = reference
        .iter()
        .filter(|&&y| !front.iter().any(|&a| a == y))
        .count();
    missing as f64 / reference.len() as f64
}

/// Builds the reference front `Ytrue`: the mutually non-dominated subset
/// of the union of all given fronts. Recomputed whenever the contributing
/// run set changes.
pub fn reference_front(fronts: &[Vec<Cost>]) -> Vec<Cost> {
    let union: Vec<Cost> = fronts.iter().flatten().copied().collect();
    filter_non_dominated(&union)
        .into_iter()
        .map(|i| union[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::dominates;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean([0.0, 0.0], [3.0, 4.0]), 5.0);
        assert_eq!(euclidean([1.0, 1.0], [1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_m1_zero_on_reference() {
        let reference = vec![[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]];
        assert_eq!(convergence_m1(&reference, &reference), 0.0);
    }

    #[test]
    fn test_m1_measures_offset() {
        let reference = vec![[0.0, 0.0]];
        let front = vec![[3.0, 4.0], [0.0, 0.0]];
        // Distances 5 and 0, mean 2.5.
        assert!((convergence_m1(&front, &reference) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_m2_penalizes_uncovered_reference() {
        let reference = vec![[0.0, 0.0], [10.0, 10.0]];
        let front = vec![[0.0, 0.0]];
        // Nearest front point to (10,10) is sqrt(200) away; mean with 0.
        let expected = (200.0f64).sqrt() / 2.0;
        assert!((coverage_m2(&front, &reference) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_m2_zero_when_front_covers_reference() {
        let reference = vec![[1.0, 2.0], [2.0, 1.0]];
        let front = vec![[2.0, 1.0], [1.0, 2.0], [9.0, 9.0]];
        assert_eq!(coverage_m2(&front, &reference), 0.0);
    }

    #[test]
    fn test_m3_degenerate_fronts() {
        assert_eq!(spread_m3(&[]), 0.0);
        assert_eq!(spread_m3(&[[4.0, 4.0]]), 0.0);
    }

    #[test]
    fn test_m3_mean_gap() {
        // Sorted by first objective: gaps of sqrt(2) each.
        let front = vec![[2.0, 2.0], [0.0, 4.0], [1.0, 3.0]];
        let expected = (2.0f64).sqrt();
        assert!((spread_m3(&front) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_error_zero_on_exact_cover() {
        let reference = vec![[1.0, 5.0], [5.0, 1.0]];
        let front = vec![[5.0, 1.0], [1.0, 5.0]];
        assert_eq!(error_ratio(&front, &reference), 0.0);
    }

    #[test]
    fn test_error_counts_missing_points() {
        let reference = vec![[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [0.0, 9.0]];
        let front = vec![[1.0, 5.0]];
        assert_eq!(error_ratio(&front, &reference), 0.75);
    }

    #[test]
    fn test_reference_front_is_non_dominated() {
        let fronts = vec![
            vec![[1.0, 5.0], [4.0, 4.0]],
            vec![[3.0, 3.0], [6.0, 6.0]],
            vec![[5.0, 1.0]],
        ];
        let ytrue = reference_front(&fronts);
        assert_eq!(ytrue, vec![[1.0, 5.0], [3.0, 3.0], [5.0, 1.0]]);
        for &a in &ytrue {
            for &b in &ytrue {
                assert!(!dominates(a, b));
            }
        }
    }

    #[test]
    fn test_reference_front_single_point_world() {
        let fronts = vec![vec![[4.0, 4.0]], vec![[4.0, 4.0], [4.0, 4.0]]];
        let ytrue = reference_front(&fronts);
        assert!(ytrue.iter().all(|&c| c == [4.0, 4.0]));
        assert!(!ytrue.is_empty());
    }

    #[test]
    #[should_panic(expected = "reference front must not be empty")]
    fn test_m1_empty_reference_panics() {
        convergence_m1(&[[1.0, 1.0]], &[]);
    }
}
