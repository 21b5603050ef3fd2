//! Parent selection.
//!
//! Binary-style tournament over Pareto rank with crowding distance as the
//! tie-break. NSGA-II feeds it real rank/crowding signals; SPEA calls it
//! with uniform signals over its fitness-filtered archive, so pressure
//! there comes from archive truncation rather than the tournament itself.

use rand::seq::index::sample;
use rand::Rng;

/// Rank + crowding tournament selection.
///
/// Repeated `n` times (`n` = population size): draws `k` candidates
/// uniformly without replacement, keeps the one with the lower front rank,
/// breaking rank ties by larger crowding distance; any remaining tie
/// resolves to the first-encountered candidate. The overall selection is
/// with replacement, so the returned index list (length `n`) may repeat.
///
/// `k` is silently clamped to the population size.
///
/// # Panics
///
/// Panics if the population is empty or the signal slices disagree in
/// length.
pub fn tournament_select<R: Rng>(
    ranks: &[usize],
    crowding: &[f64],
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = ranks.len();
    assert!(n > 0, "cannot select from an empty population");
    assert_eq!(n, crowding.len(), "rank/crowding length mismatch");

    let k = k.clamp(1, n);
    let mut selected = Vec::with_capacity(n);
    for _ in 0..n {
        let candidates = sample(rng, n, k);
        let mut best = candidates.index(0);
        for c in candidates.iter().skip(1) {
            if ranks[c] < ranks[best]
                || (ranks[c] == ranks[best] && crowding[c] > crowding[best])
            {
                best = c;
            }
        }
        selected.push(best);
    }
    selected
}
