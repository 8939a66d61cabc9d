//! Small arithmetic helpers used by the engine.
//!
//! None of these hold state. The only non-constant work is
//! [`random_achievable_sum`], which enumerates subsets of a pool of at most
//! nine numbers.

use smallvec::SmallVec;

use super::rng::GameRng;

/// Total of all elements; 0 for an empty slice.
#[must_use]
pub fn sum(numbers: &[u32]) -> u32 {
    numbers.iter().sum()
}

/// Inclusive ascending sequence `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
#[must_use]
pub fn range(min: u32, max: u32) -> Vec<u32> {
    assert!(min <= max, "range requires min <= max, got {min}..={max}");
    (min..=max).collect()
}

/// Uniformly chosen integer in `[min, max]`.
pub fn random_int(rng: &mut GameRng, min: u32, max: u32) -> u32 {
    rng.gen_range_inclusive(min, max)
}

/// Every non-empty subset sum of `pool` that stays within `ceiling`.
///
/// Subsets are grown one element at a time; each subset whose sum fits
/// contributes one entry, so equal sums reached by different subsets appear
/// more than once.
#[must_use]
pub fn achievable_sums(pool: &[u32], ceiling: u32) -> Vec<u32> {
    // Only subset totals matter, so each subset is stored as its running sum.
    let mut subsets: SmallVec<[u32; 64]> = SmallVec::new();
    subsets.push(0);
    let mut sums = Vec::new();

    for &n in pool {
        for j in 0..subsets.len() {
            let candidate = subsets[j] + n;
            if candidate <= ceiling {
                subsets.push(candidate);
                sums.push(candidate);
            }
        }
    }

    sums
}

/// Pick one achievable subset sum of `pool` within `ceiling`.
///
/// Every generated subset is one draw, so sums reachable in several ways are
/// proportionally more likely.
///
/// # Panics
///
/// Panics if no non-empty subset of `pool` fits under `ceiling`, which
/// includes an empty pool. Callers must check before drawing.
pub fn random_achievable_sum(rng: &mut GameRng, pool: &[u32], ceiling: u32) -> u32 {
    let sums = achievable_sums(pool, ceiling);
    assert!(!sums.is_empty(), "no subset of {pool:?} sums to at most {ceiling}");
    sums[rng.gen_index(sums.len())]
}
