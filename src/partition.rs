//! Partitions into distinct parts ("staircases").
//!
//! The number of ways to write `n` as a sum of distinct positive integers is the
//! coefficient of `x^n` in `(1 + x)(1 + x^2)(1 + x^3)...`. Multiplying in one
//! factor `(1 + x^k)` at a time is the same update as a 0/1 knapsack over part
//! sizes, so we keep a single coefficient vector truncated to degree `n`.

/// Largest `n` that is computed; anything above returns `-1`.
pub const PARTITION_LIMIT: i64 = 200;

/// Below this, the answer is fixed at `1`.
pub const PARTITION_FLOOR: i64 = 5;

/// Number of partitions of `n` into two or more distinct positive parts.
///
/// `n < 5` gives `1` and `n > 200` gives `-1`.
pub fn partition_count(n: i64) -> i64 {
    if n < PARTITION_FLOOR {
        return 1;
    }
    if n > PARTITION_LIMIT {
        return -1;
    }

    // The single-part partition `n = n` has only one step.
    distinct_partitions(n as usize) as i64 - 1
}

/// Coefficient of `x^n` in `prod_{k>=1} (1 + x^k)`, including the one-part sum.
///
/// `n` is at most [`PARTITION_LIMIT`], where the count is far below `u64::MAX`.
pub(crate) fn distinct_partitions(n: usize) -> u64 {
    debug_assert!(n as i64 <= PARTITION_LIMIT);
    let mut coeffs = vec![0u64; n + 1];
    coeffs[0] = 1;

    for k in 1..=n {
        // High to low so each part size is used at most once.
        for j in (k..=n).rev() {
            coeffs[j] += coeffs[j - k];
        }
    }

    coeffs[n]
}
