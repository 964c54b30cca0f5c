//! Payment sequences: how many recipients a total can cover when each payment
//! doubles (generous) versus when payments follow Fibonacci (stingy).

use crate::error::PuzzleError;

/// `stingy_count(total) - generous_count(total)`.
pub fn payment_gap(total: i64) -> Result<i64, PuzzleError> {
    if total < 1 {
        return Err(PuzzleError::InvalidPaymentTotal { total });
    }
    let total = total as u64;
    Ok(stingy_count(total) as i64 - generous_count(total) as i64)
}

/// Pay 1, 2, 4, ... until the running sum reaches `total`.
///
/// If the last payment overshoots, it is not counted.
pub fn generous_count(total: u64) -> u32 {
    let mut paid: u64 = 0;
    let mut count: u32 = 0;

    while paid < total {
        paid = paid.saturating_add(1u64 << count);
        count += 1;
    }

    if paid != total {
        count -= 1;
    }
    count
}

/// Pay 1, 1, 2, 3, 5, ... until the running sum reaches `total`.
///
/// Sums run over `F(2), F(3), ...`, one payment per term.
pub fn stingy_count(total: u64) -> u32 {
    let (mut prev, mut cur): (u64, u64) = (0, 1);
    let mut paid: u64 = 0;
    let mut count: u32 = 0;

    while paid < total {
        count += 1;
        let next = prev.saturating_add(cur);
        prev = cur;
        cur = next;
        paid = paid.saturating_add(cur);
    }

    count
}
