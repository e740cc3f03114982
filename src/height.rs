//! Randomized level selection for skip list nodes.
//!
//! Each extra level is half as likely as the one below it, so the expected
//! number of links per node is 2 and search paths stay logarithmic without
//! any rebalancing. Rebalancing logic in deterministic trees is replaced
//! here by a single draw from this distribution at insert time.

use rand::RngCore;

use crate::skip_list::MAX_HEIGHT;

/// Draw a level count in `1..=MAX_HEIGHT`.
///
/// Counts the trailing one-bits of a uniform `u32` - each bit is a fair
/// coin toss, and the count stops at the first tails. P(levels > k) = 2^-k.
pub(crate) fn pick_levels(rng: &mut impl RngCore) -> usize {
    let z = rng.next_u32();
    (z.trailing_ones() as usize + 1).min(MAX_HEIGHT)
}
