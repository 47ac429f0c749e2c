//! RNG seed derivation utilities for deterministic matches.
//!
//! A match carries one base seed. Every consumer of randomness (the round's
//! shuffle, a seeded computer player) derives its own seed from it so a fixed
//! base seed replays the whole match.

/// Derive the shuffle seed for a round.
///
/// Same match seed + round number = same deal.
pub fn derive_dealing_seed(match_seed: u64, round_no: u16) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from AI seeds
}

/// Derive the seed a computer player uses for one decision.
///
/// `decision_no` is the count of cards already played in the round (or bids
/// already placed while bidding) so consecutive decisions of one seat differ.
pub fn derive_ai_seed(match_seed: u64, round_no: u16, seat: u8, decision_no: u8) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(decision_no as u64)
        .wrapping_add(1)
}
