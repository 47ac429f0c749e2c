use std::ops::RangeInclusive;

use super::state::PlayerId;

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = DECK_SIZE / PLAYERS;
pub const TRICKS_PER_ROUND: u8 = HAND_SIZE as u8;

pub const MIN_BID: u8 = 1;
pub const MAX_BID: u8 = 7;

/// Points per bid trick when a team makes its contract.
pub const POINTS_PER_BID_TRICK: i32 = 10;
/// Bags that trigger one penalty.
pub const BAG_LIMIT: u8 = 10;
pub const BAG_PENALTY: i32 = 100;
/// First team to reach this score ends the match.
pub const WINNING_SCORE: i32 = 500;

pub type TeamId = u8; // 0 or 1

pub fn valid_bid_range() -> RangeInclusive<u8> {
    MIN_BID..=MAX_BID
}

/// Seats 0 and 2 form team 0; seats 1 and 3 form team 1.
#[inline]
pub fn team_of(seat: PlayerId) -> TeamId {
    seat % 2
}

/// Seats belonging to a team, in seat order.
#[inline]
pub fn team_seats(team: TeamId) -> [PlayerId; 2] {
    [team, team + 2]
}
