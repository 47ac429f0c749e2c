use serde::Serialize;

use crate::domain::player::Player;
use crate::domain::rules::{DECK_SIZE, PLAYERS, TEAMS, WINNING_SCORE};
use crate::domain::scoring::{RoundSummary, TeamScore};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3

/// Overall table progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// No match in progress.
    Menu,
    /// Roster proposed, waiting for confirmation.
    NameSelect,
    /// Cards dealt, waiting for the deal to be acknowledged.
    Dealing,
    /// Players place bids in fixed turn order.
    Bidding,
    /// Tricks in progress.
    Playing,
    /// Four cards on the table; winner already credited.
    TrickEnd,
    /// All tricks played; round already scored.
    RoundEnd,
    /// A team reached the winning score.
    GameOver,
}

/// A resolved trick kept for the rest of the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub plays: Vec<(PlayerId, Card)>,
    pub lead: Suit,
    pub winner: PlayerId,
}

/// Per-round state relevant during bidding and trick play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    /// Winner of the trick on the table (only during TrickEnd).
    pub trick_winner: Option<PlayerId>,
    /// Set by the first spade played this round; never cleared until the next deal.
    pub spades_broken: bool,
    /// Tricks resolved so far this round, in play order.
    pub completed_tricks: Vec<CompletedTrick>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            trick_plays: Vec::with_capacity(PLAYERS),
            trick_lead: None,
            trick_winner: None,
            spades_broken: false,
            completed_tricks: Vec::new(),
        }
    }

    /// Most recently resolved trick, for display.
    pub fn last_trick(&self) -> Option<&CompletedTrick> {
        self.completed_tricks.last()
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Proposed seating shown during name selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRoster {
    pub names: [String; PLAYERS],
    pub human_seat: PlayerId,
}

/// Entire table container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub phase: Phase,
    /// Roster under selection (NameSelect only).
    pub roster: Option<NameRoster>,
    /// Seated players; empty until a match starts.
    pub players: Vec<Player>,
    /// Cumulative score and bags per team.
    pub teams: [TeamScore; TEAMS],
    /// Dealer seat for the current round.
    pub dealer: PlayerId,
    /// Player whose turn it is to act.
    /// - Some(seat) during Bidding and Playing
    /// - None when nobody is expected to act
    pub turn: Option<PlayerId>,
    /// Player who leads the current trick (Playing / TrickEnd).
    pub leader: Option<PlayerId>,
    /// 1-based round number; 0 before the first deal.
    pub round_no: u16,
    /// Base seed every deal and seeded AI decision derives from.
    pub seed: u64,
    /// Per-round container.
    pub round: RoundState,
    /// Scoring of the most recently finished round.
    pub last_round: Option<RoundSummary>,
}

impl MatchState {
    /// A table sitting at the menu.
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            roster: None,
            players: Vec::new(),
            teams: [TeamScore::default(); TEAMS],
            dealer: 0,
            turn: None,
            leader: None,
            round_no: 0,
            seed: 0,
            round: RoundState::empty(),
            last_round: None,
        }
    }

    pub fn player(&self, seat: PlayerId) -> Result<&Player, DomainError> {
        self.players
            .get(seat as usize)
            .ok_or_else(|| DomainError::invariant(format!("no player seated at {seat}")))
    }

    pub fn bids(&self) -> [Option<u8>; PLAYERS] {
        let mut bids = [None; PLAYERS];
        for p in &self.players {
            if let Some(slot) = bids.get_mut(p.seat as usize) {
                *slot = p.bid;
            }
        }
        bids
    }

    pub fn bids_placed(&self) -> u8 {
        self.players.iter().filter(|p| p.bid.is_some()).count() as u8
    }

    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        let mut won = [0; PLAYERS];
        for p in &self.players {
            if let Some(slot) = won.get_mut(p.seat as usize) {
                *slot = p.tricks_won;
            }
        }
        won
    }

    /// Whether either team has reached the winning score.
    pub fn is_match_over(&self) -> bool {
        self.teams.iter().any(|t| t.score >= WINNING_SCORE)
    }

    /// Number of player decisions already taken this round (bids, then cards).
    pub fn decisions_taken(&self) -> u8 {
        let cards_played = self.round.completed_tricks.len() * PLAYERS + self.round.trick_plays.len();
        self.bids_placed().saturating_add(cards_played as u8)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
/// Counter-clockwise direction is negative (-1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8) -> PlayerId {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as PlayerId
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    seat_offset(p, 1)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: PlayerId) -> PlayerId {
    next_player(dealer)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8) -> PlayerId {
    seat_offset(start, (n % PLAYERS as u8) as i8)
}

/// Expected bidder seat during bidding.
///
/// Bidding starts at left-of-dealer, then rotates clockwise by `bid_count`.
#[inline]
pub fn expected_bidder(dealer: PlayerId, bid_count: u8) -> PlayerId {
    nth_from(round_start_seat(dealer), bid_count)
}

/// Expected actor seat during a trick.
///
/// `first_player` is the trick leader; `play_count` is how many cards
/// have already been played into the trick.
#[inline]
pub fn expected_actor(first_player: PlayerId, play_count: u8) -> PlayerId {
    nth_from(first_player, play_count)
}

pub fn require_turn(state: &MatchState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_leader(state: &MatchState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state
        .leader
        .ok_or_else(|| DomainError::invariant(format!("leader must be set ({ctx})")))
}

pub fn require_lead(state: &MatchState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .round
        .trick_lead
        .ok_or_else(|| DomainError::invariant(format!("trick lead must be set ({ctx})")))
}

pub fn require_seated(state: &MatchState, ctx: &'static str) -> Result<(), DomainError> {
    if state.players.len() != PLAYERS {
        return Err(DomainError::invariant(format!(
            "{PLAYERS} players must be seated, found {} ({ctx})",
            state.players.len()
        )));
    }
    Ok(())
}

/// Every card of the round is in exactly one place: a hand, the table, or a won trick.
pub fn check_card_conservation(state: &MatchState) -> Result<(), DomainError> {
    let mut seen = std::collections::HashSet::with_capacity(DECK_SIZE);
    let in_hands = state.players.iter().flat_map(|p| p.hand.iter().copied());
    let on_table = state.round.trick_plays.iter().map(|&(_, c)| c);
    let won = state
        .round
        .completed_tricks
        .iter()
        .flat_map(|t| t.plays.iter().map(|&(_, c)| c));

    for card in in_hands.chain(on_table).chain(won) {
        if !seen.insert(card) {
            return Err(DomainError::invariant(format!("card {card} held twice")));
        }
    }
    if seen.len() != DECK_SIZE {
        return Err(DomainError::invariant(format!(
            "{DECK_SIZE} cards expected in play, found {}",
            seen.len()
        )));
    }
    Ok(())
}
