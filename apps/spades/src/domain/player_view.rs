//! What a seat can see of the table.
//!
//! `RoundView` is the interface between the engine and AI players: everything
//! visible to one seat at a decision point, plus helpers that apply the rules.
//! `TableView` is the collaborator-facing snapshot used to render a whole table
//! from the human's point of view.

use serde::Serialize;

use crate::domain::bidding::legal_bids;
use crate::domain::lifecycle::{match_outcome, MatchOutcome};
use crate::domain::player::PlayerController;
use crate::domain::rules::{team_of, TeamId, PLAYERS, TEAMS};
use crate::domain::scoring::{RoundSummary, TeamScore};
use crate::domain::state::{CompletedTrick, MatchState, NameRoster, Phase, PlayerId};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Information visible to one seat at a decision point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub seat: PlayerId,
    pub phase: Phase,
    pub round_no: u16,
    pub dealer: PlayerId,
    /// This seat's hand, in display order.
    pub hand: Vec<Card>,
    /// Bids placed so far this round, indexed by seat.
    pub bids: [Option<u8>; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    /// Cards on the table this trick, in play order.
    pub trick_plays: Vec<(PlayerId, Card)>,
    pub trick_lead: Option<Suit>,
    pub spades_broken: bool,
    pub teams: [TeamScore; TEAMS],
    legal_bids: Vec<u8>,
    legal_plays: Vec<Card>,
}

impl RoundView {
    pub fn for_seat(state: &MatchState, seat: PlayerId) -> Result<Self, DomainError> {
        let player = state.player(seat)?;
        Ok(Self {
            seat,
            phase: state.phase,
            round_no: state.round_no,
            dealer: state.dealer,
            hand: player.hand.clone(),
            bids: state.bids(),
            tricks_won: state.tricks_won(),
            trick_plays: state.round.trick_plays.clone(),
            trick_lead: state.round.trick_lead,
            spades_broken: state.round.spades_broken,
            teams: state.teams,
            legal_bids: legal_bids(state, seat),
            legal_plays: legal_moves(state, seat),
        })
    }

    pub fn legal_bids(&self) -> Vec<u8> {
        self.legal_bids.clone()
    }

    /// Legal cards in display order.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.legal_plays.clone()
    }

    pub fn is_leading(&self) -> bool {
        self.trick_plays.is_empty()
    }

    pub fn team(&self) -> TeamId {
        team_of(self.seat)
    }
}

/// One seat as seen from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub controller: PlayerController,
    /// Full hand for human seats; other seats show only a count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<Card>>,
    pub hand_size: usize,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub team_score: i32,
    pub team_bags: u8,
    /// Legal plays or bids are offered only to the human whose turn it is.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legal_plays: Vec<Card>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legal_bids: Vec<u8>,
}

/// Collaborator-facing snapshot of the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub phase: Phase,
    pub round_no: u16,
    pub dealer: PlayerId,
    pub turn: Option<PlayerId>,
    /// Seat whose input the engine is blocked on, if a human must act.
    pub awaiting_human: Option<PlayerId>,
    pub seats: Vec<SeatView>,
    pub trick_plays: Vec<(PlayerId, Card)>,
    pub trick_lead: Option<Suit>,
    pub trick_winner: Option<PlayerId>,
    pub spades_broken: bool,
    pub last_trick: Option<CompletedTrick>,
    pub teams: [TeamScore; TEAMS],
    pub last_round: Option<RoundSummary>,
    pub roster: Option<NameRoster>,
    pub outcome: Option<MatchOutcome>,
}

impl TableView {
    pub fn from_state(state: &MatchState) -> Self {
        let awaiting_human = state
            .turn
            .filter(|&seat| state.players.get(seat as usize).is_some_and(|p| p.is_human()));

        let seats = state
            .players
            .iter()
            .map(|p| {
                let team = p.team();
                let acting = awaiting_human == Some(p.seat);
                SeatView {
                    seat: p.seat,
                    name: p.name.clone(),
                    team,
                    controller: p.controller,
                    hand: p.is_human().then(|| p.hand.clone()),
                    hand_size: p.hand.len(),
                    bid: p.bid,
                    tricks_won: p.tricks_won,
                    team_score: state.teams[team as usize].score,
                    team_bags: state.teams[team as usize].bags,
                    legal_plays: if acting {
                        legal_moves(state, p.seat)
                    } else {
                        Vec::new()
                    },
                    legal_bids: if acting {
                        legal_bids(state, p.seat)
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        Self {
            phase: state.phase,
            round_no: state.round_no,
            dealer: state.dealer,
            turn: state.turn,
            awaiting_human,
            seats,
            trick_plays: state.round.trick_plays.clone(),
            trick_lead: state.round.trick_lead,
            trick_winner: state.round.trick_winner,
            spades_broken: state.round.spades_broken,
            last_trick: state.round.last_trick().cloned(),
            teams: state.teams,
            last_round: state.last_round.clone(),
            roster: state.roster.clone(),
            outcome: match_outcome(state),
        }
    }
}
