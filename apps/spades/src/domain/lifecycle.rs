//! Match lifecycle: roster selection, match start, dealing, round rollover, game over.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::dealing::deal_hands;
use crate::domain::player::{AiKind, Player, PlayerController};
use crate::domain::rules::{TeamId, PLAYERS, TEAMS};
use crate::domain::scoring::TeamScore;
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{
    check_card_conservation, expected_bidder, next_player, require_seated, MatchState, NameRoster,
    Phase, PlayerId, RoundState,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Opponent names offered during name selection.
pub const NAME_POOL: &[&str] = &[
    "Arjun", "Rohan", "Aditya", "Vikram", "Rahul", "Karan", "Rajesh", "Amit", "Priya", "Anjali",
    "Neha", "Pooja", "Kavya", "Sanya", "Riya",
];

/// Default name for the human seat.
pub const HUMAN_DEFAULT_NAME: &str = "You";

/// Seat configuration handed to `start_match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSpec {
    pub name: String,
    pub controller: PlayerController,
}

impl SeatSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: PlayerController::Human,
        }
    }

    pub fn ai(name: impl Into<String>, kind: AiKind) -> Self {
        Self {
            name: name.into(),
            controller: PlayerController::Ai(kind),
        }
    }
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    /// Winning team; None on a tied final score.
    pub winner: Option<TeamId>,
    pub scores: [i32; TEAMS],
    pub rounds_played: u16,
}

impl MatchOutcome {
    /// Whether `seat`'s team won.
    pub fn seat_won(&self, seat: PlayerId) -> bool {
        self.winner == Some(crate::domain::rules::team_of(seat))
    }
}

/// Menu → NameSelect with the human at seat 0 and three distinct sampled opponents.
pub fn open_name_select<R: Rng + ?Sized>(
    state: &mut MatchState,
    rng: &mut R,
) -> Result<(), DomainError> {
    if state.phase != Phase::Menu {
        return Err(DomainError::invalid_state(format!(
            "name selection opens from the menu, not {:?}",
            state.phase
        )));
    }
    let picks: Vec<&str> = NAME_POOL.choose_multiple(rng, PLAYERS - 1).copied().collect();
    let [a, b, c] = picks.as_slice() else {
        return Err(DomainError::invariant("name pool smaller than the table"));
    };
    state.roster = Some(NameRoster {
        names: [
            HUMAN_DEFAULT_NAME.to_string(),
            a.to_string(),
            b.to_string(),
            c.to_string(),
        ],
        human_seat: 0,
    });
    state.phase = Phase::NameSelect;
    debug!(roster = ?state.roster, "Transition: Menu -> NameSelect");
    Ok(())
}

/// Replace one opponent's proposed name with a different pool name not already seated.
pub fn reroll_name<R: Rng + ?Sized>(
    state: &mut MatchState,
    seat: PlayerId,
    rng: &mut R,
) -> Result<String, DomainError> {
    let roster = match (&state.phase, state.roster.as_mut()) {
        (Phase::NameSelect, Some(roster)) => roster,
        _ => {
            return Err(DomainError::invalid_state(format!(
                "names can only be re-rolled during name selection, not {:?}",
                state.phase
            )))
        }
    };
    if seat as usize >= PLAYERS || seat == roster.human_seat {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("seat {seat} has no re-rollable name"),
        ));
    }

    let candidates: Vec<&str> = NAME_POOL
        .iter()
        .copied()
        .filter(|n| !roster.names.iter().any(|taken| taken == n))
        .collect();
    let pick = candidates
        .choose(rng)
        .ok_or_else(|| DomainError::invariant("name pool exhausted"))?;
    roster.names[seat as usize] = pick.to_string();
    Ok(pick.to_string())
}

/// Rename the human seat in the proposed roster.
pub fn set_human_name(state: &mut MatchState, name: &str) -> Result<(), DomainError> {
    let name = validate_name(name)?;
    match (&state.phase, state.roster.as_mut()) {
        (Phase::NameSelect, Some(roster)) => {
            roster.names[roster.human_seat as usize] = name;
            Ok(())
        }
        _ => Err(DomainError::invalid_state(format!(
            "names can only be edited during name selection, not {:?}",
            state.phase
        ))),
    }
}

/// NameSelect → Dealing: seat the roster and deal the first round.
pub fn confirm_names(state: &mut MatchState, opponents: AiKind, seed: u64) -> Result<(), DomainError> {
    let roster = match (&state.phase, &state.roster) {
        (Phase::NameSelect, Some(roster)) => roster.clone(),
        _ => {
            return Err(DomainError::invalid_state(format!(
                "no roster to confirm during {:?}",
                state.phase
            )))
        }
    };
    let seats: [SeatSpec; PLAYERS] = std::array::from_fn(|i| {
        let name = roster.names[i].clone();
        if i == roster.human_seat as usize {
            SeatSpec::human(name)
        } else {
            SeatSpec::ai(name, opponents)
        }
    });
    start_match(state, seats, seed)
}

/// Seat four players and deal round 1 with seat 0 dealing.
///
/// Accepted from Menu or NameSelect.
pub fn start_match(
    state: &mut MatchState,
    seats: [SeatSpec; PLAYERS],
    seed: u64,
) -> Result<(), DomainError> {
    if !matches!(state.phase, Phase::Menu | Phase::NameSelect) {
        return Err(DomainError::invalid_state(format!(
            "a match cannot start during {:?}",
            state.phase
        )));
    }
    let mut players = Vec::with_capacity(PLAYERS);
    for (seat, spec) in seats.into_iter().enumerate() {
        let name = validate_name(&spec.name)?;
        players.push(Player::new(name, seat as PlayerId, spec.controller));
    }

    let mut next = MatchState::new();
    next.players = players;
    next.seed = seed;
    next.dealer = 0;
    deal_next_round(&mut next, 0)?;
    *state = next;

    info!(
        seed,
        players = ?state.players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        "Match started"
    );
    Ok(())
}

/// RoundEnd → Dealing: advance the dealer one seat and deal a fresh deck.
pub fn start_round(state: &mut MatchState) -> Result<(), DomainError> {
    if state.phase != Phase::RoundEnd {
        return Err(DomainError::invalid_state(format!(
            "a new round starts from RoundEnd, not {:?}",
            state.phase
        )));
    }
    if state.is_match_over() {
        return Err(DomainError::invalid_state(
            "the match is over; no further rounds",
        ));
    }
    let dealer = next_player(state.dealer);
    deal_next_round(state, dealer)
}

fn deal_next_round(state: &mut MatchState, dealer: PlayerId) -> Result<(), DomainError> {
    require_seated(state, "deal_next_round")?;
    let round_no = state.round_no.saturating_add(1);
    let hands = deal_hands(derive_dealing_seed(state.seed, round_no))?;

    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.take_hand(hand);
    }
    state.round_no = round_no;
    state.dealer = dealer;
    state.round = RoundState::empty();
    state.turn = None;
    state.leader = None;
    state.phase = Phase::Dealing;
    debug_assert!(check_card_conservation(state).is_ok());
    info!(round = round_no, dealer, "Round dealt");
    Ok(())
}

/// Dealing → Bidding once the deal has been shown.
pub fn complete_deal(state: &mut MatchState) -> Result<PlayerId, DomainError> {
    if state.phase != Phase::Dealing {
        return Err(DomainError::invalid_state(format!(
            "no deal to complete during {:?}",
            state.phase
        )));
    }
    check_card_conservation(state)?;
    let first = expected_bidder(state.dealer, 0);
    state.phase = Phase::Bidding;
    state.turn = Some(first);
    debug!(first_bidder = first, "Transition: Dealing -> Bidding");
    Ok(first)
}

/// RoundEnd → GameOver when a team reached the target, else the next round is dealt.
pub fn conclude_round(state: &mut MatchState) -> Result<Phase, DomainError> {
    if state.phase != Phase::RoundEnd {
        return Err(DomainError::invalid_state(format!(
            "no round to conclude during {:?}",
            state.phase
        )));
    }
    if state.is_match_over() {
        state.phase = Phase::GameOver;
        state.turn = None;
        if let Some(outcome) = match_outcome(state) {
            info!(
                winner = ?outcome.winner,
                scores = ?outcome.scores,
                rounds = outcome.rounds_played,
                "Match over"
            );
        }
        return Ok(Phase::GameOver);
    }
    start_round(state)?;
    Ok(Phase::Dealing)
}

/// GameOver → Menu; the finished match is discarded.
pub fn acknowledge_game_over(state: &mut MatchState) -> Result<MatchOutcome, DomainError> {
    let outcome = match_outcome(state).ok_or_else(|| {
        DomainError::invalid_state(format!("no finished match during {:?}", state.phase))
    })?;
    *state = MatchState::new();
    debug!("Transition: GameOver -> Menu");
    Ok(outcome)
}

/// Outcome of the match, available only in GameOver.
pub fn match_outcome(state: &MatchState) -> Option<MatchOutcome> {
    if state.phase != Phase::GameOver {
        return None;
    }
    let [TeamScore { score: s0, .. }, TeamScore { score: s1, .. }] = state.teams;
    let winner = match s0.cmp(&s1) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    };
    Some(MatchOutcome {
        winner,
        scores: [s0, s1],
        rounds_played: state.round_no,
    })
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            "player names must not be empty",
        ));
    }
    Ok(trimmed.to_string())
}
