use serde::Serialize;
use tracing::info;

use crate::domain::rules::{
    team_seats, TeamId, BAG_LIMIT, BAG_PENALTY, POINTS_PER_BID_TRICK, TEAMS, TRICKS_PER_ROUND,
};
use crate::domain::state::{require_seated, MatchState, Phase};
use crate::errors::domain::DomainError;

/// Cumulative standing of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TeamScore {
    pub score: i32,
    pub bags: u8,
}

/// How one round changed one team's standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamRoundScore {
    pub team: TeamId,
    pub bid: u8,
    pub won: u8,
    /// Net change to the team score, penalties included.
    pub points: i32,
    pub bags_earned: u8,
    /// Number of bag penalties applied this round.
    pub penalties: u8,
    pub score_after: i32,
    pub bags_after: u8,
}

impl TeamRoundScore {
    pub fn made_bid(&self) -> bool {
        self.won >= self.bid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_no: u16,
    pub teams: [TeamRoundScore; TEAMS],
}

/// Score one team's round against its standing before the round.
pub fn score_team(team: TeamId, bid: u8, won: u8, before: TeamScore) -> TeamRoundScore {
    let mut points: i32;
    let mut bags = before.bags;
    let mut bags_earned = 0;
    let mut penalties = 0;

    if won >= bid {
        bags_earned = won - bid;
        points = bid as i32 * POINTS_PER_BID_TRICK + bags_earned as i32;
        bags = bags.saturating_add(bags_earned);
        while bags >= BAG_LIMIT {
            points -= BAG_PENALTY;
            bags -= BAG_LIMIT;
            penalties += 1;
        }
    } else {
        points = -(bid as i32 * POINTS_PER_BID_TRICK);
    }

    TeamRoundScore {
        team,
        bid,
        won,
        points,
        bags_earned,
        penalties,
        score_after: before.score + points,
        bags_after: bags,
    }
}

/// Apply per-round scoring for both teams and record the summary.
///
/// Must be called exactly once per round, after the thirteenth trick.
pub fn apply_round_scoring(state: &mut MatchState) -> Result<RoundSummary, DomainError> {
    if state.phase != Phase::RoundEnd {
        return Err(DomainError::invalid_state(format!(
            "cannot score a round during {:?}",
            state.phase
        )));
    }
    require_seated(state, "apply_round_scoring")?;

    let total_won: u8 = state.players.iter().map(|p| p.tricks_won).sum();
    if total_won != TRICKS_PER_ROUND {
        return Err(DomainError::invariant(format!(
            "{TRICKS_PER_ROUND} tricks expected at round end, found {total_won}"
        )));
    }

    let (bid0, won0) = team_totals(state, 0)?;
    let (bid1, won1) = team_totals(state, 1)?;
    let teams = [
        score_team(0, bid0, won0, state.teams[0]),
        score_team(1, bid1, won1, state.teams[1]),
    ];

    for r in &teams {
        state.teams[r.team as usize] = TeamScore {
            score: r.score_after,
            bags: r.bags_after,
        };
        info!(
            round = state.round_no,
            team = r.team,
            bid = r.bid,
            won = r.won,
            points = r.points,
            score = r.score_after,
            bags = r.bags_after,
            "Round scored"
        );
        if r.penalties > 0 {
            info!(team = r.team, penalties = r.penalties, "Bag penalty applied");
        }
    }

    let summary = RoundSummary {
        round_no: state.round_no,
        teams,
    };
    state.last_round = Some(summary.clone());
    Ok(summary)
}

fn team_totals(state: &MatchState, team: TeamId) -> Result<(u8, u8), DomainError> {
    let mut bid = 0u8;
    let mut won = 0u8;
    for seat in team_seats(team) {
        let p = state.player(seat)?;
        bid += p
            .bid
            .ok_or_else(|| DomainError::invariant(format!("seat {seat} has no bid")))?;
        won += p.tricks_won;
    }
    Ok((bid, won))
}
