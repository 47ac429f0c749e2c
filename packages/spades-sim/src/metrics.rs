//! Per-match metrics and run-level summary statistics.

use serde::Serialize;
use spades::domain::rules::{team_seats, TeamId, PLAYERS, TEAMS};
use spades::domain::TeamRoundScore;

use crate::simulator::MatchResult;

/// Complete match metrics, one JSON document per simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub config: MatchConfig,
    pub result: ResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub team_metrics: Vec<TeamMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub ai_types: [String; PLAYERS],
    pub total_games: u32,
    pub max_rounds: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultMetrics {
    pub final_scores: [i32; TEAMS],
    /// Winning team; None on a draw or a capped match.
    pub winner: Option<TeamId>,
    pub capped: bool,
    pub rounds_played: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u16,
    pub dealer: u8,
    pub bids: [Option<u8>; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    pub teams: [TeamRoundScore; TEAMS],
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMetrics {
    pub team: TeamId,
    pub seats: [u8; 2],
    pub final_score: i32,
    pub bid_accuracy: BidAccuracyStats,
    pub bags_taken: u32,
    pub bag_penalties: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BidAccuracyStats {
    pub exact: u32,
    pub overtricks: u32, // Rounds made with bags (won > bid)
    pub set: u32,        // Rounds short of the bid (won < bid)
    pub exact_pct: f64,
}

/// Build metrics from a simulated match.
pub fn build_match_metrics(
    game_id: u32,
    ai_types: [String; PLAYERS],
    total_games: u32,
    max_rounds: u16,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let rounds: Vec<RoundMetrics> = result
        .rounds
        .iter()
        .map(|r| RoundMetrics {
            round_no: r.round_no,
            dealer: r.dealer,
            bids: r.bids,
            tricks_won: r.tricks_won,
            teams: r.summary.teams,
        })
        .collect();

    let team_metrics = (0..TEAMS as TeamId)
        .map(|team| build_team_metrics(team, result, &rounds))
        .collect();

    MatchMetrics {
        game_id,
        seed: result.seed,
        config: MatchConfig {
            ai_types,
            total_games,
            max_rounds,
        },
        result: ResultMetrics {
            final_scores: result.final_scores,
            winner: result.outcome.and_then(|o| o.winner),
            capped: result.capped(),
            rounds_played: rounds.len(),
            duration_ms,
        },
        rounds,
        team_metrics,
    }
}

fn build_team_metrics(team: TeamId, result: &MatchResult, rounds: &[RoundMetrics]) -> TeamMetrics {
    let mut accuracy = BidAccuracyStats::default();
    let mut bags_taken = 0u32;
    let mut bag_penalties = 0u32;

    for round in rounds {
        let score = &round.teams[team as usize];
        match score.won.cmp(&score.bid) {
            std::cmp::Ordering::Equal => accuracy.exact += 1,
            std::cmp::Ordering::Greater => accuracy.overtricks += 1,
            std::cmp::Ordering::Less => accuracy.set += 1,
        }
        bags_taken += u32::from(score.bags_earned);
        bag_penalties += u32::from(score.penalties);
    }
    if !rounds.is_empty() {
        accuracy.exact_pct = accuracy.exact as f64 / rounds.len() as f64 * 100.0;
    }

    TeamMetrics {
        team,
        seats: team_seats(team),
        final_score: result.final_scores[team as usize],
        bid_accuracy: accuracy,
        bags_taken,
        bag_penalties,
    }
}

/// Aggregate view over all matches of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub games: u32,
    pub wins: [u32; TEAMS],
    pub draws: u32,
    pub capped: u32,
    pub avg_score: [f64; TEAMS],
    pub avg_rounds: f64,
}

pub fn summarize(results: &[MatchResult]) -> RunSummary {
    let mut summary = RunSummary {
        games: results.len() as u32,
        ..RunSummary::default()
    };
    if results.is_empty() {
        return summary;
    }

    let mut total_scores = [0i64; TEAMS];
    let mut total_rounds = 0usize;
    for result in results {
        match result.outcome {
            Some(outcome) => match outcome.winner {
                Some(team) => summary.wins[team as usize] += 1,
                None => summary.draws += 1,
            },
            None => summary.capped += 1,
        }
        for (total, &score) in total_scores.iter_mut().zip(&result.final_scores) {
            *total += i64::from(score);
        }
        total_rounds += result.rounds.len();
    }

    let n = results.len() as f64;
    summary.avg_score = total_scores.map(|t| t as f64 / n);
    summary.avg_rounds = total_rounds as f64 / n;
    summary
}
