use crate::domain::state::{MatchState, Phase, PlayerId};

/// The slice of table state that edge-triggered notifications are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleView {
    pub phase: Phase,
    pub turn: Option<PlayerId>,
    pub round_no: u16,
}

impl LifecycleView {
    pub fn of(state: &MatchState) -> Self {
        Self {
            phase: state.phase,
            turn: state.turn,
            round_no: state.round_no,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: the phase changed.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_no: u16 },

    /// Edge-triggered: Menu/NameSelect -> a dealt first round.
    MatchStarted,

    /// Edge-triggered: !GameOver -> GameOver
    MatchEnded,
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &LifecycleView,
    after: &LifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Match start (pre-match -> in play)
    let pre_match = |p: Phase| matches!(p, Phase::Menu | Phase::NameSelect);
    if pre_match(before.phase) && !pre_match(after.phase) {
        transitions.push(GameTransition::MatchStarted);
    }

    // 2. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 3. New round
    if after.round_no > before.round_no {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 4. Turn change
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    // 5. Match end
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::MatchEnded);
    }

    transitions
}
