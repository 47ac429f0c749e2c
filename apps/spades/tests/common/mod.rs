#![allow(dead_code)]

use spades::domain::rules::PLAYERS;
use spades::{AiKind, GameFlowService, MatchState, Phase, SeatSpec};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    spades_test_support::logging::init();
}

pub const SEED: u64 = 0x5EED_0001;

/// Rounds after which a match that has not ended counts as stuck.
pub const ROUND_CAP: u16 = 200;

pub fn ai_table(kind: AiKind) -> [SeatSpec; PLAYERS] {
    [
        SeatSpec::ai("North", kind),
        SeatSpec::ai("East", kind),
        SeatSpec::ai("South", kind),
        SeatSpec::ai("West", kind),
    ]
}

/// Human at seat 0 against three heuristic opponents.
pub fn human_table() -> [SeatSpec; PLAYERS] {
    [
        SeatSpec::human("Tester"),
        SeatSpec::ai("East", AiKind::Heuristic),
        SeatSpec::ai("South", AiKind::Heuristic),
        SeatSpec::ai("West", AiKind::Heuristic),
    ]
}

pub fn started(seats: [SeatSpec; PLAYERS], seed: u64) -> (GameFlowService, MatchState) {
    let service = GameFlowService::default();
    let mut state = MatchState::new();
    service
        .start_match(&mut state, seats, seed)
        .expect("match should start");
    (service, state)
}

/// Step an all-computer match to GameOver, checking round invariants along the way.
pub fn play_to_game_over(service: &GameFlowService, state: &mut MatchState) {
    while state.phase != Phase::GameOver {
        assert!(
            state.round_no <= ROUND_CAP,
            "match did not finish within {ROUND_CAP} rounds"
        );
        service.advance(state).expect("engine step should succeed");
        if state.phase == Phase::RoundEnd {
            assert_eq!(state.tricks_won().iter().sum::<u8>(), 13);
            assert_eq!(state.round.completed_tricks.len(), 13);
        }
    }
}
