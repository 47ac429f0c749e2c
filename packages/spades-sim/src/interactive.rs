//! Interactive table: one human against three computer seats over stdin/stdout.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use spades::domain::lifecycle::{reroll_name, set_human_name};
use spades::domain::RoundSummary;
use spades::game_flow::StepEvent;
use spades::{
    AiFailureMode, AppError, Card, DomainError, GameFlowService, MatchOutcome, MatchState, Phase,
    PlayerId, TableConfig, TableView, ValidationKind,
};

pub struct Session<R, W> {
    service: GameFlowService,
    state: MatchState,
    config: TableConfig,
    seed: u64,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: TableConfig, seed: u64, input: R, out: W) -> Self {
        Self {
            service: GameFlowService::new(AiFailureMode::FallbackRandom)
                .with_ai_config(config.ai_config.clone()),
            state: MatchState::new(),
            config,
            seed,
            input,
            out,
        }
    }

    /// Play one match. `None` when the player quits or input ends early.
    pub fn run(&mut self) -> Result<Option<MatchOutcome>, AppError> {
        if !self.choose_names()? {
            return Ok(None);
        }
        loop {
            for step in self.service.run_until_blocked(&mut self.state)? {
                self.announce(&step.event)?;
            }
            if self.state.phase == Phase::GameOver {
                return Ok(Some(self.service.acknowledge_game_over(&mut self.state)?));
            }
            let Some(seat) = self.service.awaiting_human(&self.state) else {
                return Err(DomainError::invariant("blocked without a human to ask").into());
            };
            if !self.human_turn(seat)? {
                return Ok(None);
            }
        }
    }

    fn choose_names(&mut self) -> Result<bool, AppError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.service.open_name_select(&mut self.state, &mut rng)?;
        set_human_name(&mut self.state, &self.config.player_name)?;

        loop {
            self.show_roster()?;
            let Some(line) = self.prompt("names (ok | reroll <seat> | name <you> | quit)> ")? else {
                return Ok(false);
            };
            let mut parts = line.splitn(2, ' ');
            let command = parts.next().unwrap_or_default();
            let arg = parts.next().map(str::trim);
            match (command, arg) {
                ("" | "ok", None) => break,
                ("quit", None) => return Ok(false),
                ("reroll", Some(seat)) => {
                    let outcome = match seat.parse::<PlayerId>() {
                        Ok(seat) => reroll_name(&mut self.state, seat, &mut rng).map(|_| ()),
                        Err(_) => Err(DomainError::validation(
                            ValidationKind::InvalidName,
                            format!("no seat '{seat}'"),
                        )),
                    };
                    if let Err(err) = outcome {
                        self.say(&format!("rejected: {err}"))?;
                    }
                }
                ("name", Some(name)) => {
                    if let Err(err) = set_human_name(&mut self.state, name) {
                        self.say(&format!("rejected: {err}"))?;
                    }
                }
                _ => self.say("unknown command")?,
            }
        }

        let step = self
            .service
            .confirm_names(&mut self.state, self.config.opponent_ai, self.seed)?;
        self.announce(&step.event)?;
        Ok(true)
    }

    /// Ask the human until one bid or play is accepted. `false` on quit or end of input.
    fn human_turn(&mut self, seat: PlayerId) -> Result<bool, AppError> {
        let table = render_table(&TableView::from_state(&self.state));
        self.say(&table)?;
        let phase = self.state.phase;
        let label = if phase == Phase::Bidding {
            "bid (1-7)> "
        } else {
            "play> "
        };

        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(false);
            };
            if line.eq_ignore_ascii_case("quit") {
                return Ok(false);
            }
            let result = if phase == Phase::Bidding {
                match line.parse::<u8>() {
                    Ok(bid) => self.service.submit_bid(&mut self.state, seat, bid),
                    Err(_) => {
                        self.say("enter a number from 1 to 7")?;
                        continue;
                    }
                }
            } else {
                line.to_ascii_uppercase()
                    .parse::<Card>()
                    .and_then(|card| self.service.submit_play(&mut self.state, seat, card))
            };
            match result {
                Ok(step) => {
                    self.announce(&step.event)?;
                    return Ok(true);
                }
                Err(err) => self.say(&format!("rejected: {err}"))?,
            }
        }
    }

    fn show_roster(&mut self) -> Result<(), AppError> {
        let Some(roster) = self.state.roster.clone() else {
            return Ok(());
        };
        let seats: Vec<String> = roster
            .names
            .iter()
            .enumerate()
            .map(|(seat, name)| format!("{seat}: {name}"))
            .collect();
        self.say(&format!("Players: {}", seats.join(", ")))
    }

    fn announce(&mut self, event: &StepEvent) -> Result<(), AppError> {
        let text = match event {
            StepEvent::DealCompleted { first_bidder } => {
                format!("Cards dealt. {} bids first.", self.name(*first_bidder))
            }
            StepEvent::BidPlaced { seat, bid } => format!("{} bids {bid}.", self.name(*seat)),
            StepEvent::CardPlayed { seat, card, .. } => {
                format!("{} plays {card}.", self.name(*seat))
            }
            StepEvent::TrickCleared {
                winner,
                round_summary,
                ..
            } => {
                let mut text = format!("{} takes the trick.", self.name(*winner));
                if let Some(summary) = round_summary {
                    text.push('\n');
                    text.push_str(&render_round(summary));
                }
                text
            }
            StepEvent::RoundStarted { round_no, dealer } => {
                format!("\n=== Round {round_no}, {} deals ===", self.name(*dealer))
            }
            StepEvent::MatchOver { outcome } => render_outcome(outcome),
        };
        self.say(&text)
    }

    fn name(&self, seat: PlayerId) -> String {
        self.state
            .players
            .get(seat as usize)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("seat {seat}"))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

pub fn render_table(view: &TableView) -> String {
    let mut lines = vec![format!(
        "Round {} | Team 0: {} ({} bags) | Team 1: {} ({} bags)",
        view.round_no, view.teams[0].score, view.teams[0].bags, view.teams[1].score, view.teams[1].bags
    )];
    let seats: Vec<String> = view
        .seats
        .iter()
        .map(|s| {
            let bid = s.bid.map_or_else(|| "-".to_string(), |b| b.to_string());
            format!("{} (team {}) bid {bid} won {}", s.name, s.team, s.tricks_won)
        })
        .collect();
    lines.push(seats.join(" | "));

    if let Some(last) = &view.last_trick {
        lines.push(format!(
            "Last trick: {} -> seat {}",
            render_plays(&last.plays),
            last.winner
        ));
    }
    let table = if view.trick_plays.is_empty() {
        "empty".to_string()
    } else {
        render_plays(&view.trick_plays)
    };
    let spades = if view.spades_broken { "broken" } else { "unbroken" };
    lines.push(format!("Table: {table} | spades {spades}"));

    if let Some(me) = view.awaiting_human.and_then(|seat| view.seats.get(seat as usize)) {
        if let Some(hand) = &me.hand {
            lines.push(format!("Your hand: {}", render_cards(hand)));
        }
        if !me.legal_plays.is_empty() {
            lines.push(format!("Legal: {}", render_cards(&me.legal_plays)));
        }
    }
    lines.join("\n")
}

fn render_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

fn render_plays(plays: &[(PlayerId, Card)]) -> String {
    plays
        .iter()
        .map(|(seat, card)| format!("{card}@{seat}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_round(summary: &RoundSummary) -> String {
    let teams: Vec<String> = summary
        .teams
        .iter()
        .map(|t| {
            let penalty = if t.penalties > 0 {
                format!(", bag penalty x{}", t.penalties)
            } else {
                String::new()
            };
            format!(
                "Team {}: bid {} won {} => {:+}{penalty} (score {}, bags {})",
                t.team, t.bid, t.won, t.points, t.score_after, t.bags_after
            )
        })
        .collect();
    format!("Round {} scored. {}", summary.round_no, teams.join(" | "))
}

fn render_outcome(outcome: &MatchOutcome) -> String {
    let [a, b] = outcome.scores;
    match outcome.winner {
        Some(team) => format!(
            "Game over after {} rounds: team {team} wins ({a} to {b}).",
            outcome.rounds_played
        ),
        None => format!(
            "Game over after {} rounds: draw at {a}.",
            outcome.rounds_played
        ),
    }
}
