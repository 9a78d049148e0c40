use std::ops::RangeInclusive;

use rand::prelude::*;

use super::card::{Deck, Face};
use super::game::{Action, Game, Outcome, Seat, State, MIN_DECISION_TOTAL};
use super::hand::BLACKJACK;
use crate::persist::{self, PolicyRecord};
use crate::solver::monte_carlo::{self, Step};
use crate::solver::{ActionEstimate, ValueTable};
use crate::telemetry::{Event, Observer};

pub const MAX_ACES: u32 = 4;
pub const PROGRESS_INTERVAL: u64 = 10_000;

pub fn player_totals() -> RangeInclusive<u32> {
    MIN_DECISION_TOTAL..=BLACKJACK
}

// Every state a decision can be taken in.
pub fn decision_states() -> impl Iterator<Item = State> {
    (0..=MAX_ACES).flat_map(|aces| {
        player_totals().flat_map(move |player_total| {
            Face::ALL.into_iter().map(move |dealer_face| State {
                player_total,
                aces,
                dealer_face,
            })
        })
    })
}

#[derive(Clone, Debug)]
pub struct Episode {
    pub steps: Vec<Step<State, Action>>,
    pub outcome: Outcome,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrainingSummary {
    pub episodes: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
}

// Greedy Monte Carlo control over the blackjack decision states.
#[derive(Clone, Debug)]
pub struct Agent {
    table: ValueTable<State, Action>,
}

impl TrainingSummary {
    fn record(&mut self, outcome: Outcome) {
        self.episodes += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Lose => self.losses += 1,
        }
    }

    pub fn average_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        (self.wins as f64 - self.losses as f64) / self.episodes as f64
    }
}

impl Agent {
    pub fn new() -> Agent {
        let mut table = ValueTable::new();
        table.populate(decision_states(), &Action::ALL);
        Agent { table }
    }

    pub fn table(&self) -> &ValueTable<State, Action> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ValueTable<State, Action> {
        &mut self.table
    }

    // Hit only when its smoothed value is strictly better than staying.
    pub fn policy(&self, state: &State) -> Action {
        self.table.greedy_action(state, &Action::ALL)
    }

    // Plays one episode on a fresh `game` and learns from it.
    pub fn play_episode<O: Observer>(
        &mut self,
        episode: u64,
        mut game: Game,
        observer: &mut O,
    ) -> Episode {
        observer.observe(&Event::EpisodeStarted { episode });
        game.setup();

        let mut steps = Vec::new();
        loop {
            let state = game.state();
            let action = self.policy(&state);
            steps.push(Step { state, action });
            match action {
                Action::Hit => game.deal(Seat::Player),
                Action::Stay => break,
            }
        }

        game.play_dealer();
        let outcome = game.outcome();

        observer.observe(&Event::EpisodeFinished {
            episode,
            aces: game.player().aces(),
            reward: outcome.reward(),
            player_total: game.player().value(),
            dealer_total: game.dealer().value(),
        });
        self.update(&steps, outcome, observer);

        Episode { steps, outcome }
    }

    // Credits the outcome to every non-bust step of the episode.
    pub fn update<O: Observer>(
        &mut self,
        steps: &[Step<State, Action>],
        outcome: Outcome,
        observer: &mut O,
    ) -> usize {
        let reward = outcome.reward();
        // Both callbacks report to the observer, so route them through one cell.
        let observer = std::cell::RefCell::new(observer);
        monte_carlo::every_visit_update(
            &mut self.table,
            steps,
            reward,
            State::is_bust,
            |step, estimate| {
                observer.borrow_mut().observe(&Event::ValueUpdated {
                    state: step.state,
                    action: step.action,
                    visits: estimate.visits,
                    reward_sum: estimate.reward_sum,
                    reward,
                })
            },
            |step| {
                observer.borrow_mut().observe(&Event::BustSkipped {
                    player_total: step.state.player_total,
                })
            },
        )
    }

    pub fn play_episodes<R, O>(
        &mut self,
        episodes: u64,
        rng: &mut R,
        observer: &mut O,
    ) -> TrainingSummary
    where
        R: Rng + ?Sized,
        O: Observer,
    {
        let mut summary = TrainingSummary::default();
        for episode in 0..episodes {
            let game = Game::new(Deck::shuffled(rng));
            let result = self.play_episode(episode, game, observer);
            summary.record(result.outcome);

            if summary.episodes % PROGRESS_INTERVAL == 0 || summary.episodes == episodes {
                observer.observe(&Event::Progress {
                    episodes: summary.episodes,
                    total: episodes,
                    wins: summary.wins,
                    draws: summary.draws,
                    losses: summary.losses,
                });
            }
        }
        summary
    }

    // Flattens the table into one record per (state, action) entry.
    pub fn records(&self) -> Vec<PolicyRecord> {
        self.table
            .iter()
            .map(|(state, action, estimate)| PolicyRecord {
                player_total: state.player_total,
                aces: state.aces,
                dealer_face_name: state.dealer_face.name().to_string(),
                dealer_face: state.dealer_face.code(),
                action: action.name().to_string(),
                q: estimate.reward_sum,
                visits: estimate.visits,
            })
            .collect()
    }

    // Rebuilds an agent from persisted records. States the records don't mention start at zero.
    pub fn from_records(records: &[PolicyRecord]) -> Result<Agent, persist::Error> {
        let mut agent = Agent::new();
        for record in records {
            let dealer_face = Face::from_code(record.dealer_face).ok_or_else(|| {
                persist::Error::InvalidRecord(format!("unknown dealer face {}", record.dealer_face))
            })?;
            let action = Action::from_name(&record.action).ok_or_else(|| {
                persist::Error::InvalidRecord(format!("unknown action {:?}", record.action))
            })?;
            if !player_totals().contains(&record.player_total) || record.aces > MAX_ACES {
                return Err(persist::Error::InvalidRecord(format!(
                    "state out of range: player total {}, aces {}",
                    record.player_total, record.aces
                )));
            }

            let state = State {
                player_total: record.player_total,
                aces: record.aces,
                dealer_face,
            };
            agent.table.set(
                state,
                action,
                ActionEstimate {
                    reward_sum: record.q,
                    visits: record.visits,
                },
            );
        }
        Ok(agent)
    }
}

impl Default for Agent {
    fn default() -> Agent {
        Agent::new()
    }
}

// Plays `games` games with a fixed policy, without learning. Returns the average reward.
pub fn evaluate<P, R>(policy: &P, games: u64, rng: &mut R) -> f64
where
    P: Fn(&State) -> Action,
    R: Rng + ?Sized,
{
    if games == 0 {
        return 0.0;
    }

    let mut total_returns = 0;
    for _ in 0..games {
        let mut game = Game::new(Deck::shuffled(rng));
        game.setup();
        total_returns += monte_carlo::run_simulation(
            game,
            &|game: &Game| game.state(),
            &|state: &State| match policy(state) {
                Action::Hit => Some(Action::Hit),
                Action::Stay => None,
            },
            &|game: &mut Game, _action: &Action| game.deal(Seat::Player),
            &|game: &mut Game| {
                game.play_dealer();
                game.outcome().reward()
            },
        );
    }
    total_returns as f64 / games as f64
}

// A policy that only stays on 20 or higher.
pub fn stick_at_20(state: &State) -> Action {
    if state.player_total < 20 {
        Action::Hit
    } else {
        Action::Stay
    }
}
