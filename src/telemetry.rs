//! Training events and the observers that consume them.
//!
//! The agent reports what it does through an [`Observer`] instead of logging directly, so the
//! learning code runs the same with no observer at all (`()`).

use crate::blackjack::{Action, State};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    EpisodeStarted {
        episode: u64,
    },
    EpisodeFinished {
        episode: u64,
        aces: u32,
        reward: i64,
        player_total: u32,
        dealer_total: u32,
    },
    ValueUpdated {
        state: State,
        action: Action,
        visits: u64,
        reward_sum: i64,
        reward: i64,
    },
    BustSkipped {
        player_total: u32,
    },
    Progress {
        episodes: u64,
        total: u64,
        wins: u64,
        draws: u64,
        losses: u64,
    },
}

pub trait Observer {
    fn observe(&mut self, event: &Event);
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) {}
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, event: &Event) {
        match event {
            Event::EpisodeStarted { episode } => {
                log::debug!("starting game episode={}", episode);
            }
            Event::EpisodeFinished {
                episode,
                aces,
                reward,
                player_total,
                dealer_total,
            } => {
                log::debug!(
                    "finished game episode={} aces={} reward={} player_total={} dealer_total={}",
                    episode,
                    aces,
                    reward,
                    player_total,
                    dealer_total
                );
            }
            Event::ValueUpdated {
                state,
                action,
                visits,
                reward_sum,
                reward,
            } => {
                log::trace!(
                    "updated action value player_total={} dealer_face={} aces={} action={} visits={} q={} reward={}",
                    state.player_total,
                    state.dealer_face.name(),
                    state.aces,
                    action.name(),
                    visits,
                    reward_sum,
                    reward
                );
            }
            Event::BustSkipped { player_total } => {
                log::debug!("player went bust with a score of {}", player_total);
            }
            Event::Progress {
                episodes,
                total,
                wins,
                draws,
                losses,
            } => {
                log::info!(
                    "trained {}/{} episodes wins={} draws={} losses={}",
                    episodes,
                    total,
                    wins,
                    draws,
                    losses
                );
            }
        }
    }
}

/// Keeps every event in memory.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

#[cfg(test)]
impl Observer for Recorder {
    fn observe(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
