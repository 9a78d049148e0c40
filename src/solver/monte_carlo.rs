use std::hash::Hash;

use crate::solver::*;

// One decision taken during an episode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step<S, A> {
    pub state: S,
    pub action: A,
}

// Credits every recorded step with the terminal reward of the episode.
//
// This is every-visit Monte Carlo without discounting: a pair that occurs several times in
// one episode is credited once per occurrence. Steps in terminal states are skipped and
// their visit counts are left alone. `on_update` sees each credited step together with its
// new estimate; `on_skip` sees each skipped step.
// Returns the number of credited steps.
pub fn every_visit_update<S, A, IsTerminal, OnUpdate, OnSkip>(
    table: &mut ValueTable<S, A>,
    steps: &[Step<S, A>],
    reward: i64,
    is_terminal: IsTerminal,
    mut on_update: OnUpdate,
    mut on_skip: OnSkip,
) -> usize
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
    IsTerminal: Fn(&S) -> bool,
    OnUpdate: FnMut(&Step<S, A>, &ActionEstimate),
    OnSkip: FnMut(&Step<S, A>),
{
    let mut credited = 0;
    for step in steps {
        if is_terminal(&step.state) {
            on_skip(step);
            continue;
        }
        let estimate = table.update(&step.state, &step.action, reward);
        on_update(step, &estimate);
        credited += 1;
    }
    credited
}

// Plays a single episode with a fixed policy and no learning; returns the episode reward.
// The episode ends when `policy` returns no action.
pub fn run_simulation<G, S, A, Observe, Policy, Act, Finish>(
    mut game: G,
    observe: &Observe,
    policy: &Policy,
    act: &Act,
    finish: &Finish,
) -> i64
where
    Observe: Fn(&G) -> S,
    Policy: Fn(&S) -> Option<A>,
    Act: Fn(&mut G, &A),
    Finish: Fn(&mut G) -> i64,
{
    loop {
        let state = observe(&game);
        match policy(&state) {
            Some(action) => act(&mut game, &action),
            None => break,
        }
    }
    finish(&mut game)
}
