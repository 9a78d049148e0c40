pub mod monte_carlo;

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ActionEstimate {
    // Cumulative signed reward over all credited visits.
    pub reward_sum: i64,
    pub visits: u64,
}

#[derive(Clone, Debug)]
struct StateActionEstimate<A: Hash + Eq> {
    actions: HashMap<A, ActionEstimate>,
}

// Tabular action-value estimates, keyed by state and then by action.
#[derive(Clone, Debug)]
pub struct ValueTable<S: Hash + Eq, A: Hash + Eq> {
    states: HashMap<S, StateActionEstimate<A>>,
}

impl ActionEstimate {
    pub fn update(&mut self, reward: i64) {
        self.reward_sum += reward;
        self.visits += 1;
    }

    // Mean reward with one phantom visit, so unvisited actions score 0 rather than NaN.
    pub fn smoothed_value(&self) -> f64 {
        self.reward_sum as f64 / (self.visits + 1) as f64
    }
}

impl<A: Hash + Eq> Default for StateActionEstimate<A> {
    fn default() -> StateActionEstimate<A> {
        StateActionEstimate {
            actions: HashMap::new(),
        }
    }
}

impl<S: Hash + Eq, A: Hash + Eq> Default for ValueTable<S, A> {
    fn default() -> ValueTable<S, A> {
        ValueTable {
            states: HashMap::new(),
        }
    }
}

impl<S, A> ValueTable<S, A>
where
    S: Hash + Eq + Clone,
    A: Hash + Eq + Clone,
{
    pub fn new() -> ValueTable<S, A> {
        ValueTable::default()
    }

    // Creates a zeroed entry for every state and action pair.
    pub fn populate<I>(&mut self, states: I, actions: &[A])
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            let entry = self.states.entry(state).or_default();
            for action in actions {
                entry.actions.entry(action.clone()).or_default();
            }
        }
    }

    // Missing entries read as zero.
    pub fn estimate(&self, state: &S, action: &A) -> ActionEstimate {
        self.states
            .get(state)
            .and_then(|s| s.actions.get(action))
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&mut self, state: S, action: A, estimate: ActionEstimate) {
        self.states
            .entry(state)
            .or_default()
            .actions
            .insert(action, estimate);
    }

    pub fn update(&mut self, state: &S, action: &A, reward: i64) -> ActionEstimate {
        let estimate = self
            .states
            .entry(state.clone())
            .or_default()
            .actions
            .entry(action.clone())
            .or_default();
        estimate.update(reward);
        *estimate
    }

    // Picks the action with the highest smoothed value. Of equally valued actions the one
    // listed first wins.
    pub fn greedy_action(&self, state: &S, actions: &[A]) -> A {
        assert!(!actions.is_empty());

        let mut best = &actions[0];
        let mut best_value = self.estimate(state, best).smoothed_value();
        for action in &actions[1..] {
            let value = self.estimate(state, action).smoothed_value();
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best.clone()
    }

    // Adds the sums and visits of `other` into this table.
    pub fn merge(&mut self, other: &ValueTable<S, A>) {
        for (state, action, estimate) in other.iter() {
            let entry = self
                .states
                .entry(state.clone())
                .or_default()
                .actions
                .entry(action.clone())
                .or_default();
            entry.reward_sum += estimate.reward_sum;
            entry.visits += estimate.visits;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, &ActionEstimate)> {
        self.states.iter().flat_map(|(state, state_actions)| {
            state_actions
                .actions
                .iter()
                .map(move |(action, estimate)| (state, action, estimate))
        })
    }

    pub fn len(&self) -> usize {
        self.states.values().map(|s| s.actions.len()).sum()
    }

    pub fn total_visits(&self) -> u64 {
        self.iter().map(|(_, _, e)| e.visits).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: [char; 2] = ['s', 'h'];

    fn estimate(reward_sum: i64, visits: u64) -> ActionEstimate {
        ActionEstimate { reward_sum, visits }
    }

    #[test]
    fn populate_test() {
        let mut table: ValueTable<u32, char> = ValueTable::new();
        table.populate(0..10, &ACTIONS);
        assert_eq!(table.len(), 20);
        assert_eq!(table.total_visits(), 0);
        assert!(table.iter().all(|(_, _, e)| *e == ActionEstimate::default()));

        // Populating again keeps what was learned.
        table.update(&3, &'h', 1);
        table.populate(0..10, &ACTIONS);
        assert_eq!(table.estimate(&3, &'h'), estimate(1, 1));
    }

    #[test]
    fn smoothed_value_test() {
        assert_eq!(estimate(0, 0).smoothed_value(), 0.0);
        assert_eq!(estimate(3, 0).smoothed_value(), 3.0);
        assert_eq!(estimate(-4, 3).smoothed_value(), -1.0);
        assert_eq!(estimate(1, 1).smoothed_value(), 0.5);
    }

    #[test]
    fn greedy_action_test() {
        let mut table: ValueTable<u32, char> = ValueTable::new();
        table.populate(0..1, &ACTIONS);

        // Ties go to the first listed action.
        assert_eq!(table.greedy_action(&0, &ACTIONS), 's');

        table.set(0, 'h', estimate(1, 3));
        assert_eq!(table.greedy_action(&0, &ACTIONS), 'h');

        // 2/4 == 1/2, still a tie.
        table.set(0, 's', estimate(1, 1));
        table.set(0, 'h', estimate(2, 3));
        assert_eq!(table.greedy_action(&0, &ACTIONS), 's');

        // Unknown states behave as all-zero.
        assert_eq!(table.greedy_action(&42, &ACTIONS), 's');

        for _ in 0..10 {
            assert_eq!(table.greedy_action(&0, &ACTIONS), 's');
        }
    }

    #[test]
    fn merge_test() {
        let mut a: ValueTable<u32, char> = ValueTable::new();
        a.set(1, 'h', estimate(2, 5));
        let mut b: ValueTable<u32, char> = ValueTable::new();
        b.set(1, 'h', estimate(-3, 4));
        b.set(2, 's', estimate(1, 1));

        a.merge(&b);
        assert_eq!(a.estimate(&1, &'h'), estimate(-1, 9));
        assert_eq!(a.estimate(&2, &'s'), estimate(1, 1));
        assert_eq!(a.total_visits(), 10);
    }
}
