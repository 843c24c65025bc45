use std::collections::BTreeSet;
use std::str::FromStr;

use log::{info, warn};

use crate::catalog::Catalog;
use crate::config::ConfigError;

/// How the running total reacts when an initiative is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// `remaining` is always `initial_total - selected weights`, floored at zero.
    /// Toggling the same initiative twice is an exact inverse.
    #[default]
    Bounded,
    /// Subtraction clamps at zero but deselecting adds the full weight back,
    /// so after a clamp the total can climb above its starting value.
    Floor,
}

impl FromStr for ClampPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" => Ok(ClampPolicy::Bounded),
            "floor" => Ok(ClampPolicy::Floor),
            other => Err(ConfigError::UnknownClampPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerCommand {
    Toggle(u32),
    Reset,
}

/// Change in the completion signal caused by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Completed,
    Reopened,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    initial_total: u32,
    remaining: u32,
    selected: BTreeSet<u32>,
    completed: bool,
    policy: ClampPolicy,
}

impl TrackerState {
    pub fn new(catalog: &Catalog, policy: ClampPolicy) -> Self {
        Self {
            initial_total: catalog.initial_total(),
            remaining: catalog.initial_total(),
            selected: BTreeSet::new(),
            completed: false,
            policy,
        }
    }

    #[cfg(test)]
    fn with_initial_total(initial_total: u32, policy: ClampPolicy) -> Self {
        Self {
            initial_total,
            remaining: initial_total,
            selected: BTreeSet::new(),
            completed: false,
            policy,
        }
    }

    pub fn apply(&mut self, catalog: &Catalog, command: TrackerCommand) -> Transition {
        let was_completed = self.completed;

        match command {
            TrackerCommand::Toggle(id) => {
                let Some(initiative) = catalog.get(id) else {
                    warn!("Ignoring toggle for unknown initiative {}", id);
                    return Transition::Unchanged;
                };
                let weight = initiative.weight;

                if self.selected.remove(&id) {
                    self.remaining = match self.policy {
                        ClampPolicy::Bounded => self.recompute(catalog),
                        ClampPolicy::Floor => self.remaining.saturating_add(weight),
                    };
                    if self.remaining > 0 {
                        self.completed = false;
                    }
                } else {
                    self.selected.insert(id);
                    self.remaining = match self.policy {
                        ClampPolicy::Bounded => self.recompute(catalog),
                        ClampPolicy::Floor => self.remaining.saturating_sub(weight),
                    };
                    if self.remaining == 0 {
                        self.completed = true;
                    }
                }
                info!(
                    "Toggled initiative {} ({} t): {} t remaining",
                    id, weight, self.remaining
                );
            }
            TrackerCommand::Reset => {
                self.selected.clear();
                self.remaining = self.initial_total;
                self.completed = false;
                info!("Tracker reset to {} t", self.initial_total);
            }
        }

        match (was_completed, self.completed) {
            (false, true) => Transition::Completed,
            (true, false) => Transition::Reopened,
            _ => Transition::Unchanged,
        }
    }

    fn recompute(&self, catalog: &Catalog) -> u32 {
        let cut: u32 = self
            .selected
            .iter()
            .filter_map(|id| catalog.get(*id))
            .map(|i| i.weight)
            .sum();
        self.initial_total.saturating_sub(cut)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn initial_total(&self) -> u32 {
        self.initial_total
    }

    /// Tons removed so far, as shown in the share message.
    pub fn reduced(&self) -> u32 {
        self.initial_total.saturating_sub(self.remaining)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = u32> + '_ {
        self.selected.iter().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn policy(&self) -> ClampPolicy {
        self.policy
    }

    /// Width of the progress bar, `remaining / initial_total` as a percentage.
    pub fn progress_percent(&self) -> f64 {
        if self.initial_total == 0 {
            return 0.0;
        }
        f64::from(self.remaining) / f64::from(self.initial_total) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Initiative;

    fn initiative(id: u32, weight: u32) -> Initiative {
        Initiative {
            id,
            name: format!("initiative {}", id),
            emoji: "🌱".to_string(),
            weight,
            description: String::new(),
            target: String::new(),
        }
    }

    fn builtin() -> (Catalog, TrackerState) {
        let catalog = Catalog::builtin().unwrap();
        let state = TrackerState::new(&catalog, ClampPolicy::Bounded);
        (catalog, state)
    }

    fn selected(state: &TrackerState) -> Vec<u32> {
        state.selected().collect()
    }

    #[test]
    fn starts_at_catalog_total() {
        let (_, state) = builtin();
        assert_eq!(state.remaining(), 153);
        assert_eq!(state.initial_total(), 153);
        assert!(!state.is_complete());
        assert_eq!(state.progress_percent(), 100.0);
    }

    #[test]
    fn toggling_reforestation_twice_restores_state() {
        let (catalog, mut state) = builtin();

        state.apply(&catalog, TrackerCommand::Toggle(3));
        assert_eq!(state.remaining(), 123);
        assert_eq!(selected(&state), vec![3]);

        state.apply(&catalog, TrackerCommand::Toggle(3));
        assert_eq!(state.remaining(), 153);
        assert!(selected(&state).is_empty());
    }

    #[test]
    fn selecting_everything_completes() {
        let (catalog, mut state) = builtin();
        let ids: Vec<u32> = catalog.iter().map(|i| i.id).collect();

        let mut transitions = Vec::new();
        for id in ids {
            transitions.push(state.apply(&catalog, TrackerCommand::Toggle(id)));
        }

        assert_eq!(state.remaining(), 0);
        assert!(state.is_complete());
        assert_eq!(state.progress_percent(), 0.0);
        assert_eq!(transitions.last(), Some(&Transition::Completed));
        assert!(transitions[..7].iter().all(|t| *t == Transition::Unchanged));
    }

    #[test]
    fn deselecting_from_complete_reopens() {
        let (catalog, mut state) = builtin();
        for id in 1..=8 {
            state.apply(&catalog, TrackerCommand::Toggle(id));
        }

        let transition = state.apply(&catalog, TrackerCommand::Toggle(1));
        assert_eq!(transition, Transition::Reopened);
        assert_eq!(state.remaining(), 20);
        assert!(!state.is_complete());
        assert!(!state.is_selected(1));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let (catalog, mut state) = builtin();
        let before = state.clone();
        assert_eq!(
            state.apply(&catalog, TrackerCommand::Toggle(99)),
            Transition::Unchanged
        );
        assert_eq!(state, before);
    }

    #[test]
    fn reset_clears_selection_and_completion() {
        let (catalog, mut state) = builtin();
        for id in 1..=8 {
            state.apply(&catalog, TrackerCommand::Toggle(id));
        }

        assert_eq!(
            state.apply(&catalog, TrackerCommand::Reset),
            Transition::Reopened
        );
        assert_eq!(state.remaining(), 153);
        assert_eq!(state.reduced(), 0);
        assert!(selected(&state).is_empty());
    }

    #[test]
    fn floor_policy_can_overshoot_after_a_clamp() {
        let catalog = Catalog::new(vec![initiative(1, 30), initiative(2, 25)]).unwrap();
        let mut state = TrackerState::with_initial_total(40, ClampPolicy::Floor);

        state.apply(&catalog, TrackerCommand::Toggle(1));
        assert_eq!(state.remaining(), 10);
        assert_eq!(
            state.apply(&catalog, TrackerCommand::Toggle(2)),
            Transition::Completed
        );
        assert_eq!(state.remaining(), 0);

        state.apply(&catalog, TrackerCommand::Toggle(1));
        state.apply(&catalog, TrackerCommand::Toggle(2));
        assert_eq!(state.remaining(), 55);
        assert!(state.remaining() > state.initial_total());
    }

    #[test]
    fn bounded_policy_stays_in_range_after_a_clamp() {
        let catalog = Catalog::new(vec![initiative(1, 30), initiative(2, 25)]).unwrap();
        let mut state = TrackerState::with_initial_total(40, ClampPolicy::Bounded);

        state.apply(&catalog, TrackerCommand::Toggle(1));
        state.apply(&catalog, TrackerCommand::Toggle(2));
        assert_eq!(state.remaining(), 0);
        assert!(state.is_complete());

        assert_eq!(
            state.apply(&catalog, TrackerCommand::Toggle(1)),
            Transition::Reopened
        );
        assert_eq!(state.remaining(), 15);
        state.apply(&catalog, TrackerCommand::Toggle(2));
        assert_eq!(state.remaining(), 40);
    }

    #[test]
    fn bounded_policy_holds_invariants_over_long_sequences() {
        let catalog = Catalog::new(vec![
            initiative(1, 20),
            initiative(2, 25),
            initiative(3, 30),
            initiative(4, 15),
        ])
        .unwrap();
        let mut state = TrackerState::with_initial_total(50, ClampPolicy::Bounded);

        // xorshift keeps the sequence deterministic
        let mut seed: u32 = 0x9E37_79B9;
        for _ in 0..2_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let id = seed % 4 + 1;

            let before = state.remaining();
            let transition = state.apply(&catalog, TrackerCommand::Toggle(id));

            assert!(state.remaining() <= state.initial_total());
            let cut: u32 = state.selected().map(|i| catalog.get(i).unwrap().weight).sum();
            assert_eq!(state.remaining(), 50u32.saturating_sub(cut));
            assert_eq!(state.is_complete(), state.remaining() == 0);
            match transition {
                Transition::Completed => assert!(before > 0 && state.remaining() == 0),
                Transition::Reopened => assert!(before == 0 && state.remaining() > 0),
                Transition::Unchanged => {}
            }
        }
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("bounded".parse::<ClampPolicy>(), Ok(ClampPolicy::Bounded));
        assert_eq!("FLOOR".parse::<ClampPolicy>(), Ok(ClampPolicy::Floor));
        assert_eq!(
            "both".parse::<ClampPolicy>(),
            Err(ConfigError::UnknownClampPolicy("both".to_string()))
        );
    }
}
