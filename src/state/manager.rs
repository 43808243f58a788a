use crate::clock::Clock;
use crate::error::Result;
use crate::models::{MeatType, PlanInputs, PlanOutcome};
use crate::planner::compute_plan;
use crate::state::SettingsStore;

/// Holds the one active configuration and the plan derived from it.
///
/// Every edit fully recomputes the plan and then saves the settings. A failed
/// save is logged and otherwise ignored; it never changes the plan.
pub struct PlanSession<S: SettingsStore, C: Clock> {
    inputs: PlanInputs,
    outcome: Option<PlanOutcome>,
    store: S,
    clock: C,
}

impl<S: SettingsStore, C: Clock> PlanSession<S, C> {
    /// Start from the saved settings, or brisket defaults if there are none.
    pub fn open(store: S, clock: C) -> Self {
        let inputs = match store.load() {
            Ok(Some(inputs)) => inputs,
            Ok(None) => PlanInputs::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load saved settings, using defaults");
                PlanInputs::default()
            }
        };
        Self::with_inputs(inputs, store, clock)
    }

    /// Start from explicit inputs without touching the store.
    pub fn with_inputs(inputs: PlanInputs, store: S, clock: C) -> Self {
        let mut session = Self {
            inputs,
            outcome: None,
            store,
            clock,
        };
        if let Err(e) = session.recompute() {
            tracing::debug!(error = %e, "initial settings do not produce a plan");
        }
        session
    }

    pub fn inputs(&self) -> &PlanInputs {
        &self.inputs
    }

    /// The current plan, or `None` when the inputs are insufficient.
    pub fn outcome(&self) -> Option<&PlanOutcome> {
        self.outcome.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Edit the inputs in place, then recompute and save.
    pub fn update<F>(&mut self, edit: F) -> Result<Option<&PlanOutcome>>
    where
        F: FnOnce(&mut PlanInputs),
    {
        edit(&mut self.inputs);
        self.commit()
    }

    /// Switch meat type, resetting its defaults.
    pub fn select_meat(&mut self, meat: MeatType) -> Result<Option<&PlanOutcome>> {
        self.update(|inputs| inputs.select_meat(meat))
    }

    /// Throw away all edits and start over from the profile of `meat`.
    pub fn reset(&mut self, meat: MeatType) -> Result<Option<&PlanOutcome>> {
        self.update(|inputs| *inputs = PlanInputs::for_meat(meat))
    }

    /// Recompute the plan from scratch. Any previous plan is dropped first.
    pub fn recompute(&mut self) -> Result<()> {
        self.outcome = None;
        self.outcome = compute_plan(&self.inputs, self.clock.now())?;
        Ok(())
    }

    fn commit(&mut self) -> Result<Option<&PlanOutcome>> {
        let computed = self.recompute();
        self.persist();
        computed?;
        Ok(self.outcome.as_ref())
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.inputs) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::SmokeError;
    use crate::state::MemorySettingsStore;
    use chrono::NaiveDate;

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn load(&self) -> Result<Option<PlanInputs>> {
            Err(SmokeError::InvalidInput("disk on fire".to_string()))
        }

        fn save(&self, _inputs: &PlanInputs) -> Result<()> {
            Err(SmokeError::InvalidInput("disk on fire".to_string()))
        }
    }

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_open_without_settings_has_no_plan() {
        let store = MemorySettingsStore::default();
        let session = PlanSession::open(&store, clock());
        assert_eq!(session.inputs(), &PlanInputs::default());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_update_recomputes_and_saves() {
        let store = MemorySettingsStore::default();
        let mut session = PlanSession::open(&store, clock());

        let outcome = session
            .update(|i| i.serve_time = "2024-01-01T18:00".to_string())
            .unwrap();
        assert!(outcome.is_some());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.saved().unwrap().serve_time, "2024-01-01T18:00");

        // Clearing serve time drops the plan entirely
        let outcome = session.update(|i| i.serve_time.clear()).unwrap();
        assert!(outcome.is_none());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_save_failure_does_not_affect_plan() {
        let mut session = PlanSession::open(BrokenStore, clock());
        let outcome = session
            .update(|i| i.serve_time = "2024-01-01T18:00".to_string())
            .unwrap();
        assert!(outcome.is_some());
    }

    #[test]
    fn test_select_meat_keeps_serve_time() {
        let store = MemorySettingsStore::default();
        let mut session = PlanSession::open(&store, clock());
        session
            .update(|i| i.serve_time = "2024-01-01T18:00".to_string())
            .unwrap();

        let outcome = session.select_meat(MeatType::Chicken).unwrap().unwrap();
        assert!(outcome.plan.is_poultry);
        assert_eq!(session.inputs().meat_type, MeatType::Chicken);
        assert_eq!(store.saved().unwrap().meat_type, MeatType::Chicken);
    }

    #[test]
    fn test_reset_to_saved_meat_restores_its_defaults() {
        let mut saved = PlanInputs::for_meat(MeatType::Turkey);
        saved.weight = 22.0;
        saved.serve_time = "2024-11-28T15:00".to_string();
        let store = MemorySettingsStore::with(saved);

        let mut session = PlanSession::open(&store, clock());
        let meat = session.inputs().meat_type;
        session.reset(meat).unwrap();

        assert_eq!(session.inputs(), &PlanInputs::for_meat(MeatType::Turkey));
        assert_eq!(store.saved(), Some(PlanInputs::for_meat(MeatType::Turkey)));
    }

    #[test]
    fn test_invalid_spritz_interval_clears_plan_but_saves() {
        let store = MemorySettingsStore::default();
        let mut session = PlanSession::open(&store, clock());
        session
            .update(|i| i.serve_time = "2024-01-01T18:00".to_string())
            .unwrap();
        assert!(session.outcome().is_some());

        let result = session.update(|i| {
            i.spritz_enabled = true;
            i.spritz_interval = 0.0;
        });
        assert!(result.is_err());
        assert!(session.outcome().is_none());
        assert_eq!(store.save_count(), 2);
    }
}
