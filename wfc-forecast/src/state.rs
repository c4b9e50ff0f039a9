//! View state for the forecast page.
//!
//! `ViewState` is mutated only through `increment_counter`, `begin_load` and
//! `settle`; what gets rendered is derived from it by [`ViewState::branch`].
//!
//! Loads are not serialized. If two loads overlap, each one settles
//! independently and the last to finish decides `forecasts`/`error_message`.

use crate::error::FetchError;
use crate::model::ForecastEntry;

/// Which part of the forecast section is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBranch {
    /// The last load failed; takes precedence over everything else.
    Error(String),
    Loading,
    /// At least one entry to show as a card.
    Populated,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Click counter, unrelated to the forecast data
    pub counter: u64,
    /// Entries in the order the backend sent them
    pub forecasts: Vec<ForecastEntry>,
    /// True while a load is outstanding
    pub is_loading: bool,
    /// Set only when the most recent load failed
    pub error_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Initial state on mount: the first load starts right away, so the page
    /// opens in the loading branch.
    pub fn new() -> Self {
        Self {
            counter: 0,
            forecasts: Vec::new(),
            is_loading: true,
            error_message: None,
        }
    }

    pub fn increment_counter(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Mark a load as started and forget the previous error.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply the outcome of a load.
    ///
    /// On failure the previous `forecasts` are kept. The loading flag is
    /// cleared whatever the outcome.
    pub fn settle(&mut self, outcome: Result<Vec<ForecastEntry>, FetchError>) {
        match outcome {
            Ok(forecasts) => self.forecasts = forecasts,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading = false;
    }

    pub fn branch(&self) -> ViewBranch {
        if let Some(message) = &self.error_message {
            ViewBranch::Error(message.clone())
        } else if self.is_loading {
            ViewBranch::Loading
        } else if !self.forecasts.is_empty() {
            ViewBranch::Populated
        } else {
            ViewBranch::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mild() -> ForecastEntry {
        ForecastEntry {
            date: Some("2024-01-01".to_string()),
            temperature_c: Some(20),
            temperature_f: Some(68),
            summary: Some("Mild".to_string()),
        }
    }

    fn loaded_with(entries: Vec<ForecastEntry>) -> ViewState {
        let mut state = ViewState::new();
        state.begin_load();
        state.settle(Ok(entries));
        state
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::new();
        assert_eq!(state.counter, 0);
        assert!(state.forecasts.is_empty());
        assert!(state.is_loading);
        assert_eq!(state.error_message, None);
        assert_eq!(state.branch(), ViewBranch::Loading);
    }

    #[test]
    fn test_counter_counts_clicks() {
        let mut state = ViewState::new();
        for _ in 0..7 {
            state.increment_counter();
        }
        assert_eq!(state.counter, 7);
    }

    #[test]
    fn test_counter_unaffected_by_loads() {
        let mut state = ViewState::new();
        state.increment_counter();
        state.increment_counter();
        state.begin_load();
        state.settle(Err(FetchError::Request(500)));
        state.increment_counter();
        state.begin_load();
        state.settle(Ok(vec![mild()]));
        assert_eq!(state.counter, 3);
    }

    #[test]
    fn test_loading_flag_follows_every_outcome() {
        let outcomes = vec![
            Ok(vec![mild()]),
            Ok(vec![]),
            Err(FetchError::Request(404)),
            Err(FetchError::Parse("expected value".to_string())),
            Err(FetchError::Network("connection refused".to_string())),
        ];
        for outcome in outcomes {
            let mut state = ViewState::new();
            state.begin_load();
            assert!(state.is_loading);
            state.settle(outcome);
            assert!(!state.is_loading);
        }
    }

    #[test]
    fn test_begin_load_clears_previous_error() {
        let mut state = ViewState::new();
        state.settle(Err(FetchError::Request(503)));
        assert!(state.error_message.is_some());

        state.begin_load();
        assert_eq!(state.error_message, None);
        assert_eq!(state.branch(), ViewBranch::Loading);
    }

    #[test]
    fn test_failure_keeps_stale_forecasts() {
        let mut state = loaded_with(vec![mild()]);
        state.begin_load();
        state.settle(Err(FetchError::Request(500)));

        assert_eq!(state.forecasts, vec![mild()]);
        assert_eq!(
            state.error_message.as_deref(),
            Some("HTTP error! status: 500")
        );
    }

    #[test]
    fn test_error_takes_precedence_over_stale_grid() {
        let mut state = loaded_with(vec![mild()]);
        state.begin_load();
        state.settle(Err(FetchError::Network("refused".to_string())));

        assert!(!state.forecasts.is_empty());
        assert!(matches!(state.branch(), ViewBranch::Error(_)));
    }

    #[test]
    fn test_error_takes_precedence_over_loading() {
        let mut state = ViewState::new();
        state.error_message = Some("boom".to_string());
        state.is_loading = true;
        assert_eq!(state.branch(), ViewBranch::Error("boom".to_string()));
    }

    #[test]
    fn test_scenario_single_entry() {
        let state = loaded_with(vec![mild()]);
        assert_eq!(state.branch(), ViewBranch::Populated);
        assert_eq!(state.forecasts.len(), 1);
        assert_eq!(crate::format::temperature_label(&state.forecasts[0]), "20°C / 68°F");
    }

    #[test]
    fn test_scenario_server_error_on_first_load() {
        let mut state = ViewState::new();
        state.settle(Err(FetchError::Request(500)));
        match state.branch() {
            ViewBranch::Error(message) => assert!(message.contains("500")),
            other => panic!("expected error branch, got {:?}", other),
        }
        assert!(state.forecasts.is_empty());
    }

    #[test]
    fn test_scenario_empty_list() {
        let state = loaded_with(vec![]);
        assert_eq!(state.branch(), ViewBranch::Empty);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn test_scenario_network_failure() {
        let mut state = ViewState::new();
        state.settle(Err(FetchError::Network("connection refused".to_string())));
        assert!(!state.is_loading);
        assert!(matches!(state.branch(), ViewBranch::Error(_)));
    }

    #[test]
    fn test_overlapping_loads_last_settle_wins() {
        let mut state = ViewState::new();
        state.begin_load();
        state.begin_load();

        state.settle(Ok(vec![mild()]));
        state.settle(Err(FetchError::Request(502)));

        assert_eq!(state.forecasts, vec![mild()]);
        assert!(matches!(state.branch(), ViewBranch::Error(_)));
    }
}
