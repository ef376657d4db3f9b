//! Search lifecycle: settings, the scoped progress timer and the phase enum.

use std::time::{Duration, Instant};

use crate::error::ProviderError;

use super::SearchRequest;

/// Label shown while a failed provider call waits for its retry.
pub const RETRY_STAGE_LABEL: &str = "Retrying search";

/// Progress value at which the next tick completes the search.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Tunables for the simulated search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
	/// Timer period between progress ticks.
	pub tick: Duration,
	/// Progress added per tick.
	pub step: u8,
	/// The stage label advances each time progress crosses a multiple of this.
	pub stage_every: u8,
	/// Ordered stage labels, cycled through while running.
	pub stages: Vec<String>,
	/// Smallest synthetic batch.
	pub min_results: usize,
	/// Largest synthetic batch.
	pub max_results: usize,
	/// Wait before retrying a failed provider call.
	pub retry_backoff: Duration,
	/// Number of retries after the first failed provider call.
	pub max_retries: u8,
}

impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			tick: Duration::from_millis(50),
			step: 1,
			stage_every: 33,
			stages: vec![
				"Searching apollo.io".to_string(),
				"Searching Companies House".to_string(),
				"Searching Yellow Pages".to_string(),
			],
			min_results: 3,
			max_results: 8,
			retry_backoff: Duration::from_millis(500),
			max_retries: 1,
		}
	}
}

impl SearchSettings {
	/// Backoff expressed in whole timer ticks, never less than one.
	#[must_use]
	pub fn backoff_ticks(&self) -> u32 {
		let tick = self.tick.as_millis().max(1);
		let ticks = self.retry_backoff.as_millis().div_ceil(tick);
		u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
	}
}

/// Fixed-period software timer owned by a running search.
///
/// Dropping the running search drops the timer with it, so no tick can reach
/// a finished or discarded search.
#[derive(Debug, Clone)]
pub struct SearchTimer {
	period: Duration,
	next_due: Instant,
}

impl SearchTimer {
	pub fn start(now: Instant, period: Duration) -> Self {
		let period = period.max(Duration::from_millis(1));
		Self {
			period,
			next_due: now + period,
		}
	}

	/// Number of whole periods that elapsed up to `now`, consuming them.
	pub fn due_ticks(&mut self, now: Instant) -> u32 {
		if now < self.next_due {
			return 0;
		}
		let behind = now.duration_since(self.next_due).as_nanos() / self.period.as_nanos();
		let ticks = u32::try_from(behind)
			.unwrap_or(u32::MAX - 1)
			.saturating_add(1);
		self.next_due = self
			.next_due
			.checked_add(self.period * ticks)
			.unwrap_or(now + self.period);
		ticks
	}
}

/// State carried by a search between its start and its completion.
#[derive(Debug, Clone)]
pub struct RunningSearch {
	pub(super) request: SearchRequest,
	pub(super) progress: u8,
	pub(super) stage: usize,
	pub(super) failures: u8,
	pub(super) retry_in: Option<u32>,
	pub(super) timer: SearchTimer,
}

impl RunningSearch {
	pub(super) fn new(request: SearchRequest, timer: SearchTimer) -> Self {
		Self {
			request,
			progress: 0,
			stage: 0,
			failures: 0,
			retry_in: None,
			timer,
		}
	}

	#[must_use]
	pub fn request(&self) -> &SearchRequest {
		&self.request
	}

	/// Apply one timer tick. Returns `true` when the provider should be called.
	pub(super) fn advance(&mut self, settings: &SearchSettings) -> bool {
		if let Some(wait) = self.retry_in.as_mut() {
			if *wait > 1 {
				*wait -= 1;
				return false;
			}
			self.retry_in = None;
			return true;
		}

		if self.progress >= PROGRESS_COMPLETE {
			return true;
		}

		let before = self.progress;
		self.progress = before.saturating_add(settings.step.max(1)).min(PROGRESS_COMPLETE);
		if settings.stage_every > 0 && !settings.stages.is_empty() {
			let crossed = usize::from(self.progress / settings.stage_every)
				- usize::from(before / settings.stage_every);
			self.stage = (self.stage + crossed) % settings.stages.len();
		}
		false
	}
}

/// Lifecycle of the contact search.
#[derive(Debug, Clone, Default)]
pub enum SearchPhase {
	#[default]
	Idle,
	Running(RunningSearch),
	/// The provider failed on every allowed attempt.
	Failed {
		request: SearchRequest,
		error: ProviderError,
	},
}

/// Coarse phase used by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
	Idle,
	Running,
	Retrying,
	Failed,
}

/// Render-facing snapshot of the search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatus<'a> {
	pub kind: PhaseKind,
	pub progress: u8,
	pub stage_label: Option<&'a str>,
	pub error: Option<&'a ProviderError>,
}

impl SearchPhase {
	pub(super) fn status<'a>(&'a self, settings: &'a SearchSettings) -> SearchStatus<'a> {
		match self {
			Self::Idle => SearchStatus {
				kind: PhaseKind::Idle,
				progress: 0,
				stage_label: None,
				error: None,
			},
			Self::Running(run) if run.retry_in.is_some() => SearchStatus {
				kind: PhaseKind::Retrying,
				progress: run.progress,
				stage_label: Some(RETRY_STAGE_LABEL),
				error: None,
			},
			Self::Running(run) => SearchStatus {
				kind: PhaseKind::Running,
				progress: run.progress,
				stage_label: settings.stages.get(run.stage).map(String::as_str),
				error: None,
			},
			Self::Failed { error, .. } => SearchStatus {
				kind: PhaseKind::Failed,
				progress: PROGRESS_COMPLETE,
				stage_label: None,
				error: Some(error),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::directory::SearchCategory;

	fn running() -> RunningSearch {
		let request = SearchRequest::new("Acme", SearchCategory::Company);
		RunningSearch::new(request, SearchTimer::start(Instant::now(), Duration::from_millis(50)))
	}

	#[test]
	fn timer_reports_whole_elapsed_periods() {
		let start = Instant::now();
		let mut timer = SearchTimer::start(start, Duration::from_millis(50));
		assert_eq!(timer.due_ticks(start + Duration::from_millis(49)), 0);
		assert_eq!(timer.due_ticks(start + Duration::from_millis(50)), 1);
		assert_eq!(timer.due_ticks(start + Duration::from_millis(99)), 0);
		assert_eq!(timer.due_ticks(start + Duration::from_millis(260)), 4);
		assert_eq!(timer.due_ticks(start + Duration::from_millis(260)), 0);
	}

	#[test]
	fn stage_advances_at_each_threshold() {
		let settings = SearchSettings::default();
		let mut run = running();
		let mut changes = Vec::new();
		let mut last_stage = run.stage;
		while !run.advance(&settings) {
			if run.stage != last_stage {
				changes.push((run.progress, run.stage));
				last_stage = run.stage;
			}
		}
		assert_eq!(changes, vec![(33, 1), (66, 2), (99, 0)]);
		assert_eq!(run.progress, PROGRESS_COMPLETE);
	}

	#[test]
	fn completion_takes_one_tick_past_full_progress() {
		let settings = SearchSettings::default();
		let mut run = running();
		let mut ticks = 1;
		while !run.advance(&settings) {
			ticks += 1;
		}
		assert_eq!(ticks, 101);
	}

	#[test]
	fn large_steps_still_cycle_stages() {
		let settings = SearchSettings {
			step: 40,
			..SearchSettings::default()
		};
		let mut run = running();
		assert!(!run.advance(&settings));
		assert_eq!((run.progress, run.stage), (40, 1));
		assert!(!run.advance(&settings));
		assert_eq!((run.progress, run.stage), (80, 2));
		assert!(!run.advance(&settings));
		assert_eq!((run.progress, run.stage), (100, 0));
		assert!(run.advance(&settings));
	}

	#[test]
	fn backoff_rounds_up_to_whole_ticks() {
		let settings = SearchSettings {
			tick: Duration::from_millis(40),
			retry_backoff: Duration::from_millis(100),
			..SearchSettings::default()
		};
		assert_eq!(settings.backoff_ticks(), 3);

		let instant = SearchSettings {
			retry_backoff: Duration::ZERO,
			..SearchSettings::default()
		};
		assert_eq!(instant.backoff_ticks(), 1);
	}
}
