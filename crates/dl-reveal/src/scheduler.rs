//! Sequential reveal scheduler
//!
//! A cooperative state machine that plays reveals strictly one after
//! another. The scheduler owns no thread and never sleeps: the host event
//! loop reads [`RevealScheduler::next_deadline_ms`], arms a one-shot timer,
//! and calls [`RevealScheduler::advance_to`] when it fires. Control returns
//! to the event loop between every step.

use serde::{Deserialize, Serialize};

use crate::error::{RevealError, RevealResult};
use crate::plan::{RevealPlan, RevealSchedule};

/// Lifecycle of one scheduler instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerStatus {
    /// No run started yet
    #[default]
    Idle,
    /// A run is in progress
    Running,
    /// The run played every reveal and signalled completion
    Completed,
    /// The run was cancelled before completing
    Cancelled,
}

type RevealFn<T> = Box<dyn FnMut(&T)>;
type CompleteFn = Box<dyn FnOnce()>;

/// Drives one [`RevealPlan`] to completion, one deferred action at a time
///
/// One instance handles exactly one plan per lifetime; a new draw needs a
/// new scheduler or an explicit [`reset`](Self::reset) once the previous
/// run has left the `Running` state.
pub struct RevealScheduler<T> {
    status: SchedulerStatus,
    run: Option<ActiveRun<T>>,
}

/// State owned by a running sequence. Dropped wholesale on cancellation so
/// the armed deadline and both callbacks vanish together.
struct ActiveRun<T> {
    items: Vec<T>,
    schedule: RevealSchedule,
    /// Deferred actions already fired, the completion step included
    fired: usize,
    on_reveal: RevealFn<T>,
    on_complete: Option<CompleteFn>,
}

impl<T> RevealScheduler<T> {
    /// Create an idle scheduler
    pub fn new() -> Self {
        Self {
            status: SchedulerStatus::Idle,
            run: None,
        }
    }

    /// Current lifecycle state
    pub fn status(&self) -> SchedulerStatus {
        self.status
    }

    /// Index of the next reveal to fire, while a run holds its plan
    pub fn current_index(&self) -> Option<usize> {
        self.run.as_ref().map(|run| run.fired.min(run.items.len()))
    }

    /// Begin playing a plan
    ///
    /// Fails with [`RevealError::AlreadyStarted`] unless the scheduler is
    /// idle; an in-progress run is left untouched. On success the first
    /// deadline is armed at the plan's pre-delay.
    pub fn start(
        &mut self,
        plan: RevealPlan<T>,
        on_reveal: impl FnMut(&T) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> RevealResult<()> {
        if self.status != SchedulerStatus::Idle {
            return Err(RevealError::AlreadyStarted);
        }

        let schedule = plan.schedule();
        log::debug!(
            "[RevealScheduler] starting: {} reveals over {:.0}ms",
            plan.items.len(),
            schedule.completed_at_ms,
        );

        self.run = Some(ActiveRun {
            items: plan.items,
            schedule,
            fired: 0,
            on_reveal: Box::new(on_reveal),
            on_complete: Some(Box::new(on_complete)),
        });
        self.status = SchedulerStatus::Running;
        Ok(())
    }

    /// Deadline of the pending deferred action, on the plan's timeline
    ///
    /// `None` unless running. The host arms a one-shot timer for this
    /// instant and calls [`advance_to`](Self::advance_to) when it fires.
    pub fn next_deadline_ms(&self) -> Option<f64> {
        if self.status != SchedulerStatus::Running {
            return None;
        }
        self.run
            .as_ref()
            .and_then(|run| run.schedule.deadline_after(run.fired))
    }

    /// Fire every step whose deadline has passed, strictly in schedule order
    ///
    /// Reveals one item per due step; the step after the last item
    /// transitions to `Completed` and invokes the completion callback
    /// exactly once. A late poll catches up without reordering. No-op
    /// unless running, so a stale host timer firing after cancellation or
    /// completion does nothing.
    pub fn advance_to(&mut self, now_ms: f64) {
        while self.status == SchedulerStatus::Running {
            let Some(run) = self.run.as_mut() else {
                break;
            };
            let Some(deadline) = run.schedule.deadline_after(run.fired) else {
                break;
            };
            if deadline > now_ms {
                break;
            }

            let index = run.fired;
            run.fired += 1;

            if index < run.items.len() {
                let item = &run.items[index];
                log::debug!("[RevealScheduler] reveal {} at {:.0}ms", index, deadline);
                (run.on_reveal)(item);
            } else {
                self.status = SchedulerStatus::Completed;
                // Release items, callbacks and the armed deadline together.
                if let Some(mut finished) = self.run.take() {
                    if let Some(done) = finished.on_complete.take() {
                        done();
                    }
                }
                log::debug!("[RevealScheduler] completed at {:.0}ms", deadline);
            }
        }
    }

    /// Abort the current run
    ///
    /// Idempotent; a silent no-op unless running. After this returns, no
    /// pending deferred action can invoke either callback again.
    pub fn cancel(&mut self) {
        if self.status != SchedulerStatus::Running {
            return;
        }
        let revealed = self.current_index().unwrap_or(0);
        self.status = SchedulerStatus::Cancelled;
        self.run = None;
        log::debug!("[RevealScheduler] cancelled after {} reveals", revealed);
    }

    /// Return to `Idle` so the instance can play another plan
    ///
    /// Permitted from `Idle`, `Completed` or `Cancelled`; fails with
    /// [`RevealError::StillRunning`] mid-run.
    pub fn reset(&mut self) -> RevealResult<()> {
        if self.status == SchedulerStatus::Running {
            return Err(RevealError::StillRunning);
        }
        self.status = SchedulerStatus::Idle;
        self.run = None;
        Ok(())
    }
}

impl<T> Default for RevealScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
