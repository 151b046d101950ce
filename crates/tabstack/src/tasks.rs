//! Deferred work.
//!
//! Mutations that must be measured afterwards are split in two: the mutation
//! runs now, the measurement is queued with a settle delay and executed by
//! the next wake-up whose time has passed its deadline. Nothing is ever
//! cancelled; a stale measurement is corrected by the next event.

use std::time::Duration;

use crate::instance::{InstanceId, Selection};

/// A unit of deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Task {
    /// Apply a selection once layout has settled.
    Select {
        instance: InstanceId,
        selection: Selection,
    },
    /// Scroll the container into view if its bars are off screen.
    ScrollToInstance { instance: InstanceId },
    /// Scroll the element named by the initial fragment into view.
    RevealFragment,
}

/// Task waiting for its deadline.
#[derive(Debug)]
struct Pending {
    deadline: Duration,
    task: Task,
}

/// Tasks ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub(crate) struct TaskQueue {
    pending: Vec<Pending>,
}

impl TaskQueue {
    /// Queue `task` to run at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: Task) {
        let deadline = now + delay;
        let position = self.pending.partition_point(|p| p.deadline <= deadline);
        self.pending.insert(position, Pending { deadline, task });
    }

    /// Remove and return the tasks whose deadline has passed.
    pub fn drain_ready(&mut self, now: Duration) -> Vec<Task> {
        let ready = self.pending.partition_point(|p| p.deadline <= now);
        self.pending.drain(..ready).map(|p| p.task).collect()
    }

    /// Earliest deadline, for timer scheduling.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|p| p.deadline)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
