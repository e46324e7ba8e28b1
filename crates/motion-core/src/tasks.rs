//! Explicit periodic tasks owned by the host.
//!
//! Each task has its own period. The host polls [`TaskList::due`] from a
//! single timer; a task late by several periods fires once, not in a burst.

use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u16);

#[derive(Clone, Debug)]
struct PeriodicTask {
    name: &'static str,
    period: Duration,
    next_due: Instant,
    runs: u64,
}

#[derive(Default, Debug)]
pub struct TaskList {
    tasks: Vec<PeriodicTask>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task. With `fire_now` it is due on the first poll, otherwise one
    /// period after `now`.
    pub fn add(
        &mut self,
        name: &'static str,
        period: Duration,
        now: Instant,
        fire_now: bool,
    ) -> TaskId {
        let id = TaskId(self.tasks.len() as u16);
        let period = period.max(Duration::from_millis(1));
        self.tasks.push(PeriodicTask {
            name,
            period,
            next_due: if fire_now { now } else { now + period },
            runs: 0,
        });
        log::debug!("[tasks] `{}` every {:?}", name, period);
        id
    }

    /// Tasks due at `now`, in insertion order. Advances each returned task to
    /// its next period boundary after `now`.
    pub fn due(&mut self, now: Instant) -> SmallVec<[TaskId; 4]> {
        let mut out = SmallVec::new();
        for (i, task) in self.tasks.iter_mut().enumerate() {
            if now < task.next_due {
                continue;
            }
            // next boundary is at most one period past `now`, however late
            let late = now - task.next_due;
            let into = late.as_nanos() % task.period.as_nanos();
            let into = Duration::from_nanos(u64::try_from(into).unwrap_or(0));
            task.next_due = now + (task.period - into);
            task.runs += 1;
            out.push(TaskId(i as u16));
        }
        out
    }

    pub fn name(&self, id: TaskId) -> Option<&'static str> {
        self.tasks.get(id.0 as usize).map(|t| t.name)
    }

    pub fn runs(&self, id: TaskId) -> u64 {
        self.tasks.get(id.0 as usize).map_or(0, |t| t.runs)
    }

    /// Shortest period across all tasks; the host's polling interval.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.period).min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
