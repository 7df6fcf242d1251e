//! Background work with status tracking.
//!
//! The job runs on its own thread and reports through a channel; the owner
//! calls [`AsyncTask::poll`] from its event loop (or [`AsyncTask::wait`]
//! when it can block) to pick up the result.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::error::TaskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Pending,
    Success,
    Error,
}

type Job<T, E> = Arc<dyn Fn() -> Result<T, E> + Send + Sync>;

pub struct AsyncTask<T, E> {
    job: Job<T, E>,
    status: Status,
    value: Option<T>,
    error: Option<E>,
    failure: Option<TaskError>,
    receiver: Option<Receiver<Result<T, E>>>,
}

impl<T: Send + 'static, E: Send + 'static> AsyncTask<T, E> {
    /// Wrap `job`; start it right away when `immediate` is set
    pub fn new(job: impl Fn() -> Result<T, E> + Send + Sync + 'static, immediate: bool) -> Self {
        let mut task = Self {
            job: Arc::new(job),
            status: Status::Idle,
            value: None,
            error: None,
            failure: None,
            receiver: None,
        };
        if immediate {
            task.execute();
        }
        task
    }

    /// Start a run. A run still in flight is abandoned and its result dropped.
    pub fn execute(&mut self) {
        self.status = Status::Pending;
        self.value = None;
        self.error = None;
        self.failure = None;

        let (tx, rx) = mpsc::channel();
        let job = Arc::clone(&self.job);
        let spawned = thread::Builder::new()
            .name("tui-hooks-task".into())
            .spawn(move || {
                // receiver may be gone if the run was superseded
                let _ = tx.send(job());
            });

        match spawned {
            Ok(_) => self.receiver = Some(rx),
            Err(e) => {
                warn!(error = %e, "could not start background task");
                self.receiver = None;
                self.status = Status::Error;
                self.failure = Some(TaskError::Spawn(e.to_string()));
            }
        }
    }

    /// Collect a finished result without blocking. Returns the new status
    /// when it changed.
    pub fn poll(&mut self) -> Option<Status> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.finish(result);
                Some(self.status)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.disconnected();
                Some(self.status)
            }
        }
    }

    /// Block until the current run finishes
    pub fn wait(&mut self) -> Status {
        if let Some(receiver) = self.receiver.as_ref() {
            match receiver.recv() {
                Ok(result) => self.finish(result),
                Err(_) => self.disconnected(),
            }
        }
        self.status
    }

    fn finish(&mut self, result: Result<T, E>) {
        self.receiver = None;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.status = Status::Success;
            }
            Err(error) => {
                self.error = Some(error);
                self.status = Status::Error;
            }
        }
        debug!(status = ?self.status, "background task finished");
    }

    fn disconnected(&mut self) {
        warn!("background task died before reporting");
        self.receiver = None;
        self.status = Status::Error;
        self.failure = Some(TaskError::Disconnected);
    }
}

impl<T, E> AsyncTask<T, E> {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Set when the task itself broke rather than the job returning `Err`
    pub fn failure(&self) -> Option<&TaskError> {
        self.failure.as_ref()
    }

    /// Hand over the successful value, leaving the task idle
    pub fn take_value(&mut self) -> Option<T> {
        let value = self.value.take();
        if value.is_some() {
            self.status = Status::Idle;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_idle_until_executed() {
        let task: AsyncTask<u32, String> = AsyncTask::new(|| Ok(1), false);
        assert_eq!(task.status(), Status::Idle);
        assert!(task.value().is_none());
    }

    #[test]
    fn test_immediate_success() {
        let mut task: AsyncTask<u32, String> = AsyncTask::new(|| Ok(42), true);
        assert_eq!(task.wait(), Status::Success);
        assert_eq!(task.value(), Some(&42));
        assert!(task.error().is_none());
    }

    #[test]
    fn test_error_result() {
        let mut task: AsyncTask<u32, String> = AsyncTask::new(|| Err("boom".to_string()), true);
        assert_eq!(task.wait(), Status::Error);
        assert_eq!(task.error().map(String::as_str), Some("boom"));
        assert!(task.failure().is_none());
    }

    #[test]
    fn test_execute_resets_previous_result() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let mut task: AsyncTask<usize, ()> =
            AsyncTask::new(move || Ok(counter.fetch_add(1, Ordering::SeqCst) + 1), true);
        task.wait();
        assert_eq!(task.value(), Some(&1));

        task.execute();
        assert_eq!(task.status(), Status::Pending);
        assert!(task.value().is_none());
        task.wait();
        assert_eq!(task.value(), Some(&2));
    }

    #[test]
    fn test_poll_eventually_reports() {
        let mut task: AsyncTask<&'static str, ()> = AsyncTask::new(|| Ok("done"), true);
        let status = loop {
            if let Some(status) = task.poll() {
                break status;
            }
            thread::yield_now();
        };
        assert_eq!(status, Status::Success);
        assert_eq!(task.poll(), None);
    }

    #[test]
    fn test_panicking_job_is_disconnected() {
        let mut task: AsyncTask<u8, ()> = AsyncTask::new(|| panic!("worker panic"), true);
        assert_eq!(task.wait(), Status::Error);
        assert_eq!(task.failure(), Some(&TaskError::Disconnected));
    }

    #[test]
    fn test_superseded_run_is_discarded() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let mut task: AsyncTask<usize, ()> = AsyncTask::new(
            move || {
                let run = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if run == 1 {
                    thread::sleep(Duration::from_millis(200));
                }
                Ok(run)
            },
            true,
        );

        task.execute();
        assert_eq!(task.wait(), Status::Success);
        assert_eq!(task.value(), Some(&2));

        // let the first run finish and try to report
        thread::sleep(Duration::from_millis(300));
        assert_eq!(task.poll(), None);
        assert_eq!(task.value(), Some(&2));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_take_value() {
        let mut task: AsyncTask<u8, ()> = AsyncTask::new(|| Ok(9), true);
        task.wait();
        assert_eq!(task.take_value(), Some(9));
        assert_eq!(task.status(), Status::Idle);
    }
}
