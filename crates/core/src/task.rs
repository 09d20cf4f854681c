//! Cancellable background work owned by a component

use futures::future::{AbortHandle, Abortable};
use std::future::Future;

/// Handle to a scheduled future. Dropping the handle cancels the future.
///
/// The runtime is chosen by the caller: [`ScheduledTask::new`] hands back the
/// wrapped future to pass to `spawn_local`, `tokio::spawn` or similar.
#[derive(Debug)]
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    handle: AbortHandle,
}

impl ScheduledTask {
    /// Wrap `future` so it can be cancelled through the returned handle
    pub fn new<F>(future: F) -> (Self, impl Future<Output = ()>)
    where
        F: Future<Output = ()>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let task = async move {
            let _ = Abortable::new(future, registration).await;
        };
        (Self { handle }, task)
    }

    /// Stop the task at its next suspension point
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_completion() {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();

        let (_task, future) = ScheduledTask::new(async move {
            flag.set(true);
        });
        future.await;

        assert!(done.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_poll_skips_work() {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();

        let (task, future) = ScheduledTask::new(async move {
            flag.set(true);
        });
        task.cancel();
        future.await;

        assert!(task.is_cancelled());
        assert!(!done.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_work() {
        let local = tokio::task::LocalSet::new();
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();

        local
            .run_until(async move {
                let (task, future) = ScheduledTask::new(async move {
                    loop {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        counter.set(counter.get() + 1);
                    }
                });
                let join = tokio::task::spawn_local(future);

                tokio::time::sleep(Duration::from_millis(2500)).await;
                drop(task);
                join.await.unwrap();
            })
            .await;

        assert_eq!(ticks.get(), 2);
    }
}
