//! Background re-validation of the session token

use crate::error::CoreError;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend check that the stored token is still accepted
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TokenVerifier {
    async fn verify(&self) -> Result<(), CoreError>;
}

/// Why a refresh probe stopped
#[derive(Debug, PartialEq, Eq)]
pub struct ProbeStopped {
    /// Verifications that succeeded before the failure
    pub successful_checks: u32,
    pub error: CoreError,
}

/// Verify the token every `interval` until a verification fails.
///
/// The first check happens one interval after the call. There is no retry:
/// the first failure ends the probe, and the caller is expected to leave the
/// session-expired transition to whoever observed the 401. Cancellation is
/// external, by dropping the future (see [`crate::task::ScheduledTask`]).
pub async fn run_refresh_probe<V, S, Fut>(verifier: &V, interval: Duration, sleep: S) -> ProbeStopped
where
    V: TokenVerifier + ?Sized,
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut successful_checks = 0;

    loop {
        sleep(interval).await;

        match verifier.verify().await {
            Ok(()) => {
                successful_checks += 1;
                debug!(successful_checks, "Token still valid");
            }
            Err(error) => {
                warn!("Token verification failed, stopping refresh probe: {error}");
                return ProbeStopped {
                    successful_checks,
                    error,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::ScheduledTask;
    use std::cell::Cell;
    use std::rc::Rc;

    const INTERVAL: Duration = Duration::from_secs(300);

    #[tokio::test(start_paused = true)]
    async fn test_stops_after_first_failure() {
        let calls = Cell::new(0u32);
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().times(3).returning(move || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Ok(())
            } else {
                Err(CoreError::verification("401"))
            }
        });

        let stopped = run_refresh_probe(&verifier, INTERVAL, tokio::time::sleep).await;

        assert_eq!(stopped.successful_checks, 2);
        assert_eq!(stopped.error, CoreError::verification("401"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_failure_makes_a_single_call() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(|| Err(CoreError::verification("network")));

        let start = tokio::time::Instant::now();
        let stopped = run_refresh_probe(&verifier, INTERVAL, tokio::time::sleep).await;

        assert_eq!(stopped.successful_checks, 0);
        assert!(start.elapsed() >= INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_probe_makes_no_more_calls() {
        struct Counting(Rc<Cell<u32>>);

        #[async_trait(?Send)]
        impl TokenVerifier for Counting {
            async fn verify(&self) -> Result<(), CoreError> {
                self.0.set(self.0.get() + 1);
                Ok(())
            }
        }

        let calls = Rc::new(Cell::new(0));
        let verifier = Counting(calls.clone());
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async move {
                let (task, future) = ScheduledTask::new(async move {
                    run_refresh_probe(&verifier, INTERVAL, tokio::time::sleep).await;
                });
                let join = tokio::task::spawn_local(future);

                tokio::time::sleep(INTERVAL * 2 + Duration::from_secs(1)).await;
                task.cancel();
                join.await.unwrap();

                tokio::time::sleep(INTERVAL * 3).await;
            })
            .await;

        assert_eq!(calls.get(), 2);
    }
}
