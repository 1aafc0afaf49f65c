use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Periodic session renewal running on its own tokio task.
///
/// The task sleeps for `interval`, runs `renew`, and repeats until `renew`
/// returns `ControlFlow::Break`. Dropping the handle aborts the task, so at
/// most one renewal loop exists per handle.
pub(crate) struct KeepAliveTask {
    handle: JoinHandle<()>,
}

impl KeepAliveTask {
    pub(crate) fn spawn<F, Fut>(interval: Duration, renew: F) -> Self
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                if renew().await.is_break() {
                    debug!("Keep-alive loop stopped");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for KeepAliveTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(count: Arc<AtomicUsize>, stop_after: usize) -> KeepAliveTask {
        KeepAliveTask::spawn(Duration::from_secs(10), move || {
            let count = count.clone();
            async move {
                let n = count.fetch_add(1, Ordering::SeqCst) + 1;
                if n >= stop_after {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_once_per_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let _task = counting(count.clone(), usize::MAX);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_break_stops_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let task = counting(count.clone(), 1);

        tokio::time::sleep(Duration::from_secs(35)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts() {
        let count = Arc::new(AtomicUsize::new(0));
        let task = counting(count.clone(), usize::MAX);
        drop(task);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
