use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cancel-and-reschedule timer: only the last `schedule` within `delay`
/// delivers its event.
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, make_event: fn() -> AppEvent) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(make_event());
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled() -> AppEvent {
        AppEvent::ResizeSettled
    }

    #[tokio::test]
    async fn burst_delivers_single_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(30), tx);
        for _ in 0..5 {
            debouncer.schedule(settled);
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(matches!(rx.try_recv(), Ok(AppEvent::ResizeSettled)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_suppresses_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(20), tx);
        debouncer.schedule(settled);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn separate_bursts_each_deliver() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(10), tx);
        debouncer.schedule(settled);
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.schedule(settled);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
