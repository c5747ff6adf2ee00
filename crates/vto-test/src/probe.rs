//! Progress probe - a recording subscriber on a progress stream

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::{self, JoinHandle};

use vto_core::Progress;

/// Records every value observed on a progress stream
///
/// The value current at spawn time is recorded first. Recording stops
/// when the publisher goes away or the probe is dropped.
pub struct ProgressProbe {
    values: Arc<Mutex<Vec<Progress>>>,
    task: JoinHandle<()>,
}

impl ProgressProbe {
    /// Start recording; must be called inside a tokio runtime
    pub fn spawn(mut rx: watch::Receiver<Progress>) -> Self {
        let values = Arc::new(Mutex::new(vec![*rx.borrow_and_update()]));
        let sink = Arc::clone(&values);
        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let value = *rx.borrow_and_update();
                sink.lock().push(value);
            }
        });
        ProgressProbe { values, task }
    }

    /// Let the recording task catch up with values already published
    pub async fn flush(&self) {
        for _ in 0..4 {
            task::yield_now().await;
        }
    }

    /// Snapshot of everything recorded so far
    pub fn values(&self) -> Vec<Progress> {
        self.values.lock().clone()
    }

    /// Number of recorded values, usable as a mark for `since`
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Values recorded after `mark`
    pub fn since(&self, mark: usize) -> Vec<Progress> {
        self.values.lock().get(mark..).map(<[_]>::to_vec).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Progress> {
        self.values.lock().last().copied()
    }

    /// How many times `value` was observed
    pub fn count(&self, value: Progress) -> usize {
        self.values.lock().iter().filter(|v| **v == value).count()
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.values.lock().windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether the publisher is gone and recording has ended
    pub fn is_closed(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ProgressProbe {
    fn drop(&mut self) {
        self.task.abort();
    }
}
