//! Delivery contexts for client completions.
//!
//! The transport may finish on any worker thread. Before the caller sees a
//! result, the client hands the completion to a [`DeliveryContext`] once.
//! Embedders with a designated UI thread use [`MainQueue`]; everyone else
//! gets [`InlineDelivery`].

use log::warn;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Unit of work handed to a context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

pub trait DeliveryContext: Send + Sync {
    fn deliver(&self, job: Job);
}

/// Runs jobs on whichever thread delivers them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDelivery;

impl DeliveryContext for InlineDelivery {
    fn deliver(&self, job: Job) {
        job();
    }
}

/// Sending side of a [`MainQueue`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MainQueueHandle {
    sender: UnboundedSender<Job>,
}

impl DeliveryContext for MainQueueHandle {
    fn deliver(&self, job: Job) {
        if self.sender.send(job).is_err() {
            warn!("Main queue is closed, dropping delivery");
        }
    }
}

/// A queue drained by one owning thread, in submission order.
pub struct MainQueue {
    receiver: UnboundedReceiver<Job>,
}

impl MainQueue {
    pub fn new() -> (MainQueueHandle, MainQueue) {
        let (sender, receiver) = unbounded_channel();
        (MainQueueHandle { sender }, MainQueue { receiver })
    }

    /// Run every job currently queued. Returns how many ran.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait for and run the next job.
    ///
    /// Returns `false` once every [`MainQueueHandle`] has been dropped and the
    /// queue is empty.
    pub async fn next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }
}
