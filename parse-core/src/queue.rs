use std::{
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Where completions of background calls are run.
pub trait CallbackQueue: Send + Sync {
    fn dispatch(&self, job: Job);
}

/// Runs completions directly on the worker thread that finished the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateQueue;

impl CallbackQueue for ImmediateQueue {
    fn dispatch(&self, job: Job) {
        job()
    }
}

/// Completions queued for a thread of the caller's choosing, usually the
/// application's main loop, which drains them with [`MainQueue::run_pending`]
/// or [`MainQueue::run_next_timeout`].
///
/// Clones share the same queue.
#[derive(Clone)]
pub struct MainQueue {
    sender: Sender<Job>,
    receiver: Arc<Mutex<Receiver<Job>>>,
}

impl MainQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    /// Run every job queued so far, in dispatch order. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while let Some(job) = self.try_next() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait up to `timeout` for one job and run it. Returns whether a job ran.
    pub fn run_next_timeout(&self, timeout: Duration) -> bool {
        let next = self
            .receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv_timeout(timeout);
        match next {
            Ok(job) => {
                job();
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    // the lock is released before the job runs, so jobs may dispatch again
    fn try_next(&self) -> Option<Job> {
        self.receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_recv()
            .ok()
    }
}

impl Default for MainQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackQueue for MainQueue {
    fn dispatch(&self, job: Job) {
        // we hold a receiver ourselves, so this cannot fail
        let _ = self.sender.send(job);
    }
}
