use std::{
    panic::{self, AssertUnwindSafe},
    sync::{mpsc, Arc, Mutex, PoisonError},
    thread,
};

use crate::error::Result;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Fixed set of worker threads running background requests.
pub(crate) struct ThreadPool {
    // JoinHandles kept to prevent threads from being detached immediately.
    // Not read directly - threads exit once the sender is dropped.
    #[allow(dead_code)]
    workers: Vec<thread::JoinHandle<()>>,
    sender: Option<mpsc::Sender<Task>>,
}

impl ThreadPool {
    pub fn new(size: usize) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Task>();
        let rx = Arc::new(Mutex::new(rx));

        let size = size.max(1);
        let mut workers = Vec::with_capacity(size);

        for i in 0..size {
            let rx = Arc::clone(&rx);
            let handle = thread::Builder::new()
                .name(format!("parse-worker-{i}"))
                .spawn(move || loop {
                    let next = rx.lock().unwrap_or_else(PoisonError::into_inner).recv();
                    let task: Task = match next {
                        Ok(task) => task,
                        Err(_) => break,
                    };
                    // a panicking completion must not take the worker down with it
                    if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                        log::error!("background task panicked");
                    }
                })?;
            workers.push(handle);
        }
        Ok(ThreadPool {
            workers,
            sender: Some(tx),
        })
    }

    pub fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            log::trace!("queueing background task");
            let _ = sender.send(Box::new(f));
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        // Drop the sender so workers leave their recv() loop once the queue
        // is drained. Not joined: the last owner may itself be a worker.
        self.sender.take();
    }
}
