use std::future::Future;
use tokio::task::JoinHandle;

/// Owns the countdown task of one round. Dropping the handle stops the countdown, so a
/// session that replaces or clears its handle can never be ticked by a stale timer.
#[derive(Debug)]
pub struct CountdownHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    pub fn spawn<F>(generation: u64, countdown: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            generation,
            task: tokio::spawn(countdown),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
