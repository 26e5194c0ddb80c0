//! Fixed-size worker pool.
//!
//! Workers share a single job channel behind a mutex (the classic
//! channel-plus-mutex pool). Each `parallel_for` call submits one job per
//! chunk and waits on a per-call completion channel until all chunks have
//! been executed, so the call is synchronous by construction.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use mochi_types::{MochiError, MochiResult};

/// A chunk function with its borrow lifetime erased. Only valid while the
/// submitting `parallel_for` call is still blocked on the barrier.
type ChunkFn = &'static (dyn Fn(usize, usize) + Sync);

struct Job {
    run: ChunkFn,
    begin: usize,
    end: usize,
    done: Sender<()>,
}

/// Fixed pool of OS worker threads.
///
/// The worker count is set at construction and never changes. Dropping the
/// pool closes the job channel and joins all workers.
pub struct WorkerPool {
    workers: Vec<JoinHandle<()>>,
    sender: Option<Sender<Job>>,
}

impl WorkerPool {
    /// Spawns a pool with the given number of workers.
    pub fn new(workers: usize) -> MochiResult<Self> {
        if workers == 0 {
            return Err(MochiError::InvalidConfig(
                "worker count must be at least 1".into(),
            ));
        }

        let (sender, receiver) = mpsc::channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let handles = (0..workers)
            .map(|i| {
                let rx = Arc::clone(&receiver);
                thread::Builder::new()
                    .name(format!("mochi-worker-{i}"))
                    .spawn(move || worker_loop(&rx))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            workers: handles,
            sender: Some(sender),
        })
    }

    /// Number of workers in the pool.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Runs `chunk_fn(begin, end)` over a partition of `[0, count)` and
    /// blocks until every chunk has completed.
    ///
    /// The range is split into at most `worker_count` contiguous,
    /// non-overlapping, non-empty chunks; any remainder goes to the
    /// earliest chunks. `count == 0` returns immediately without
    /// dispatching anything.
    pub fn parallel_for<F>(&self, count: usize, chunk_fn: F)
    where
        F: Fn(usize, usize) + Sync,
    {
        if count == 0 {
            return;
        }

        let chunks = chunk_ranges(count, self.workers.len());
        let (done_tx, done_rx) = mpsc::channel();

        let erased: &(dyn Fn(usize, usize) + Sync) = &chunk_fn;
        // SAFETY: the barrier loop below does not return until every chunk
        // has signalled completion, so no worker holds this reference once
        // `chunk_fn` goes out of scope.
        let erased: ChunkFn = unsafe { std::mem::transmute(erased) };

        let sender = self
            .sender
            .as_ref()
            .expect("worker pool used after shutdown");
        let submitted = chunks.len();
        for (begin, end) in chunks {
            sender
                .send(Job {
                    run: erased,
                    begin,
                    end,
                    done: done_tx.clone(),
                })
                .expect("worker pool has shut down");
        }
        drop(done_tx);

        // Completion barrier: one signal per submitted chunk.
        for _ in 0..submitted {
            done_rx
                .recv()
                .expect("worker terminated before completing its chunk");
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the channel makes every worker's recv() fail and exit.
        self.sender.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn worker_loop(rx: &Mutex<Receiver<Job>>) {
    loop {
        // The lock guard is dropped at the end of the statement, before
        // the job runs, so workers execute chunks concurrently.
        let job = match rx.lock() {
            Ok(guard) => guard.recv(),
            Err(_) => break,
        };
        match job {
            Ok(job) => {
                (job.run)(job.begin, job.end);
                let _ = job.done.send(());
            }
            Err(_) => break,
        }
    }
}

/// Partitions `[0, count)` into at most `workers` contiguous non-empty
/// ranges of near-equal size, remainder to the earliest ranges.
pub fn chunk_ranges(count: usize, workers: usize) -> Vec<(usize, usize)> {
    if count == 0 {
        return Vec::new();
    }
    let chunks = workers.min(count).max(1);
    let base = count / chunks;
    let remainder = count % chunks;

    let mut ranges = Vec::with_capacity(chunks);
    let mut begin = 0;
    for c in 0..chunks {
        let len = base + usize::from(c < remainder);
        ranges.push((begin, begin + len));
        begin += len;
    }
    ranges
}
