//! Optional parallel evaluation for order-insensitive terminals.
//!
//! Pipelines themselves are sequential. This module sits next to them and runs the operations
//! whose result does not depend on evaluation order (filter/map with order-preserving
//! reassembly, sum, count and the match quantifiers) over slices, split into chunks on a rayon
//! thread pool:
//!
//! - a bounded number of chunks in flight at once (`max_in_flight_chunks`)
//! - live [`ExecutionMetrics`] and [`ExecutionObserver`] hooks for monitoring
//!
//! Runs on one engine are serialized: a second caller blocks until the current run finishes, so
//! the metrics always describe exactly one run.
//!
//! Order-sensitive operations ([`ExecutionEngine::find_first`], [`ExecutionEngine::take_while`])
//! are offered too, but always evaluate front to back on the calling thread.
//!
//! ```rust
//! use rust_sequence_processing::execution::{ExecutionEngine, ExecutionOptions};
//!
//! let engine = ExecutionEngine::new(ExecutionOptions {
//!     num_threads: Some(2),
//!     chunk_size: 3,
//!     max_in_flight_chunks: 2,
//! })?;
//!
//! let numbers = [12, 9, 13, 4, 6, 2, 4, 12, 15];
//! assert_eq!(engine.sum_parallel(&numbers)?, 77);
//! assert_eq!(engine.filter_parallel(&numbers, |n| n % 2 == 0), vec![12, 4, 6, 2, 4, 12]);
//! # Ok::<(), rust_sequence_processing::PipelineError>(())
//! ```

mod observer;
mod semaphore;

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::Pipeline;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionMode, ExecutionObserver,
    StdErrExecutionObserver,
};

use semaphore::Semaphore;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Number of worker threads.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of elements per chunk.
    pub chunk_size: usize,
    /// Upper bound on concurrently executing chunks, on top of `num_threads`.
    pub max_in_flight_chunks: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = available_parallelism();
        Self {
            num_threads: Some(n),
            chunk_size: 1_024,
            max_in_flight_chunks: n,
        }
    }
}

impl ExecutionOptions {
    fn validate(&self) -> PipelineResult<()> {
        let reject = |message: &str| {
            Err(PipelineError::InvalidOptions {
                message: message.to_string(),
            })
        };
        if self.chunk_size == 0 {
            return reject("chunk_size must be > 0");
        }
        if self.max_in_flight_chunks == 0 {
            return reject("max_in_flight_chunks must be > 0");
        }
        if self.num_threads == Some(0) {
            return reject("num_threads must be > 0 when set");
        }
        Ok(())
    }
}

fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Runs order-insensitive terminals over slices on a dedicated thread pool.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
    run_lock: Mutex<()>,
}

/// An in-progress run; holds the engine's run lock until finished or failed.
struct Run<'a> {
    _guard: MutexGuard<'a, ()>,
    start: Instant,
}

impl ExecutionEngine {
    /// Create a new engine.
    ///
    /// Fails with [`PipelineError::InvalidOptions`] if `chunk_size`, `max_in_flight_chunks` or a
    /// set `num_threads` is zero, or if the thread pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> PipelineResult<Self> {
        opts.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(opts.num_threads.unwrap_or_else(available_parallelism))
            .build()
            .map_err(|e| PipelineError::InvalidOptions {
                message: format!("failed to build thread pool: {e}"),
            })?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
            run_lock: Mutex::new(()),
        })
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.opts
    }

    /// Handle to the live metrics of the current or most recent run.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Elements satisfying `predicate`, in input order.
    pub fn filter_parallel<T, F>(&self, items: &[T], predicate: F) -> Vec<T>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let run = self.begin("filter", ExecutionMode::Parallel, items.len());
        let per_chunk = self.run_chunks(items, |chunk| {
            let kept: Vec<T> = chunk.iter().filter(|item| predicate(item)).cloned().collect();
            (kept, chunk.len())
        });
        let out = per_chunk.into_iter().flatten().collect();
        self.finish("filter", run);
        out
    }

    /// `transform` applied to every element, in input order.
    pub fn map_parallel<T, U, F>(&self, items: &[T], transform: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Send + Sync,
    {
        let run = self.begin("map", ExecutionMode::Parallel, items.len());
        let per_chunk = self.run_chunks(items, |chunk| {
            let mapped: Vec<U> = chunk.iter().map(&transform).collect();
            (mapped, chunk.len())
        });
        let out = per_chunk.into_iter().flatten().collect();
        self.finish("map", run);
        out
    }

    /// Exact sum of `values`.
    ///
    /// Chunk totals are combined in 128-bit arithmetic, so this fails with
    /// [`PipelineError::Overflow`] only when the full total does not fit in an `i64`, whatever
    /// the chunking.
    pub fn sum_parallel(&self, values: &[i64]) -> PipelineResult<i64> {
        let run = self.begin("sum", ExecutionMode::Parallel, values.len());
        let partials = self.run_chunks(values, |chunk| {
            let total: i128 = chunk.iter().map(|&v| i128::from(v)).sum();
            (total, chunk.len())
        });
        let total: i128 = partials.into_iter().sum();
        match i64::try_from(total) {
            Ok(sum) => {
                self.finish("sum", run);
                Ok(sum)
            }
            Err(_) => Err(self.fail("sum", run, PipelineError::overflow(format!("sum ({total})")))),
        }
    }

    /// Number of elements satisfying `predicate`.
    pub fn count_parallel<T, F>(&self, items: &[T], predicate: F) -> usize
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let run = self.begin("count", ExecutionMode::Parallel, items.len());
        let counts = self.run_chunks(items, |chunk| {
            (chunk.iter().filter(|item| predicate(item)).count(), chunk.len())
        });
        self.finish("count", run);
        counts.into_iter().sum()
    }

    /// `true` if any element satisfies `predicate`.
    ///
    /// Once a match is found, chunks still running stop early and chunks not yet started skip
    /// their elements.
    pub fn any_match_parallel<T, F>(&self, items: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let run = self.begin("any_match", ExecutionMode::Parallel, items.len());
        let found = self.search(items, &predicate);
        self.finish("any_match", run);
        found
    }

    /// `true` if every element satisfies `predicate` (`true` when empty).
    pub fn all_match_parallel<T, F>(&self, items: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let run = self.begin("all_match", ExecutionMode::Parallel, items.len());
        let counterexample = self.search(items, &|item: &T| !predicate(item));
        self.finish("all_match", run);
        !counterexample
    }

    /// `true` if no element satisfies `predicate` (`true` when empty).
    pub fn none_match_parallel<T, F>(&self, items: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let run = self.begin("none_match", ExecutionMode::Parallel, items.len());
        let found = self.search(items, &predicate);
        self.finish("none_match", run);
        !found
    }

    /// Earliest element satisfying `predicate`. Always sequential.
    pub fn find_first<'a, T, F>(&self, items: &'a [T], predicate: F) -> Option<&'a T>
    where
        F: Fn(&T) -> bool,
    {
        let run = self.begin("find_first", ExecutionMode::Sequential, items.len());
        let mut pulled = 0usize;
        let found = Pipeline::over(items)
            .peek(|_| pulled += 1)
            .filter(|item| predicate(item))
            .find_first();
        self.metrics.on_rows_processed(pulled);
        self.finish("find_first", run);
        found
    }

    /// Longest prefix satisfying `predicate`. Always sequential.
    pub fn take_while<T, F>(&self, items: &[T], predicate: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T) -> bool,
    {
        let run = self.begin("take_while", ExecutionMode::Sequential, items.len());
        let mut pulled = 0usize;
        let prefix = Pipeline::over(items)
            .peek(|_| pulled += 1)
            .take_while(|item| predicate(item))
            .map(T::clone)
            .to_vec();
        self.metrics.on_rows_processed(pulled);
        self.finish("take_while", run);
        prefix
    }

    fn search<T, F>(&self, items: &[T], predicate: &F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync + ?Sized,
    {
        let found = AtomicBool::new(false);
        self.run_chunks(items, |chunk| {
            let mut rows = 0;
            for item in chunk {
                if found.load(Ordering::Relaxed) {
                    break;
                }
                rows += 1;
                if predicate(item) {
                    found.store(true, Ordering::Relaxed);
                    break;
                }
            }
            ((), rows)
        });
        found.load(Ordering::SeqCst)
    }

    /// Run `per_chunk` over every chunk of `items` on the pool, throttled by
    /// `max_in_flight_chunks`. Results come back in chunk order.
    ///
    /// `per_chunk` returns its result and the number of elements it actually looked at.
    fn run_chunks<T, R, F>(&self, items: &[T], per_chunk: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&[T]) -> (R, usize) + Send + Sync,
    {
        let sem = Semaphore::new(self.opts.max_in_flight_chunks);
        let ranges = chunk_ranges(items.len(), self.opts.chunk_size);

        self.pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| {
                    let permit = sem.acquire();
                    if permit.waited > Duration::ZERO {
                        self.metrics.on_throttle_wait(permit.waited);
                        self.emit(ExecutionEvent::ThrottleWaited {
                            duration: permit.waited,
                        });
                    }

                    self.metrics.on_chunk_start();
                    self.emit(ExecutionEvent::ChunkStarted {
                        start: range.start,
                        len: range.len(),
                    });

                    let start = range.start;
                    let (out, rows) = per_chunk(&items[range]);

                    self.metrics.on_rows_processed(rows);
                    self.emit(ExecutionEvent::ChunkFinished {
                        start,
                        rows_processed: rows,
                    });
                    self.metrics.on_chunk_end();
                    drop(permit);
                    out
                })
                .collect()
        })
    }

    fn begin(&self, operation: &'static str, mode: ExecutionMode, input_len: usize) -> Run<'_> {
        // The lock guards no data, so a run that panicked leaves nothing inconsistent behind.
        let guard = self.run_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            operation,
            mode,
            input_len,
        });
        Run {
            _guard: guard,
            start: Instant::now(),
        }
    }

    fn finish(&self, operation: &'static str, run: Run<'_>) {
        let elapsed = run.start.elapsed();
        self.metrics.end_run(elapsed);
        self.emit(ExecutionEvent::RunFinished {
            operation,
            elapsed,
            metrics: self.metrics.snapshot(),
        });
    }

    fn fail(&self, operation: &'static str, _run: Run<'_>, error: PipelineError) -> PipelineError {
        self.metrics.on_run_failed();
        self.emit(ExecutionEvent::RunFailed {
            operation,
            error: error.clone(),
        });
        error
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn chunk_ranges(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect()
}
