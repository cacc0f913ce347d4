use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::PipelineError;

/// How a run is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Chunked across the engine's thread pool.
    Parallel,
    /// Order-sensitive operation, evaluated front to back on the calling thread.
    Sequential,
}

/// Execution events emitted by the engine.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted {
        operation: &'static str,
        mode: ExecutionMode,
        input_len: usize,
    },
    ThrottleWaited {
        duration: Duration,
    },
    ChunkStarted {
        start: usize,
        len: usize,
    },
    ChunkFinished {
        start: usize,
        rows_processed: usize,
    },
    RunFinished {
        operation: &'static str,
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
    RunFailed {
        operation: &'static str,
        error: PipelineError,
    },
}

/// Observer hook for execution events.
///
/// Called from worker threads while a parallel run is in progress.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// Logs every execution event to stderr, one line each.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunStarted {
                operation,
                mode,
                input_len,
            } => eprintln!("[exec][start] op={operation} mode={mode:?} len={input_len}"),
            ExecutionEvent::RunFinished {
                operation,
                elapsed,
                metrics,
            } => eprintln!("[exec][done] op={operation} elapsed={elapsed:?} {metrics}"),
            ExecutionEvent::RunFailed { operation, error } => {
                eprintln!("[exec][fail] op={operation} err={error}")
            }
            other => eprintln!("[exec] {other:?}"),
        }
    }
}

/// Live counters for the most recent run.
///
/// The engine resets them at the start of every run and updates them from worker threads;
/// callers can [`snapshot`](Self::snapshot) at any time. Runs on one engine never overlap, so
/// the counters always belong to a single run.
#[derive(Debug, Default)]
pub struct ExecutionMetrics {
    runs: AtomicU64,
    failed_runs: AtomicU64,
    elapsed_ns: AtomicU64,
    rows_processed: AtomicU64,
    chunks_started: AtomicU64,
    chunks_finished: AtomicU64,
    throttle_wait_ns: AtomicU64,
    active_chunks: AtomicUsize,
    max_active_chunks: AtomicUsize,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_run(&self) {
        self.runs.fetch_add(1, Ordering::SeqCst);
        for counter in [
            &self.elapsed_ns,
            &self.rows_processed,
            &self.chunks_started,
            &self.chunks_finished,
            &self.throttle_wait_ns,
        ] {
            counter.store(0, Ordering::SeqCst);
        }
        self.active_chunks.store(0, Ordering::SeqCst);
        self.max_active_chunks.store(0, Ordering::SeqCst);
    }

    pub(crate) fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns.store(saturating_nanos(elapsed), Ordering::SeqCst);
    }

    pub(crate) fn on_run_failed(&self) {
        self.failed_runs.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn on_rows_processed(&self, n: usize) {
        self.rows_processed.fetch_add(n as u64, Ordering::SeqCst);
    }

    pub(crate) fn on_chunk_start(&self) {
        self.chunks_started.fetch_add(1, Ordering::SeqCst);
        let now = self.active_chunks.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active_chunks.fetch_max(now, Ordering::SeqCst);
    }

    pub(crate) fn on_chunk_end(&self) {
        self.chunks_finished.fetch_add(1, Ordering::SeqCst);
        self.active_chunks.fetch_sub(1, Ordering::SeqCst);
    }

    pub(crate) fn on_throttle_wait(&self, waited: Duration) {
        self.throttle_wait_ns
            .fetch_add(saturating_nanos(waited), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        ExecutionMetricsSnapshot {
            runs: self.runs.load(Ordering::SeqCst),
            failed_runs: self.failed_runs.load(Ordering::SeqCst),
            elapsed: (elapsed_ns > 0).then(|| Duration::from_nanos(elapsed_ns)),
            rows_processed: self.rows_processed.load(Ordering::SeqCst),
            chunks_started: self.chunks_started.load(Ordering::SeqCst),
            chunks_finished: self.chunks_finished.load(Ordering::SeqCst),
            throttle_wait: Duration::from_nanos(self.throttle_wait_ns.load(Ordering::SeqCst)),
            max_active_chunks: self.max_active_chunks.load(Ordering::SeqCst),
        }
    }
}

fn saturating_nanos(d: Duration) -> u64 {
    d.as_nanos().min(u64::MAX as u128) as u64
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    /// Runs started over the engine's lifetime.
    pub runs: u64,
    /// Runs that ended in an error over the engine's lifetime.
    pub failed_runs: u64,
    /// Wall time of the most recent completed run.
    pub elapsed: Option<Duration>,
    pub rows_processed: u64,
    pub chunks_started: u64,
    pub chunks_finished: u64,
    pub throttle_wait: Duration,
    pub max_active_chunks: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={} failed={} rows={} chunks={}/{} max_active_chunks={} throttle_wait={:?} elapsed={:?}",
            self.runs,
            self.failed_runs,
            self.rows_processed,
            self.chunks_finished,
            self.chunks_started,
            self.max_active_chunks,
            self.throttle_wait,
            self.elapsed
        )
    }
}
