//! # Worker-Thread Invocation
//!
//! Runs [`analyze`] off the caller's thread and delivers the result through
//! a one-shot channel, so an interactive front end stays responsive while a
//! larger table is scanned. The analysis itself never blocks or suspends;
//! this module only moves *where* it runs.
//!
//! Supersession is the caller's policy, supported here by generation
//! numbers: every job spawned from an [`AnalysisSession`] gets a strictly
//! increasing generation, and [`AnalysisSession::is_current`] tells a caller
//! whether a completed job is still the latest request. Stale results are
//! simply dropped — no cancellation, no partial results, no timeouts.

use tokio::sync::oneshot;

use ringcheck_core::TableModel;

use crate::analyzer::analyze;
use crate::report::RingAnalysis;

/// Issues analysis jobs and tracks which request is the latest.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    next_generation: u64,
}

impl AnalysisSession {
    /// New session; the first spawned job gets generation 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an analysis on a dedicated worker thread.
    ///
    /// The model is moved into the worker. Dropping the returned job is a
    /// valid way to discard a result that is no longer wanted — the worker
    /// finishes its scan and the send fails silently.
    pub fn spawn(&mut self, model: TableModel) -> AnalysisJob {
        self.next_generation += 1;
        let generation = self.next_generation;
        let (sender, receiver) = oneshot::channel();
        std::thread::spawn(move || {
            tracing::debug!(generation, size = model.size(), "analysis worker started");
            // A closed receiver means the job was superseded or dropped;
            // the computed result is discarded.
            let _ = sender.send(analyze(&model));
        });
        AnalysisJob {
            generation,
            receiver,
        }
    }

    /// Whether a job is the most recently spawned request of this session.
    pub fn is_current(&self, job: &AnalysisJob) -> bool {
        job.generation == self.next_generation
    }
}

/// Handle to an in-flight analysis.
///
/// Await [`AnalysisJob::recv`] from async contexts or call
/// [`AnalysisJob::wait`] to block a plain thread. Either way the result
/// arrives exactly once.
#[derive(Debug)]
pub struct AnalysisJob {
    generation: u64,
    receiver: oneshot::Receiver<RingAnalysis>,
}

impl AnalysisJob {
    /// The session generation this job was spawned at.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Block until the worker delivers the result.
    ///
    /// Returns `None` only if the worker thread died before sending, which
    /// would take a panic inside the analyzer.
    pub fn wait(self) -> Option<RingAnalysis> {
        self.receiver.blocking_recv().ok()
    }

    /// Await the result from an async context.
    pub async fn recv(self) -> Option<RingAnalysis> {
        self.receiver.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn z3() -> TableModel {
        TableModel::build(
            ["A", "B", "C"],
            &grid(&[&["A", "B", "C"], &["B", "C", "A"], &["C", "A", "B"]]),
            &grid(&[&["A", "A", "A"], &["A", "B", "C"], &["A", "C", "B"]]),
        )
        .unwrap()
    }

    #[test]
    fn spawned_job_delivers_the_analysis() {
        let mut session = AnalysisSession::new();
        let job = session.spawn(z3());
        assert!(session.is_current(&job));
        let analysis = job.wait().expect("worker delivers");
        assert_eq!(analysis.classification, Classification::Field);
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut session = AnalysisSession::new();
        let first = session.spawn(z3());
        let second = session.spawn(z3());
        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
        assert!(first.generation() < second.generation());
        // The superseded job still completes; the caller just ignores it.
        assert!(first.wait().is_some());
        assert!(second.wait().is_some());
    }

    #[test]
    fn dropping_a_job_discards_the_result() {
        let mut session = AnalysisSession::new();
        drop(session.spawn(z3()));
        // Nothing to assert beyond "no panic": the worker's send fails
        // silently against the closed channel.
        let replacement = session.spawn(z3());
        assert!(replacement.wait().is_some());
    }

    #[tokio::test]
    async fn result_is_awaitable() {
        let mut session = AnalysisSession::new();
        let analysis = session.spawn(z3()).recv().await.expect("worker delivers");
        assert!(analysis.is_ring);
    }

    #[test]
    fn results_match_the_synchronous_path() {
        let model = z3();
        let direct = analyze(&model);
        let via_worker = AnalysisSession::new().spawn(model).wait().unwrap();
        assert_eq!(direct, via_worker);
    }
}
