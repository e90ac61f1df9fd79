//! Bounded fan-out over the input stream
//!
//! One tokio task per URL, launched as fast as the input yields. A semaphore
//! (the admission gate) caps how many tasks do work at once; a task holds its
//! permit from before classification until after its delay. `run` returns only
//! once every launched task has finished.
//!
//! No ordering is guaranteed between tasks: records from concurrently running
//! tasks reach the sink in completion order, which can differ from input order
//! even with a concurrency of one.

use crate::{ClassificationOutcome, Classifier, Config, OutputSink, Prober};
use futures::{Stream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
    classifier: Classifier,
    prober: Arc<dyn Prober>,
    sink: Arc<OutputSink>,
    gate: Arc<Semaphore>,
}

impl Dispatcher {
    pub fn new(config: Config, classifier: Classifier, prober: Arc<dyn Prober>, sink: Arc<OutputSink>) -> Self {
        let gate = Arc::new(Semaphore::new(config.concurrency));

        Self {
            config: Arc::new(config),
            classifier,
            prober,
            sink,
            gate,
        }
    }

    /// Launch one task per URL and wait for all of them. Counters start from
    /// zero on every call.
    pub async fn run<S>(&self, urls: S) -> RunSummary
    where
        S: Stream<Item = String> + Send,
    {
        let stats = Arc::new(RunStats::default());
        let mut tasks = JoinSet::new();
        futures::pin_mut!(urls);

        while let Some(url) = urls.next().await {
            let dispatcher = self.clone();
            let task_stats = Arc::clone(&stats);
            stats.launched.fetch_add(1, Ordering::Relaxed);
            tasks.spawn(async move { dispatcher.process_target(url, &task_stats).await });

            while let Some(finished) = tasks.try_join_next() {
                log_join_error(finished);
            }
        }

        debug!("Input exhausted, waiting for {} tasks", tasks.len());
        while let Some(finished) = tasks.join_next().await {
            log_join_error(finished);
        }

        let summary = stats.summary();
        info!(
            "Run completed. Launched: {}, Passive: {}, Probed: {}, Emitted: {}, Filtered: {}, Errors: {}",
            summary.launched, summary.passive, summary.probed, summary.emitted, summary.filtered, summary.failed
        );
        summary
    }

    async fn process_target(&self, url: String, stats: &RunStats) {
        let _permit = match self.gate.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                error!("Admission gate closed before {}: {}", url, e);
                stats.failed.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };
        let _in_flight = InFlightGuard::enter(stats);

        if let Some(outcome) = self.classify(url, stats).await {
            match self.sink.emit(&outcome).await {
                Ok(()) => {
                    stats.emitted.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => error!("Failed to write result for {}: {}", outcome.url(), e),
            }
        }

        if let Some(delay) = self.config.delay {
            sleep(delay).await;
        }
    }

    /// Passive suffix match first (when enabled), then HEAD probe and
    /// content-type lookup. `None` means nothing should be emitted.
    async fn classify(&self, url: String, stats: &RunStats) -> Option<ClassificationOutcome> {
        if self.config.passive {
            if let Some(label) = self.classifier.classify_by_suffix(&url) {
                stats.passive.fetch_add(1, Ordering::Relaxed);
                let label = label.to_string();
                return Some(ClassificationOutcome::Passive { url, label });
            }
        }

        let result = match self.prober.probe(&url).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                stats.failed.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };
        stats.probed.fetch_add(1, Ordering::Relaxed);

        let label = self
            .classifier
            .classify_by_content_type(&result.content_type)
            .to_string();

        // Filters gate request-based results only.
        if !self.config.filters.accepts(&result, &label) {
            debug!("Filtered {} [{}]", url, result.status_code);
            stats.filtered.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        Some(ClassificationOutcome::active(url, result, label))
    }
}

fn log_join_error(finished: Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!("Probe task failed: {}", e);
    }
}

/// Counters shared by every task of a run.
#[derive(Debug, Default)]
pub struct RunStats {
    launched: AtomicUsize,
    passive: AtomicUsize,
    probed: AtomicUsize,
    emitted: AtomicUsize,
    filtered: AtomicUsize,
    failed: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl RunStats {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            launched: self.launched.load(Ordering::Relaxed),
            passive: self.passive.load(Ordering::Relaxed),
            probed: self.probed.load(Ordering::Relaxed),
            emitted: self.emitted.load(Ordering::Relaxed),
            filtered: self.filtered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            peak_in_flight: self.peak_in_flight.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub launched: usize,
    pub passive: usize,
    pub probed: usize,
    pub emitted: usize,
    pub filtered: usize,
    pub failed: usize,
    /// Highest number of tasks observed past the admission gate at once
    pub peak_in_flight: usize,
}

struct InFlightGuard<'a> {
    stats: &'a RunStats,
}

impl<'a> InFlightGuard<'a> {
    fn enter(stats: &'a RunStats) -> Self {
        let current = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        stats.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        Self { stats }
    }
}

impl<'a> Drop for InFlightGuard<'a> {
    fn drop(&mut self) {
        self.stats.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockProber, OutputFormat, OutputSettings, ProbeError, ProbeResult};
    use futures::stream;

    fn quiet_sink() -> Arc<OutputSink> {
        Arc::new(OutputSink::stdout_only(OutputSettings {
            format: OutputFormat::Plain,
            ..Default::default()
        }))
    }

    fn html() -> ProbeResult {
        ProbeResult {
            status_code: 200,
            content_length: 1234,
            content_type: "text/html".to_string(),
        }
    }

    fn urls(list: &[&str]) -> impl Stream<Item = String> + Send {
        stream::iter(list.iter().map(|u| u.to_string()).collect::<Vec<_>>())
    }

    #[tokio::test]
    async fn test_passive_match_skips_probe() {
        let mut prober = MockProber::new();
        prober.expect_probe().never();
        let config = Config {
            passive: true,
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(config, Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher.run(urls(&["https://example.com/file.zip"])).await;
        assert_eq!(summary.passive, 1);
        assert_eq!(summary.probed, 0);
        assert_eq!(summary.emitted, 1);
    }

    #[tokio::test]
    async fn test_passive_off_always_probes() {
        let mut prober = MockProber::new();
        prober.expect_probe().times(2).returning(|_| Ok(html()));
        let dispatcher = Dispatcher::new(Config::default(), Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher
            .run(urls(&["https://example.com/file.zip", "https://example.com/"]))
            .await;
        assert_eq!(summary.passive, 0);
        assert_eq!(summary.probed, 2);
        assert_eq!(summary.emitted, 2);
    }

    #[tokio::test]
    async fn test_passive_without_suffix_match_probes() {
        let mut prober = MockProber::new();
        prober.expect_probe().times(1).returning(|_| Ok(html()));
        let config = Config {
            passive: true,
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(config, Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher.run(urls(&["https://example.com/"])).await;
        assert_eq!(summary.passive, 0);
        assert_eq!(summary.probed, 1);
    }

    #[tokio::test]
    async fn test_filter_rejection_emits_nothing() {
        let mut prober = MockProber::new();
        prober.expect_probe().returning(|_| Ok(html()));
        let config = Config {
            filters: crate::FilterSpec::parse("404", "", "", ""),
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(config, Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher.run(urls(&["https://example.com/"])).await;
        assert_eq!(summary.filtered, 1);
        assert_eq!(summary.emitted, 0);
    }

    #[tokio::test]
    async fn test_filters_do_not_gate_passive_results() {
        let mut prober = MockProber::new();
        prober.expect_probe().never();
        let config = Config {
            passive: true,
            filters: crate::FilterSpec::parse("404", "", "", "PHP"),
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(config, Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher.run(urls(&["https://example.com/file.zip"])).await;
        assert_eq!(summary.emitted, 1);
        assert_eq!(summary.filtered, 0);
    }

    #[tokio::test]
    async fn test_probe_errors_stay_in_their_task() {
        let mut prober = MockProber::new();
        prober.expect_probe().returning(|url| {
            if url.contains("down") {
                Err(ProbeError::Transport("connection refused".to_string()))
            } else {
                Ok(html())
            }
        });
        let dispatcher = Dispatcher::new(Config::default(), Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher
            .run(urls(&["https://down.example/", "https://up.example/", "https://down2.example/"]))
            .await;
        assert_eq!(summary.launched, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.emitted, 1);
    }

    #[tokio::test]
    async fn test_each_run_counts_from_zero() {
        let mut prober = MockProber::new();
        prober.expect_probe().times(3).returning(|_| Ok(html()));
        let dispatcher = Dispatcher::new(Config::default(), Classifier::default(), Arc::new(prober), quiet_sink());

        let first = dispatcher
            .run(urls(&["https://a.example/", "https://b.example/"]))
            .await;
        let second = dispatcher.run(urls(&["https://c.example/"])).await;

        assert_eq!(first.launched, 2);
        assert_eq!(first.emitted, 2);
        assert_eq!(second.launched, 1);
        assert_eq!(second.probed, 1);
        assert_eq!(second.emitted, 1);
    }

    #[tokio::test]
    async fn test_empty_input_returns_immediately() {
        let mut prober = MockProber::new();
        prober.expect_probe().never();
        let dispatcher = Dispatcher::new(Config::default(), Classifier::default(), Arc::new(prober), quiet_sink());

        let summary = dispatcher.run(urls(&[])).await;
        assert_eq!(summary, RunSummary::default());
    }
}
