use crate::domain::model::RequirementGroup;
use crate::domain::ports::PlanService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Debounced requirement search. Each `schedule` supersedes any pending one;
/// after a quiet period the newest query is fetched and published on a watch
/// channel. In-flight fetches are not cancelled; the most recently completed
/// fetch is what the view observes.
pub struct RequirementSearch<P: PlanService + 'static> {
    service: Arc<P>,
    quiet: Duration,
    generation: Arc<AtomicU64>,
    results: watch::Sender<Vec<RequirementGroup>>,
}

impl<P: PlanService + 'static> RequirementSearch<P> {
    pub fn new(service: Arc<P>, quiet: Duration) -> (Self, watch::Receiver<Vec<RequirementGroup>>) {
        let (results, rx) = watch::channel(Vec::new());
        (
            Self {
                service,
                quiet,
                generation: Arc::new(AtomicU64::new(0)),
                results,
            },
            rx,
        )
    }

    /// Schedule a fetch for `query` after the quiet period. Calling again
    /// before the period elapses supersedes the pending fetch.
    pub fn schedule(&self, query: impl Into<String>, current_term: impl Into<String>, current_order: i64) {
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let service = Arc::clone(&self.service);
        let results = self.results.clone();
        let quiet = self.quiet;
        let query = query.into();
        let current_term = current_term.into();

        tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            if generation.load(Ordering::SeqCst) != my_gen {
                // Superseded during the quiet period; never fires.
                return;
            }
            match service
                .search_requirements(&query, &current_term, current_order)
                .await
            {
                Ok(groups) => {
                    let _ = results.send(groups);
                }
                Err(e) => {
                    tracing::warn!("requirement search for '{}' failed: {}", query, e);
                }
            }
        });
    }
}
