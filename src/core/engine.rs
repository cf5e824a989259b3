use crate::core::catalog::CatalogIndex;
use crate::core::guard;
use crate::core::store::PlanStore;
use crate::domain::model::CatalogKey;
use crate::domain::ports::PlanService;
use crate::utils::error::{PlannerError, Result};

/// Result of one commit of the "add courses" workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The target semester vanished from the snapshot; nothing was attempted
    /// and the store is untouched.
    Aborted,
    Completed(CommitSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommitSummary {
    /// Admitted candidates whose add request actually succeeded.
    pub applied: usize,
    pub had_duplicate_rejection: bool,
    pub had_capacity_rejection: bool,
}

impl CommitSummary {
    /// Nothing admitted and nothing rejected. Distinct from "everything
    /// rejected": the view shows "no courses were added" only for this case.
    pub fn no_op(&self) -> bool {
        self.applied == 0 && !self.had_duplicate_rejection && !self.had_capacity_rejection
    }
}

/// Orchestrates guard evaluation, sequential mutations, and the mandatory
/// reload of authoritative state. The only writer of the plan store.
pub struct PlanEngine<P: PlanService> {
    service: P,
    max_credits: f64,
}

impl<P: PlanService> PlanEngine<P> {
    pub fn new(service: P) -> Self {
        Self::with_max_credits(service, guard::MAX_CREDITS_PER_SEM)
    }

    pub fn with_max_credits(service: P, max_credits: f64) -> Self {
        Self {
            service,
            max_credits,
        }
    }

    pub fn service(&self) -> &P {
        &self.service
    }

    /// Initial (or manual) load of the authoritative plan.
    pub async fn load_plan(&self, store: &mut PlanStore) -> Result<()> {
        let semesters = self.service.fetch_plan_state().await?;
        tracing::info!("loaded plan with {} semesters", semesters.len());
        store.replace(semesters);
        Ok(())
    }

    /// Commit the selected candidates into the semester at `target_index`.
    ///
    /// Admitted candidates are applied strictly sequentially, in the order
    /// the guard evaluated them; a single failed add is logged and skipped.
    /// Afterwards the authoritative plan is re-fetched and replaces the
    /// store wholesale. A failed re-fetch is fatal to the commit and leaves
    /// the store at its last known state.
    pub async fn commit(
        &self,
        store: &mut PlanStore,
        target_index: usize,
        selection: &[CatalogKey],
        catalog: &CatalogIndex,
    ) -> Result<CommitOutcome> {
        let snapshot = store.snapshot();

        let Some(report) =
            guard::evaluate(&snapshot, target_index, selection, catalog, self.max_credits)
        else {
            tracing::warn!("commit aborted: semester index {} is gone", target_index);
            return Ok(CommitOutcome::Aborted);
        };

        let semester_id = snapshot[target_index].id;
        tracing::debug!(
            "guard: {} admitted, {} duplicate, {} capacity, {} skipped, {} credits left",
            report.admitted.len(),
            report.rejected_duplicate.len(),
            report.rejected_capacity.len(),
            report.skipped_zero_credit.len(),
            report.remaining_credits,
        );

        let mut applied = 0usize;
        for key in &report.admitted {
            // Resolved earlier by the guard through the same index; a miss
            // here means the payload changed under us, so skip like any
            // other per-item failure.
            let Some(catalog_id) = catalog.catalog_id(key) else {
                tracing::warn!("admitted candidate '{}' no longer resolvable, skipping", key);
                continue;
            };
            match self.service.add_assignment(catalog_id, semester_id).await {
                Ok(assignment) => {
                    tracing::info!("added {} to semester {}", assignment.code, semester_id);
                    applied += 1;
                }
                Err(e) => {
                    // Best-effort batch: one failure must not stop the rest.
                    tracing::warn!("add of '{}' failed, continuing: {}", key, e);
                }
            }
        }

        self.reload(store).await?;

        Ok(CommitOutcome::Completed(CommitSummary {
            applied,
            had_duplicate_rejection: !report.rejected_duplicate.is_empty(),
            had_capacity_rejection: !report.rejected_capacity.is_empty(),
        }))
    }

    /// Remove a placed course, then reconcile against server state.
    pub async fn remove(&self, store: &mut PlanStore, assignment_id: i64) -> Result<()> {
        self.service.remove_assignment(assignment_id).await?;
        self.reload(store).await
    }

    /// Discard local guesses and reload truth. The store is only touched on
    /// success.
    async fn reload(&self, store: &mut PlanStore) -> Result<()> {
        match self.service.fetch_plan_state().await {
            Ok(semesters) => {
                store.replace(semesters);
                Ok(())
            }
            Err(e) => {
                tracing::error!("plan reload failed, keeping last known state: {}", e);
                Err(PlannerError::Reconciliation(Box::new(e)))
            }
        }
    }
}
