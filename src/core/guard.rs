use crate::domain::model::{CatalogKey, Semester};
use crate::domain::ports::CreditSource;

pub const MAX_CREDITS_PER_SEM: f64 = 18.0;

/// Partition of a candidate batch produced by one guard pass.
/// Zero-credit skips are kept for logging but are never surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionReport {
    pub admitted: Vec<CatalogKey>,
    pub rejected_duplicate: Vec<CatalogKey>,
    pub rejected_capacity: Vec<CatalogKey>,
    pub skipped_zero_credit: Vec<CatalogKey>,
    pub remaining_credits: f64,
}

impl AdmissionReport {
    fn empty(remaining: f64) -> Self {
        Self {
            admitted: Vec::new(),
            rejected_duplicate: Vec::new(),
            rejected_capacity: Vec::new(),
            skipped_zero_credit: Vec::new(),
            remaining_credits: remaining,
        }
    }
}

/// Decide which candidates enter the target semester, in one deterministic
/// left-to-right pass over the candidates in selection order.
///
/// Pure over the snapshot: never mutates plan state, safe to re-run.
/// Returns `None` when the target semester no longer exists in the snapshot;
/// the caller aborts the whole workflow.
pub fn evaluate<C: CreditSource>(
    snapshot: &[Semester],
    target_index: usize,
    candidates: &[CatalogKey],
    credits: &C,
    max_credits: f64,
) -> Option<AdmissionReport> {
    let target = snapshot.get(target_index)?;

    let mut remaining = (max_credits - target.total_credits()).max(0.0);
    let mut report = AdmissionReport::empty(remaining);

    for key in candidates {
        // I1: a catalog key lives in at most one semester.
        let already_planned = snapshot
            .iter()
            .any(|s| s.classes.iter().any(|c| &c.catalog_key() == key));
        if already_planned {
            report.rejected_duplicate.push(key.clone());
            continue;
        }

        let need = credits.credits(key).unwrap_or(0.0);
        if need <= 0.0 {
            // Unresolvable candidates fall back to a zero credit need and are
            // skipped without rejection feedback.
            tracing::debug!("skipping zero-credit candidate '{}'", key);
            report.skipped_zero_credit.push(key.clone());
            continue;
        }

        // I2: capacity. A rejected candidate does not consume credits, so a
        // later cheaper candidate can still be admitted.
        if need > remaining {
            report.rejected_capacity.push(key.clone());
            continue;
        }

        remaining -= need;
        report.admitted.push(key.clone());
    }

    report.remaining_credits = remaining;
    Some(report)
}
