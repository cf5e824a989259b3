use crate::domain::model::{CatalogKey, CourseAssignment, RequirementGroup, Semester};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The authoritative plan/catalog provider. Transport lives in adapters;
/// the engine only sees these four operations.
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Authoritative read of the full plan.
    async fn fetch_plan_state(&self) -> Result<Vec<Semester>>;

    /// Place a catalog course into a semester.
    async fn add_assignment(&self, catalog_id: &str, semester_id: i64)
        -> Result<CourseAssignment>;

    /// Remove a placed course by assignment id.
    async fn remove_assignment(&self, assignment_id: i64) -> Result<()>;

    /// Requirement groups with prerequisite flags evaluated server-side
    /// against `current_order`.
    async fn search_requirements(
        &self,
        query: &str,
        current_term: &str,
        current_order: i64,
    ) -> Result<Vec<RequirementGroup>>;
}

/// Credit lookup for a not-yet-committed candidate. `None` means the
/// candidate cannot be resolved from the displayed catalog payload; the
/// guard treats it as a zero-credit need and skips it silently.
pub trait CreditSource {
    fn credits(&self, key: &CatalogKey) -> Option<f64>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn program(&self) -> &str;
    fn max_credits_per_semester(&self) -> f64;
    fn search_debounce_ms(&self) -> u64;
}
