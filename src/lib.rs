pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::http::HttpPlanService;
pub use crate::core::catalog::CatalogIndex;
pub use crate::core::engine::{CommitOutcome, CommitSummary, PlanEngine};
pub use crate::core::hydrate::{hydrate, HydratedGroup};
pub use crate::core::search::RequirementSearch;
pub use crate::core::store::{PlanStore, SelectionSet};
pub use crate::domain::model::{
    CatalogCourseView, CatalogKey, CourseAssignment, RequirementGroup, Semester,
};
pub use crate::domain::ports::{ConfigProvider, CreditSource, PlanService};
pub use crate::utils::error::{PlannerError, Result};
