pub mod catalog;
pub mod engine;
pub mod guard;
pub mod hydrate;
pub mod search;
pub mod store;

pub use crate::domain::model::{
    CatalogCourseView, CatalogKey, CourseAssignment, RequirementGroup, Semester,
};
pub use crate::domain::ports::{ConfigProvider, CreditSource, PlanService};
pub use crate::utils::error::Result;
