use crate::core::store::PlanStore;
use crate::domain::model::{CatalogKey, RequirementGroup};

/// Derived display state for one catalog course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStatus {
    pub key: CatalogKey,
    pub catalog_id: String,
    /// In some semester's assignments, already taken, or assigned elsewhere.
    pub planned: bool,
    /// Order-relative flag when the provider supplied one, completed-only
    /// flag otherwise. Never recomputed locally.
    pub eligible: bool,
}

impl CourseStatus {
    pub fn selectable(&self) -> bool {
        !self.planned && self.eligible
    }
}

/// Derived display state for one requirement group.
#[derive(Debug, Clone, PartialEq)]
pub struct HydratedGroup {
    pub group_id: i64,
    pub title: String,
    pub required_count: u32,
    pub planned_count: usize,
    pub courses: Vec<CourseStatus>,
}

impl HydratedGroup {
    /// Completion fraction in [0, 1]; 0 for groups requiring nothing.
    pub fn progress(&self) -> f64 {
        if self.required_count == 0 {
            return 0.0;
        }
        self.planned_count.min(self.required_count as usize) as f64 / self.required_count as f64
    }
}

/// Recompute planned/eligible flags and group progress from the current plan
/// and the provider-supplied catalog payload. Read-only and idempotent:
/// re-running after any store change never mutates the store or the groups.
pub fn hydrate(groups: &[RequirementGroup], store: &PlanStore) -> Vec<HydratedGroup> {
    groups
        .iter()
        .map(|group| {
            let courses: Vec<CourseStatus> = group
                .courses
                .iter()
                .map(|course| {
                    let key = course.catalog_key();
                    let planned = store.contains_key(&key) || course.taken || course.assigned;
                    let eligible = course.prereq_ok_planned.unwrap_or(course.prereq_ok);
                    CourseStatus {
                        key,
                        catalog_id: course.catalog_id.clone(),
                        planned,
                        eligible,
                    }
                })
                .collect();

            let planned_count = courses.iter().filter(|c| c.planned).count();

            HydratedGroup {
                group_id: group.group_id,
                title: group.title.clone(),
                required_count: group.required_count,
                planned_count,
                courses,
            }
        })
        .collect()
}
