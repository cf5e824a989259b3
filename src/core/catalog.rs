use crate::domain::model::{CatalogKey, RequirementGroup};
use crate::domain::ports::CreditSource;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CandidateCourse {
    catalog_id: String,
    credits: f64,
}

/// Lookup from catalog key to the raw catalog id and credit count, built
/// from the requirement payload the guard evaluates against. Committing a
/// key that was never displayed simply fails to resolve here and is skipped
/// by the guard.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_key: HashMap<CatalogKey, CandidateCourse>,
}

impl CatalogIndex {
    pub fn from_groups(groups: &[RequirementGroup]) -> Self {
        let mut by_key = HashMap::new();
        for group in groups {
            for course in &group.courses {
                by_key.insert(
                    course.catalog_key(),
                    CandidateCourse {
                        catalog_id: course.catalog_id.clone(),
                        credits: course.credits,
                    },
                );
            }
        }
        Self { by_key }
    }

    pub fn catalog_id(&self, key: &CatalogKey) -> Option<&str> {
        self.by_key.get(key).map(|c| c.catalog_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl CreditSource for CatalogIndex {
    fn credits(&self, key: &CatalogKey) -> Option<f64> {
        self.by_key.get(key).map(|c| c.credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CatalogCourseView;

    fn view(id: i64, catalog_id: &str, credits: f64) -> CatalogCourseView {
        CatalogCourseView {
            id,
            catalog_id: catalog_id.into(),
            code: catalog_id.into(),
            title: String::new(),
            credits,
            offered_terms: vec![],
            offered_this_term: false,
            taken: false,
            assigned: false,
            prereq_ok: true,
            prereq_ok_planned: None,
            unmet_prereqs: vec![],
        }
    }

    #[test]
    fn index_resolves_credits_and_raw_ids_across_groups() {
        let groups = vec![
            RequirementGroup {
                group_id: 1,
                title: "Core".into(),
                required_count: 2,
                courses: vec![view(1, "CS 101", 4.0)],
            },
            RequirementGroup {
                group_id: 2,
                title: "Electives".into(),
                required_count: 1,
                courses: vec![view(2, "MATH 201", 3.0)],
            },
        ];

        let index = CatalogIndex::from_groups(&groups);
        assert_eq!(index.len(), 2);
        assert_eq!(index.credits(&CatalogKey::new("cs-101")), Some(4.0));
        assert_eq!(index.catalog_id(&CatalogKey::new("math201")), Some("MATH 201"));
        assert_eq!(index.credits(&CatalogKey::new("BIO 100")), None);
    }
}
