use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized catalog-course identity used for every duplicate check:
/// trimmed, case-folded, whitespace- and hyphen-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogKey(String);

impl CatalogKey {
    pub fn new(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .flat_map(|c| c.to_lowercase())
            .collect();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CatalogKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One catalog course placed into one semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseAssignment {
    pub id: i64,
    pub catalog_id: String,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub section: Option<String>,
}

impl CourseAssignment {
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::new(&self.catalog_id)
    }
}

/// One semester in the plan. `order` is the stable temporal rank
/// (lower = earlier); prerequisite satisfaction is evaluated relative to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub order: i64,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub classes: Vec<CourseAssignment>,
}

impl Semester {
    pub fn total_credits(&self) -> f64 {
        self.classes.iter().map(|c| c.credits.max(0.0)).sum()
    }
}

/// Provider-supplied catalog course row, annotated with availability and
/// prerequisite flags computed server-side for a given semester order.
/// The engine consumes these flags and never recomputes prerequisite graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCourseView {
    pub id: i64,
    pub catalog_id: String,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub offered_terms: Vec<String>,
    #[serde(default)]
    pub offered_this_term: bool,
    #[serde(default)]
    pub taken: bool,
    #[serde(default)]
    pub assigned: bool,
    #[serde(default)]
    pub prereq_ok: bool,
    #[serde(default)]
    pub prereq_ok_planned: Option<bool>,
    #[serde(default)]
    pub unmet_prereqs: Vec<String>,
}

impl CatalogCourseView {
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::new(&self.catalog_id)
    }
}

/// A degree-requirement group with the courses that can satisfy it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementGroup {
    pub group_id: i64,
    pub title: String,
    pub required_count: u32,
    #[serde(default)]
    pub courses: Vec<CatalogCourseView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_key_normalizes_case_whitespace_and_hyphens() {
        assert_eq!(CatalogKey::new("CS 101"), CatalogKey::new("cs101"));
        assert_eq!(CatalogKey::new(" CS-101 "), CatalogKey::new("Cs 101"));
        assert_ne!(CatalogKey::new("CS 101"), CatalogKey::new("CS 102"));
    }

    #[test]
    fn semester_credits_ignore_negative_entries() {
        let sem = Semester {
            id: 1,
            name: "Fall".into(),
            order: 0,
            term: None,
            year: None,
            classes: vec![
                CourseAssignment {
                    id: 1,
                    catalog_id: "CS101".into(),
                    code: "CS 101".into(),
                    title: "Intro".into(),
                    credits: 4.0,
                    section: None,
                },
                CourseAssignment {
                    id: 2,
                    catalog_id: "CS102".into(),
                    code: "CS 102".into(),
                    title: "Intro II".into(),
                    credits: -1.0,
                    section: None,
                },
            ],
        };
        assert_eq!(sem.total_credits(), 4.0);
    }
}
