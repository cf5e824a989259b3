use crate::domain::model::{CatalogKey, Semester};
use tokio::sync::watch;

/// Ordered list of semesters; single source of truth after each
/// reconciliation. Only the reconciliation step replaces its contents,
/// and always wholesale; local guesses are never merged in.
#[derive(Debug, Default)]
pub struct PlanStore {
    semesters: Vec<Semester>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Owned copy for the guard engine to evaluate without holding the store.
    pub fn snapshot(&self) -> Vec<Semester> {
        self.semesters.clone()
    }

    /// Replace the whole plan with the authoritative server state.
    pub fn replace(&mut self, semesters: Vec<Semester>) {
        self.semesters = semesters;
    }

    /// Is this catalog course placed in any semester?
    pub fn contains_key(&self, key: &CatalogKey) -> bool {
        self.semesters
            .iter()
            .any(|s| s.classes.iter().any(|c| &c.catalog_key() == key))
    }

    pub fn remaining_credits(&self, index: usize, cap: f64) -> Option<f64> {
        self.semesters
            .get(index)
            .map(|s| (cap - s.total_credits()).max(0.0))
    }
}

/// Candidate courses picked in the "add courses" workflow, in selection
/// order. No eligibility checks happen here; admission is decided only at
/// commit. Every mutation publishes a "<n> selected" label for the view.
#[derive(Debug)]
pub struct SelectionSet {
    keys: Vec<CatalogKey>,
    counter: watch::Sender<String>,
}

impl SelectionSet {
    pub fn new() -> (Self, watch::Receiver<String>) {
        let (counter, rx) = watch::channel("0 selected".to_string());
        (
            Self {
                keys: Vec::new(),
                counter,
            },
            rx,
        )
    }

    pub fn add(&mut self, key: CatalogKey) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
            self.publish();
        }
    }

    pub fn remove(&mut self, key: &CatalogKey) {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        if self.keys.len() != before {
            self.publish();
        }
    }

    pub fn has(&self, key: &CatalogKey) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        if !self.keys.is_empty() {
            self.keys.clear();
        }
        self.publish();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selection order matters: the guard evaluates candidates left to right.
    pub fn keys(&self) -> &[CatalogKey] {
        &self.keys
    }

    fn publish(&self) {
        let _ = self.counter.send(format!("{} selected", self.keys.len()));
    }
}
