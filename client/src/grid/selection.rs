//! Checkbox row selection keyed by row id.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_owned());
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether every id in `all` is selected (false for an empty list).
    pub fn contains_all<'a>(&self, mut all: impl Iterator<Item = &'a str>) -> bool {
        let mut any = false;
        let every = all.all(|id| {
            any = true;
            self.ids.contains(id)
        });
        any && every
    }

    /// Header checkbox: select all of `all`, or clear if they already are.
    pub fn toggle_all<'a>(&mut self, all: impl Iterator<Item = &'a str> + Clone) {
        if self.contains_all(all.clone()) {
            self.clear();
        } else {
            self.ids.extend(all.map(str::to_owned));
        }
    }
}
