//! Single-column sorting.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Header click cycle: none -> asc -> desc -> none.
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Asc),
            Some(Self::Asc) => Some(Self::Desc),
            Some(Self::Desc) => None,
        }
    }

    /// Arrow shown next to a sorted header.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }

    pub fn aria(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// The active sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortModel<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortModel<F> {
    /// Apply one header click on `field` to the current sort.
    ///
    /// Clicking a different column starts that column at ascending.
    pub fn toggle(current: Option<Self>, field: F) -> Option<Self> {
        let direction = match current {
            Some(sort) if sort.field == field => SortDirection::cycle(Some(sort.direction)),
            _ => SortDirection::cycle(None),
        };
        direction.map(|direction| Self { field, direction })
    }

    /// Direction for `field`, if it is the sorted column.
    pub fn direction_for(current: Option<Self>, field: F) -> Option<SortDirection> {
        current.filter(|sort| sort.field == field).map(|sort| sort.direction)
    }
}
