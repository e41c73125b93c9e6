//! Static case inventory.

#[cfg(test)]
#[path = "case_service_test.rs"]
mod case_service_test;

use time::macros::date;

use crate::types::case::{Case, CaseStatus};

/// Return every known case, in fixed order.
///
/// Records are rebuilt on each call; callers own their copy and nothing is
/// shared or mutated.
pub fn get_cases() -> Vec<Case> {
    vec![
        Case {
            id: "1".to_owned(),
            case_name: "Case 1".to_owned(),
            status: CaseStatus::InProgress,
            created: date!(2024 - 01 - 01),
            due: Some(date!(2024 - 03 - 01)),
            total_files: 4,
            releasable_files: "2 of 4".to_owned(),
        },
        Case {
            id: "2".to_owned(),
            case_name: "Case 2".to_owned(),
            status: CaseStatus::PendingReview,
            created: date!(2024 - 01 - 15),
            due: Some(date!(2024 - 03 - 15)),
            total_files: 6,
            releasable_files: "3 of 6".to_owned(),
        },
        Case {
            id: "3".to_owned(),
            case_name: "Case 3".to_owned(),
            status: CaseStatus::Completed,
            created: date!(2024 - 01 - 20),
            due: None,
            total_files: 3,
            releasable_files: "3 of 3".to_owned(),
        },
    ]
}
