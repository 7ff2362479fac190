//! Capability services behind the MCP tool surface.
//!
//! Each service owns one tool group. Work item, board, project, and git
//! services call the REST routes through a shared [`AzdoConnection`]; the
//! testing, DevSecOps, artifact, and AI services return representative
//! payloads without an upstream call and are infallible.

mod ai;
mod artifacts;
mod boards;
mod devsecops;
mod git;
mod projects;
mod testing;
mod work_items;

pub use ai::AiInsightsService;
pub use artifacts::ArtifactService;
pub use boards::{pick_default_team, BoardsService};
pub use devsecops::DevSecOpsService;
pub use git::{GitService, MergeStrategy, PullRequestSearch, PullRequestStatus};
pub use projects::{ProjectService, ProjectVisibility};
pub use testing::TestingService;
pub use work_items::{queries, NewWorkItem, WorkItemService};

use chrono::{Duration, SecondsFormat, Utc};

/// Take `top` items after dropping `skip`. Out-of-range values clamp to an
/// empty page rather than erroring.
pub fn slice_page<T>(items: Vec<T>, skip: usize, top: usize) -> Vec<T> {
    items.into_iter().skip(skip).take(top).collect()
}

pub(crate) fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn minutes_from_now(minutes: i64) -> String {
    (Utc::now() + Duration::minutes(minutes)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_page_takes_a_window() {
        assert_eq!(slice_page(vec![1, 2, 3, 4, 5], 1, 2), vec![2, 3]);
    }

    #[test]
    fn slice_page_clamps_out_of_range() {
        assert_eq!(slice_page(vec![1, 2, 3], 5, 2), Vec::<i32>::new());
        assert_eq!(slice_page(vec![1, 2, 3], 0, 10), vec![1, 2, 3]);
    }

    #[test]
    fn timestamps_are_utc_rfc3339_with_millis() {
        let stamp = now();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2024-05-01T12:00:00.000Z".len());
    }
}
