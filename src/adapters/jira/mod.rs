//! Issue tracker adapters.

mod mock_tracker;

pub use mock_tracker::MockIssueTracker;
