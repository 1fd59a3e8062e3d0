//! Sample tasks written to an empty board on first load

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Priority, Task, TaskStatus};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(DateTime::UNIX_EPOCH, |dt| dt.and_utc())
}

fn labels(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(ToString::to_string).collect())
}

/// The default board contents, with ids `<prefix>-1` .. `<prefix>-4`
#[must_use]
pub fn sample_tasks(prefix: &str) -> Vec<Task> {
    vec![
        Task {
            id: format!("{prefix}-1"),
            title: "Design new user onboarding flow".to_string(),
            description: Some(
                "Create wireframes and mockups for the improved user onboarding experience"
                    .to_string(),
            ),
            status: TaskStatus::Todo,
            priority: Priority::High,
            assignee: Some("Sarah Chen".to_string()),
            labels: labels(&["design", "ux"]),
            estimated_hours: Some(8.0),
            created_at: day(2024, 1, 15),
            updated_at: day(2024, 1, 15),
        },
        Task {
            id: format!("{prefix}-2"),
            title: "Implement authentication system".to_string(),
            description: Some(
                "Set up JWT-based authentication with refresh tokens and proper security measures"
                    .to_string(),
            ),
            status: TaskStatus::InProgress,
            priority: Priority::Urgent,
            assignee: Some("Alex Rodriguez".to_string()),
            labels: labels(&["backend", "security"]),
            estimated_hours: Some(12.0),
            created_at: day(2024, 1, 10),
            updated_at: day(2024, 1, 16),
        },
        Task {
            id: format!("{prefix}-3"),
            title: "Fix mobile responsiveness issues".to_string(),
            description: Some(
                "Address layout problems on mobile devices across all main pages".to_string(),
            ),
            status: TaskStatus::InReview,
            priority: Priority::Medium,
            assignee: Some("Jordan Kim".to_string()),
            labels: labels(&["frontend", "mobile"]),
            estimated_hours: Some(4.0),
            created_at: day(2024, 1, 12),
            updated_at: day(2024, 1, 17),
        },
        Task {
            id: format!("{prefix}-4"),
            title: "Setup CI/CD pipeline".to_string(),
            description: Some(
                "Configure automated testing and deployment pipeline using GitHub Actions"
                    .to_string(),
            ),
            status: TaskStatus::Done,
            priority: Priority::Medium,
            assignee: Some("Morgan Taylor".to_string()),
            labels: labels(&["devops", "automation"]),
            estimated_hours: Some(6.0),
            created_at: day(2024, 1, 8),
            updated_at: day(2024, 1, 14),
        },
    ]
}
