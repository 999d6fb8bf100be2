//! Outbound calendar-link generation.
//!
//! # Responsibility
//! - Produce a Google Calendar "render" URL for one task.
//!
//! # Invariants
//! - Pure: no state, no I/O; the board only renders the returned string.
//! - A `dates` parameter appears only for scheduled tasks whose descriptor
//!   is already in the compact `start/end` UTC range form.

use crate::model::task::Task;
use once_cell::sync::Lazy;
use regex::Regex;

const RENDER_BASE: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

// Compact UTC range, e.g. 20260829T120000Z/20260829T130000Z.
static SCHEDULE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{8}T\d{6}Z/\d{8}T\d{6}Z$").expect("schedule range pattern must compile")
});

/// Builds the outbound calendar link for `task`.
///
/// The task content becomes the event title and the duration is carried in
/// the details text. Schedule descriptors in any other shape are ignored
/// rather than guessed at.
pub fn calendar_url(task: &Task) -> String {
    let mut url = format!(
        "{RENDER_BASE}&text={}&details={}",
        encode_component(&task.content),
        encode_component(&format!("Planned for {} min", task.duration_minutes)),
    );

    if task.is_schedule && SCHEDULE_RANGE.is_match(&task.schedule) {
        url.push_str("&dates=");
        url.push_str(&task.schedule);
    }

    url
}

/// Percent-encodes one query component.
///
/// Unreserved characters pass through; everything else is encoded byte-wise,
/// which keeps multi-byte UTF-8 content intact.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            b' ' => out.push_str("%20"),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{calendar_url, encode_component};
    use crate::model::task::{Priority, Task};

    fn scheduled_task(schedule: &str, is_schedule: bool) -> Task {
        Task {
            id: "1".to_string(),
            content: "plan sprint & review".to_string(),
            priority: Priority::UrgentImportant,
            duration_minutes: 45,
            schedule: schedule.to_string(),
            is_schedule,
        }
    }

    #[test]
    fn encodes_content_into_text_parameter() {
        let url = calendar_url(&scheduled_task("", false));
        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=plan%20sprint%20%26%20review"));
        assert!(url.contains("details=Planned%20for%2045%20min"));
    }

    #[test]
    fn unscheduled_task_gets_no_dates_parameter() {
        let url = calendar_url(&scheduled_task("20260829T120000Z/20260829T130000Z", false));
        assert!(!url.contains("&dates="));
    }

    #[test]
    fn compact_range_schedule_becomes_dates_parameter() {
        let url = calendar_url(&scheduled_task("20260829T120000Z/20260829T130000Z", true));
        assert!(url.ends_with("&dates=20260829T120000Z/20260829T130000Z"));
    }

    #[test]
    fn free_form_schedule_is_ignored() {
        let url = calendar_url(&scheduled_task("tomorrow afternoon", true));
        assert!(!url.contains("&dates="));
    }

    #[test]
    fn encoding_keeps_unreserved_and_escapes_the_rest() {
        assert_eq!(encode_component("abc-_.~XYZ09"), "abc-_.~XYZ09");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("50%"), "50%25");
        assert_eq!(encode_component("todo ✓"), "todo%20%E2%9C%93");
    }
}
