use serde::Serialize;

pub const PRESENT_NOTE: &str = "Messages were sent during this time! 🎉📩";
pub const ABSENT_NOTE: &str = "No messages sent during this time. 😞🚫";

pub const PRESENT_MARK: &str = "✔️";
pub const ABSENT_MARK: &str = "❌";

/// Presence result for one time window of a label+date query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRow {
    pub window_name: String,
    pub present: bool,
    pub note: &'static str,
}

impl AttendanceRow {
    pub fn new(window_name: String, present: bool) -> Self {
        let note = if present { PRESENT_NOTE } else { ABSENT_NOTE };
        Self {
            window_name,
            present,
            note,
        }
    }

    pub fn status_mark(&self) -> &'static str {
        if self.present {
            PRESENT_MARK
        } else {
            ABSENT_MARK
        }
    }
}
