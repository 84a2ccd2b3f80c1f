pub mod assignment;
pub mod attendance_row;
pub mod chat_record;
pub mod time_window;

pub use assignment::Assignment;
pub use attendance_row::AttendanceRow;
pub use chat_record::{ChatRecord, HourClock};
pub use time_window::{TIME_WINDOWS, TimeWindow};
