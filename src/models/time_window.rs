use chrono::NaiveTime;

/// A fixed daily interval. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub name: &'static str,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid window bound"),
    }
}

/// The four daily slots, in report order.
pub static TIME_WINDOWS: [TimeWindow; 4] = [
    TimeWindow {
        name: "Morning",
        start: hm(8, 30),
        end: hm(10, 0),
    },
    TimeWindow {
        name: "Midday",
        start: hm(12, 0),
        end: hm(13, 30),
    },
    TimeWindow {
        name: "Afternoon",
        start: hm(15, 0),
        end: hm(16, 30),
    },
    TimeWindow {
        name: "Daily Task",
        start: hm(17, 30),
        end: hm(19, 0),
    },
];

impl TimeWindow {
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Label shown in the report table, with bounds on a 12-hour dial
    /// (e.g. "Midday (12:00 - 1:30)").
    pub fn label(&self) -> String {
        format!(
            "{} ({} - {})",
            self.name,
            dial(self.start),
            dial(self.end)
        )
    }
}

fn dial(t: NaiveTime) -> String {
    t.format("%-I:%M").to_string()
}
