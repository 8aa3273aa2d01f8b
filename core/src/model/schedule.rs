use serde::{Deserialize, Serialize};

/// Slot labels that occupy a column but are never counted as classes.
pub const BREAK_LABELS: [&str; 2] = ["Tea Break", "Lunch Break"];

/// A weekly timetable. `headers[0]` labels the weekday column, every following
/// header names a time slot. Each row starts with the weekday name and then
/// holds one class label per time slot; an empty string means no class.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Schedule {
    /// The timetable handed out for weeks that have never been saved.
    pub fn template() -> Self {
        let headers = [
            "Day",
            "8:45-9:40",
            "9:40-10:35",
            "10:35-10:50",
            "10:50-11:45",
            "11:45-12:40",
            "12:40-1:40",
            "1:40-2:35",
            "2:35-3:30",
            "3:30-4:25",
            "4:25-5:20",
        ];
        let rows: [[&str; 11]; 5] = [
            ["Monday", "BDA-Lab", "BDA-Lab", "Tea Break", "OE", "DL", "Lunch Break", "Project Phase-II", "Project Phase-II", "", ""],
            ["Tuesday", "INS", "DL", "Tea Break", "OE", "PC", "Lunch Break", "Project Phase-II", "Project Phase-II", "", ""],
            ["Wednesday", "DL", "BDA", "Tea Break", "OE", "INS", "Lunch Break", "STEIGEN", "STEIGEN", "", ""],
            ["Thursday", "INS", "PC", "Tea Break", "BDA", "PC", "Lunch Break", "SOFTSKILL", "SOFTSKILL", "", ""],
            ["Friday", "INS", "BDA", "Tea Break", "PC-Lab", "PC-Lab", "Lunch Break", "Project Phase-II", "Project Phase-II", "", ""],
        ];

        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    /// Time-slot label for a slot position (0-based, weekday column excluded).
    pub fn time_slot(&self, slot_index: usize) -> Option<&str> {
        self.headers.get(slot_index + 1).map(String::as_str)
    }

    /// Row for a weekday, matched case-insensitively on the first cell.
    pub fn row_for(&self, day_name: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| {
                row.first()
                    .map(|d| d.eq_ignore_ascii_case(day_name))
                    .unwrap_or(false)
            })
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Whether a slot label stands for a class that can be attended.
pub fn is_class_label(label: &str) -> bool {
    !label.is_empty() && !BREAK_LABELS.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let schedule = Schedule::template();
        assert_eq!(schedule.headers.len(), 11);
        assert_eq!(schedule.headers[0], "Day");
        assert_eq!(schedule.rows.len(), 5);
        for row in &schedule.rows {
            assert_eq!(row.len(), schedule.headers.len());
        }
        let days: Vec<&str> = schedule.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(days, vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    }

    #[test]
    fn test_time_slot_skips_day_column() {
        let schedule = Schedule::template();
        assert_eq!(schedule.time_slot(0), Some("8:45-9:40"));
        assert_eq!(schedule.time_slot(3), Some("10:50-11:45"));
        assert_eq!(schedule.time_slot(10), None);
    }

    #[test]
    fn test_row_for_is_case_insensitive() {
        let schedule = Schedule::template();
        let row = schedule.row_for("wednesday").unwrap();
        assert_eq!(row[7], "STEIGEN");
        assert!(schedule.row_for("Saturday").is_none());
    }

    #[test]
    fn test_is_class_label() {
        assert!(is_class_label("OE"));
        assert!(!is_class_label(""));
        assert!(!is_class_label("Tea Break"));
        assert!(!is_class_label("Lunch Break"));
    }
}
