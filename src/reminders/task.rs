use crate::error::ParseError;
use chrono::NaiveDateTime;
use serde::Deserialize;

const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DUE_DATE_LEN: usize = 19; // yyyy-MM-ddTHH:mm:ss
pub const REMINDER_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// One entry of the upcoming-tasks response. Only `title` and `due_date` are required,
/// the planner also sends the rest and they only end up in logs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    pub due_date: String,
    pub id: Option<i64>,
    pub priority: Option<u8>,
    pub user_email: Option<String>,
    pub course: Option<String>,
}

#[cfg(test)]
impl TaskRecord {
    pub fn new(title: &str, due_date: &str) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
            id: None,
            priority: None,
            user_email: None,
            course: None,
        }
    }
}

/// A task that made it into the due window, with its due date already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DueTask {
    pub record: TaskRecord,
    pub due: NaiveDateTime,
}

impl DueTask {
    pub fn reminder_message(&self) -> String {
        format!(
            "Reminder: Task '{}' is due on {}",
            self.record.title,
            self.due.format(REMINDER_DATE_FORMAT)
        )
    }
}

/// Anything past the seconds (fraction, offset, `Z`) is cut off and the rest is read as
/// local time. Too-short input is parsed as is and fails.
pub fn parse_due_date(raw: &str) -> Result<NaiveDateTime, ParseError> {
    let truncated = raw.get(..DUE_DATE_LEN).unwrap_or(raw);
    NaiveDateTime::parse_from_str(truncated, DUE_DATE_FORMAT).map_err(|source| {
        ParseError::DueDate {
            value: raw.to_string(),
            source,
        }
    })
}
