use crate::error::ParseError;
use crate::reminders::task::{parse_due_date, DueTask, TaskRecord};
use chrono::{Duration, NaiveDateTime};

pub const DUE_WINDOW_HOURS: i64 = 24;

/// Keeps the tasks due strictly between `now` and `now + 24h`, in input order.
/// A single unparseable due date fails the whole batch.
pub fn select_due(tasks: Vec<TaskRecord>, now: NaiveDateTime) -> Result<Vec<DueTask>, ParseError> {
    let window_end = now + Duration::hours(DUE_WINDOW_HOURS);
    let mut due_tasks = Vec::new();
    for record in tasks {
        let due = parse_due_date(&record.due_date)?;
        if due > now && due < window_end {
            due_tasks.push(DueTask { record, due });
        }
    }
    Ok(due_tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::datetime;

    const NOW: &str = "2024-01-01T10:00:00";

    fn titles(due: &[DueTask]) -> Vec<&str> {
        due.iter().map(|t| t.record.title.as_str()).collect()
    }

    #[test]
    fn due_later_today_is_selected() {
        let due = select_due(vec![TaskRecord::new("a", "2024-01-01T15:00:00")], datetime(NOW)).unwrap();
        assert_eq!(titles(&due), ["a"]);
        assert!(due[0].reminder_message().contains("Jan 01, 2024 15:00"));
    }

    #[test]
    fn due_in_two_days_is_not_selected() {
        let due = select_due(vec![TaskRecord::new("b", "2024-01-03T10:00:00")], datetime(NOW)).unwrap();
        assert!(due.is_empty());
    }

    #[test]
    fn both_bounds_are_exclusive() {
        let tasks = vec![
            TaskRecord::new("now", "2024-01-01T10:00:00"),
            TaskRecord::new("just after", "2024-01-01T10:00:01"),
            TaskRecord::new("last second", "2024-01-02T09:59:59"),
            TaskRecord::new("exactly 24h", "2024-01-02T10:00:00"),
            TaskRecord::new("past", "2023-12-31T23:00:00"),
        ];
        let due = select_due(tasks, datetime(NOW)).unwrap();
        assert_eq!(titles(&due), ["just after", "last second"]);
    }

    #[test]
    fn keeps_input_order() {
        let tasks = vec![
            TaskRecord::new("late", "2024-01-02T08:00:00"),
            TaskRecord::new("skip", "2024-02-01T08:00:00"),
            TaskRecord::new("early", "2024-01-01T11:00:00"),
        ];
        let due = select_due(tasks, datetime(NOW)).unwrap();
        assert_eq!(titles(&due), ["late", "early"]);
    }

    #[test]
    fn one_bad_due_date_fails_everything() {
        let tasks = vec![
            TaskRecord::new("fine", "2024-01-01T11:00:00"),
            TaskRecord::new("broken", "tomorrow"),
        ];
        let err = select_due(tasks, datetime(NOW)).unwrap_err();
        assert!(matches!(err, ParseError::DueDate { value, .. } if value == "tomorrow"));
    }

    #[test]
    fn empty_list_is_fine() {
        assert!(select_due(Vec::new(), datetime(NOW)).unwrap().is_empty());
    }
}
