use crate::error::ReminderError;
use crate::reminders::fetch::TaskSource;
use crate::reminders::window::select_due;
use crate::Data;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Completed { fetched: usize, notified: usize },
    /// Another cycle was still running.
    Skipped,
}

/// Runs one poll cycle and logs how it went. Never fails, the next tick is the retry.
pub async fn check_reminders<S: TaskSource>(data: &Arc<Data<S>>) {
    match run_cycle(data).await {
        Ok(Cycle::Completed { fetched, notified }) => {
            debug!(fetched, notified, "poll cycle finished")
        }
        Ok(Cycle::Skipped) => warn!("previous poll cycle still running, skipping this one"),
        Err(e) => error!("Error checking for tasks: {e}"),
    }
}

/// The cycle itself runs on its own task so a panic in it comes back as
/// [`ReminderError::Unexpected`] instead of taking the scheduler down.
pub async fn run_cycle<S: TaskSource>(data: &Arc<Data<S>>) -> Result<Cycle, ReminderError> {
    let Ok(_running) = data.cycle_guard.try_lock() else {
        return Ok(Cycle::Skipped);
    };

    let cycle_data = Arc::clone(data);
    tokio::spawn(async move { poll_cycle(&cycle_data).await })
        .await
        .unwrap_or_else(|e| Err(ReminderError::Unexpected(format!("poll cycle aborted: {e}"))))
}

async fn poll_cycle<S: TaskSource>(data: &Data<S>) -> Result<Cycle, ReminderError> {
    let tasks = data.source.fetch_tasks().await?;
    let fetched = tasks.len();
    let due_tasks = select_due(tasks, data.clock.now())?;

    for task in &due_tasks {
        debug!(
            title = %task.record.title,
            id = ?task.record.id,
            priority = ?task.record.priority,
            course = ?task.record.course,
            recipient = ?task.record.user_email,
            "task due within window"
        );
        data.notifier.notify(&task.reminder_message());
    }

    Ok(Cycle::Completed {
        fetched,
        notified: due_tasks.len(),
    })
}
