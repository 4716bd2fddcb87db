use crate::reminders::fetch::TaskSource;
use crate::Data;
use reminders::check_reminders;
use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

mod reminders;

/// Polls forever. The first cycle starts right away, later ones every `check_interval`.
/// Each cycle is awaited before the next tick and ticks missed meanwhile are dropped.
pub async fn task_handler<S: TaskSource>(data: Arc<Data<S>>) {
    let mut reminder_interval = interval(data.config.check_interval);
    reminder_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(
        endpoint = %data.config.api_url,
        interval_secs = data.config.check_interval.as_secs(),
        "notification service started"
    );
    loop {
        reminder_interval.tick().await;

        check_reminders(&data).await;
    }
}
