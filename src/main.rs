mod config;
mod error;
mod reminders;
mod tasks;
mod util;

use crate::config::{load_env_file, Config};
use crate::reminders::fetch::HttpTaskSource;
use crate::reminders::notify::{ConsoleNotifier, Notifier};
use crate::tasks::task_handler;
use crate::util::{Clock, SystemClock};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub struct Data<S> {
    config: Config,
    source: S,
    notifier: Arc<dyn Notifier>,
    clock: Box<dyn Clock>,
    /// Held for the whole of a poll cycle so cycles never overlap.
    cycle_guard: Mutex<()>,
} // Shared by every poll cycle, holds no task data between cycles

impl<S> Data<S> {
    pub fn new(config: Config, source: S, notifier: Arc<dyn Notifier>, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            source,
            notifier,
            clock,
            cycle_guard: Mutex::new(()),
        }
    }
}

#[tokio::main]
async fn main() {
    // a missing .env is fine, every setting has a default
    load_env_file().expect("failed to read .env file");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let source = HttpTaskSource::new(config.api_url.clone()).expect("failed to build HTTP client");
    let data = Arc::new(Data::new(config, source, Arc::new(ConsoleNotifier), Box::new(SystemClock)));

    task_handler(data).await;
}
