use crate::error::{NetworkError, ParseError, ReminderError};
use crate::reminders::task::TaskRecord;
use reqwest::{Client, Url};
use std::future::Future;
use tracing::debug;

/// Where a poll cycle gets its task list from.
pub trait TaskSource: Send + Sync + 'static {
    fn fetch_tasks(&self) -> impl Future<Output = Result<Vec<TaskRecord>, ReminderError>> + Send;
}

pub struct HttpTaskSource {
    client: Client,
    endpoint: Url,
}

impl HttpTaskSource {
    pub fn new(endpoint: Url) -> Result<Self, ReminderError> {
        // no request timeout, a hung GET holds up the loop until it returns
        let client = Client::builder()
            .user_agent(concat!("duebell/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::from)?;
        Ok(Self { client, endpoint })
    }
}

impl TaskSource for HttpTaskSource {
    async fn fetch_tasks(&self) -> Result<Vec<TaskRecord>, ReminderError> {
        fetch_tasks(&self.client, &self.endpoint).await
    }
}

/// One GET, no retries. Anything but 2xx is a [`NetworkError::Status`].
pub async fn fetch_tasks(client: &Client, endpoint: &Url) -> Result<Vec<TaskRecord>, ReminderError> {
    let response = client
        .get(endpoint.clone())
        .send()
        .await
        .map_err(NetworkError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status(status.as_u16()).into());
    }

    let body = response.text().await.map_err(NetworkError::from)?;
    let tasks: Vec<TaskRecord> = serde_json::from_str(&body).map_err(ParseError::from)?;
    debug!(count = tasks.len(), %endpoint, "fetched upcoming tasks");
    Ok(tasks)
}
