/// Delivery channel for reminder lines.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Prints to stdout. Email was never wired up, so this is the only channel.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("NOTIFICATION: {message}");
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
