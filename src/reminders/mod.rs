pub mod fetch;
pub mod notify;
pub mod task;
pub mod window;
