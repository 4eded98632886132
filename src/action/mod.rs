mod handler;
mod types;

pub use handler::{prompt_for, RequestHandler};
pub use types::{Notification, NotificationLevel, Request, Response};
