use tracing::{info, warn};

use crate::models::Notification;

/// Modal dialogs the user must dismiss
pub trait NotificationSurface {
    fn show_info(&mut self, title: &str, fields: &[(String, String)]);

    fn show_error(&mut self, title: &str, message: &str);

    fn show(&mut self, notification: &Notification) {
        match notification {
            Notification::Info { title, fields } => self.show_info(title, fields),
            Notification::Error { title, message } => self.show_error(title, message),
        }
    }
}

/// Writes notifications to the tracing log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSurface for TracingNotifier {
    fn show_info(&mut self, title: &str, fields: &[(String, String)]) {
        let body = fields
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join(", ");
        info!("📍 {} ({})", title, body);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        warn!("{}: {}", title, message);
    }
}

/// Keeps every notification shown, oldest first
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    pub shown: Vec<Notification>,
}

impl NotificationSurface for NotificationLog {
    fn show_info(&mut self, title: &str, fields: &[(String, String)]) {
        self.shown.push(Notification::Info {
            title: title.to_string(),
            fields: fields.to_vec(),
        });
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.shown.push(Notification::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_dispatches_by_kind() {
        let mut log = NotificationLog::default();
        let error = Notification::error("Could not get the location");
        let info = Notification::Info {
            title: "Pin".to_string(),
            fields: vec![("Phone".to_string(), "123".to_string())],
        };

        log.show(&error);
        log.show(&info);
        TracingNotifier.show(&info);

        assert_eq!(log.shown, vec![error, info]);
    }
}
