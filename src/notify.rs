use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// A one-shot message for the user: a title and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn from_error(err: &Error) -> Self {
        Self {
            level: Level::Error,
            title: "Error".to_string(),
            message: err.to_string(),
        }
    }

    pub fn export_succeeded() -> Self {
        Self {
            level: Level::Info,
            title: "Success".to_string(),
            message: "Metadata saved successfully!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_notification() {
        let err = Error::Write(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"));
        let n = Notification::from_error(&err);
        assert_eq!(n.level, Level::Error);
        assert_eq!(n.title, "Error");
        assert_eq!(n.message, "Failed to save metadata: Permission denied");
    }

    #[test]
    fn success_notification() {
        let n = Notification::export_succeeded();
        assert_eq!(n.level, Level::Info);
        assert_eq!(n.title, "Success");
        assert_eq!(n.message, "Metadata saved successfully!");
    }
}
