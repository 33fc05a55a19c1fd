use thiserror::Error;

/// The two ways an inspector action can fail.
///
/// The `Display` text of each variant is the message shown to the user, so
/// callers can hand `err.to_string()` straight to a notification.
#[derive(Error, Debug)]
pub enum Error {
    /// The file is missing, unreadable, or not a decodable image.
    #[error("Failed to open image: {0}")]
    Decode(#[from] image::ImageError),
    /// The export destination could not be written.
    #[error("Failed to save metadata: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Description of the underlying cause, without the action prefix.
    pub fn cause(&self) -> String {
        match self {
            Self::Decode(e) => e.to_string(),
            Self::Write(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn decode_message_carries_cause() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = Error::Decode(image::ImageError::IoError(io_err));
        assert_eq!(err.to_string(), "Failed to open image: no such file");
        assert_eq!(err.cause(), "no such file");
    }

    #[test]
    fn write_message_carries_cause() {
        let err = Error::Write(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Failed to save metadata: denied");
        assert_eq!(err.cause(), "denied");
    }
}
