//! User-facing failure type.
//!
//! Most errors in fledge are plumbing failures (I/O, parse errors in our own
//! state files) and travel as plain [`anyhow::Error`] with context attached.
//! A [`ToolExit`] is different: the message IS the diagnosis, aimed at the
//! person running the tool, and it always names the file they need to fix.
//! `main` unwraps these specially so the user sees one clean line instead of
//! an error chain.

use thiserror::Error;

/// An error whose message is the whole story.
///
/// Raised when a project file is malformed in a way only the user can fix,
/// such as a bad `pubspec.yaml`. Construct with a message that names the
/// offending file.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ToolExit {
    message: String,
}

impl ToolExit {
    pub fn new(message: impl Into<String>) -> Self {
        ToolExit {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_display() {
        let err = ToolExit::new("pubspec.yaml: something is off");
        assert_eq!(err.to_string(), "pubspec.yaml: something is off");
    }

    #[test]
    fn survives_anyhow_round_trip() {
        // main() downcasts to decide between a clean print and a full chain
        let err: anyhow::Error = ToolExit::new("bad manifest").into();
        let exit = err.downcast_ref::<ToolExit>();
        assert!(exit.is_some());
        assert_eq!(exit.unwrap().to_string(), "bad manifest");
    }
}
