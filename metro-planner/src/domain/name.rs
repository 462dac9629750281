//! Shared validation for user-supplied names.

/// Error returned when a station, line or train name is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} name {name:?}: {reason}")]
pub struct InvalidName {
    kind: &'static str,
    name: String,
    reason: &'static str,
}

impl InvalidName {
    /// The kind of entity the name was meant for (`station`, `line`, `train`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Check that `s` can be used as a single command token.
///
/// Names are split on whitespace by the command shell, so a name must be
/// non-empty and contain no whitespace.
pub(crate) fn validate(kind: &'static str, s: &str) -> Result<(), InvalidName> {
    let reason = if s.is_empty() {
        "must not be empty"
    } else if s.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(InvalidName {
        kind,
        name: s.to_string(),
        reason,
    })
}
