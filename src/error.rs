//! Scheduler error types

/// Errors surfaced by the duty scheduler and its helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Structurally invalid input: empty route, negative or non-finite
    /// hours/distance, malformed timestamp, inconsistent limits.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A single on-duty segment cannot legally fit inside one duty window.
    #[error("segment '{label}' needs {hours:.2}h on duty but the duty window allows only {limit:.2}h")]
    ConstraintUnsatisfiable {
        label: String,
        hours: f64,
        limit: f64,
    },
}

impl ScheduleError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ScheduleError::InvalidInput(message.into())
    }

    /// Stable machine-readable code for error envelopes.
    pub const fn code(&self) -> &'static str {
        match self {
            ScheduleError::InvalidInput(_) => "INVALID_INPUT",
            ScheduleError::ConstraintUnsatisfiable { .. } => "CONSTRAINT_UNSATISFIABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ScheduleError::invalid("route has no segments");
        assert_eq!(err.to_string(), "invalid input: route has no segments");
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[test]
    fn test_constraint_unsatisfiable_message() {
        let err = ScheduleError::ConstraintUnsatisfiable {
            label: "Warehouse Loading".to_string(),
            hours: 15.0,
            limit: 14.0,
        };
        assert_eq!(err.code(), "CONSTRAINT_UNSATISFIABLE");
        assert!(err.to_string().contains("Warehouse Loading"));
        assert!(err.to_string().contains("15.00h"));
    }
}
