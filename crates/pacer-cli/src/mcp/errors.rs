//! Error handling utilities for the MCP server

use pacer_core::PacerError;
use rmcp::ErrorData;

/// Convert a scheduler error into an MCP error.
///
/// Errors caused by the request itself (unknown teacher, no slots, bad
/// dates) are reported as invalid parameters so clients can correct them.
pub fn to_mcp_error(message: &str, error: &PacerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use pacer_core::Scope;
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_validation_errors_are_invalid_params() {
        let error = PacerError::NoAvailableSlots {
            scope: Scope::default(),
        };
        let mapped = to_mcp_error("Failed to commit schedule", &error);
        assert_eq!(mapped.code, ErrorCode::INVALID_PARAMS);
        assert!(mapped.message.contains("No available teaching slots"));
    }

    #[test]
    fn test_other_errors_are_internal() {
        let error = PacerError::Configuration {
            message: "Task join error".to_string(),
        };
        let mapped = to_mcp_error("Failed to preview schedule", &error);
        assert_eq!(mapped.code, ErrorCode::INTERNAL_ERROR);
    }
}
