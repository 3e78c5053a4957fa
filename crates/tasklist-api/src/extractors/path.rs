//! Typed path parameter helpers.

use std::str::FromStr;

use tasklist_core::error::AppError;

/// Parses a typed identifier from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid identifier: {s}")))
}

#[cfg(test)]
mod tests {
    use tasklist_core::error::ErrorKind;
    use tasklist_core::types::TaskListId;

    use super::*;

    #[test]
    fn test_parse_id() {
        let id = TaskListId::new();
        assert_eq!(parse_id::<TaskListId>(&id.to_string()).unwrap(), id);

        let err = parse_id::<TaskListId>("abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
