use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_command_error_message() {
        let err = AppError::ParseCommand("9".to_string());

        assert_eq!(format!("{}", err), "Unrecognized command: '9'");
    }

    #[test]
    fn json_error_converts_with_question_mark() {
        fn parse(data: &str) -> Result<Vec<String>, AppError> {
            Ok(serde_json::from_str(data)?)
        }

        let err = parse("[\"unterminated").unwrap_err();

        assert!(matches!(err, AppError::Json(_)));
        assert!(format!("{}", err).starts_with("Invalid contact data: "));
    }
}
