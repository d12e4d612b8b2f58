use thiserror::Error;

use crate::{project::ProjectError, tooling::ToolingError};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Compilation error: {problem} at line {line}{}", column_suffix(.column))]
    Compile {
        problem: String,
        line: i64,
        column: Option<i64>,
    },

    #[error("Execution error: {message}\n{stack_trace}")]
    Runtime { message: String, stack_trace: String },

    #[error("Unexpected executeAnonymous response: {0}")]
    Protocol(String),

    #[error(transparent)]
    Tooling(#[from] ToolingError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

fn column_suffix(column: &Option<i64>) -> String {
    match column {
        Some(c) if *c >= 0 => format!(", column {c}"),
        _ => String::new(),
    }
}
