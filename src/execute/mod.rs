//! Typed view of an `executeAnonymous` response and its outcome.

use serde::{Deserialize, Deserializer};

use crate::error::GenerateError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    compiled: Option<bool>,
    success: Option<bool>,
    compile_problem: Option<String>,
    line: Option<i64>,
    column: Option<i64>,
    // outer None: key absent; inner None: explicit null
    #[serde(default, deserialize_with = "present")]
    exception_message: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    exception_stack_trace: Option<Option<String>>,
}

fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteAnonymousResult {
    CompileFailed {
        problem: String,
        line: i64,
        column: Option<i64>,
    },
    ExecutionFailed {
        message: String,
        stack_trace: String,
    },
    Succeeded,
}

impl ExecuteAnonymousResult {
    pub fn from_json(body: &str) -> Result<Self, GenerateError> {
        let raw: RawResult = serde_json::from_str(body)
            .map_err(|e| GenerateError::Protocol(format!("response is not valid JSON: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawResult) -> Result<Self, GenerateError> {
        let compiled = raw.compiled.ok_or_else(|| missing("compiled"))?;
        if !compiled {
            return Ok(Self::CompileFailed {
                problem: raw.compile_problem.ok_or_else(|| missing("compileProblem"))?,
                line: raw.line.ok_or_else(|| missing("line"))?,
                column: raw.column,
            });
        }

        if raw.success.ok_or_else(|| missing("success"))? {
            Ok(Self::Succeeded)
        } else {
            Ok(Self::ExecutionFailed {
                message: raw
                    .exception_message
                    .ok_or_else(|| missing("exceptionMessage"))?
                    .unwrap_or_default(),
                stack_trace: raw
                    .exception_stack_trace
                    .ok_or_else(|| missing("exceptionStackTrace"))?
                    .unwrap_or_default(),
            })
        }
    }

    /// Turns the two failure shapes into errors.
    pub fn classify(self) -> Result<(), GenerateError> {
        match self {
            Self::CompileFailed { problem, line, column } => {
                Err(GenerateError::Compile { problem, line, column })
            }
            Self::ExecutionFailed { message, stack_trace } => {
                Err(GenerateError::Runtime { message, stack_trace })
            }
            Self::Succeeded => Ok(()),
        }
    }
}

fn missing(field: &str) -> GenerateError {
    GenerateError::Protocol(format!("missing field `{field}`"))
}
