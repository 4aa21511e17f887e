// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot {action} while the question is {phase}")]
    IllegalTransition {
        action: &'static str,
        phase: &'static str,
    },

    #[error("invalid lesson content: {0}")]
    InvalidContent(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LessonError>;
