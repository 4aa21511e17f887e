pub mod app;
pub mod data;
pub mod error;
pub mod grading;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::LessonApp;
pub use error::{LessonError, Result};
