// src/data.rs

use crate::error::Result;
use crate::model::{Lesson, LessonSection, QuizQuestion};
use serde::Deserialize;

/// Forma del fichero YAML de la lección, antes de validar.
#[derive(Deserialize)]
struct LessonFile {
    title: String,
    #[serde(default)]
    audience: String,
    sections: Vec<LessonSection>,
    questions: Vec<QuizQuestion>,
}

/// Parsea y valida una lección en YAML
pub fn parse_lesson(yaml: &str) -> Result<Lesson> {
    let file: LessonFile = serde_yaml::from_str(yaml)?;
    let lesson = Lesson::new(file.title, file.audience, file.sections, file.questions)?;
    log::debug!(
        "lección `{}` cargada: {} diapositivas, {} preguntas",
        lesson.title,
        lesson.slide_count(),
        lesson.question_count()
    );
    Ok(lesson)
}

/// Carga la lección embebida en el binario
pub fn read_lesson_embedded() -> Result<Lesson> {
    let file_content = include_str!("data/lesson.yaml");
    parse_lesson(file_content)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_lesson_file(path: impl AsRef<std::path::Path>) -> Result<Lesson> {
    let content = std::fs::read_to_string(path)?;
    parse_lesson(&content)
}
