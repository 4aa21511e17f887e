use crate::error::{LessonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Bloque que el alumno debe copiar en su cuaderno.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotebookBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LessonSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub notebook: Option<NotebookBlock>,
    #[serde(default)]
    pub image_placeholder: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize, // índice 0-based en `options`
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

/// Contenido completo de la lección: diapositivas y preguntas del test.
/// Sólo se construye a través de [`Lesson::new`], que valida los invariantes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub audience: String,
    sections: Vec<LessonSection>,
    questions: Vec<QuizQuestion>,
}

impl Lesson {
    pub fn new(
        title: impl Into<String>,
        audience: impl Into<String>,
        sections: Vec<LessonSection>,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self> {
        if sections.is_empty() {
            return Err(LessonError::InvalidContent(
                "a lesson needs at least one section".into(),
            ));
        }
        if questions.is_empty() {
            return Err(LessonError::InvalidContent(
                "a lesson needs at least one quiz question".into(),
            ));
        }

        let mut section_ids = HashSet::new();
        for section in &sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(LessonError::InvalidContent(format!(
                    "duplicate section id `{}`",
                    section.id
                )));
            }
        }

        let mut question_ids = HashSet::new();
        for q in &questions {
            if !question_ids.insert(q.id) {
                return Err(LessonError::InvalidContent(format!(
                    "duplicate question id {}",
                    q.id
                )));
            }
            if q.options.len() < 2 {
                return Err(LessonError::InvalidContent(format!(
                    "question {} has {} option(s), at least 2 are required",
                    q.id,
                    q.options.len()
                )));
            }
            if q.correct_answer >= q.options.len() {
                return Err(LessonError::InvalidContent(format!(
                    "question {}: correct answer {} is not one of its {} options",
                    q.id,
                    q.correct_answer,
                    q.options.len()
                )));
            }
        }

        Ok(Self {
            title: title.into(),
            audience: audience.into(),
            sections,
            questions,
        })
    }

    pub fn sections(&self) -> &[LessonSection] {
        &self.sections
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn section(&self, index: usize) -> Option<&LessonSection> {
        self.sections.get(index)
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn slide_count(&self) -> usize {
        self.sections.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Learning,
    Quiz,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Learning
    }
}

/// Lección mínima para los tests: `slides` diapositivas y `questions`
/// preguntas cuya respuesta correcta es siempre la opción 0.
#[cfg(test)]
pub(crate) fn sample_lesson(slides: usize, questions: usize) -> Lesson {
    let sections = (0..slides)
        .map(|i| LessonSection {
            id: format!("s{i}"),
            title: format!("Slide {}", i + 1),
            content: format!("Content {}", i + 1),
            notebook: None,
            image_placeholder: None,
        })
        .collect();
    let questions = (0..questions)
        .map(|i| QuizQuestion {
            id: i as u32 + 1,
            question: format!("Question {}", i + 1),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
        })
        .collect();
    Lesson::new("Test", "test", sections, questions).expect("sample lesson is valid")
}
