use crate::error::{LessonError, Result};
use crate::model::{Lesson, LessonSection};
use std::sync::Arc;

/// Resultado de pulsar "Далее" en la teoría.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideStep {
    Moved(usize),
    /// Ya estábamos en la última diapositiva; el índice no cambia.
    LessonComplete,
}

/// Posición dentro de las diapositivas de la lección.
/// Invariante: `current < lesson.slide_count()`.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    lesson: Arc<Lesson>,
    current: usize,
}

impl SlideNavigator {
    pub fn new(lesson: Arc<Lesson>) -> Self {
        Self { lesson, current: 0 }
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.lesson.slide_count()
    }

    pub fn current(&self) -> &LessonSection {
        &self.lesson.sections()[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len()
    }

    pub fn advance(&mut self) -> SlideStep {
        if self.is_last() {
            return SlideStep::LessonComplete;
        }
        self.current += 1;
        SlideStep::Moved(self.current)
    }

    /// Devuelve `false` si ya estábamos en la primera diapositiva.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(LessonError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
