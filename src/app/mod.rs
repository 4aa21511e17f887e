use crate::data::read_lesson_embedded;
use crate::error::Result;
use crate::model::{Lesson, Mode};
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod navigator;
pub mod queries;
pub mod quiz;
pub mod view_models;

pub use navigator::{SlideNavigator, SlideStep};
pub use quiz::{QuestionPhase, QuestionStep, QuizEngine};

// Re-export de view models
pub use crate::view_models::{
    HeaderInfo, OptionState, OptionView, QuizAction, QuizProgressInfo, ResultInfo, SidebarEntry,
};

/// Estado completo de la presentación: modo activo, teoría y test.
pub struct LessonApp {
    pub lesson: Arc<Lesson>,
    pub mode: Mode,
    pub navigator: SlideNavigator,
    pub quiz: QuizEngine,
    /// Panel lateral abierto (sólo presentación)
    pub sidebar_open: bool,
    scroll_to_top: bool,
}

impl LessonApp {
    pub fn new(lesson: Lesson) -> Self {
        let lesson = Arc::new(lesson);
        log::info!(
            "lección `{}`: {} diapositivas, {} preguntas",
            lesson.title,
            lesson.slide_count(),
            lesson.question_count()
        );
        Self {
            navigator: SlideNavigator::new(Arc::clone(&lesson)),
            quiz: QuizEngine::new(Arc::clone(&lesson)),
            lesson,
            mode: Mode::Learning,
            sidebar_open: false,
            scroll_to_top: false,
        }
    }

    /// App con la lección embebida en el binario
    pub fn from_embedded() -> Result<Self> {
        Ok(Self::new(read_lesson_embedded()?))
    }

    /// Pide a la UI que vuelva arriba del todo; se consume una sola vez.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    pub(crate) fn request_scroll_to_top(&mut self) {
        self.scroll_to_top = true;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
