use super::*;
use crate::model::{LessonSection, QuizQuestion};

impl LessonApp {
    pub fn current_slide(&self) -> &LessonSection {
        self.navigator.current()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        self.quiz.current_question()
    }

    pub fn score(&self) -> usize {
        self.quiz.score()
    }

    pub fn is_answered(&self) -> bool {
        self.quiz.is_answered()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.quiz.selected_option()
    }

    pub fn show_result(&self) -> bool {
        self.quiz.show_result()
    }

    pub fn is_learning(&self) -> bool {
        self.mode == Mode::Learning
    }
}
