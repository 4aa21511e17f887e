use crate::error::{LessonError, Result};
use crate::grading::{Grade, grade};
use crate::model::{Lesson, QuizQuestion};
use std::sync::Arc;

/// Estado de la pregunta actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionPhase {
    Unanswered,
    Selected(usize),
    Answered { selected: usize, correct: bool },
}

impl QuestionPhase {
    fn name(self) -> &'static str {
        match self {
            QuestionPhase::Unanswered => "unanswered",
            QuestionPhase::Selected(_) => "selected",
            QuestionPhase::Answered { .. } => "answered",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionStep {
    Next(usize),
    Finished,
}

/// Un intento del test: pregunta actual, selección, puntuación y fin.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    lesson: Arc<Lesson>,
    current: usize,
    phase: QuestionPhase,
    score: usize,
    show_result: bool,
}

impl QuizEngine {
    pub fn new(lesson: Arc<Lesson>) -> Self {
        Self {
            lesson,
            current: 0,
            phase: QuestionPhase::Unanswered,
            score: 0,
            show_result: false,
        }
    }

    // --- Accesores ---

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.lesson.question_count()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.lesson.questions()[self.current]
    }

    pub fn phase(&self) -> QuestionPhase {
        self.phase
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.phase {
            QuestionPhase::Unanswered => None,
            QuestionPhase::Selected(i) | QuestionPhase::Answered { selected: i, .. } => Some(i),
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.phase, QuestionPhase::Answered { .. })
    }

    /// `Some(acierto)` una vez respondida la pregunta actual.
    pub fn answer_correct(&self) -> Option<bool> {
        match self.phase {
            QuestionPhase::Answered { correct, .. } => Some(correct),
            _ => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn show_result(&self) -> bool {
        self.show_result
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.total()
    }

    /// Nota final; sólo disponible cuando el test ha terminado.
    pub fn result(&self) -> Option<Grade> {
        if !self.show_result {
            return None;
        }
        grade(self.score, self.total()).ok()
    }

    // --- Transiciones ---

    /// Marca una opción. Devuelve `Ok(false)` sin tocar nada si la pregunta
    /// ya está respondida.
    pub fn select_option(&mut self, index: usize) -> Result<bool> {
        if self.is_answered() {
            return Ok(false);
        }
        let len = self.current_question().options.len();
        if index >= len {
            return Err(LessonError::OutOfRange { index, len });
        }
        self.phase = QuestionPhase::Selected(index);
        Ok(true)
    }

    /// Bloquea la selección actual. `None` si no hay nada seleccionado.
    /// El punto sólo se suma en el paso de `Selected` a `Answered`.
    pub fn submit_answer(&mut self) -> Option<bool> {
        match self.phase {
            QuestionPhase::Unanswered => None,
            QuestionPhase::Answered { correct, .. } => Some(correct),
            QuestionPhase::Selected(selected) => {
                let correct = self.current_question().is_correct(selected);
                if correct {
                    self.score += 1;
                }
                self.phase = QuestionPhase::Answered { selected, correct };
                Some(correct)
            }
        }
    }

    pub fn advance_question(&mut self) -> Result<QuestionStep> {
        if self.show_result {
            return Ok(QuestionStep::Finished);
        }
        if !self.is_answered() {
            return Err(LessonError::IllegalTransition {
                action: "advance to the next question",
                phase: self.phase.name(),
            });
        }
        if self.is_last_question() {
            self.show_result = true;
            return Ok(QuestionStep::Finished);
        }
        self.current += 1;
        self.phase = QuestionPhase::Unanswered;
        Ok(QuestionStep::Next(self.current))
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.phase = QuestionPhase::Unanswered;
        self.score = 0;
        self.show_result = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Mark;
    use crate::model::sample_lesson;

    // En `sample_lesson` la respuesta correcta es siempre la opción 0.
    fn engine(questions: usize) -> QuizEngine {
        QuizEngine::new(Arc::new(sample_lesson(1, questions)))
    }

    fn answer(quiz: &mut QuizEngine, option: usize) {
        quiz.select_option(option).unwrap();
        quiz.submit_answer();
        quiz.advance_question().unwrap();
    }

    #[test]
    fn starts_unanswered() {
        let quiz = engine(3);
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.is_answered());
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.show_result());
        assert!(quiz.result().is_none());
    }

    #[test]
    fn reselecting_before_submit_scores_last_choice() {
        let mut quiz = engine(2);
        quiz.select_option(2).unwrap();
        quiz.select_option(0).unwrap();
        assert_eq!(quiz.submit_answer(), Some(true));
        assert_eq!(quiz.score(), 1);
        assert_eq!(
            quiz.phase(),
            QuestionPhase::Answered {
                selected: 0,
                correct: true
            }
        );
    }

    #[test]
    fn select_after_answer_has_no_effect() {
        let mut quiz = engine(2);
        quiz.select_option(1).unwrap();
        quiz.submit_answer();
        assert_eq!(quiz.select_option(0).unwrap(), false);
        assert_eq!(quiz.selected_option(), Some(1));
        assert_eq!(quiz.answer_correct(), Some(false));
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut quiz = engine(1);
        let err = quiz.select_option(4).unwrap_err();
        assert!(matches!(err, LessonError::OutOfRange { index: 4, len: 4 }));
        assert_eq!(quiz.selected_option(), None);
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let mut quiz = engine(1);
        assert_eq!(quiz.submit_answer(), None);
        assert!(!quiz.is_answered());
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn repeated_submit_scores_at_most_once() {
        let mut quiz = engine(2);
        quiz.select_option(0).unwrap();
        for _ in 0..5 {
            assert_eq!(quiz.submit_answer(), Some(true));
        }
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn advance_before_answer_is_rejected() {
        let mut quiz = engine(2);
        assert!(matches!(
            quiz.advance_question(),
            Err(LessonError::IllegalTransition {
                phase: "unanswered",
                ..
            })
        ));
        quiz.select_option(1).unwrap();
        assert!(matches!(
            quiz.advance_question(),
            Err(LessonError::IllegalTransition {
                phase: "selected",
                ..
            })
        ));
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn advance_resets_phase_and_keeps_score() {
        let mut quiz = engine(3);
        quiz.select_option(0).unwrap();
        quiz.submit_answer();
        assert_eq!(quiz.advance_question().unwrap(), QuestionStep::Next(1));
        assert_eq!(quiz.phase(), QuestionPhase::Unanswered);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn last_question_shows_result() {
        let mut quiz = engine(2);
        answer(&mut quiz, 0);
        quiz.select_option(0).unwrap();
        quiz.submit_answer();
        assert!(quiz.is_last_question());
        assert_eq!(quiz.advance_question().unwrap(), QuestionStep::Finished);
        assert!(quiz.show_result());
        assert_eq!(quiz.index(), 1);

        // una vez terminado no pasa nada más
        assert_eq!(quiz.advance_question().unwrap(), QuestionStep::Finished);
        assert_eq!(quiz.score(), 2);
    }

    #[test]
    fn eight_of_ten_gives_mark_four() {
        let mut quiz = engine(10);
        for number in 1..=10 {
            let option = if number == 8 || number == 10 { 3 } else { 0 };
            answer(&mut quiz, option);
        }
        assert!(quiz.show_result());
        assert_eq!(quiz.score(), 8);
        assert_eq!(quiz.result().unwrap().mark, Mark::Good);
    }

    #[test]
    fn restart_resets_everything() {
        let mut quiz = engine(3);
        answer(&mut quiz, 0);
        answer(&mut quiz, 0);
        quiz.select_option(2).unwrap();
        quiz.restart();
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.show_result());

        for _ in 0..3 {
            answer(&mut quiz, 0);
        }
        quiz.restart();
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(!quiz.show_result());
    }
}
