use super::*;

impl LessonApp {
    /// Click en una opción del test actual.
    pub fn select_option(&mut self, index: usize) -> Result<()> {
        if self.quiz.select_option(index)? {
            log::debug!(
                "pregunta {}: opción {} seleccionada",
                self.quiz.index() + 1,
                index + 1
            );
        } else {
            log::debug!("pregunta {} ya respondida, se ignora la opción", self.quiz.index() + 1);
        }
        Ok(())
    }

    /// "Ответить". Devuelve si la respuesta es correcta, o `None` si no
    /// había opción seleccionada.
    pub fn submit_answer(&mut self) -> Option<bool> {
        let outcome = self.quiz.submit_answer();
        match outcome {
            Some(correct) => log::info!(
                "pregunta {}: {} (puntos {})",
                self.quiz.index() + 1,
                if correct { "correcta" } else { "incorrecta" },
                self.quiz.score()
            ),
            None => log::debug!("respuesta enviada sin opción seleccionada"),
        }
        outcome
    }

    /// "Далее" / "Завершить" tras responder.
    pub fn next_question(&mut self) -> Result<QuestionStep> {
        let step = self.quiz.advance_question()?;
        match step {
            QuestionStep::Next(index) => {
                log::debug!("pregunta {}/{}", index + 1, self.quiz.total());
                self.request_scroll_to_top();
            }
            QuestionStep::Finished => {
                if let Some(grade) = self.quiz.result() {
                    log::info!(
                        "test terminado: {}/{}, nota {}",
                        self.quiz.score(),
                        self.quiz.total(),
                        grade.mark.value()
                    );
                }
            }
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LessonError;
    use crate::grading::Mark;
    use crate::model::sample_lesson;

    #[test]
    fn full_lesson_walkthrough() {
        let mut app = LessonApp::new(sample_lesson(2, 10));
        while app.mode == Mode::Learning {
            app.on_lesson_advance();
        }

        // correctas todas menos la 8 y la 10
        for number in 1..=10 {
            let option = if number == 8 || number == 10 { 1 } else { 0 };
            app.select_option(option).unwrap();
            assert_eq!(app.submit_answer(), Some(option == 0));
            app.next_question().unwrap();
        }

        assert!(app.quiz.show_result());
        let result = app.result_info().unwrap();
        assert_eq!(result.score, 8);
        assert_eq!(result.total, 10);
        assert_eq!(result.grade.mark, Mark::Good);
    }

    #[test]
    fn next_question_before_answer_is_an_error() {
        let mut app = LessonApp::new(sample_lesson(1, 2));
        app.go_to_quiz();
        assert!(matches!(
            app.next_question(),
            Err(LessonError::IllegalTransition { .. })
        ));
        assert_eq!(app.quiz.index(), 0);
    }

    #[test]
    fn select_after_submit_keeps_answer() {
        let mut app = LessonApp::new(sample_lesson(1, 2));
        app.go_to_quiz();
        app.select_option(3).unwrap();
        app.submit_answer();
        app.select_option(0).unwrap();
        assert_eq!(app.quiz.selected_option(), Some(3));
        assert_eq!(app.quiz.score(), 0);
    }

    #[test]
    fn select_out_of_range_propagates() {
        let mut app = LessonApp::new(sample_lesson(1, 2));
        app.go_to_quiz();
        assert!(matches!(
            app.select_option(9),
            Err(LessonError::OutOfRange { .. })
        ));
    }
}
