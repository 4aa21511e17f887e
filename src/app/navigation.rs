use super::*;

impl LessonApp {
    /// Salta a una diapositiva (índice del menú lateral). Si el índice no
    /// existe no cambia ni el modo ni la posición.
    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        self.navigator.jump_to(index)?;
        if self.mode != Mode::Learning {
            log::info!("modo teoría (diapositiva {})", index + 1);
        }
        self.mode = Mode::Learning;
        self.request_scroll_to_top();
        Ok(())
    }

    /// Entrar al test. Desde la teoría empieza un intento nuevo; si ya
    /// estamos en el test no se toca nada.
    pub fn go_to_quiz(&mut self) {
        if self.mode == Mode::Quiz {
            return;
        }
        self.quiz.restart();
        self.mode = Mode::Quiz;
        self.request_scroll_to_top();
        log::info!("modo test ({} preguntas)", self.quiz.total());
    }

    /// Botón "Далее" de la teoría: siguiente diapositiva o, en la última,
    /// paso al test.
    pub fn on_lesson_advance(&mut self) -> SlideStep {
        let step = self.navigator.advance();
        match step {
            SlideStep::Moved(index) => {
                log::debug!("diapositiva {}/{}", index + 1, self.navigator.len());
                self.request_scroll_to_top();
            }
            SlideStep::LessonComplete => self.go_to_quiz(),
        }
        step
    }

    /// Botón "Назад" de la teoría
    pub fn on_lesson_retreat(&mut self) -> bool {
        let moved = self.navigator.retreat();
        if moved {
            log::debug!(
                "diapositiva {}/{}",
                self.navigator.index() + 1,
                self.navigator.len()
            );
            self.request_scroll_to_top();
        }
        moved
    }

    /// "Пройти заново": reinicia el test y vuelve a la primera diapositiva.
    pub fn on_quiz_restart(&mut self) {
        self.quiz.restart();
        self.mode = Mode::Learning;
        self.navigator.reset();
        self.request_scroll_to_top();
        log::info!("lección reiniciada");
    }
}
