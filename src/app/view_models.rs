use super::*;

pub const QUIZ_TITLE: &str = "Итоговое тестирование";

impl LessonApp {
    pub fn header(&self) -> HeaderInfo {
        match self.mode {
            Mode::Learning => HeaderInfo {
                title: self.navigator.current().title.clone(),
                counter: Some(format!(
                    "Слайд {} из {}",
                    self.navigator.index() + 1,
                    self.navigator.len()
                )),
            },
            Mode::Quiz => HeaderInfo {
                title: QUIZ_TITLE.to_owned(),
                counter: None,
            },
        }
    }

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        self.lesson
            .sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| SidebarEntry {
                idx,
                number: idx + 1,
                title: section.title.clone(),
                active: self.mode == Mode::Learning && self.navigator.index() == idx,
            })
            .collect()
    }

    pub fn quiz_entry_active(&self) -> bool {
        self.mode == Mode::Quiz
    }

    pub fn lesson_next_label(&self) -> &'static str {
        if self.navigator.is_last() {
            "Перейти к тесту"
        } else {
            "Далее"
        }
    }

    pub fn option_views(&self) -> Vec<OptionView> {
        let question = self.quiz.current_question();
        let answered = self.quiz.is_answered();
        let selected = self.quiz.selected_option();

        question
            .options
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let state = if answered {
                    if question.is_correct(idx) {
                        OptionState::Correct
                    } else if selected == Some(idx) {
                        OptionState::Wrong
                    } else {
                        OptionState::Dimmed
                    }
                } else if selected == Some(idx) {
                    OptionState::Selected
                } else {
                    OptionState::Idle
                };
                OptionView {
                    idx,
                    text: text.clone(),
                    state,
                    enabled: !answered,
                }
            })
            .collect()
    }

    pub fn quiz_progress(&self) -> QuizProgressInfo {
        let number = self.quiz.index() + 1;
        let total = self.quiz.total();
        QuizProgressInfo {
            number,
            total,
            score: self.quiz.score(),
            fraction: number as f32 / total as f32,
        }
    }

    pub fn quiz_action(&self) -> QuizAction {
        if !self.quiz.is_answered() {
            QuizAction::Submit {
                enabled: self.quiz.selected_option().is_some(),
            }
        } else if self.quiz.is_last_question() {
            QuizAction::Next { label: "Завершить" }
        } else {
            QuizAction::Next { label: "Далее" }
        }
    }

    pub fn result_info(&self) -> Option<ResultInfo> {
        let grade = self.quiz.result()?;
        Some(ResultInfo {
            score: self.quiz.score(),
            total: self.quiz.total(),
            grade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_lesson;

    fn states(app: &LessonApp) -> Vec<OptionState> {
        app.option_views().iter().map(|o| o.state).collect()
    }

    #[test]
    fn header_follows_mode() {
        let mut app = LessonApp::new(sample_lesson(3, 1));
        app.go_to_slide(1).unwrap();
        let header = app.header();
        assert_eq!(header.title, "Slide 2");
        assert_eq!(header.counter.as_deref(), Some("Слайд 2 из 3"));

        app.go_to_quiz();
        assert_eq!(app.header().title, QUIZ_TITLE);
        assert_eq!(app.header().counter, None);
    }

    #[test]
    fn sidebar_marks_active_slide_only_while_learning() {
        let mut app = LessonApp::new(sample_lesson(3, 1));
        app.go_to_slide(2).unwrap();
        let active: Vec<bool> = app.sidebar_entries().iter().map(|e| e.active).collect();
        assert_eq!(active, vec![false, false, true]);
        assert_eq!(app.sidebar_entries()[2].label(), "3. Slide 3");
        assert!(!app.quiz_entry_active());

        app.go_to_quiz();
        assert!(app.sidebar_entries().iter().all(|e| !e.active));
        assert!(app.quiz_entry_active());
    }

    #[test]
    fn next_label_on_last_slide() {
        let mut app = LessonApp::new(sample_lesson(2, 1));
        assert_eq!(app.lesson_next_label(), "Далее");
        app.on_lesson_advance();
        assert_eq!(app.lesson_next_label(), "Перейти к тесту");
    }

    #[test]
    fn option_states_before_and_after_answer() {
        use OptionState::*;
        let mut app = LessonApp::new(sample_lesson(1, 2));
        app.go_to_quiz();
        assert_eq!(states(&app), vec![Idle, Idle, Idle, Idle]);
        assert_eq!(app.quiz_action(), QuizAction::Submit { enabled: false });

        app.select_option(2).unwrap();
        assert_eq!(states(&app), vec![Idle, Idle, Selected, Idle]);
        assert_eq!(app.quiz_action(), QuizAction::Submit { enabled: true });

        app.submit_answer();
        assert_eq!(states(&app), vec![Correct, Dimmed, Wrong, Dimmed]);
        assert!(app.option_views().iter().all(|o| !o.enabled));
        assert_eq!(app.quiz_action(), QuizAction::Next { label: "Далее" });
    }

    #[test]
    fn correct_answer_only_highlights_correct_option() {
        use OptionState::*;
        let mut app = LessonApp::new(sample_lesson(1, 1));
        app.go_to_quiz();
        app.select_option(0).unwrap();
        app.submit_answer();
        assert_eq!(states(&app), vec![Correct, Dimmed, Dimmed, Dimmed]);
        assert_eq!(app.quiz_action(), QuizAction::Next { label: "Завершить" });
    }

    #[test]
    fn progress_and_result() {
        let mut app = LessonApp::new(sample_lesson(1, 4));
        app.go_to_quiz();
        let progress = app.quiz_progress();
        assert_eq!(progress.counter_label(), "Вопрос 1 из 4");
        assert!((progress.fraction - 0.25).abs() < f32::EPSILON);
        assert!(app.result_info().is_none());

        for _ in 0..4 {
            app.select_option(0).unwrap();
            app.submit_answer();
            app.next_question().unwrap();
        }
        let result = app.result_info().unwrap();
        assert_eq!(result.score, 4);
        assert_eq!(result.mark_label(), "Ваша оценка: 5");
        assert_eq!(app.quiz_progress().score_label(), "Очки: 4");
    }
}
