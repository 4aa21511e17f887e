use crate::app::{LessonApp, QuizAction};
use crate::ui::helpers::option_button;
use egui::{Button, ProgressBar, RichText, Ui};

pub fn ui_quiz(app: &mut LessonApp, ui: &mut Ui) {
    let progress = app.quiz_progress();
    let prompt = app.current_question().question.clone();
    let options = app.option_views();
    let action = app.quiz_action();

    ui.horizontal(|ui| {
        ui.label(RichText::new(progress.counter_label()).strong().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(progress.score_label()).strong().weak());
        });
    });
    ui.add_space(6.0);
    ui.add(ProgressBar::new(progress.fraction).desired_height(8.0));
    ui.add_space(20.0);

    ui.label(RichText::new(prompt).size(22.0).strong());
    ui.add_space(16.0);

    let width = ui.available_width();
    for option in &options {
        if option_button(ui, option, width) {
            if let Err(e) = app.select_option(option.idx) {
                log::warn!("opción rechazada: {e}");
            }
        }
        ui.add_space(6.0);
    }

    ui.add_space(16.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match action {
        QuizAction::Submit { enabled } => {
            let submit = Button::new(RichText::new("Ответить").strong()).min_size([160.0, 40.0].into());
            if ui.add_enabled(enabled, submit).clicked() {
                app.submit_answer();
            }
        }
        QuizAction::Next { label } => {
            let next = Button::new(RichText::new(format!("{label} ➡")).strong())
                .min_size([160.0, 40.0].into());
            if ui.add(next).clicked() {
                if let Err(e) = app.next_question() {
                    log::warn!("no se pudo avanzar: {e}");
                }
            }
        }
    });
}
