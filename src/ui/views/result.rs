use crate::app::LessonApp;
use crate::ui::helpers::mark_color;
use egui::{Button, RichText, Ui};

pub fn ui_result(app: &mut LessonApp, ui: &mut Ui) {
    let Some(result) = app.result_info() else {
        ui.label("Тест ещё не завершён.");
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("🏆").size(64.0));
        ui.add_space(8.0);
        ui.heading("Тест завершен!");
        ui.label(RichText::new("Вот ваши результаты").weak());
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            // centra "score / total" a mano: horizontal no hereda el centrado
            let approx_w = 160.0;
            ui.add_space(((ui.available_width() - approx_w) / 2.0).max(0.0));
            ui.label(RichText::new(result.score.to_string()).size(56.0).strong());
            ui.label(RichText::new(format!("/ {}", result.total)).size(24.0).weak());
        });
        ui.add_space(24.0);

        ui.label(
            RichText::new(result.mark_label())
                .size(22.0)
                .strong()
                .color(mark_color(result.grade.mark)),
        );
        ui.label(result.grade.message);
        ui.add_space(32.0);

        if ui
            .add_sized([220.0, 40.0], Button::new("🔄 Пройти заново"))
            .clicked()
        {
            app.on_quiz_restart();
        }
    });
}
