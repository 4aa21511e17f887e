use crate::app::LessonApp;
use crate::model::NotebookBlock;
use crate::ui::layout::two_button_row;
use egui::{Color32, Frame, RichText, Stroke, Ui};

pub fn ui_theory(app: &mut LessonApp, ui: &mut Ui) {
    let slide = app.current_slide().clone();
    let is_first = app.navigator.is_first();
    let next_label = app.lesson_next_label();

    ui.label(RichText::new("📖 ТЕОРИЯ").small().strong().color(Color32::from_rgb(79, 70, 229)));
    ui.add_space(6.0);
    ui.label(RichText::new(&slide.title).size(30.0).strong());
    ui.add_space(12.0);
    ui.label(RichText::new(&slide.content).size(18.0));

    if let Some(caption) = &slide.image_placeholder {
        ui.add_space(12.0);
        Frame::default()
            .stroke(Stroke::new(1.0, Color32::GRAY))
            .inner_margin(egui::Margin::symmetric(16, 24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("🖼 {caption}")).italics().weak());
                });
            });
    }

    if let Some(notebook) = &slide.notebook {
        ui.add_space(16.0);
        notebook_card(ui, notebook);
    }

    ui.add_space(24.0);
    ui.separator();
    ui.add_space(8.0);

    let (back, next) = two_button_row(ui, "⬅ Назад", !is_first, &format!("{next_label} ➡"));
    if back {
        app.on_lesson_retreat();
    }
    if next {
        app.on_lesson_advance();
    }
}

/// Tarjeta "Запишите в тетрадь"
fn notebook_card(ui: &mut Ui, notebook: &NotebookBlock) {
    let yellow = Color32::from_rgb(250, 204, 21);
    Frame::default()
        .fill(Color32::from_rgb(254, 252, 232))
        .stroke(Stroke::new(2.0, yellow))
        .inner_margin(egui::Margin::symmetric(20, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let ink = Color32::from_rgb(51, 65, 85);
            ui.label(
                RichText::new("✏ ЗАПИШИТЕ В ТЕТРАДЬ")
                    .strong()
                    .color(Color32::from_rgb(133, 77, 14)),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&notebook.title).size(20.0).strong().color(ink));
            ui.add_space(4.0);
            for line in &notebook.lines {
                ui.label(RichText::new(format!("▏ {line}")).size(16.0).color(ink));
            }
        });
}
