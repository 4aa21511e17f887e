use crate::app::LessonApp;
use crate::ui::helpers::sidebar_button;
use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, SidePanel, Ui};

const SIDEBAR_WIDTH: f32 = 260.0;
const CONTENT_MAX_WIDTH: f32 = 760.0;

pub fn top_panel(app: &mut LessonApp, ctx: &Context) {
    let header = app.header();
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let icon = if app.sidebar_open { "✖" } else { "☰" };
            if ui
                .button(icon)
                .on_hover_text("Содержание")
                .clicked()
            {
                app.toggle_sidebar();
            }
            ui.add_space(8.0);
            ui.heading(header.title.as_str());

            if let Some(counter) = &header.counter {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(counter).weak());
                });
            }
        });
    });
}

/// Índice de la lección: una entrada por diapositiva más el test.
pub fn sidebar_panel(app: &mut LessonApp, ctx: &Context) {
    let entries = app.sidebar_entries();
    let quiz_active = app.quiz_entry_active();
    let title = app.lesson.title.clone();
    let audience = app.lesson.audience.clone();

    SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH)
        .show_animated(ctx, app.sidebar_open, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new(format!("🎓 {title}")).size(20.0).strong());
            if !audience.is_empty() {
                ui.label(RichText::new(audience).weak());
            }
            ui.add_space(16.0);
            ui.label(RichText::new("СОДЕРЖАНИЕ").small().strong());
            ui.add_space(4.0);

            let width = ui.available_width();
            for entry in &entries {
                if sidebar_button(ui, &entry.label(), width, entry.active) {
                    if let Err(e) = app.go_to_slide(entry.idx) {
                        log::warn!("no se pudo abrir la diapositiva: {e}");
                    }
                    app.close_sidebar();
                }
            }

            ui.separator();

            if sidebar_button(ui, "? Проверка знаний", width, quiz_active) {
                app.go_to_quiz();
                app.close_sidebar();
            }
        });
}

/// Panel central con scroll y ancho máximo. Con `scroll_to_top` el
/// contenido vuelve al principio en este frame.
pub fn content_panel(ctx: &Context, scroll_to_top: bool, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let mut area = ScrollArea::vertical().auto_shrink([false; 2]);
        if scroll_to_top {
            area = area.vertical_scroll_offset(0.0);
        }
        area.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(CONTENT_MAX_WIDTH);
                ui.set_max_width(w);
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                    });
            });
        });
    });
}

/// Dibuja dos botones en una fila, uno a cada extremo.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    left_label: &str,
    left_enabled: bool,
    right_label: &str,
) -> (bool, bool) {
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left_enabled, Button::new(left_label).min_size([140.0, 36.0].into()))
            .clicked();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked_right = ui
                .add_sized([180.0, 36.0], Button::new(RichText::new(right_label).strong()))
                .clicked();
        });
    });
    (clicked_left, clicked_right)
}
