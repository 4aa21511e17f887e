// src/ui/helpers.rs
use crate::grading::Mark;
use crate::view_models::{OptionState, OptionView};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn sidebar_button(ui: &mut Ui, label: &str, width: f32, active: bool) -> bool {
    let text = if active {
        RichText::new(label).strong()
    } else {
        RichText::new(label)
    };
    ui.add(
        Button::new(text)
            .selected(active)
            .min_size(Vec2::new(width, 32.0)),
    )
    .clicked()
}

/// Botón de una opción del test, coloreado según su estado.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32) -> bool {
    let (fill, stroke, suffix) = match option.state {
        OptionState::Idle => (Color32::TRANSPARENT, Color32::GRAY, ""),
        OptionState::Selected => (
            Color32::from_rgb(224, 231, 255),
            Color32::from_rgb(99, 102, 241),
            "",
        ),
        OptionState::Correct => (
            Color32::from_rgb(220, 252, 231),
            Color32::from_rgb(34, 197, 94),
            "  ✅",
        ),
        OptionState::Wrong => (
            Color32::from_rgb(254, 226, 226),
            Color32::from_rgb(239, 68, 68),
            "  ❌",
        ),
        OptionState::Dimmed => (Color32::TRANSPARENT, Color32::DARK_GRAY, ""),
    };

    let mut text = RichText::new(format!("{}{suffix}", option.text));
    if option.state == OptionState::Dimmed {
        text = text.weak();
    } else if fill != Color32::TRANSPARENT {
        text = text.color(Color32::BLACK);
    }

    // Las respondidas no se pueden pulsar pero conservan el color
    let button = Button::new(text)
        .fill(fill)
        .stroke(Stroke::new(2.0, stroke))
        .min_size(Vec2::new(width, 44.0));
    if option.enabled {
        ui.add(button).clicked()
    } else {
        ui.add(button.sense(egui::Sense::hover()));
        false
    }
}

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::Excellent => Color32::from_rgb(22, 163, 74),
        Mark::Good => Color32::from_rgb(37, 99, 235),
        Mark::Satisfactory => Color32::from_rgb(202, 138, 4),
        Mark::Poor => Color32::from_rgb(220, 38, 38),
    }
}
