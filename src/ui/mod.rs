mod helpers;
pub mod layout;
pub mod views;

use crate::app::LessonApp;
use crate::model::Mode;
use eframe::{App, Frame};
use egui::Context;
use layout::{content_panel, sidebar_panel, top_panel};

impl App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cabecera con el botón del menú y el título actual
        top_panel(self, ctx);

        // Índice de la lección (se abre/cierra desde la cabecera)
        sidebar_panel(self, ctx);

        let scroll_to_top = self.take_scroll_to_top();

        // Dispatch por modo a las funciones en views
        content_panel(ctx, scroll_to_top, |ui| match self.mode {
            Mode::Learning => views::theory::ui_theory(self, ui),
            Mode::Quiz if self.show_result() => views::result::ui_result(self, ui),
            Mode::Quiz => views::quiz::ui_quiz(self, ui),
        });
    }
}
