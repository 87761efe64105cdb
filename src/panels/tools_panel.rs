use egui::color_picker::{self, Alpha};

use crate::brush::{MAX_DIAMETER, MIN_DIAMETER};
use crate::command::Command;
use crate::DrawingBoardApp;

pub fn tools_panel(app: &mut DrawingBoardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("festive_tools")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let mut color = app.state().brush().color();
                if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.execute(Command::SetColor(color));
                }

                let mut diameter = app.state().brush().diameter();
                let slider = egui::Slider::new(&mut diameter, MIN_DIAMETER..=MAX_DIAMETER)
                    .step_by(1.0)
                    .text("Brush size");
                if ui.add(slider).changed() {
                    app.execute(Command::SetBrushDiameter(diameter));
                }

                ui.separator();

                // Undo/Redo section
                let can_undo = app.state().can_undo();
                let can_redo = app.state().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.execute(Command::Redo);
                }

                if ui.button("Change Background").clicked() {
                    app.execute(Command::CycleBackground);
                }
                if ui.button("Clear").clicked() {
                    app.execute(Command::Clear);
                }
            });

            let state = app.state();
            ui.horizontal(|ui| {
                ui.label(format!("Points: {}", state.points().len()));
                ui.label(format!("Redo: {}", state.redo_points().len()));
                ui.label(format!("Background: {}", state.background().current()));
            });
            ui.add_space(4.0);
        });
}
