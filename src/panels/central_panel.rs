use crate::DrawingBoardApp;

pub fn central_panel(app: &mut DrawingBoardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Fixed-size canvas; the window can grow but the drawing area does not
        let canvas_size = app.config().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, &response);

        // Render the canvas
        app.paint_canvas(&painter, canvas_rect);
    });
}
