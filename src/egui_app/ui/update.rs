use super::{EguiApp, LOADING_REPAINT_INTERVAL};
use eframe::egui;

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_ui(ctx);
        if self.controller.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
