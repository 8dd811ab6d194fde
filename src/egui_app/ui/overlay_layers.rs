use eframe::egui::{self, Color32, Id, LayerId, Order};

/// Modal layers stay on top and block input to the page.
const MODAL_ORDER: Order = Order::Foreground;

/// Create a layer id in the modal tier for custom painters.
fn modal_layer_id(id: impl Into<Id>) -> LayerId {
    LayerId::new(MODAL_ORDER, id.into())
}

/// Paint a modal backdrop and capture pointer input behind the modal.
pub(super) fn modal_backdrop(ctx: &egui::Context, id: impl Into<Id>, color: Color32) {
    let id = id.into();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(modal_layer_id(id.with("backdrop_paint")));
    painter.rect_filled(rect, 0.0, color);
    egui::Area::new(id.with("backdrop_blocker"))
        .order(MODAL_ORDER)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(rect, egui::Sense::click_and_drag());
        });
}
