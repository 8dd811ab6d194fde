use eframe::egui;

/// Plain Enter submits; any modifier (Shift for a newline) leaves the key to the editor.
pub(super) fn is_plain_enter(event: &egui::Event) -> bool {
    matches!(
        event,
        egui::Event::Key {
            key: egui::Key::Enter,
            pressed: true,
            modifiers,
            ..
        } if modifiers.is_none()
    )
}

/// Remove plain Enter presses from this frame's input and report whether any occurred.
///
/// Must run before the text editor is shown so the key never inserts a newline.
pub(super) fn take_plain_enter(ctx: &egui::Context) -> bool {
    ctx.input_mut(|i| {
        let before = i.events.len();
        i.events.retain(|event| !is_plain_enter(event));
        i.events.len() != before
    })
}
