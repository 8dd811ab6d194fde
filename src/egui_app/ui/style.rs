use crate::egui_app::state::PanelTheme;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_page: Color32,
    pub bg_card: Color32,
    pub bg_track: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_blue: Color32,
    pub navbar_fill: Color32,
    pub navbar_subtitle: Color32,
    pub button_fill: Color32,
    pub button_disabled: Color32,
    pub accent_emerald: Color32,
    pub bar_idle: Color32,
    pub warning: Color32,
    pub backdrop: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_page: Color32::from_rgb(248, 250, 252),
        bg_card: Color32::WHITE,
        bg_track: Color32::from_rgb(241, 245, 249),
        panel_outline: Color32::from_rgb(226, 232, 240),
        text_primary: Color32::from_rgb(30, 41, 59),
        text_muted: Color32::from_rgb(100, 116, 139),
        accent_blue: Color32::from_rgb(59, 130, 246),
        navbar_fill: Color32::from_rgb(39, 39, 42),
        navbar_subtitle: Color32::from_rgb(209, 213, 219),
        button_fill: Color32::from_rgb(24, 24, 27),
        button_disabled: Color32::from_rgb(156, 163, 175),
        accent_emerald: Color32::from_rgb(5, 150, 105),
        bar_idle: Color32::from_rgb(203, 213, 225),
        warning: Color32::from_rgb(220, 38, 38),
        backdrop: Color32::from_black_alpha(110),
    }
}

/// Accent colors for one result panel.
#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub header_fill: Color32,
    pub header_text: Color32,
    pub border: Color32,
    pub badge_fill: Color32,
    pub badge_text: Color32,
    pub bar: Color32,
}

pub fn theme_colors(theme: PanelTheme) -> ThemeColors {
    match theme {
        PanelTheme::Blue => ThemeColors {
            header_fill: Color32::from_rgb(239, 246, 255),
            header_text: Color32::from_rgb(30, 64, 175),
            border: Color32::from_rgb(191, 219, 254),
            badge_fill: Color32::from_rgb(219, 234, 254),
            badge_text: Color32::from_rgb(30, 64, 175),
            bar: Color32::from_rgb(59, 130, 246),
        },
        PanelTheme::Green => ThemeColors {
            header_fill: Color32::from_rgb(236, 253, 245),
            header_text: Color32::from_rgb(6, 95, 70),
            border: Color32::from_rgb(167, 243, 208),
            badge_fill: Color32::from_rgb(209, 250, 229),
            badge_text: Color32::from_rgb(6, 95, 70),
            bar: Color32::from_rgb(16, 185, 129),
        },
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_page;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_blue;
    visuals.extreme_bg_color = palette.bg_card;
    visuals.faint_bg_color = palette.bg_track;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = Color32::from_rgb(224, 231, 255);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_blue);
    visuals.widgets.noninteractive.bg_fill = palette.bg_card;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_card;
    vis.weak_bg_fill = palette.bg_track;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Primary button fill; dimmed while the button is disabled.
pub fn primary_button_fill(enabled: bool) -> Color32 {
    let palette = palette();
    if enabled {
        palette.button_fill
    } else {
        palette.button_disabled
    }
}

/// Bar color for a score row.
pub fn score_bar_color(theme: PanelTheme, predicted: bool) -> Color32 {
    if predicted {
        theme_colors(theme).bar
    } else {
        palette().bar_idle
    }
}

pub fn metric_value_color(highlight: bool) -> Color32 {
    let palette = palette();
    if highlight {
        palette.accent_emerald
    } else {
        palette.text_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicted_rows_use_theme_bar() {
        assert_eq!(
            score_bar_color(PanelTheme::Blue, true),
            theme_colors(PanelTheme::Blue).bar
        );
        assert_eq!(score_bar_color(PanelTheme::Green, false), palette().bar_idle);
    }

    #[test]
    fn highlight_only_changes_color() {
        assert_ne!(metric_value_color(true), metric_value_color(false));
    }
}
