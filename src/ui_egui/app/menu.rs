use super::AuditorApp;
use crate::models::route::Route;
use egui::{Context, RichText};

impl AuditorApp {
    /// Top bar of the dashboard shell: sidebar toggle, product name, theme toggle
    pub(super) fn render_top_bar(&mut self, ctx: &Context) {
        let mut toggle_sidebar = false;
        let mut toggle_theme = false;
        let mut go_home = false;

        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(self.active_theme.panel_background)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button("☰")
                        .on_hover_text("Toggle sidebar (Ctrl+\\)")
                        .clicked()
                    {
                        toggle_sidebar = true;
                    }
                    if ui
                        .selectable_label(false, RichText::new("AI-Auditor").size(18.0).strong())
                        .on_hover_text("Back to home")
                        .clicked()
                    {
                        go_home = true;
                    }
                    ui.label(
                        RichText::new(self.state.route.title()).color(self.active_theme.text_secondary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (icon, hint) = if self.active_theme.is_dark {
                            ("☀", "Switch to light theme")
                        } else {
                            ("🌙", "Switch to dark theme")
                        };
                        if ui.button(icon).on_hover_text(hint).clicked() {
                            toggle_theme = true;
                        }
                    });
                });
            });

        if toggle_sidebar {
            self.toggle_sidebar();
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if go_home {
            self.navigate_to(Route::Landing);
        }
    }
}
