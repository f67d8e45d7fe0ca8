use egui::RichText;

use super::card_frame;
use crate::models::route::Route;
use crate::ui_egui::theme::AuditorTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Create your account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Start Free Trial",
        }
    }

    /// The other form, linked below the submit button
    fn alternate(self) -> (Route, &'static str) {
        match self {
            AuthMode::Login => (Route::Signup, "Don't have an account? Sign up"),
            AuthMode::Signup => (Route::Login, "Already have an account? Log in"),
        }
    }
}

/// Form fields shared by the login and signup placeholders.
///
/// Nothing is authenticated: a submit with both fields filled in goes
/// straight to the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFormState {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl AuthFormState {
    pub fn submit(&mut self, mode: AuthMode) -> Option<Route> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Please enter your email and password".to_string());
            return None;
        }

        log::info!("{:?} submitted for {}", mode, self.email.trim());
        self.password.clear();
        self.error = None;
        Some(Route::Dashboard)
    }
}

pub struct AuthView;

impl AuthView {
    pub fn show(
        ui: &mut egui::Ui,
        form: &mut AuthFormState,
        mode: AuthMode,
        theme: &AuditorTheme,
    ) -> Option<Route> {
        let mut target = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("AI-Auditor").size(28.0).strong());
            ui.add_space(16.0);

            card_frame(theme).show(ui, |ui| {
                ui.set_width(360.0);
                ui.label(RichText::new(mode.title()).size(18.0).strong());
                ui.add_space(8.0);

                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut form.email)
                        .hint_text("you@business.ca")
                        .desired_width(f32::INFINITY),
                );
                ui.label("Password");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut form.password)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                let enter_pressed =
                    password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if let Some(error) = &form.error {
                    ui.label(RichText::new(error).color(egui::Color32::from_rgb(220, 38, 38)));
                }

                ui.add_space(8.0);
                if ui.button(mode.submit_label()).clicked() || enter_pressed {
                    target = form.submit(mode);
                }

                let (route, text) = mode.alternate();
                if ui.link(text).clicked() {
                    target = Some(route);
                }
            });

            ui.add_space(12.0);
            if ui.link("Back to home").clicked() {
                target = Some(Route::Landing);
            }
        });

        target
    }
}
