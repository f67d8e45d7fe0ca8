use super::AuditorApp;
use crate::models::route::Route;
use crate::services::calendar::MonthNavigation;
use crate::services::compliance::ComplianceViewMode;

/// Month step bound to a bare key on the compliance calendar
fn month_shortcut(key: egui::Key, modifiers: egui::Modifiers) -> Option<MonthNavigation> {
    if !modifiers.is_none() {
        return None;
    }
    match key {
        egui::Key::ArrowLeft => Some(MonthNavigation::Previous),
        egui::Key::ArrowRight => Some(MonthNavigation::Next),
        egui::Key::T => Some(MonthNavigation::Today),
        _ => None,
    }
}

impl AuditorApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing in a search box or form must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        let (toggle_sidebar, steps) = ctx.input(|i| {
            let toggle = i.modifiers.command && i.key_pressed(egui::Key::Backslash);
            let steps: Vec<MonthNavigation> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => month_shortcut(*key, *modifiers),
                    _ => None,
                })
                .collect();
            (toggle, steps)
        });

        if toggle_sidebar && self.state.route.uses_dashboard_shell() {
            self.toggle_sidebar();
        }

        let on_calendar = self.state.route == Route::ComplianceCenter
            && self.state.compliance.mode == ComplianceViewMode::Calendar;
        if on_calendar {
            for step in steps {
                self.navigate_month(step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Key, Modifiers};

    #[test]
    fn test_bare_keys_map_to_month_steps() {
        assert_eq!(
            month_shortcut(Key::ArrowLeft, Modifiers::NONE),
            Some(MonthNavigation::Previous)
        );
        assert_eq!(
            month_shortcut(Key::ArrowRight, Modifiers::NONE),
            Some(MonthNavigation::Next)
        );
        assert_eq!(month_shortcut(Key::T, Modifiers::NONE), Some(MonthNavigation::Today));
        assert_eq!(month_shortcut(Key::D, Modifiers::NONE), None);
    }

    #[test]
    fn test_modified_keys_are_ignored() {
        assert_eq!(month_shortcut(Key::T, Modifiers::CTRL), None);
        assert_eq!(month_shortcut(Key::ArrowLeft, Modifiers::SHIFT), None);
    }
}
