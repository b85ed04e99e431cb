//! Egui backend implementation for FormBackend trait.

use eframe::egui;
use registration_form::{
    Button, Choice, Dialog, Field, FormBackend, FormEvent, FormExit, FormSnapshot, Gender,
    Reaction, VariantArray,
};
use std::cell::Cell;
use thiserror::Error;
use tracing::debug;

/// Error type for the Egui backend.
#[derive(Debug, Error)]
pub enum EguiError {
    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    EguiError(String),
}

/// Builder/configuration for the Egui backend.
#[derive(Debug, Clone)]
pub struct EguiBackend {
    /// Window title.
    title: String,
    /// Window size [width, height].
    window_size: [f32; 2],
}

impl Default for EguiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiBackend {
    /// Create a new Egui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Registration Form".to_string(),
            window_size: [350.0, 400.0],
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }
}

/// What is on screen, independent of how it is drawn.
#[derive(Debug, Default)]
struct FormScreen {
    /// Current widget values.
    fields: FormSnapshot,
    /// The open dialog. Form input is disabled while this is set.
    dialog: Option<Dialog>,
    /// Set once the controller asks to close the form.
    exit: Option<FormExit>,
}

impl FormScreen {
    fn is_blocked(&self) -> bool {
        self.dialog.is_some()
    }

    /// Turn a button press into an event and apply the controller's reaction.
    fn press(&mut self, button: Button, handle: &mut dyn FnMut(FormEvent) -> Reaction) {
        if self.is_blocked() || self.exit.is_some() {
            return;
        }
        match handle(button.event(&self.fields)) {
            Reaction::ShowDialog(dialog) => {
                debug!(title = %dialog.title, "showing dialog");
                self.dialog = Some(dialog);
            }
            Reaction::Reset(values) => self.fields = values,
            Reaction::Exit => self.exit = Some(FormExit::Exit),
        }
    }

    fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}

/// The egui application that renders the registration form.
struct RegistrationApp<'h, 'e> {
    screen: FormScreen,
    handle: &'h mut dyn FnMut(FormEvent) -> Reaction,
    exit: &'e Cell<FormExit>,
}

impl RegistrationApp<'_, '_> {
    fn render_form(ui: &mut egui::Ui, fields: &mut FormSnapshot) -> Option<Button> {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Registration Form").strong().size(16.0));
        });
        ui.add_space(8.0);

        egui::Grid::new("registration_fields")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for field in Field::VARIANTS {
                    ui.label(field.label());
                    match field {
                        Field::Name => Self::render_text(ui, &mut fields.name),
                        Field::Course => Self::render_choice(ui, "course", &mut fields.course),
                        Field::YearLevel => {
                            Self::render_choice(ui, "year_level", &mut fields.year_level)
                        }
                        Field::Gender => Self::render_gender(ui, &mut fields.gender),
                        Field::Address => Self::render_text(ui, &mut fields.address),
                        Field::Email => Self::render_text(ui, &mut fields.email),
                        Field::Contact => Self::render_text(ui, &mut fields.contact),
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        Self::render_buttons(ui)
            .into_iter()
            .find(|(_, response)| response.clicked())
            .map(|(button, _)| button)
    }

    /// One equal-width column per button, each button centered in its column.
    fn render_buttons(ui: &mut egui::Ui) -> Vec<(Button, egui::Response)> {
        ui.columns(Button::VARIANTS.len(), |columns| {
            Button::VARIANTS
                .iter()
                .zip(columns.iter_mut())
                .map(|(button, column)| {
                    let response = column
                        .vertical_centered(|ui| ui.button(button.to_string()))
                        .inner;
                    (*button, response)
                })
                .collect()
        })
    }

    fn render_text(ui: &mut egui::Ui, value: &mut String) {
        ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    }

    fn render_choice<T: Choice>(ui: &mut egui::Ui, id: &str, selection: &mut Option<T>) {
        let current: Option<T> = *selection;
        let selected = T::selection_label(current.as_ref()).to_string();
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in T::options() {
                    // Keep the blank entry clickable.
                    let label = match T::selection_label(option.as_ref()) {
                        "" => " ".to_string(),
                        label => label.to_string(),
                    };
                    ui.selectable_value(selection, option, label);
                }
            });
    }

    fn render_gender(ui: &mut egui::Ui, gender: &mut Option<Gender>) {
        ui.horizontal(|ui| {
            for option in Gender::VARIANTS {
                ui.radio_value(gender, Some(*option), option.to_string());
            }
        });
    }

    /// Draw the dialog window. Returns `true` once the user dismissed it.
    fn render_dialog(ctx: &egui::Context, dialog: &Dialog) -> bool {
        let mut dismissed = false;

        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let (icon, color) = if dialog.is_error() {
                    ("⚠", ui.visuals().error_fg_color)
                } else {
                    ("ℹ", ui.visuals().text_color())
                };
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).color(color).strong());
                    ui.label(dialog.message.as_str());
                });
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
            || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape))
    }
}

impl eframe::App for RegistrationApp<'_, '_> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pressed = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let enabled = !self.screen.is_blocked();
            ui.add_enabled_ui(enabled, |ui| {
                pressed = Self::render_form(ui, &mut self.screen.fields);
            });
        });

        if let Some(dialog) = &self.screen.dialog
            && Self::render_dialog(ctx, dialog)
        {
            self.screen.dismiss_dialog();
        }

        if let Some(button) = pressed {
            self.screen.press(button, &mut *self.handle);
        }

        if let Some(exit) = self.screen.exit {
            self.exit.set(exit);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl FormBackend for EguiBackend {
    type Error = EguiError;

    fn run(
        &self,
        handle: &mut dyn FnMut(FormEvent) -> Reaction,
    ) -> Result<FormExit, Self::Error> {
        // Closing the window without pressing Exit still ends the session.
        let exit = Cell::new(FormExit::Closed);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            centered: true,
            ..Default::default()
        };

        // eframe::run_native blocks until the window is closed
        eframe::run_native(
            &self.title,
            options,
            Box::new(|_cc| {
                Ok(Box::new(RegistrationApp {
                    screen: FormScreen::default(),
                    handle,
                    exit: &exit,
                }) as Box<dyn eframe::App + '_>)
            }),
        )
        .map_err(|e| EguiError::EguiError(e.to_string()))?;

        Ok(exit.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration_form::{Course, YearLevel};

    /// Stand-in for the controller: always answers with the same reaction.
    fn answering(reaction: Reaction) -> impl FnMut(FormEvent) -> Reaction {
        move |_| reaction.clone()
    }

    #[test]
    fn backend_creation() {
        let _backend = EguiBackend::new();
        let _with_title = EguiBackend::new().with_title("Test");
        let _with_size = EguiBackend::new().with_window_size([800.0, 600.0]);
        let _default = EguiBackend::default();
    }

    #[test]
    fn error_types() {
        let err = EguiError::EguiError("test error".to_string());
        assert_eq!(err.to_string(), "Egui error: test error");
    }

    #[test]
    fn register_submits_current_fields() {
        let mut screen = FormScreen::default();
        screen.fields.name = "Rosa".to_string();
        screen.fields.course = Some(Course::Bsme);
        screen.fields.year_level = Some(YearLevel::Third);

        let mut seen = Vec::new();
        let mut handle = |event: FormEvent| {
            seen.push(event);
            Reaction::ShowDialog(Dialog::error("All fields are required!"))
        };
        screen.press(Button::Register, &mut handle);

        assert_eq!(seen, vec![FormEvent::Submit(screen.fields.clone())]);
        assert!(screen.is_blocked());
        // Fields survive the submit.
        assert_eq!(screen.fields.name, "Rosa");
    }

    #[test]
    fn buttons_are_ignored_while_dialog_is_open() {
        let mut screen = FormScreen::default();
        let mut handle = answering(Reaction::ShowDialog(Dialog::error("x")));
        screen.press(Button::Register, &mut handle);

        let calls = Cell::new(0);
        let mut counting = |_event: FormEvent| {
            calls.set(calls.get() + 1);
            Reaction::Exit
        };
        screen.press(Button::Exit, &mut counting);
        assert_eq!(calls.get(), 0);
        assert_eq!(screen.exit, None);

        screen.dismiss_dialog();
        screen.press(Button::Exit, &mut counting);
        assert_eq!(calls.get(), 1);
        assert_eq!(screen.exit, Some(FormExit::Exit));
    }

    #[test]
    fn button_row_is_centered() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(350.0, 400.0),
            )),
            ..Default::default()
        };

        let mut panel = egui::Rect::NOTHING;
        let mut row = Vec::new();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel = ui.max_rect();
                row = RegistrationApp::render_buttons(ui)
                    .into_iter()
                    .map(|(button, response)| (button, response.rect))
                    .collect();
            });
        });

        let buttons: Vec<Button> = row.iter().map(|(button, _)| *button).collect();
        assert_eq!(buttons, Button::VARIANTS);
        assert!(row[0].1.right() < row[1].1.left());
        assert!(row[1].1.right() < row[2].1.left());
        // The middle button sits on the panel's center line.
        assert!((row[1].1.center().x - panel.center().x).abs() < 1.0);
    }

    #[test]
    fn reset_overwrites_every_widget() {
        let mut screen = FormScreen::default();
        screen.fields.gender = Some(Gender::Male);
        screen.fields.contact = "09171234567".to_string();

        let mut handle = answering(Reaction::Reset(FormSnapshot::default()));
        screen.press(Button::Clear, &mut handle);

        assert!(screen.fields.is_cleared());
        assert!(!screen.is_blocked());
    }
}
