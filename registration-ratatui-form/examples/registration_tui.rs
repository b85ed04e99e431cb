//! Registration form in the terminal, with a custom theme.

use ratatui::style::Color;
use registration_form::FormController;
use registration_ratatui_form::{RatatuiFormBackend, Theme};

fn main() -> anyhow::Result<()> {
    let campus_theme = Theme {
        primary: Color::LightBlue,
        secondary: Color::Blue,
        highlight: Color::Yellow,
        ..Theme::default()
    };

    let backend = RatatuiFormBackend::new()
        .with_title("Student Registration")
        .with_theme(campus_theme);

    let exit = FormController::new().run(backend)?;
    println!("{exit:?}");
    Ok(())
}
