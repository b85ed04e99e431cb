//! Student registration form.
//!
//! Runs on the egui desktop backend by default. Build with
//! `--no-default-features --features ratatui-backend` for the terminal form.
//! Set `RUST_LOG` to see what the form does.

use registration_form::{FormController, FormExit};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[cfg(not(any(feature = "egui-backend", feature = "ratatui-backend")))]
compile_error!("enable the `egui-backend` or `ratatui-backend` feature");

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut controller = FormController::new();
    let exit = run(&mut controller)?;

    tracing::info!(?exit, submissions = controller.submissions(), "registration form closed");
    Ok(())
}

#[cfg(feature = "egui-backend")]
fn run(controller: &mut FormController) -> anyhow::Result<FormExit> {
    let backend = registration_egui_form::EguiBackend::new();
    Ok(controller.run(backend)?)
}

#[cfg(all(feature = "ratatui-backend", not(feature = "egui-backend")))]
fn run(controller: &mut FormController) -> anyhow::Result<FormExit> {
    let backend = registration_ratatui_form::RatatuiFormBackend::new();
    Ok(controller.run(backend)?)
}
