//! Registration form in a desktop window.
//!
//! Run with: cargo run -p registration-egui-form --example registration

use registration_egui_form::EguiBackend;
use registration_form::FormController;

fn main() -> anyhow::Result<()> {
    let exit = FormController::new().run(EguiBackend::new())?;
    println!("{exit:?}");
    Ok(())
}
