use crate::{FormEvent, FormExit, Reaction};

/// Trait for backend implementations that present the registration form.
///
/// A backend owns the widgets. It turns user actions into [`FormEvent`]s,
/// passes each one to `handle`, and applies the returned [`Reaction`] before
/// processing the next action.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the form until the user exits or the UI is closed.
    ///
    /// # Arguments
    /// * `handle` - Maps each user action to the reaction the backend must apply.
    ///
    /// # Returns
    /// * `Ok(exit)` describing how the session ended
    /// * `Err` on backend failure
    fn run(&self, handle: &mut dyn FnMut(FormEvent) -> Reaction)
    -> Result<FormExit, Self::Error>;
}

impl<B: FormBackend + ?Sized> FormBackend for &B {
    type Error = B::Error;

    fn run(
        &self,
        handle: &mut dyn FnMut(FormEvent) -> Reaction,
    ) -> Result<FormExit, Self::Error> {
        (**self).run(handle)
    }
}
