use crate::ErrorSlot;

/// The rendered contact form.
///
/// Methods take `&self`: views wrap UI handles that are mutated in place.
pub trait FormView: Send + Sync {
    fn show_error(&self, slot: ErrorSlot, message: &str);

    /// Hides every inline error indicator.
    fn hide_errors(&self);

    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: &str);

    fn set_submit_enabled(&self, enabled: bool);

    /// Clears every input.
    fn reset(&self);
}
