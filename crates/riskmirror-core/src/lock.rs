//! Submit button lock held for the duration of a request

/// The submit button of a domain form
pub trait SubmitControl {
    /// Current label markup
    fn label(&self) -> String;

    fn set_label(&self, label: &str);

    fn set_disabled(&self, disabled: bool);
}

/// Disables a submit control and shows a loading label until dropped.
///
/// Dropping the lock restores the original label and re-enables the control,
/// on every exit path.
pub struct SubmitLock<'a, C: SubmitControl + ?Sized> {
    control: &'a C,
    original_label: String,
}

impl<'a, C: SubmitControl + ?Sized> SubmitLock<'a, C> {
    pub fn acquire(control: &'a C, loading_label: &str) -> Self {
        let original_label = control.label();
        control.set_label(loading_label);
        control.set_disabled(true);
        Self {
            control,
            original_label,
        }
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

impl<C: SubmitControl + ?Sized> Drop for SubmitLock<'_, C> {
    fn drop(&mut self) {
        self.control.set_label(&self.original_label);
        self.control.set_disabled(false);
    }
}
