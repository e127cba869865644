//! Confirmer Port
//!
//! Asks the user to confirm a destructive action. Implementations can prompt
//! (`InteractiveConfirmer`) or answer automatically (`--yes`, tests).

pub trait Confirmer {
    /// Returns true if the user agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Confirmer that always agrees.
///
/// Use this when `--yes` is passed.
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
