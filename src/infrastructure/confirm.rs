//! Interactive Confirmer
//!
//! Asks a yes/no question on the terminal via `dialoguer`.

use dialoguer::Confirm;
use tracing::warn;

use crate::domain::ports::Confirmer;

/// Terminal yes/no prompt. Defaults to "no".
#[derive(Debug, Default)]
pub struct InteractiveConfirmer;

impl InteractiveConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for InteractiveConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed; treating as declined");
                false
            }
        }
    }
}
