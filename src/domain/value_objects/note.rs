//! Free-text note attached to an inspection

/// Maximum note length, in characters
pub const NOTE_MAX_LENGTH: usize = 300;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    text: String,
}

impl NoteInput {
    /// Replace the note with `candidate` unless it is longer than
    /// [`NOTE_MAX_LENGTH`]. Returns whether the edit was applied.
    pub fn input(&mut self, candidate: &str) -> bool {
        if candidate.chars().count() > NOTE_MAX_LENGTH {
            return false;
        }
        self.text.clear();
        self.text.push_str(candidate);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// `"{len}/300"`
    pub fn counter(&self) -> String {
        format!("{}/{}", self.len(), NOTE_MAX_LENGTH)
    }

    /// Trimmed note for the request body, or `None` when nothing is left.
    pub fn payload(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
