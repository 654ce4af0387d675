//! Summarizer form state.

use crate::files::FileRegistry;

/// Input, file selection and output of the summarizer page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummarizeForm {
    pub input: String,
    pub selected_file: String,
    /// Markdown produced by the last successful request.
    pub output: String,
    pub pending: bool,
}

impl SummarizeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an uploaded file and load its extracted text into the input.
    ///
    /// Unknown names clear the input (soft miss).
    pub fn select_file(&mut self, registry: &FileRegistry, name: &str) {
        self.selected_file = name.to_string();
        self.input = registry.get_content(name);
    }

    pub fn can_submit(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::UploadedFile;

    #[test]
    fn test_select_file_loads_content() {
        let mut registry = FileRegistry::new();
        registry.add(UploadedFile::new("notes.txt", 100));

        let mut form = SummarizeForm::new();
        assert!(!form.can_submit());
        form.select_file(&registry, "notes.txt");
        assert_eq!(form.selected_file, "notes.txt");
        assert_eq!(form.input, registry.get_content("notes.txt"));
        assert!(form.can_submit());
    }

    #[test]
    fn test_select_unknown_file_is_soft_miss() {
        let mut form = SummarizeForm {
            input: "old".into(),
            ..SummarizeForm::default()
        };
        form.select_file(&FileRegistry::new(), "missing.pdf");
        assert!(form.input.is_empty());
    }

    #[test]
    fn test_cannot_submit_while_pending_or_blank() {
        let mut form = SummarizeForm {
            input: "   ".into(),
            ..SummarizeForm::default()
        };
        assert!(!form.can_submit());
        form.input = "text".into();
        form.pending = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_char_count_counts_chars() {
        let form = SummarizeForm {
            input: "héllo".into(),
            ..SummarizeForm::default()
        };
        assert_eq!(form.char_count(), 5);
    }
}
