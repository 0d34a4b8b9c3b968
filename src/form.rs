//! Settings form state
//!
//! Holds the three editable fields shown on the dashboard and produces the
//! snapshot emitted on submit. The state lives exactly as long as the
//! dashboard window and is never persisted.

use serde::Serialize;
use tracing::{info, warn};

/// The three editable fields of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// arXiv channel to listen on (e.g. "cs.AI")
    Channel,
    /// Free-text area of interest used to filter papers
    Interest,
    /// Email address alerts should go to
    Email,
}

/// Editable state for the settings form.
///
/// The GUI binds its text inputs directly to these strings, so the rendered
/// value of each input is always the field itself.
#[derive(Debug, Default)]
pub struct SettingsForm {
    pub channel: String,
    pub interest: String,
    pub email: String,
}

/// Owned copy of the form fields, taken at submit time.
///
/// This is the payload a future backend POST would carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    pub channel: String,
    pub interest: String,
    pub email: String,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's value. No validation, no length limits.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Channel => self.channel = value,
            FormField::Interest => self.interest = value,
            FormField::Email => self.email = value,
        }
    }

    /// Copy the current field values.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            channel: self.channel.clone(),
            interest: self.interest.clone(),
            email: self.email.clone(),
        }
    }

    /// Capture the current values and emit them as a diagnostic log record
    /// (the JSON-encoded snapshot).
    ///
    /// Leaves the editing state untouched and returns the snapshot so the
    /// caller can surface it.
    pub fn submit(&self) -> SettingsSnapshot {
        let snapshot = self.snapshot();
        // TODO: POST the snapshot to the backend settings endpoint
        match serde_json::to_string(&snapshot) {
            Ok(record) => info!("[arxiv-listener] settings submitted: {}", record),
            Err(e) => warn!("[arxiv-listener] failed to encode settings record: {}", e),
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply a string one character at a time, the way the GUI mutates the
    /// field as the user types.
    fn type_into(form: &mut SettingsForm, field: FormField, text: &str) {
        let mut typed = String::new();
        for ch in text.chars() {
            typed.push(ch);
            form.update(field, typed.clone());
        }
    }

    #[test]
    fn test_keystrokes_concatenate_in_order() {
        let mut form = SettingsForm::new();
        type_into(&mut form, FormField::Channel, "cs.AI");
        assert_eq!(form.channel, "cs.AI");

        type_into(&mut form, FormField::Email, "a@b.com");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn test_editing_one_field_leaves_the_others_alone() {
        let mut form = SettingsForm::new();
        form.update(FormField::Channel, "cs.AI");
        form.update(FormField::Email, "a@b.com");

        type_into(&mut form, FormField::Interest, "transformers");

        assert_eq!(form.channel, "cs.AI");
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.interest, "transformers");
    }

    #[test]
    fn test_submit_captures_current_values() {
        let mut form = SettingsForm::new();
        type_into(&mut form, FormField::Channel, "cs.AI");
        type_into(&mut form, FormField::Interest, "transformers");
        type_into(&mut form, FormField::Email, "a@b.com");

        let snapshot = form.submit();
        assert_eq!(
            snapshot,
            SettingsSnapshot {
                channel: "cs.AI".to_string(),
                interest: "transformers".to_string(),
                email: "a@b.com".to_string(),
            }
        );
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"channel":"cs.AI","interest":"transformers","email":"a@b.com"}"#
        );
    }

    #[test]
    fn test_submit_with_empty_fields() {
        let form = SettingsForm::new();
        let snapshot = form.submit();
        assert_eq!(snapshot.channel, "");
        assert_eq!(snapshot.interest, "");
        assert_eq!(snapshot.email, "");
        assert_eq!(
            serde_json::to_string(&snapshot).unwrap(),
            r#"{"channel":"","interest":"","email":""}"#
        );
    }

    #[test]
    fn test_submit_does_not_disturb_editing_state() {
        let mut form = SettingsForm::new();
        form.update(FormField::Channel, "math.CO");
        form.update(FormField::Interest, "ramsey theory");
        form.update(FormField::Email, "x@y.org");

        let _ = form.submit();

        assert_eq!(form.channel, "math.CO");
        assert_eq!(form.interest, "ramsey theory");
        assert_eq!(form.email, "x@y.org");
    }

    #[test]
    fn test_update_replaces_rather_than_appends() {
        let mut form = SettingsForm::new();
        form.update(FormField::Channel, "cs.AI");
        form.update(FormField::Channel, "cs.LG");
        assert_eq!(form.channel, "cs.LG");
    }
}
