//! Form field value objects

/// Represents a single form field with its value and current error
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub error: Option<String>,
    /// Rendered masked (passwords)
    pub is_secret: bool,
    /// Shown while the field is empty
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            ..Default::default()
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new date field with a format hint
    pub fn date(name: &str, label: &str) -> Self {
        Self {
            placeholder: Some("dd/mm/aaaa".to_string()),
            ..Self::text(name, label)
        }
    }

    #[cfg(test)]
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("email", "Email");
        assert_eq!(field.name, "email");
        assert_eq!(field.label, "Email");
        assert_eq!(field.as_text(), "");
        assert!(field.error.is_none());
        assert!(!field.is_secret);
    }

    #[test]
    fn test_push_and_pop_chars() {
        let mut field = FormField::text("name", "Nome");
        field.push_char('A');
        field.push_char('n');
        field.push_char('a');
        assert_eq!(field.as_text(), "Ana");
        field.pop_char();
        assert_eq!(field.as_text(), "An");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text("name", "Nome");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_secret_display_is_masked() {
        let mut field = FormField::secret("password", "Senha");
        field.set_text("hunter2".to_string());
        assert_eq!(field.display_value(), "•••••••");
        assert_eq!(field.as_text(), "hunter2");
    }

    #[test]
    fn test_clear_drops_value_and_error() {
        let mut field = FormField::text("url", "URL");
        field.set_text("x".to_string());
        field.error = Some("bad".to_string());
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(field.error.is_none());
    }

    #[test]
    fn test_date_field_has_placeholder() {
        let field = FormField::date("birthdate", "Data de nascimento");
        assert_eq!(field.placeholder.as_deref(), Some("dd/mm/aaaa"));
    }
}
