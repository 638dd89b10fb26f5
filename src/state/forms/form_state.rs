//! Form state management and form structs

use super::field::FormField;
use crate::submission::FormController;
use crate::validation::{FieldErrors, FieldValues};

/// Trait for common form operations
pub trait Form {
    fn fields(&self) -> &[FormField];
    fn fields_mut(&mut self) -> &mut [FormField];
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn is_last_field_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.fields_mut().get_mut(index)
    }

    #[cfg(test)]
    fn get_field(&self, name: &str) -> Option<&FormField> {
        self.fields().iter().find(|f| f.name == name)
    }

    #[cfg(test)]
    fn get_field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields_mut().iter_mut().find(|f| f.name == name)
    }

    /// Set a field's value by name; unknown names are ignored
    #[cfg(test)]
    fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.get_field_mut(name) {
            field.set_text(value.to_string());
        }
    }

    #[cfg(test)]
    fn error_for(&self, name: &str) -> Option<&str> {
        self.get_field(name).and_then(|f| f.error.as_deref())
    }

    #[cfg(test)]
    fn has_errors(&self) -> bool {
        self.fields().iter().any(|f| f.error.is_some())
    }

    /// Clear every value and error and focus the first field
    fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.set_active_field(0);
    }
}

impl<T: Form> FormController for T {
    fn values(&self) -> FieldValues {
        self.fields()
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
            .collect()
    }

    fn set_errors(&mut self, errors: &FieldErrors) {
        for field in self.fields_mut() {
            field.error = errors.get(&field.name).map(str::to_string);
        }
    }
}

/// Email and password
#[derive(Debug, Clone)]
pub struct LoginForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl LoginForm {
    const EMAIL: usize = 0;
    const PASSWORD: usize = 1;

    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("email", "Email"),
                FormField::secret("password", "Senha"),
            ],
            active_field_index: 0,
        }
    }

    /// Form prefilled with a remembered email, focused on the password
    pub fn with_email(email: &str) -> Self {
        let mut form = Self::new();
        form.email_mut().set_text(email.to_string());
        form.active_field_index = Self::PASSWORD;
        form
    }

    #[cfg(test)]
    pub fn email(&self) -> &FormField {
        &self.fields[Self::EMAIL]
    }

    pub fn email_mut(&mut self) -> &mut FormField {
        &mut self.fields[Self::EMAIL]
    }

    pub fn password_mut(&mut self) -> &mut FormField {
        &mut self.fields[Self::PASSWORD]
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn fields(&self) -> &[FormField] {
        &self.fields
    }
    fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len() - 1);
    }
}

/// Profile fields for registering a naver
#[derive(Debug, Clone)]
pub struct NaverForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl NaverForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text("name", "Nome"),
                FormField::text("job_role", "Cargo"),
                FormField::date("birthdate", "Data de nascimento"),
                FormField::date("admission_date", "Data que iniciou na empresa"),
                FormField::text("project", "Projetos que participou"),
                FormField::text("url", "URL da foto do Naver"),
            ],
            active_field_index: 0,
        }
    }
}

impl Default for NaverForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NaverForm {
    fn fields(&self) -> &[FormField] {
        &self.fields
    }
    fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod login_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.field_count(), 2);
            assert_eq!(form.fields()[0].name, "email");
            assert_eq!(form.fields()[1].name, "password");
            assert!(form.fields()[1].is_secret);
        }

        #[test]
        fn test_with_email_focuses_password() {
            let form = LoginForm::with_email("a@b.com");
            assert_eq!(form.email().as_text(), "a@b.com");
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = LoginForm::new();
            form.next_field();
            assert_eq!(form.active_field_index, 1);
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = LoginForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_values_snapshot() {
            let mut form = LoginForm::new();
            form.set_value("email", "a@b.com");
            form.set_value("password", "x");
            let values = form.values();
            assert_eq!(values.get("email"), Some("a@b.com"));
            assert_eq!(values.get("password"), Some("x"));
        }
    }

    mod naver_form {
        use super::*;

        #[test]
        fn test_field_order() {
            let form = NaverForm::new();
            let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
            assert_eq!(
                names,
                vec!["name", "job_role", "birthdate", "admission_date", "project", "url"]
            );
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = NaverForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
            assert!(form.is_last_field_active());
        }

        #[test]
        fn test_set_errors_replaces_previous() {
            let mut form = NaverForm::new();
            let mut errors = FieldErrors::new();
            errors.push("name", "Nome obrigatório");
            errors.push("url", "Coloque um link válido");
            form.set_errors(&errors);
            assert_eq!(form.error_for("name"), Some("Nome obrigatório"));
            assert_eq!(form.error_for("url"), Some("Coloque um link válido"));
            assert!(form.error_for("project").is_none());

            let mut errors = FieldErrors::new();
            errors.push("project", "Campo obrigatório");
            form.set_errors(&errors);
            assert!(form.error_for("name").is_none());
            assert_eq!(form.error_for("project"), Some("Campo obrigatório"));
        }

        #[test]
        fn test_clear_errors_keeps_values() {
            let mut form = NaverForm::new();
            form.set_value("name", "Ana");
            let mut errors = FieldErrors::new();
            errors.push("name", "x");
            form.set_errors(&errors);
            form.clear_errors();
            assert!(!form.has_errors());
            assert_eq!(form.get_field("name").unwrap().as_text(), "Ana");
        }

        #[test]
        fn test_set_value_ignores_unknown() {
            let mut form = NaverForm::new();
            form.set_value("nope", "x");
            assert!(form.values().get("nope").is_none());
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = NaverForm::new();
            form.set_value("project", "Navedex");
            form.active_field_index = 4;
            form.reset();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.values().get("project"), Some(""));
        }

        #[test]
        fn test_active_field_mut_edits_value() {
            let mut form = NaverForm::new();
            form.active_field_index = 1;
            form.get_active_field_mut().unwrap().push_char('D');
            assert_eq!(form.get_field("job_role").unwrap().as_text(), "D");
        }
    }
}
