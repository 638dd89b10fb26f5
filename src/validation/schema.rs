//! Schemas and the validation pass

use super::rules::{is_absolute_url, is_email, parse_date, RuleKind};
use super::values::{FieldErrors, FieldValues};
use chrono::NaiveDate;
use std::collections::HashMap;

/// How a field's raw string is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Date,
}

/// A rule attached to a field together with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    kind: RuleKind,
    message: String,
}

/// One schema entry: a named field and its rules in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    rules: Vec<Rule>,
}

impl Field {
    /// Create a text field with no rules
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Text,
            rules: Vec::new(),
        }
    }

    /// Create a date field with no rules
    pub fn date(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Date,
            rules: Vec::new(),
        }
    }

    pub fn required(self, message: &str) -> Self {
        self.rule(RuleKind::Required, message)
    }

    pub fn email(self, message: &str) -> Self {
        self.rule(RuleKind::Email, message)
    }

    pub fn url(self, message: &str) -> Self {
        self.rule(RuleKind::Url, message)
    }

    fn rule(mut self, kind: RuleKind, message: &str) -> Self {
        self.rules.push(Rule {
            kind,
            message: message.to_string(),
        });
        self
    }

    fn passes(&self, kind: RuleKind, value: Option<&str>) -> bool {
        match (kind, self.kind) {
            (RuleKind::Required, FieldKind::Text) => value.is_some_and(|v| !v.is_empty()),
            (RuleKind::Required, FieldKind::Date) => value.and_then(parse_date).is_some(),
            (RuleKind::Email, _) => value.is_some_and(is_email),
            (RuleKind::Url, _) => value.is_some_and(is_absolute_url),
        }
    }

    fn typed(&self, value: Option<&str>) -> Option<TypedValue> {
        let value = value?;
        match self.kind {
            FieldKind::Text => Some(TypedValue::Text(value.to_string())),
            FieldKind::Date => parse_date(value).map(TypedValue::Date),
        }
    }
}

/// A value that passed validation, converted to its field's kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    Text(String),
    Date(NaiveDate),
}

/// The typed record produced by a successful validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidRecord {
    values: HashMap<String, TypedValue>,
}

impl ValidRecord {
    /// Text value of a field; empty when the field is absent or not text
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(TypedValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        match self.values.get(name) {
            Some(TypedValue::Date(d)) => Some(*d),
            _ => None,
        }
    }
}

/// Outcome of validating a snapshot against a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(ValidRecord),
    Rejected(FieldErrors),
}

/// Ordered set of fields and their rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Check every rule of every field against the snapshot.
    ///
    /// All rules are evaluated so the user sees every invalid field at once.
    /// Only the first failing rule of a field is reported, and errors follow
    /// schema declaration order. Values for fields the schema does not declare
    /// are ignored and do not appear in the accepted record.
    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let value = values.get(&field.name);
            for rule in &field.rules {
                if !field.passes(rule.kind, value) {
                    errors.push(field.name.as_str(), rule.message.as_str());
                }
            }
        }

        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "validation rejected input");
            return ValidationResult::Rejected(errors);
        }

        let values = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .typed(values.get(&field.name))
                    .map(|typed| (field.name.clone(), typed))
            })
            .collect();

        ValidationResult::Accepted(ValidRecord { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().copied().collect()
    }

    fn login_schema() -> Schema {
        Schema::new()
            .field(
                Field::text("email")
                    .required("Email obrigatório")
                    .email("Digite um email válido"),
            )
            .field(Field::text("password").required("Senha obrigatória"))
    }

    fn rejected(result: ValidationResult) -> FieldErrors {
        match result {
            ValidationResult::Rejected(errors) => errors,
            ValidationResult::Accepted(record) => panic!("expected rejection, got {record:?}"),
        }
    }

    fn accepted(result: ValidationResult) -> ValidRecord {
        match result {
            ValidationResult::Accepted(record) => record,
            ValidationResult::Rejected(errors) => panic!("expected acceptance, got {errors:?}"),
        }
    }

    #[test]
    fn test_missing_required_reports_required_message_once() {
        let errors = rejected(login_schema().validate(&values(&[("password", "x")])));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email obrigatório"));
    }

    #[test]
    fn test_empty_email_reports_required_before_format() {
        let errors = rejected(login_schema().validate(&values(&[("email", ""), ("password", "x")])));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email obrigatório"));
    }

    #[test]
    fn test_bad_email_reports_format_message() {
        let errors =
            rejected(login_schema().validate(&values(&[("email", "nope"), ("password", "x")])));
        assert_eq!(errors.get("email"), Some("Digite um email válido"));
    }

    #[test]
    fn test_all_invalid_fields_reported_in_declaration_order() {
        let schema = Schema::new()
            .field(Field::text("name").required("Nome obrigatório"))
            .field(Field::text("job_role").required("Cargo obrigatório"))
            .field(
                Field::text("url")
                    .url("Coloque um link válido")
                    .required("Coloque um link válido"),
            );
        // Snapshot order deliberately differs from declaration order
        let errors = rejected(schema.validate(&values(&[("url", ""), ("name", "")])));
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["name", "job_role", "url"]);
    }

    #[test]
    fn test_every_rejected_field_exists_in_schema() {
        let errors = rejected(login_schema().validate(&values(&[("extra", "")])));
        for field in errors.fields() {
            assert!(["email", "password"].contains(&field), "unexpected field {field}");
        }
    }

    #[test]
    fn test_accepted_record_is_typed() {
        let schema = Schema::new()
            .field(Field::text("name").required("Nome obrigatório"))
            .field(Field::date("birthdate").required("Data de nascimento"));
        let record = accepted(schema.validate(&values(&[
            ("name", "Ana"),
            ("birthdate", "2020-01-15"),
            ("ignored", "zzz"),
        ])));
        assert_eq!(record.text("name"), "Ana");
        assert_eq!(record.date("birthdate"), NaiveDate::from_ymd_opt(2020, 1, 15));
        assert_eq!(record.values.len(), 2);
        assert!(!record.values.contains_key("ignored"));
    }

    #[test]
    fn test_date_required_rejects_unparseable() {
        let schema = Schema::new().field(Field::date("birthdate").required("Data inválida"));
        let errors = rejected(schema.validate(&values(&[("birthdate", "31/31/2020")])));
        assert_eq!(errors.get("birthdate"), Some("Data inválida"));
    }

    #[test]
    fn test_url_field_rejects_relative() {
        let schema = Schema::new().field(
            Field::text("url")
                .required("Coloque um link válido")
                .url("Coloque um link válido"),
        );
        let errors = rejected(schema.validate(&values(&[("url", "not-a-url")])));
        assert_eq!(errors.get("url"), Some("Coloque um link válido"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = login_schema();
        let snapshot = values(&[("email", "a@b"), ("password", "")]);
        assert_eq!(schema.validate(&snapshot), schema.validate(&snapshot));

        let snapshot = values(&[("email", "a@b.com"), ("password", "x")]);
        let first = schema.validate(&snapshot);
        assert!(matches!(first, ValidationResult::Accepted(_)));
        assert_eq!(first, schema.validate(&snapshot));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let schema = Schema::new().field(Field::text("project").required("Campo obrigatório"));
        assert!(matches!(
            schema.validate(&values(&[("project", " ")])),
            ValidationResult::Accepted(_)
        ));
    }

    #[test]
    fn test_short_year_fails_required_on_date_field() {
        let schema = Schema::new().field(
            Field::date("birthdate").required("Data de nascimento. Ex: 00/00/0000"),
        );
        let errors = rejected(schema.validate(&values(&[("birthdate", "15/01/95")])));
        assert_eq!(
            errors.get("birthdate"),
            Some("Data de nascimento. Ex: 00/00/0000")
        );
    }
}
