use std::collections::BTreeMap;

use regex_lite::Regex;
use schemaform_model::{EntityMetadata, EntityRecord, RuleCheck, ValidationRule};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of checking one value against its rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationResult {
    pub is_valid: bool,
    /// Empty when valid.
    pub error_message: String,
}

impl FieldValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(error_message: &str) -> Self {
        Self {
            is_valid: false,
            error_message: error_message.into(),
        }
    }
}

/// Outcome of checking a whole form. `errors` maps field name to the first
/// failing message for that field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Runs `rules` in order and reports the first failure.
///
/// Rules only apply to matching value types: length and pattern rules to
/// strings, value rules to numbers. A rule that does not apply passes, and
/// so does a pattern that fails to compile. Custom rules always pass.
pub fn validate_field_against_rules(value: &Value, rules: &[ValidationRule]) -> FieldValidationResult {
    rules
        .iter()
        .find(|rule| violates(value, rule))
        .map(|rule| FieldValidationResult::invalid(&rule.error_message))
        .unwrap_or_else(FieldValidationResult::valid)
}

fn violates(value: &Value, rule: &ValidationRule) -> bool {
    match (&rule.check, value) {
        (RuleCheck::MinLength(min), Value::String(s)) => s.chars().count() < *min,
        (RuleCheck::MaxLength(max), Value::String(s)) => s.chars().count() > *max,
        (RuleCheck::MinValue(min), Value::Number(n)) => n.as_f64().is_some_and(|n| n < *min),
        (RuleCheck::MaxValue(max), Value::Number(n)) => n.as_f64().is_some_and(|n| n > *max),
        (RuleCheck::Pattern(pattern), Value::String(s)) => match Regex::new(pattern) {
            Ok(re) => !re.is_match(s),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Skipping invalid validation pattern");
                false
            }
        },
        _ => false,
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Checks every declared field of `data` in one pass.
///
/// A required field that is missing, null, or `""` fails with
/// `"{display_name} is required"` and its rules are skipped. Rules run only
/// for present, non-empty values, so optional fields may be left blank.
pub fn validate_form_data_against_metadata(
    data: &EntityRecord,
    metadata: &EntityMetadata,
) -> FormValidationResult {
    let mut errors = BTreeMap::new();

    for field in &metadata.fields {
        let value = data.get(&field.field_name);

        if is_blank(value) {
            if field.is_required {
                errors.insert(
                    field.field_name.clone(),
                    format!("{} is required", field.display_name),
                );
            }
            continue;
        }

        if let Some(value) = value {
            let result = validate_field_against_rules(value, &field.validation_rules);
            if !result.is_valid {
                errors.insert(field.field_name.clone(), result.error_message);
            }
        }
    }

    debug!(
        entity = %metadata.entity_name,
        errors = errors.len(),
        "Validated form data"
    );
    FormValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
