//! Flat serde shapes for schema types.
//!
//! The JSON/TOML representation keeps every type-specific key at the top
//! level of a field (`enum_values`, `foreign_key_entity`, `sub_entity_config`)
//! so schema files stay readable by hand. These shapes are converted into
//! the tagged model in `schema.rs` and back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::{
    EnumDependency, EnumOption, EnumSource, FieldKind, FieldMetadata, FieldType, ForeignKeyFilter,
    ForeignKeyTarget, RuleCheck, RuleKind, SubEntityConfig, ValidationRule,
};

#[derive(Serialize, Deserialize)]
pub(crate) struct FieldMetadataWire {
    field_name: String,
    display_name: String,
    field_type: FieldKind,
    is_required: bool,
    is_read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_read_only_on_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_in_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    show_in_form: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hide_on_create: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enum_options: Option<Vec<EnumOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enum_dependency: Option<EnumDependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    foreign_key_entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    foreign_key_filter: Option<ForeignKeyFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    validation_rules: Vec<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub_entity_config: Option<SubEntityConfig>,
}

impl TryFrom<FieldMetadataWire> for FieldMetadata {
    type Error = SchemaError;

    fn try_from(wire: FieldMetadataWire) -> Result<Self, Self::Error> {
        let field_type = match wire.field_type {
            FieldKind::String => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Date => FieldType::Date,
            FieldKind::File => FieldType::File,
            FieldKind::Enum => FieldType::Enum(enum_source(
                &wire.field_name,
                wire.enum_values,
                wire.enum_options,
                wire.enum_dependency,
            )?),
            FieldKind::ForeignKey => {
                let entity = wire
                    .foreign_key_entity
                    .filter(|e| !e.trim().is_empty())
                    .ok_or_else(|| SchemaError::MissingForeignKeyEntity {
                        field: wire.field_name.clone(),
                    })?;
                FieldType::ForeignKey(ForeignKeyTarget {
                    entity,
                    filter: wire.foreign_key_filter,
                })
            }
            FieldKind::SubEntity => {
                let config =
                    wire.sub_entity_config
                        .ok_or_else(|| SchemaError::MissingSubEntityConfig {
                            field: wire.field_name.clone(),
                        })?;
                FieldType::SubEntity(config)
            }
        };

        Ok(FieldMetadata {
            field_name: wire.field_name,
            display_name: wire.display_name,
            field_type,
            is_required: wire.is_required,
            is_read_only: wire.is_read_only,
            is_read_only_on_edit: wire.is_read_only_on_edit,
            show_in_list: wire.show_in_list,
            show_in_form: wire.show_in_form,
            hide_on_create: wire.hide_on_create,
            placeholder: wire.placeholder,
            validation_rules: wire.validation_rules,
        })
    }
}

fn enum_source(
    field_name: &str,
    values: Option<Vec<String>>,
    options: Option<Vec<EnumOption>>,
    dependency: Option<EnumDependency>,
) -> Result<EnumSource, SchemaError> {
    let mut sources = Vec::with_capacity(1);
    if let Some(values) = values.filter(|v| !v.is_empty()) {
        sources.push(EnumSource::Values(values));
    }
    if let Some(options) = options.filter(|o| !o.is_empty()) {
        sources.push(EnumSource::Options(options));
    }
    if let Some(dependency) = dependency {
        sources.push(EnumSource::Dependent(dependency));
    }

    match sources.len() {
        0 => Err(SchemaError::MissingEnumSource {
            field: field_name.into(),
        }),
        1 => Ok(sources.remove(0)),
        count => Err(SchemaError::AmbiguousEnumSource {
            field: field_name.into(),
            count,
        }),
    }
}

impl From<FieldMetadata> for FieldMetadataWire {
    fn from(field: FieldMetadata) -> Self {
        let mut wire = FieldMetadataWire {
            field_name: field.field_name,
            display_name: field.display_name,
            field_type: field.field_type.kind(),
            is_required: field.is_required,
            is_read_only: field.is_read_only,
            is_read_only_on_edit: field.is_read_only_on_edit,
            show_in_list: field.show_in_list,
            show_in_form: field.show_in_form,
            hide_on_create: field.hide_on_create,
            placeholder: field.placeholder,
            enum_values: None,
            enum_options: None,
            enum_dependency: None,
            foreign_key_entity: None,
            foreign_key_filter: None,
            validation_rules: field.validation_rules,
            sub_entity_config: None,
        };

        match field.field_type {
            FieldType::Enum(EnumSource::Values(values)) => wire.enum_values = Some(values),
            FieldType::Enum(EnumSource::Options(options)) => wire.enum_options = Some(options),
            FieldType::Enum(EnumSource::Dependent(dependency)) => {
                wire.enum_dependency = Some(dependency)
            }
            FieldType::ForeignKey(target) => {
                wire.foreign_key_entity = Some(target.entity);
                wire.foreign_key_filter = target.filter;
            }
            FieldType::SubEntity(config) => wire.sub_entity_config = Some(config),
            FieldType::String
            | FieldType::Number
            | FieldType::Boolean
            | FieldType::Date
            | FieldType::File => {}
        }

        wire
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct ValidationRuleWire {
    rule_type: RuleKind,
    #[serde(default)]
    rule_value: Value,
    error_message: String,
}

impl TryFrom<ValidationRuleWire> for ValidationRule {
    type Error = SchemaError;

    fn try_from(wire: ValidationRuleWire) -> Result<Self, Self::Error> {
        let invalid = || SchemaError::InvalidRuleValue {
            rule_type: wire.rule_type.as_str().into(),
            value: wire.rule_value.to_string(),
        };

        let check = match wire.rule_type {
            RuleKind::MinLength => RuleCheck::MinLength(as_length(&wire.rule_value).ok_or_else(invalid)?),
            RuleKind::MaxLength => RuleCheck::MaxLength(as_length(&wire.rule_value).ok_or_else(invalid)?),
            RuleKind::MinValue => RuleCheck::MinValue(wire.rule_value.as_f64().ok_or_else(invalid)?),
            RuleKind::MaxValue => RuleCheck::MaxValue(wire.rule_value.as_f64().ok_or_else(invalid)?),
            RuleKind::Pattern => RuleCheck::Pattern(
                wire.rule_value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(invalid)?,
            ),
            RuleKind::Custom => RuleCheck::Custom(wire.rule_value.clone()),
        };

        Ok(ValidationRule {
            check,
            error_message: wire.error_message,
        })
    }
}

/// Accepts `5` and `5.0`, rejects negatives and fractions.
fn as_length(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= usize::MAX as f64)
        .map(|n| n as usize)
}

impl From<ValidationRule> for ValidationRuleWire {
    fn from(rule: ValidationRule) -> Self {
        let rule_type = rule.check.kind();
        let rule_value = match rule.check {
            RuleCheck::MinLength(n) | RuleCheck::MaxLength(n) => Value::from(n as u64),
            RuleCheck::MinValue(n) | RuleCheck::MaxValue(n) => Value::from(n),
            RuleCheck::Pattern(pattern) => Value::String(pattern),
            RuleCheck::Custom(value) => value,
        };
        ValidationRuleWire {
            rule_type,
            rule_value,
            error_message: rule.error_message,
        }
    }
}
