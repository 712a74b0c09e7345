use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::wire::{FieldMetadataWire, ValidationRuleWire};

/// Declarative description of one entity type.
///
/// Everything the form and list engines know about an entity comes from
/// here; there is no per-entity code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub entity_name: String,
    pub display_name: String,
    pub fields: Vec<FieldMetadata>,
}

impl EntityMetadata {
    pub fn new(entity_name: &str, display_name: &str, fields: Vec<FieldMetadata>) -> Self {
        Self {
            entity_name: entity_name.into(),
            display_name: display_name.into(),
            fields,
        }
    }

    /// Looks up a field by its `field_name`.
    pub fn field(&self, field_name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }

    /// Fields rendered as nested child lists.
    pub fn sub_entity_fields(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.fields.iter().filter(|f| f.field_type.is_sub_entity())
    }

    /// Fields that reference another entity type.
    pub fn foreign_key_fields(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.fields
            .iter()
            .filter(|f| f.field_type.foreign_key_entity().is_some())
    }

    /// Returns true if any foreign-key field targets `entity_type`.
    pub fn references(&self, entity_type: &str) -> bool {
        self.foreign_key_fields()
            .any(|f| f.field_type.foreign_key_entity() == Some(entity_type))
    }

    /// Checks the entity-level invariants: a name, at least one field, and
    /// no duplicate field names. Per-field invariants are carried by
    /// [`FieldType`] itself.
    pub fn validate(&self) -> Result<()> {
        if self.entity_name.trim().is_empty() {
            return Err(SchemaError::EmptyEntityName);
        }
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields {
                entity: self.entity_name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.field_name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    entity: self.entity_name.clone(),
                });
            }
            if !seen.insert(field.field_name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    entity: self.entity_name.clone(),
                    field: field.field_name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Describes one attribute of an entity type.
///
/// On the wire this is the flat shape
/// `{"field_name": .., "field_type": "enum", "enum_values": [..], ..}`;
/// deserialization folds the type-specific keys into [`FieldType`] and
/// rejects fields whose type-specific data is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldMetadataWire", into = "FieldMetadataWire")]
pub struct FieldMetadata {
    pub field_name: String,
    pub display_name: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub is_read_only: bool,
    pub is_read_only_on_edit: Option<bool>,
    pub show_in_list: Option<bool>,
    pub show_in_form: Option<bool>,
    pub hide_on_create: Option<bool>,
    pub placeholder: Option<String>,
    pub validation_rules: Vec<ValidationRule>,
}

impl FieldMetadata {
    fn simple(field_name: &str, display_name: &str, field_type: FieldType) -> Self {
        Self {
            field_name: field_name.into(),
            display_name: display_name.into(),
            field_type,
            is_required: false,
            is_read_only: false,
            is_read_only_on_edit: None,
            show_in_list: None,
            show_in_form: None,
            hide_on_create: None,
            placeholder: None,
            validation_rules: Vec::new(),
        }
    }

    /// Shorthand for a free-text field.
    pub fn string(field_name: &str, display_name: &str) -> Self {
        Self::simple(field_name, display_name, FieldType::String)
    }

    /// Shorthand for a numeric field.
    pub fn number(field_name: &str, display_name: &str) -> Self {
        Self::simple(field_name, display_name, FieldType::Number)
    }

    /// Shorthand for a yes/no field.
    pub fn boolean(field_name: &str, display_name: &str) -> Self {
        Self::simple(field_name, display_name, FieldType::Boolean)
    }

    /// Shorthand for a calendar date field.
    pub fn date(field_name: &str, display_name: &str) -> Self {
        Self::simple(field_name, display_name, FieldType::Date)
    }

    /// Shorthand for an uploaded-file field.
    pub fn file(field_name: &str, display_name: &str) -> Self {
        Self::simple(field_name, display_name, FieldType::File)
    }

    /// Shorthand for an enum whose values double as labels.
    pub fn enumeration<I, S>(field_name: &str, display_name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::simple(
            field_name,
            display_name,
            FieldType::Enum(EnumSource::Values(values)),
        )
    }

    /// Shorthand for an enum with separate values and labels.
    pub fn enum_options(field_name: &str, display_name: &str, options: Vec<EnumOption>) -> Self {
        Self::simple(
            field_name,
            display_name,
            FieldType::Enum(EnumSource::Options(options)),
        )
    }

    /// Shorthand for an enum whose options depend on another field's value.
    pub fn dependent_enum(
        field_name: &str,
        display_name: &str,
        dependency: EnumDependency,
    ) -> Self {
        Self::simple(
            field_name,
            display_name,
            FieldType::Enum(EnumSource::Dependent(dependency)),
        )
    }

    /// Shorthand for a reference to another registered entity type.
    pub fn foreign_key(field_name: &str, display_name: &str, entity: &str) -> Self {
        Self::simple(
            field_name,
            display_name,
            FieldType::ForeignKey(ForeignKeyTarget {
                entity: entity.into(),
                filter: None,
            }),
        )
    }

    /// Shorthand for a nested child list.
    pub fn sub_entity(field_name: &str, display_name: &str, config: SubEntityConfig) -> Self {
        Self::simple(field_name, display_name, FieldType::SubEntity(config))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    #[must_use]
    pub fn read_only_on_edit(mut self) -> Self {
        self.is_read_only_on_edit = Some(true);
        self
    }

    #[must_use]
    pub fn in_list(mut self, show: bool) -> Self {
        self.show_in_list = Some(show);
        self
    }

    #[must_use]
    pub fn in_form(mut self, show: bool) -> Self {
        self.show_in_form = Some(show);
        self
    }

    #[must_use]
    pub fn hide_on_create(mut self) -> Self {
        self.hide_on_create = Some(true);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.validation_rules.push(rule);
        self
    }

    /// Attaches an option-narrowing hint. Ignored for non-foreign-key fields.
    #[must_use]
    pub fn foreign_key_filter(mut self, filter: ForeignKeyFilter) -> Self {
        if let FieldType::ForeignKey(target) = &mut self.field_type {
            target.filter = Some(filter);
        }
        self
    }

    /// `show_in_list` is explicitly `true`.
    pub fn is_listed(&self) -> bool {
        self.show_in_list == Some(true)
    }

    /// `hide_on_create` is explicitly `true`.
    pub fn is_hidden_on_create(&self) -> bool {
        self.hide_on_create == Some(true)
    }

    /// `is_read_only_on_edit` is explicitly `true`.
    pub fn is_locked_on_edit(&self) -> bool {
        self.is_read_only_on_edit == Some(true)
    }
}

/// The plain tag of a [`FieldType`], as it appears in `field_type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Enum,
    ForeignKey,
    File,
    SubEntity,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Enum => "enum",
            FieldKind::ForeignKey => "foreign_key",
            FieldKind::File => "file",
            FieldKind::SubEntity => "sub_entity",
        }
    }
}

/// The type of a field, carrying whatever data that type needs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Enum(EnumSource),
    ForeignKey(ForeignKeyTarget),
    File,
    SubEntity(SubEntityConfig),
}

impl FieldType {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldType::String => FieldKind::String,
            FieldType::Number => FieldKind::Number,
            FieldType::Boolean => FieldKind::Boolean,
            FieldType::Date => FieldKind::Date,
            FieldType::Enum(_) => FieldKind::Enum,
            FieldType::ForeignKey(_) => FieldKind::ForeignKey,
            FieldType::File => FieldKind::File,
            FieldType::SubEntity(_) => FieldKind::SubEntity,
        }
    }

    pub fn is_sub_entity(&self) -> bool {
        matches!(self, FieldType::SubEntity(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FieldType::File)
    }

    /// The referenced entity type, for foreign-key fields.
    pub fn foreign_key_entity(&self) -> Option<&str> {
        match self {
            FieldType::ForeignKey(target) => Some(target.entity.as_str()),
            _ => None,
        }
    }

    pub fn sub_entity_config(&self) -> Option<&SubEntityConfig> {
        match self {
            FieldType::SubEntity(config) => Some(config),
            _ => None,
        }
    }

    pub fn enum_source(&self) -> Option<&EnumSource> {
        match self {
            FieldType::Enum(source) => Some(source),
            _ => None,
        }
    }
}

/// Where an enum field gets its choices from.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumSource {
    /// Plain values, each shown as its own label.
    Values(Vec<String>),
    /// Values with distinct labels.
    Options(Vec<EnumOption>),
    /// Options chosen by the current value of another field.
    Dependent(EnumDependency),
}

/// A value/label pair for enum fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

impl EnumOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Enum options keyed by the value of `depends_on_field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDependency {
    pub depends_on_field: String,
    pub options_map: BTreeMap<String, Vec<EnumOption>>,
}

/// Target of a foreign-key field.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyTarget {
    pub entity: String,
    pub filter: Option<ForeignKeyFilter>,
}

/// Declarative hint for narrowing a foreign-key dropdown based on another
/// field of the same form. Carried as data; interpretation belongs to the
/// caller that loads the option lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyFilter {
    pub depends_on_field: String,
    pub filter_type: ForeignKeyFilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_side: Option<TeamSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_field: Option<String>,
}

impl ForeignKeyFilter {
    pub fn new(depends_on_field: &str, filter_type: ForeignKeyFilterType) -> Self {
        Self {
            depends_on_field: depends_on_field.into(),
            filter_type,
            holder_type: None,
            team_side: None,
            exclude_field: None,
        }
    }

    #[must_use]
    pub fn excluding(mut self, field_name: &str) -> Self {
        self.exclude_field = Some(field_name.into());
        self
    }

    #[must_use]
    pub fn side(mut self, side: TeamSide) -> Self {
        self.team_side = Some(side);
        self
    }

    #[must_use]
    pub fn holder(mut self, holder_type: &str) -> Self {
        self.holder_type = Some(holder_type.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignKeyFilterType {
    TeamJerseyFromFixture,
    OfficialJerseyFromCompetition,
    HolderTypeFilter,
    TeamsFromCompetition,
    ExcludeSelectedField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

/// One-to-many relationship rendered as a nested sub-list.
///
/// Children match when `child[foreign_key_field] == parent.id` and, if
/// `holder_type_field` is set, `child[holder_type_field] == holder_type_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntityConfig {
    pub child_entity_type: String,
    pub foreign_key_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_type_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_type_value: Option<String>,
}

impl SubEntityConfig {
    pub fn new(child_entity_type: &str, foreign_key_field: &str) -> Self {
        Self {
            child_entity_type: child_entity_type.into(),
            foreign_key_field: foreign_key_field.into(),
            holder_type_field: None,
            holder_type_value: None,
        }
    }

    /// Adds the polymorphic-parent discriminator.
    #[must_use]
    pub fn with_holder(mut self, holder_type_field: &str, holder_type_value: &str) -> Self {
        self.holder_type_field = Some(holder_type_field.into());
        self.holder_type_value = Some(holder_type_value.into());
        self
    }
}

/// A single check applied to a field value, with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ValidationRuleWire", into = "ValidationRuleWire")]
pub struct ValidationRule {
    pub check: RuleCheck,
    pub error_message: String,
}

impl ValidationRule {
    pub fn new(check: RuleCheck, error_message: &str) -> Self {
        Self {
            check,
            error_message: error_message.into(),
        }
    }

    pub fn min_length(length: usize, error_message: &str) -> Self {
        Self::new(RuleCheck::MinLength(length), error_message)
    }

    pub fn max_length(length: usize, error_message: &str) -> Self {
        Self::new(RuleCheck::MaxLength(length), error_message)
    }

    pub fn min_value(value: f64, error_message: &str) -> Self {
        Self::new(RuleCheck::MinValue(value), error_message)
    }

    pub fn max_value(value: f64, error_message: &str) -> Self {
        Self::new(RuleCheck::MaxValue(value), error_message)
    }

    pub fn pattern(pattern: &str, error_message: &str) -> Self {
        Self::new(RuleCheck::Pattern(pattern.into()), error_message)
    }
}

/// What a [`ValidationRule`] checks.
///
/// Length rules apply to strings, value rules to numbers, and patterns to
/// strings. `Custom` rules are carried for callers that understand them and
/// never fail on their own.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCheck {
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Pattern(String),
    Custom(serde_json::Value),
}

impl RuleCheck {
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleCheck::MinLength(_) => RuleKind::MinLength,
            RuleCheck::MaxLength(_) => RuleKind::MaxLength,
            RuleCheck::MinValue(_) => RuleKind::MinValue,
            RuleCheck::MaxValue(_) => RuleKind::MaxValue,
            RuleCheck::Pattern(_) => RuleKind::Pattern,
            RuleCheck::Custom(_) => RuleKind::Custom,
        }
    }
}

/// The plain tag of a [`RuleCheck`], as it appears in `rule_type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    Pattern,
    Custom,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::MinLength => "min_length",
            RuleKind::MaxLength => "max_length",
            RuleKind::MinValue => "min_value",
            RuleKind::MaxValue => "max_value",
            RuleKind::Pattern => "pattern",
            RuleKind::Custom => "custom",
        }
    }
}
