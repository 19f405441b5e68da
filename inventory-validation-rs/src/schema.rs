//! Record schema validation
//!
//! The per-field rules live in one static table, [`FIELD_RULES`]. Every entry
//! point (whole record, single field, partial patch) evaluates the same rules,
//! so a field can never be valid on blur and invalid on submit.
//!
//! Each rule is checked in a fixed order: required, minimum length, maximum
//! length, then pattern or enumerated set. Only the first failure is reported
//! for a field.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::str::FromStr;

use crate::builder::ValidationBuilder;
use crate::errors::{FieldError, RecordErrors, ValidationError, ValidationResult};
use crate::record::{
    EquipmentType, Field, Manufacturer, OperatingSystem, RawRecord, Record, RecordPatch, Status,
};
use crate::validators::string::{
    IDENTIFIER_REGEX, MAC_ADDRESS_REGEX, MODEL_NAME_REGEX, PERSON_NAME_REGEX, USERNAME_REGEX,
};

/// Content constraint applied after the length checks
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Any text
    Any,
    /// Every character must belong to a class
    Pattern {
        regex: &'static Regex,
        message: &'static str,
    },
    /// The value must have a fixed structure
    Format {
        regex: &'static Regex,
        message: &'static str,
    },
    /// The value must be exactly one of these literals
    OneOf(&'static [&'static str]),
}

/// Constraints attached to one record field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub constraint: Constraint,
}

impl FieldRule {
    fn new(field: Field, constraint: Constraint) -> Self {
        Self {
            field,
            min_length: None,
            max_length: None,
            constraint,
        }
    }

    fn max(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn min(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Check a raw value, reporting the first violated constraint
    pub fn check(&self, value: &str) -> ValidationResult<()> {
        let mut builder = ValidationBuilder::new(self.field.label(), value).required();

        if let Some(min) = self.min_length {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length {
            builder = builder.max_length(max);
        }

        builder = match self.constraint {
            Constraint::Any => builder,
            Constraint::Pattern { regex, message } => builder.matches(regex, message),
            Constraint::Format { regex, message } => builder.matches_format(regex, message),
            Constraint::OneOf(allowed) => builder.one_of(allowed),
        };

        builder.finish().map(|_| ())
    }
}

lazy_static! {
    /// Rule table, one entry per [`Field`] in declaration order
    pub static ref FIELD_RULES: Vec<FieldRule> = vec![
        FieldRule::new(Field::EmployeeNumber, Constraint::Pattern {
            regex: &IDENTIFIER_REGEX,
            message: "Employee number may only contain letters, numbers and hyphens",
        })
        .max(20),
        FieldRule::new(Field::FullName, Constraint::Pattern {
            regex: &PERSON_NAME_REGEX,
            message: "Full name may only contain letters and spaces",
        })
        .max(100),
        FieldRule::new(Field::Username, Constraint::Pattern {
            regex: &USERNAME_REGEX,
            message: "Username may only contain lowercase letters, numbers, hyphens and underscores",
        })
        .min(3)
        .max(50),
        FieldRule::new(Field::Building, Constraint::Any).max(50),
        FieldRule::new(Field::Department, Constraint::Any).max(100),
        FieldRule::new(Field::JobTitle, Constraint::Any).max(100),
        FieldRule::new(Field::EquipmentStatus, Constraint::OneOf(Status::LITERALS)),
        FieldRule::new(Field::UserStatus, Constraint::OneOf(Status::LITERALS)),
        FieldRule::new(Field::OperatingSystem, Constraint::OneOf(OperatingSystem::LITERALS)),
        FieldRule::new(Field::ServiceTag, Constraint::Pattern {
            regex: &IDENTIFIER_REGEX,
            message: "Service tag may only contain letters, numbers and hyphens",
        })
        .max(50),
        FieldRule::new(Field::Manufacturer, Constraint::OneOf(Manufacturer::LITERALS)),
        FieldRule::new(Field::EquipmentType, Constraint::OneOf(EquipmentType::LITERALS)),
        FieldRule::new(Field::Model, Constraint::Pattern {
            regex: &MODEL_NAME_REGEX,
            message: "Model may only contain letters, numbers, spaces and hyphens",
        })
        .max(100),
        FieldRule::new(Field::MacAddress, Constraint::Format {
            regex: &MAC_ADDRESS_REGEX,
            message: "Invalid MAC address format. Use the format: 00:1B:44:11:3A:B7",
        }),
    ];
}

/// The whole rule table
pub fn rules() -> &'static [FieldRule] {
    FIELD_RULES.as_slice()
}

/// The rule for one field
pub fn rule_for(field: Field) -> &'static FieldRule {
    // The table follows `Field` declaration order
    &FIELD_RULES[field as usize]
}

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid(FieldError),
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid(err) => Some(err),
        }
    }

    /// Message to show next to the field, if it failed
    pub fn message(&self) -> Option<String> {
        self.error().map(FieldError::message)
    }
}

impl From<Result<(), FieldError>> for FieldCheck {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldCheck::Valid,
            Err(err) => FieldCheck::Invalid(err),
        }
    }
}

/// Validate one field by wire name. Names without a rule are valid.
pub fn validate_field(name: &str, raw: &str) -> FieldCheck {
    match Field::from_name(name) {
        Some(field) => validate_field_value(field, raw).into(),
        None => {
            debug!("No rule for field '{}', accepting value", name);
            FieldCheck::Valid
        }
    }
}

/// Validate one field's raw value against its rule
pub fn validate_field_value(field: Field, raw: &str) -> Result<(), FieldError> {
    rule_for(field)
        .check(raw)
        .map_err(|err| FieldError::new(field, err))
}

/// Validate a full record, failing on the first invalid field in table order
pub fn validate_record(raw: &RawRecord) -> Result<Record, FieldError> {
    for rule in rules() {
        validate_field_value(rule.field, value_of(raw, rule.field))?;
    }

    build_record(raw)
}

/// Validate a full record, collecting one error per invalid field
pub fn safe_validate_record(raw: &RawRecord) -> Result<Record, RecordErrors> {
    let mut errors = RecordErrors::new();

    for rule in rules() {
        if let Err(err) = validate_field_value(rule.field, value_of(raw, rule.field)) {
            errors.push(err);
        }
    }

    if !errors.is_empty() {
        debug!("Record rejected: {}", errors);
        return Err(errors);
    }

    build_record(raw).map_err(RecordErrors::from)
}

/// Validate the fields present in a partial record.
///
/// Absent fields are not checked. A field that is present but empty still
/// fails its required check.
pub fn validate_patch(raw: &RawRecord) -> Result<RecordPatch, RecordErrors> {
    let mut errors = RecordErrors::new();

    for rule in rules() {
        if let Some(value) = raw.get(rule.field.as_str()) {
            if let Err(err) = validate_field_value(rule.field, value) {
                errors.push(err);
            }
        }
    }

    if !errors.is_empty() {
        debug!("Patch rejected: {}", errors);
        return Err(errors);
    }

    let text = |field: Field| raw.get(field.as_str()).cloned();

    Ok(RecordPatch {
        employee_number: text(Field::EmployeeNumber),
        full_name: text(Field::FullName),
        username: text(Field::Username),
        building: text(Field::Building),
        department: text(Field::Department),
        job_title: text(Field::JobTitle),
        equipment_status: parse_present(raw, Field::EquipmentStatus)?,
        user_status: parse_present(raw, Field::UserStatus)?,
        operating_system: parse_present(raw, Field::OperatingSystem)?,
        service_tag: text(Field::ServiceTag),
        manufacturer: parse_present(raw, Field::Manufacturer)?,
        equipment_type: parse_present(raw, Field::EquipmentType)?,
        model: text(Field::Model),
        mac_address: text(Field::MacAddress),
    })
}

// Missing keys read as empty text
fn value_of(raw: &RawRecord, field: Field) -> &str {
    raw.get(field.as_str()).map(String::as_str).unwrap_or("")
}

fn parse_literal<T: FromStr>(field: Field, value: &str) -> Result<T, FieldError> {
    value.parse().map_err(|_| {
        FieldError::new(
            field,
            ValidationError::NotAllowed(format!("Invalid {}", field.label().to_lowercase())),
        )
    })
}

fn parse_present<T: FromStr>(raw: &RawRecord, field: Field) -> Result<Option<T>, FieldError> {
    raw.get(field.as_str())
        .map(|value| parse_literal(field, value))
        .transpose()
}

fn build_record(raw: &RawRecord) -> Result<Record, FieldError> {
    let text = |field: Field| value_of(raw, field).to_string();
    let literal = |field: Field| value_of(raw, field);

    Ok(Record {
        employee_number: text(Field::EmployeeNumber),
        full_name: text(Field::FullName),
        username: text(Field::Username),
        building: text(Field::Building),
        department: text(Field::Department),
        job_title: text(Field::JobTitle),
        equipment_status: parse_literal(Field::EquipmentStatus, literal(Field::EquipmentStatus))?,
        user_status: parse_literal(Field::UserStatus, literal(Field::UserStatus))?,
        operating_system: parse_literal(Field::OperatingSystem, literal(Field::OperatingSystem))?,
        service_tag: text(Field::ServiceTag),
        manufacturer: parse_literal(Field::Manufacturer, literal(Field::Manufacturer))?,
        equipment_type: parse_literal(Field::EquipmentType, literal(Field::EquipmentType))?,
        model: text(Field::Model),
        mac_address: text(Field::MacAddress),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::raw_record;
    use test_case::test_case;

    fn valid_raw() -> RawRecord {
        raw_record([
            ("employeeNumber", "EMP001"),
            ("fullName", "Juan Pérez"),
            ("username", "juan_perez"),
            ("building", "Building A"),
            ("department", "IT"),
            ("jobTitle", "Developer"),
            ("equipmentStatus", "Active"),
            ("userStatus", "Active"),
            ("operatingSystem", "Windows 11"),
            ("serviceTag", "ST123456"),
            ("manufacturer", "Dell"),
            ("equipmentType", "Laptop"),
            ("model", "Latitude 5520"),
            ("macAddress", "00:1B:44:11:3A:B7"),
        ])
    }

    fn with(field: &str, value: &str) -> RawRecord {
        let mut raw = valid_raw();
        raw.insert(field.to_string(), value.to_string());
        raw
    }

    #[test]
    fn test_table_follows_field_order() {
        assert_eq!(rules().len(), Field::ALL.len());
        for (rule, field) in rules().iter().zip(Field::ALL) {
            assert_eq!(rule.field, field);
            assert_eq!(rule_for(field).field, field);
        }
        assert!(matches!(rule_for(Field::Manufacturer).constraint, Constraint::OneOf(_)));
        assert!(matches!(rule_for(Field::Model).constraint, Constraint::Pattern { .. }));
    }

    #[test]
    fn test_valid_record_round_trips() {
        let record = validate_record(&valid_raw()).unwrap();
        assert_eq!(record.full_name, "Juan Pérez");
        assert_eq!(record.operating_system, OperatingSystem::Windows11);

        let again = validate_record(&record.to_raw()).unwrap();
        assert_eq!(again, record);
        assert_eq!(safe_validate_record(&record.to_raw()), Ok(record));
    }

    #[test_case("ab" => Some("Username must be at least 3 characters".to_string()) ; "too short")]
    #[test_case("Juan.Perez" => Some("Username may only contain lowercase letters, numbers, hyphens and underscores".to_string()) ; "bad characters")]
    #[test_case("juan_perez-123" => None ; "valid")]
    #[test_case("" => Some("Username is required".to_string()) ; "empty")]
    fn test_username(value: &str) -> Option<String> {
        validate_field("username", value).message()
    }

    #[test]
    fn test_username_error_kinds() {
        let check = validate_field("username", "ab");
        assert!(matches!(
            check.error().map(|e| &e.error),
            Some(ValidationError::TooShort(_))
        ));

        let check = validate_field("username", "Juan.Perez");
        assert!(matches!(
            check.error().map(|e| &e.error),
            Some(ValidationError::InvalidCharacters(_))
        ));
    }

    #[test_case("00:1B:44:11:3A:B7" => true ; "colons")]
    #[test_case("00-1B-44-11-3A-B7" => true ; "hyphens")]
    #[test_case("00:1b:44:11:3a:b7" => true ; "lowercase hex")]
    #[test_case("00:1B:44:11:3A:B" => false ; "short last pair")]
    #[test_case("00:1B-44:11-3A:B7" => false ; "mixed delimiters")]
    #[test_case("001B.4411.3AB7" => false ; "dotted")]
    fn test_mac_address(value: &str) -> bool {
        validate_field("macAddress", value).is_valid()
    }

    #[test]
    fn test_mac_messages() {
        assert_eq!(
            validate_field("macAddress", "").message().unwrap(),
            "MAC address is required"
        );
        assert_eq!(
            validate_field("macAddress", "00:1B:44:11:3A:B").message().unwrap(),
            "Invalid MAC address format. Use the format: 00:1B:44:11:3A:B7"
        );
    }

    #[test_case("fullName", "Juan Pérez" => true ; "accented name")]
    #[test_case("fullName", "Jean-Luc" => false ; "hyphenated name")]
    #[test_case("fullName", "R2D2" => false ; "digits in name")]
    #[test_case("employeeNumber", "EMP-001" => true ; "employee number with hyphen")]
    #[test_case("employeeNumber", "EMP 001" => false ; "employee number with space")]
    #[test_case("serviceTag", "ST_1" => false ; "service tag underscore")]
    #[test_case("model", "Latitude 5520-X" => true ; "model")]
    #[test_case("model", "XPS 13+" => false ; "model plus sign")]
    #[test_case("building", "Bldg #4 <east>" => true ; "building accepts anything")]
    #[test_case("equipmentStatus", "In repair" => true ; "status with space")]
    #[test_case("equipmentStatus", "in repair" => false ; "status is case sensitive")]
    #[test_case("operatingSystem", "macOS Sonoma" => true ; "os literal")]
    #[test_case("manufacturer", "Samsung" => false ; "unknown manufacturer")]
    #[test_case("equipmentType", "Tablet" => true ; "equipment type")]
    fn test_field_rules(name: &str, value: &str) -> bool {
        validate_field(name, value).is_valid()
    }

    #[test]
    fn test_length_bounds_count_characters() {
        assert!(validate_field("employeeNumber", &"A".repeat(20)).is_valid());
        assert_eq!(
            validate_field("employeeNumber", &"A".repeat(21)).message().unwrap(),
            "Employee number cannot exceed 20 characters"
        );

        // 100 two-byte characters
        assert!(validate_field("fullName", &"é".repeat(100)).is_valid());
        assert!(!validate_field("fullName", &"é".repeat(101)).is_valid());
    }

    #[test]
    fn test_enum_messages() {
        assert_eq!(
            validate_field("equipmentType", "").message().unwrap(),
            "Equipment type is required"
        );
        assert_eq!(
            validate_field("equipmentType", "Phone").message().unwrap(),
            "Invalid equipment type"
        );
    }

    #[test]
    fn test_unknown_field_is_valid() {
        assert_eq!(validate_field("nonexistentField", "<anything>"), FieldCheck::Valid);
    }

    #[test]
    fn test_strict_reports_first_failure() {
        let mut raw = with("username", "ab");
        raw.insert("macAddress".to_string(), "bad".to_string());

        let err = validate_record(&raw).unwrap_err();
        assert_eq!(err.field, Field::Username);
        assert_eq!(err.to_string(), "username: Username must be at least 3 characters");
    }

    #[test]
    fn test_collect_all_in_table_order() {
        let mut raw = with("macAddress", "bad");
        raw.insert("username".to_string(), "ab".to_string());
        raw.insert("manufacturer".to_string(), "Samsung".to_string());

        let errors = safe_validate_record(&raw).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Username, Field::Manufacturer, Field::MacAddress]
        );
        assert_eq!(
            errors.for_field(Field::Manufacturer).unwrap().message(),
            "Invalid manufacturer"
        );
    }

    #[test]
    fn test_missing_keys_count_as_empty() {
        let mut raw = valid_raw();
        raw.remove("building");
        raw.insert("extra".to_string(), "ignored".to_string());

        let errors = safe_validate_record(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field(Field::Building).unwrap().message(),
            "Building is required"
        );
    }

    #[test]
    fn test_empty_record_fails_every_field() {
        let errors = safe_validate_record(&RawRecord::new()).unwrap_err();
        assert_eq!(errors.len(), Field::ALL.len());
    }

    #[test]
    fn test_partial_mode() {
        let patch = validate_patch(&raw_record([("fullName", "New Name")])).unwrap();
        assert_eq!(patch.full_name.as_deref(), Some("New Name"));
        assert_eq!(patch.username, None);

        let errors = validate_patch(&raw_record([("fullName", "")])).unwrap_err();
        assert_eq!(
            errors.first().unwrap().message(),
            "Full name is required"
        );

        let patch = validate_patch(&raw_record([("equipmentStatus", "In repair")])).unwrap();
        assert_eq!(patch.equipment_status, Some(Status::InRepair));

        assert!(validate_patch(&RawRecord::new()).unwrap().is_empty());
    }

    #[test]
    fn test_patch_collects_all_errors() {
        let raw = raw_record([("username", "X"), ("model", "XPS 13+"), ("department", "Ops")]);
        let errors = validate_patch(&raw).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.for_field(Field::Department).is_none());
    }
}
