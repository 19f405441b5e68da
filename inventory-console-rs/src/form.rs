//! Create/edit form state
//!
//! Mirrors the record dialog: values are sanitized as they are entered, a
//! field is checked when it loses focus, and the whole record is checked on
//! submit. Editing a field clears its previous error.

use inventory_validation::{
    safe_validate_record, sanitize, validate_field_value, EquipmentType, FieldCheck, Field,
    Manufacturer, OperatingSystem, RawRecord, Record, RecordErrors, Status,
};
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the record stored under this employee number
    Edit(String),
}

#[derive(Debug, Clone)]
pub struct RecordForm {
    mode: FormMode,
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, String>,
}

impl RecordForm {
    /// Blank form with the usual defaults preselected
    pub fn create() -> Self {
        let mut values: BTreeMap<Field, String> =
            Field::ALL.iter().map(|f| (*f, String::new())).collect();

        let defaults = [
            (Field::EquipmentStatus, Status::Active.as_str()),
            (Field::UserStatus, Status::Active.as_str()),
            (Field::OperatingSystem, OperatingSystem::Windows11.as_str()),
            (Field::Manufacturer, Manufacturer::Dell.as_str()),
            (Field::EquipmentType, EquipmentType::Laptop.as_str()),
        ];
        for (field, value) in defaults {
            values.insert(field, value.to_string());
        }

        Self {
            mode: FormMode::Create,
            values,
            errors: BTreeMap::new(),
        }
    }

    /// Form prefilled from an existing record
    pub fn edit(record: &Record) -> Self {
        Self {
            mode: FormMode::Edit(record.employee_number.clone()),
            values: Field::ALL
                .iter()
                .map(|f| (*f, record.get(*f).to_string()))
                .collect(),
            errors: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Current errors keyed by wire name
    pub fn errors(&self) -> BTreeMap<&'static str, &str> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Store the sanitized value of a field and clear its error.
    ///
    /// Returns false when `name` is not a record field.
    pub fn set_field(&mut self, name: &str, raw: &str) -> bool {
        let Some(field) = Field::from_name(name) else {
            debug!("Ignoring unknown form field '{}'", name);
            return false;
        };

        self.values.insert(field, sanitize(raw));
        self.errors.remove(&field);
        true
    }

    /// Validate one field, as when it loses focus
    pub fn blur(&mut self, name: &str) -> FieldCheck {
        let Some(field) = Field::from_name(name) else {
            return FieldCheck::Valid;
        };

        let check: FieldCheck = validate_field_value(field, self.value(field)).into();
        match check.message() {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
        check
    }

    /// Validate every field, recording each error
    pub fn submit(&mut self) -> Result<Record, RecordErrors> {
        let result = safe_validate_record(&self.to_raw());

        self.errors = match &result {
            Ok(_) => BTreeMap::new(),
            Err(errors) => errors.iter().map(|e| (e.field, e.message())).collect(),
        };

        result
    }

    /// Current values as a raw record
    pub fn to_raw(&self) -> RawRecord {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str().to_string(), value.clone()))
            .collect()
    }
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::create()
    }
}
