//! Inventory record model
//!
//! A [`Record`] describes one employee together with the machine assigned to
//! them. Callers hand the validator a [`RawRecord`] (wire name → text) and get
//! back a strongly typed `Record`, or a [`RecordPatch`] in partial mode.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Untyped record input keyed by wire field name
pub type RawRecord = HashMap<String, String>;

/// Build a [`RawRecord`] from `(wire name, value)` pairs
pub fn raw_record<'a, I>(pairs: I) -> RawRecord
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Error returned when a literal does not name an enum option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

// Closed literal sets. The literal is both the wire form and the display form.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Literal accepted on input
            pub const LITERALS: &'static [&'static str] = &[$($literal),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    other => Err(UnknownVariant(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum! {
    /// Status shared by users and equipment
    Status {
        Active => "Active",
        Inactive => "Inactive",
        InRepair => "In repair",
    }
}

literal_enum! {
    OperatingSystem {
        Windows11 => "Windows 11",
        Windows10 => "Windows 10",
        MacOsSonoma => "macOS Sonoma",
        Linux => "Linux",
    }
}

literal_enum! {
    Manufacturer {
        Dell => "Dell",
        Hp => "HP",
        Apple => "Apple",
        Lenovo => "Lenovo",
        Asus => "Asus",
        Acer => "Acer",
    }
}

literal_enum! {
    EquipmentType {
        Laptop => "Laptop",
        Desktop => "Desktop",
        Tablet => "Tablet",
    }
}

/// Record fields, in rule-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    EmployeeNumber,
    FullName,
    Username,
    Building,
    Department,
    JobTitle,
    EquipmentStatus,
    UserStatus,
    OperatingSystem,
    ServiceTag,
    Manufacturer,
    EquipmentType,
    Model,
    MacAddress,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::EmployeeNumber,
        Field::FullName,
        Field::Username,
        Field::Building,
        Field::Department,
        Field::JobTitle,
        Field::EquipmentStatus,
        Field::UserStatus,
        Field::OperatingSystem,
        Field::ServiceTag,
        Field::Manufacturer,
        Field::EquipmentType,
        Field::Model,
        Field::MacAddress,
    ];

    /// Wire name used in raw records and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EmployeeNumber => "employeeNumber",
            Field::FullName => "fullName",
            Field::Username => "username",
            Field::Building => "building",
            Field::Department => "department",
            Field::JobTitle => "jobTitle",
            Field::EquipmentStatus => "equipmentStatus",
            Field::UserStatus => "userStatus",
            Field::OperatingSystem => "operatingSystem",
            Field::ServiceTag => "serviceTag",
            Field::Manufacturer => "manufacturer",
            Field::EquipmentType => "equipmentType",
            Field::Model => "model",
            Field::MacAddress => "macAddress",
        }
    }

    /// Human label used at the start of messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::EmployeeNumber => "Employee number",
            Field::FullName => "Full name",
            Field::Username => "Username",
            Field::Building => "Building",
            Field::Department => "Department",
            Field::JobTitle => "Job title",
            Field::EquipmentStatus => "Equipment status",
            Field::UserStatus => "User status",
            Field::OperatingSystem => "Operating system",
            Field::ServiceTag => "Service tag",
            Field::Manufacturer => "Manufacturer",
            Field::EquipmentType => "Equipment type",
            Field::Model => "Model",
            Field::MacAddress => "MAC address",
        }
    }

    /// Look up a field by wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated employee/equipment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub employee_number: String,
    pub full_name: String,
    pub username: String,
    pub building: String,
    pub department: String,
    pub job_title: String,
    pub equipment_status: Status,
    pub user_status: Status,
    pub operating_system: OperatingSystem,
    pub service_tag: String,
    pub manufacturer: Manufacturer,
    pub equipment_type: EquipmentType,
    pub model: String,
    pub mac_address: String,
}

impl Record {
    /// Text value of a field, as it would appear in a raw record
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EmployeeNumber => &self.employee_number,
            Field::FullName => &self.full_name,
            Field::Username => &self.username,
            Field::Building => &self.building,
            Field::Department => &self.department,
            Field::JobTitle => &self.job_title,
            Field::EquipmentStatus => self.equipment_status.as_str(),
            Field::UserStatus => self.user_status.as_str(),
            Field::OperatingSystem => self.operating_system.as_str(),
            Field::ServiceTag => &self.service_tag,
            Field::Manufacturer => self.manufacturer.as_str(),
            Field::EquipmentType => self.equipment_type.as_str(),
            Field::Model => &self.model,
            Field::MacAddress => &self.mac_address,
        }
    }

    /// Untyped form of this record, suitable for re-validation or editing
    pub fn to_raw(&self) -> RawRecord {
        Field::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), self.get(*f).to_string()))
            .collect()
    }

    /// Apply a validated patch, returning the fields whose value changed
    pub fn apply(&mut self, patch: RecordPatch) -> Vec<Field> {
        let mut changed = Vec::new();

        macro_rules! assign {
            ($($name:ident => $field:expr),+ $(,)?) => {
                $(
                    if let Some(value) = patch.$name {
                        if self.$name != value {
                            self.$name = value;
                            changed.push($field);
                        }
                    }
                )+
            };
        }

        assign! {
            employee_number => Field::EmployeeNumber,
            full_name => Field::FullName,
            username => Field::Username,
            building => Field::Building,
            department => Field::Department,
            job_title => Field::JobTitle,
            equipment_status => Field::EquipmentStatus,
            user_status => Field::UserStatus,
            operating_system => Field::OperatingSystem,
            service_tag => Field::ServiceTag,
            manufacturer => Field::Manufacturer,
            equipment_type => Field::EquipmentType,
            model => Field::Model,
            mac_address => Field::MacAddress,
        }

        changed
    }
}

/// Partial update produced by validation in partial mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<OperatingSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Manufacturer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<EquipmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

impl RecordPatch {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }
}
