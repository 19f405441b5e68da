//! In-memory inventory store
//!
//! Every value written through the store is sanitized, then validated with
//! the shared record rules. Mutations are appended to an audit trail.

use chrono::{DateTime, Utc};
use inventory_validation::{
    safe_validate_record, sanitize, validate_patch, Field, RawRecord, Record, Status,
};
use log::info;
use serde::Serialize;

use crate::error::{ConsoleError, ConsoleResult};
use crate::mock_data::mock_records;
use crate::query::{matches_term, sort_records, RecordFilters, SearchQuery, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

/// One mutation of the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub action: AuditAction,
    pub employee_number: String,
    /// Wire names of the fields written by the mutation
    pub fields: Vec<&'static str>,
    pub timestamp: DateTime<Utc>,
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub active_equipment: usize,
    pub equipment_in_repair: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Records keyed by employee number, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    records: Vec<Record>,
    audit: Vec<AuditEntry>,
}

impl Inventory {
    /// Empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory holding the mock dataset
    pub fn with_mock_data() -> Self {
        Self::from_records(mock_records())
    }

    /// Inventory over already-validated records
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            audit: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, employee_number: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.employee_number == employee_number)
    }

    /// Free-text search; an empty term returns every record
    pub fn search(&self, term: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| matches_term(r, term))
            .collect()
    }

    /// Records matching a validated [`SearchQuery`]
    pub fn query(&self, query: &SearchQuery) -> Vec<&Record> {
        self.records.iter().filter(|r| query.matches(r)).collect()
    }

    pub fn filter(&self, filters: &RecordFilters) -> Vec<&Record> {
        self.records.iter().filter(|r| filters.matches(r)).collect()
    }

    /// Copy of the records ordered by one field
    pub fn sorted(&self, field: Field, direction: SortDirection) -> Vec<Record> {
        let mut records = self.records.clone();
        sort_records(&mut records, field, direction);
        records
    }

    /// Sanitize, validate and insert a new record
    pub fn create(&mut self, raw: &RawRecord) -> ConsoleResult<&Record> {
        let record = safe_validate_record(&sanitize_raw(raw))?;

        if self.get(&record.employee_number).is_some() {
            return Err(ConsoleError::DuplicateEmployee(record.employee_number));
        }

        info!("Created record {}", record.employee_number);
        self.push_audit(
            AuditAction::Create,
            &record.employee_number,
            Field::ALL.iter().map(|f| f.as_str()).collect(),
        );
        self.records.push(record);

        Ok(&self.records[self.records.len() - 1])
    }

    /// Sanitize and validate the given fields, then apply them to a record
    pub fn update(&mut self, employee_number: &str, raw: &RawRecord) -> ConsoleResult<&Record> {
        let index = self.position(employee_number)?;
        let patch = validate_patch(&sanitize_raw(raw))?;

        if let Some(new_number) = patch.employee_number.as_deref() {
            if new_number != employee_number && self.get(new_number).is_some() {
                return Err(ConsoleError::DuplicateEmployee(new_number.to_string()));
            }
        }

        let changed = self.records[index].apply(patch);
        let current = self.records[index].employee_number.clone();

        info!(
            "Updated record {} ({} field(s) changed)",
            current,
            changed.len()
        );
        self.push_audit(
            AuditAction::Update,
            &current,
            changed.iter().map(|f| f.as_str()).collect(),
        );

        Ok(&self.records[index])
    }

    /// Remove a record, returning it
    pub fn delete(&mut self, employee_number: &str) -> ConsoleResult<Record> {
        let index = self.position(employee_number)?;
        let record = self.records.remove(index);

        info!("Deleted record {}", record.employee_number);
        self.push_audit(AuditAction::Delete, &record.employee_number, Vec::new());

        Ok(record)
    }

    pub fn stats(&self) -> InventoryStats {
        let count = |pred: fn(&Record) -> bool| self.records.iter().filter(|r| pred(r)).count();

        InventoryStats {
            total: self.records.len(),
            active_users: count(|r| r.user_status == Status::Active),
            inactive_users: count(|r| r.user_status == Status::Inactive),
            active_equipment: count(|r| r.equipment_status == Status::Active),
            equipment_in_repair: count(|r| r.equipment_status == Status::InRepair),
        }
    }

    /// Record count per department, in order of first appearance
    pub fn departments(&self) -> Vec<DepartmentCount> {
        let mut counts: Vec<DepartmentCount> = Vec::new();

        for record in &self.records {
            match counts.iter_mut().find(|c| c.department == record.department) {
                Some(entry) => entry.count += 1,
                None => counts.push(DepartmentCount {
                    department: record.department.clone(),
                    count: 1,
                }),
            }
        }

        counts
    }

    /// The first `n` records
    pub fn recent(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit
    }

    fn position(&self, employee_number: &str) -> ConsoleResult<usize> {
        self.records
            .iter()
            .position(|r| r.employee_number == employee_number)
            .ok_or_else(|| ConsoleError::NotFound(employee_number.to_string()))
    }

    fn push_audit(&mut self, action: AuditAction, employee_number: &str, fields: Vec<&'static str>) {
        self.audit.push(AuditEntry {
            action,
            employee_number: employee_number.to_string(),
            fields,
            timestamp: Utc::now(),
        });
    }
}

/// Sanitize every value of a raw record
pub fn sanitize_raw(raw: &RawRecord) -> RawRecord {
    raw.iter()
        .map(|(key, value)| (key.clone(), sanitize(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_validation::raw_record;

    fn new_record() -> RawRecord {
        raw_record([
            ("employeeNumber", "EMP100"),
            ("fullName", "Laura Gómez"),
            ("username", "laura_gomez"),
            ("building", "Building D"),
            ("department", "Finance"),
            ("jobTitle", "Analyst"),
            ("equipmentStatus", "Active"),
            ("userStatus", "Active"),
            ("operatingSystem", "Linux"),
            ("serviceTag", "LG-0001"),
            ("manufacturer", "Lenovo"),
            ("equipmentType", "Laptop"),
            ("model", "ThinkPad X1"),
            ("macAddress", "10:20:30:40:50:60"),
        ])
    }

    #[test]
    fn test_create_sanitizes_then_validates() {
        let mut inventory = Inventory::with_mock_data();
        let before = inventory.len();

        let mut raw = new_record();
        raw.insert("jobTitle".to_string(), "  <b>Analyst</b> ".to_string());

        let record = inventory.create(&raw).unwrap();
        assert_eq!(record.job_title, "bAnalyst/b");
        assert_eq!(inventory.len(), before + 1);

        let entry = inventory.audit_log().last().unwrap();
        assert_eq!(entry.action, AuditAction::Create);
        assert_eq!(entry.employee_number, "EMP100");
        assert_eq!(entry.fields.len(), Field::ALL.len());
    }

    #[test]
    fn test_create_collects_all_errors() {
        let mut inventory = Inventory::new();
        let mut raw = new_record();
        raw.insert("username".to_string(), "ab".to_string());
        raw.insert("macAddress".to_string(), "not-a-mac".to_string());

        let err = inventory.create(&raw).unwrap_err();
        let errors = err.record_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.for_field(Field::Username).is_some());
        assert!(inventory.is_empty());
        assert!(inventory.audit_log().is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate() {
        let mut inventory = Inventory::with_mock_data();
        let mut raw = new_record();
        raw.insert("employeeNumber".to_string(), "EMP001".to_string());

        assert_eq!(
            inventory.create(&raw).unwrap_err(),
            ConsoleError::DuplicateEmployee("EMP001".to_string())
        );
    }

    #[test]
    fn test_update_applies_patch() {
        let mut inventory = Inventory::with_mock_data();
        let raw = raw_record([("department", "Legal"), ("equipmentStatus", "In repair")]);

        let record = inventory.update("EMP001", &raw).unwrap();
        assert_eq!(record.department, "Legal");
        assert_eq!(record.equipment_status, Status::InRepair);

        let entry = inventory.audit_log().last().unwrap();
        assert_eq!(entry.action, AuditAction::Update);
        assert_eq!(entry.fields, vec!["department", "equipmentStatus"]);
    }

    #[test]
    fn test_update_rejects_invalid_and_unknown() {
        let mut inventory = Inventory::with_mock_data();

        let err = inventory
            .update("EMP001", &raw_record([("fullName", "")]))
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));

        let err = inventory
            .update("EMP999", &raw_record([("fullName", "Nadie")]))
            .unwrap_err();
        assert_eq!(err, ConsoleError::NotFound("EMP999".to_string()));
    }

    #[test]
    fn test_update_rejects_rename_collision() {
        let mut inventory = Inventory::with_mock_data();
        let err = inventory
            .update("EMP001", &raw_record([("employeeNumber", "EMP002")]))
            .unwrap_err();
        assert_eq!(err, ConsoleError::DuplicateEmployee("EMP002".to_string()));

        // Renaming to itself is a no-op
        assert!(inventory
            .update("EMP001", &raw_record([("employeeNumber", "EMP001")]))
            .is_ok());
    }

    #[test]
    fn test_delete() {
        let mut inventory = Inventory::with_mock_data();
        let removed = inventory.delete("EMP002").unwrap();
        assert_eq!(removed.employee_number, "EMP002");
        assert!(inventory.get("EMP002").is_none());
        assert!(inventory.delete("EMP002").is_err());
    }

    #[test]
    fn test_search() {
        let inventory = Inventory::with_mock_data();
        assert_eq!(inventory.search("").len(), inventory.len());

        let hits = inventory.search("INFORMATION");
        assert!(hits.len() >= 2);
        assert!(hits.iter().all(|r| r.department == "Information Technology"));

        assert_eq!(inventory.search("EMP003").len(), 1);
        assert!(inventory.search("emp003").is_empty());
    }

    #[test]
    fn test_stats_and_departments() {
        let inventory = Inventory::with_mock_data();
        let stats = inventory.stats();
        assert_eq!(stats.total, inventory.len());
        assert_eq!(stats.active_users + stats.inactive_users, stats.total);
        assert_eq!(stats.equipment_in_repair, 2);

        let departments = inventory.departments();
        assert_eq!(departments[0].department, "Information Technology");
        assert_eq!(departments[0].count, 2);
        assert_eq!(
            departments.iter().map(|d| d.count).sum::<usize>(),
            inventory.len()
        );
    }

    #[test]
    fn test_recent() {
        let inventory = Inventory::with_mock_data();
        assert_eq!(inventory.recent(5).len(), 5);
        assert_eq!(inventory.recent(50).len(), inventory.len());
        assert_eq!(inventory.recent(1)[0].employee_number, "EMP001");
    }
}
