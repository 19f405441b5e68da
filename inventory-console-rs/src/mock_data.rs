//! Seed dataset for the in-memory inventory

use inventory_validation::{EquipmentType, Manufacturer, OperatingSystem, Record, Status};

#[allow(clippy::too_many_arguments)]
fn record(
    employee_number: &str,
    full_name: &str,
    username: &str,
    building: &str,
    department: &str,
    job_title: &str,
    (equipment_status, user_status): (Status, Status),
    operating_system: OperatingSystem,
    service_tag: &str,
    manufacturer: Manufacturer,
    equipment_type: EquipmentType,
    model: &str,
    mac_address: &str,
) -> Record {
    Record {
        employee_number: employee_number.to_string(),
        full_name: full_name.to_string(),
        username: username.to_string(),
        building: building.to_string(),
        department: department.to_string(),
        job_title: job_title.to_string(),
        equipment_status,
        user_status,
        operating_system,
        service_tag: service_tag.to_string(),
        manufacturer,
        equipment_type,
        model: model.to_string(),
        mac_address: mac_address.to_string(),
    }
}

/// Records every console session starts from
pub fn mock_records() -> Vec<Record> {
    use EquipmentType::*;
    use Status::*;

    vec![
        record(
            "EMP001",
            "Juan Pérez",
            "juan_perez",
            "Building A",
            "Information Technology",
            "Developer",
            (Active, Active),
            OperatingSystem::Windows11,
            "ST123456",
            Manufacturer::Dell,
            Laptop,
            "Latitude 5520",
            "00:1B:44:11:3A:B7",
        ),
        record(
            "EMP002",
            "María García",
            "maria_garcia",
            "Building B",
            "Human Resources",
            "Analyst",
            (Active, Active),
            OperatingSystem::MacOsSonoma,
            "C02XK1ABJG5H",
            Manufacturer::Apple,
            Laptop,
            "MacBook Pro 14",
            "A4-83-E7-2C-19-0F",
        ),
        record(
            "EMP003",
            "Carlos Rodríguez",
            "carlos-rodriguez",
            "Building A",
            "Finance",
            "Manager",
            (InRepair, Active),
            OperatingSystem::Windows10,
            "5CG1234XYZ",
            Manufacturer::Hp,
            Desktop,
            "EliteDesk 800 G6",
            "3C:52:82:6A:FE:01",
        ),
        record(
            "EMP004",
            "Ana Martínez",
            "ana_martinez",
            "Building C",
            "Sales",
            "Coordinator",
            (Active, Inactive),
            OperatingSystem::Windows11,
            "PF2ABC12",
            Manufacturer::Lenovo,
            Laptop,
            "ThinkPad T14",
            "8C:16:45:A2:7D:3E",
        ),
        record(
            "EMP005",
            "Luis Hernández",
            "luis_hernandez",
            "Building D",
            "Information Technology",
            "Technical Support",
            (Active, Active),
            OperatingSystem::Linux,
            "N3AXCV07Z",
            Manufacturer::Asus,
            Desktop,
            "ExpertCenter D7",
            "04-D9-F5-8B-22-C1",
        ),
        record(
            "EMP006",
            "Sofía López",
            "sofia_lopez",
            "Building B",
            "Marketing",
            "Specialist",
            (Inactive, Inactive),
            OperatingSystem::Windows10,
            "NXA8ZAA001",
            Manufacturer::Acer,
            Tablet,
            "Iconia Tab 10",
            "B8:27:EB:4F:90:6D",
        ),
        record(
            "EMP007",
            "Diego Torres",
            "diego_torres",
            "Building C",
            "Operations",
            "Director",
            (InRepair, Active),
            OperatingSystem::Windows11,
            "9KX7QW2",
            Manufacturer::Dell,
            Laptop,
            "XPS 15",
            "F0:1F:AF:5C:33:8A",
        ),
        record(
            "EMP008",
            "Elena Ramírez",
            "elena_ramirez",
            "Building A",
            "Legal",
            "Assistant",
            (Active, Active),
            OperatingSystem::MacOsSonoma,
            "C02ZW3LMMD6T",
            Manufacturer::Apple,
            Desktop,
            "iMac 24",
            "AC-BC-32-7E-0A-54",
        ),
    ]
}
