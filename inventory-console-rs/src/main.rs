//! Inventory Console CLI
//!
//! Command-line front end over the in-memory inventory. Each run starts from
//! a fresh dataset, so mutations only affect the output of that run.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use inventory_console::{
    open_inventory, paginate, parse_assignments, sanitize_text, ConsoleConfig, ConsoleError,
    Inventory, Pagination, RecordFilters, SearchQuery, SortDirection,
};
use inventory_validation::{
    validate_field, Field, Manufacturer, OperatingSystem, Record, Status,
};

#[derive(Parser)]
#[command(name = "inventory-console")]
#[command(version)]
#[command(about = "Employee and equipment inventory console", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List records, optionally filtered and sorted
    List {
        #[arg(long)]
        page: Option<u32>,

        /// Records per page (defaults to the configured page size)
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        user_status: Option<Status>,

        #[arg(long)]
        equipment_status: Option<Status>,

        #[arg(long)]
        manufacturer: Option<Manufacturer>,

        #[arg(long)]
        os: Option<OperatingSystem>,

        /// Field to sort by (wire name, e.g. fullName)
        #[arg(long)]
        sort: Option<String>,

        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },

    /// Search by name, username, department or employee number
    Search {
        term: String,

        #[arg(long)]
        department: Option<String>,

        /// User status to match
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one record
    Show { employee_number: String },

    /// Dashboard statistics
    Stats {
        /// Number of recent records to include
        #[arg(long, default_value = "5")]
        recent: usize,
    },

    /// Create a record from field=value assignments
    Add {
        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// Update fields of a record
    Edit {
        employee_number: String,

        #[arg(required = true)]
        assignments: Vec<String>,
    },

    /// Delete a record
    Delete { employee_number: String },

    /// Validate a single field value
    CheckField { field: String, value: String },

    /// Sanitize free text
    Sanitize {
        text: String,

        /// Reject dangerous text instead of stripping it
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load_from(path)?,
        None => ConsoleConfig::load()?,
    };
    let mut inventory = open_inventory(&config);

    run(cli.command, cli.format, &config, &mut inventory)
}

fn run(
    command: Commands,
    format: OutputFormat,
    config: &ConsoleConfig,
    inventory: &mut Inventory,
) -> Result<()> {
    match command {
        Commands::List {
            page,
            limit,
            department,
            user_status,
            equipment_status,
            manufacturer,
            os,
            sort,
            direction,
        } => {
            let pagination = Pagination::new(page, Some(limit.unwrap_or(config.page_size)))?;
            let filters = RecordFilters {
                department,
                user_status,
                equipment_status,
                manufacturer,
                operating_system: os,
            };

            let mut records: Vec<Record> = match sort {
                Some(name) => {
                    let field = Field::from_name(&name)
                        .ok_or_else(|| anyhow!("Unknown field '{}'", name))?;
                    inventory.sorted(field, direction)
                }
                None => inventory.list().to_vec(),
            };
            records.retain(|r| filters.matches(r));

            let page = paginate(&records, &pagination);
            match format {
                OutputFormat::Json => print_json(&page)?,
                OutputFormat::Text => {
                    print_table(&page.items);
                    println!(
                        "Page {} of {} ({} record(s))",
                        page.page, page.total_pages, page.total
                    );
                }
            }
        }

        Commands::Search {
            term,
            department,
            status,
        } => {
            let query = SearchQuery::parse(Some(&term), department.as_deref(), status.as_deref())?;
            let hits = inventory.query(&query);

            match format {
                OutputFormat::Json => print_json(&hits)?,
                OutputFormat::Text => {
                    print_table(hits.iter().copied());
                    println!("{} record(s) found", hits.len());
                }
            }
        }

        Commands::Show { employee_number } => {
            let record = inventory
                .get(&employee_number)
                .ok_or(ConsoleError::NotFound(employee_number))?;
            emit_record(format, record)?;
        }

        Commands::Stats { recent } => {
            let stats = inventory.stats();
            let departments = inventory.departments();
            let recent = inventory.recent(recent);

            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "stats": stats,
                    "departments": departments,
                    "recent": recent,
                }))?,
                OutputFormat::Text => {
                    println!("Total records:        {}", stats.total);
                    println!("Active users:         {}", stats.active_users);
                    println!("Inactive users:       {}", stats.inactive_users);
                    println!("Active equipment:     {}", stats.active_equipment);
                    println!("Equipment in repair:  {}", stats.equipment_in_repair);
                    println!();
                    println!("Departments:");
                    for dept in &departments {
                        println!("  {:<30} {}", dept.department, dept.count);
                    }
                    println!();
                    println!("Recent records:");
                    print_table(recent);
                }
            }
        }

        Commands::Add { assignments } => {
            let raw = parse_assignments(&assignments).map_err(|e| anyhow!(e))?;
            match inventory.create(&raw) {
                Ok(record) => emit_record(format, record)?,
                Err(err) => return Err(report(format, err)),
            }
        }

        Commands::Edit {
            employee_number,
            assignments,
        } => {
            let raw = parse_assignments(&assignments).map_err(|e| anyhow!(e))?;
            match inventory.update(&employee_number, &raw) {
                Ok(record) => emit_record(format, record)?,
                Err(err) => return Err(report(format, err)),
            }
        }

        Commands::Delete { employee_number } => {
            let record = inventory.delete(&employee_number)?;
            match format {
                OutputFormat::Json => print_json(&record)?,
                OutputFormat::Text => println!(
                    "Deleted {} ({})",
                    record.employee_number, record.full_name
                ),
            }
        }

        Commands::CheckField { field, value } => {
            let check = validate_field(&field, &value);
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "field": field,
                    "valid": check.is_valid(),
                    "message": check.message(),
                }))?,
                OutputFormat::Text => match check.message() {
                    Some(message) => println!("invalid: {}", message),
                    None => println!("valid"),
                },
            }
        }

        Commands::Sanitize { text, strict } => {
            let report = sanitize_text(&text, strict, config.security.max_input_length)?;
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => {
                    println!("{}", report.sanitized);
                    if let Some(summary) = report.summary() {
                        eprintln!("({})", summary);
                    }
                }
            }
        }
    }

    Ok(())
}

// Field errors are listed before the summary error
fn report(format: OutputFormat, err: ConsoleError) -> anyhow::Error {
    if let Some(errors) = err.record_errors() {
        match format {
            OutputFormat::Json => {
                let body = serde_json::json!({ "errors": errors.to_map() });
                if let Err(print_err) = print_json(&body) {
                    return print_err;
                }
            }
            OutputFormat::Text => {
                for error in errors {
                    eprintln!("  {}: {}", error.field.label(), error.message());
                }
            }
        }
    }
    err.into()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_record(format: OutputFormat, record: &Record) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(record)?,
        OutputFormat::Text => {
            for field in Field::ALL {
                println!("{:<18} {}", field.label(), record.get(field));
            }
        }
    }
    Ok(())
}

fn print_table<'a, I>(records: I)
where
    I: IntoIterator<Item = &'a Record>,
{
    println!(
        "{:<10} {:<22} {:<18} {:<24} {:<10} {:<10}",
        "EMPLOYEE", "NAME", "USERNAME", "DEPARTMENT", "USER", "EQUIPMENT"
    );
    for record in records {
        println!(
            "{:<10} {:<22} {:<18} {:<24} {:<10} {:<10}",
            record.employee_number,
            record.full_name,
            record.username,
            record.department,
            record.user_status.as_str(),
            record.equipment_status.as_str(),
        );
    }
}
