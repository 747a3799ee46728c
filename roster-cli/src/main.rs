use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tabled::{Table, Tabled};

use roster_api::validation::{self, Field, FieldError, ValidationErrors};
use roster_api::{Department, Employee, EmployeeFields, department_name};
use roster_cli::{ApiClient, ClientError};

mod tui;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "CLI for the roster employee service", long_about = None)]
struct Cli {
    /// REST API base URL
    #[arg(short, long, default_value = "http://localhost:5000/api")]
    server: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all employees
    List,

    /// Get employee details
    Get {
        /// Employee ID
        id: i64,
    },

    /// Create a new employee
    Create {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Job title
        #[arg(long)]
        designation: String,

        /// Department id (1-5) or name
        #[arg(long, value_parser = parse_department)]
        department: Department,
    },

    /// Update fields of an employee
    Update {
        /// Employee ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        designation: Option<String>,

        /// Department id (1-5) or name
        #[arg(long, value_parser = parse_department)]
        department: Option<Department>,
    },

    /// Delete an employee
    Delete {
        /// Employee ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_department(s: &str) -> Result<Department, String> {
    if let Ok(id) = s.trim().parse::<i64>() {
        return Department::from_id(id).ok_or_else(|| format!("Unknown department id {}", id));
    }
    Department::ALL
        .into_iter()
        .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("Unknown department '{}'", s))
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "DESIGNATION")]
    designation: String,
    #[tabled(rename = "DEPARTMENT")]
    department: String,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            designation: e.designation,
            department: department_name(e.department_id).to_string(),
        }
    }
}

fn print_employee(e: &Employee) {
    println!("ID:          {}", e.id);
    println!("Name:        {}", e.name);
    println!("Email:       {}", e.email);
    println!("Designation: {}", e.designation);
    println!("Department:  {}", department_name(e.department_id));
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn report(server: &str, e: ClientError) -> ! {
    match &e {
        ClientError::Http(inner) if inner.is_connect() => {
            fail(format!("Cannot connect to roster-api at {}", server))
        }
        _ => fail(describe(&e)),
    }
}

fn describe(e: &ClientError) -> String {
    match e.status() {
        Some(status) if status >= 500 => format!("{} (HTTP {})", e, status),
        _ => e.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.server);

    let Some(command) = cli.command else {
        // No subcommand: start TUI
        tui::run(client).await?;
        return Ok(());
    };

    match command {
        Commands::List => {
            let employees = client
                .list_employees()
                .await
                .unwrap_or_else(|e| report(&cli.server, e));

            if employees.is_empty() {
                println!("No employees found");
            } else {
                let rows: Vec<EmployeeRow> = employees.into_iter().map(EmployeeRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Get { id } => {
            let employee = client
                .get_employee(id)
                .await
                .unwrap_or_else(|e| report(&cli.server, e));
            print_employee(&employee);
        }

        Commands::Create {
            name,
            email,
            designation,
            department,
        } => {
            let fields = EmployeeFields {
                name: Some(name),
                email: Some(email),
                designation: Some(designation),
                department_id: Some(department.id()),
            };
            if let Err(errors) = validation::validate_new(&fields) {
                for (field, _) in errors.iter() {
                    if let Some(message) = errors.message(field) {
                        eprintln!("Error: {}", message);
                    }
                }
                std::process::exit(1);
            }

            let employee = client
                .create_employee(&fields)
                .await
                .unwrap_or_else(|e| report(&cli.server, e));
            println!("Created employee: {}", employee.id);
        }

        Commands::Update {
            id,
            name,
            email,
            designation,
            department,
        } => {
            if let Some(email) = &email
                && !validation::is_valid_email(email.trim())
            {
                let mut errors = ValidationErrors::new();
                errors.add(Field::Email, FieldError::Invalid);
                fail(errors.summary());
            }

            let fields = EmployeeFields {
                name,
                email,
                designation,
                department_id: department.map(Department::id),
            };
            let employee = client
                .update_employee(id, &fields)
                .await
                .unwrap_or_else(|e| report(&cli.server, e));
            print_employee(&employee);
        }

        Commands::Delete { id, yes } => {
            if !yes {
                let employee = client
                    .get_employee(id)
                    .await
                    .unwrap_or_else(|e| report(&cli.server, e));
                if !confirm(&format!("Delete employee {} ({})?", employee.name, id))? {
                    println!("Aborted");
                    return Ok(());
                }
            }

            let message = client
                .delete_employee(id)
                .await
                .unwrap_or_else(|e| report(&cli.server, e));
            println!("{}", message);
        }
    }

    Ok(())
}
