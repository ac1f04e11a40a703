use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracker_core::{Task, TaskStatus};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tracker",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TRACKER_BUILD_SHA"), ")"),
    about = "Manage your to-do list from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Update a task's description
    Update {
        id: u32,

        /// New description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Delete a task
    Delete { id: u32 },

    /// Mark a task as in progress
    MarkInProgress { id: u32 },

    /// Mark a task as done
    MarkDone { id: u32 },

    /// List tasks, optionally filtered by status
    List {
        /// todo, in-progress, or done
        status: Option<String>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml unless one exists
    Init,

    /// Print the config file location
    Path,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        println!("Error: {err:#}");
    }
}

fn run(command: Command) -> Result<()> {
    let cfg = config::load_config()?;
    let path = config::resolve_tasks_path(&cfg)?;

    match command {
        Command::Add { description } => {
            let mut tasks = state::load_tasks(&path)?;
            let id = tasks.add(description.join(" "));
            state::save_tasks(&path, &tasks)?;
            println!("Task {id} added successfully");
        }

        Command::Update { id, description } => {
            let mut tasks = state::load_tasks(&path)?;
            if tasks.update(id, description.join(" ")).is_some() {
                state::save_tasks(&path, &tasks)?;
                println!("Task {id} updated.");
            } else {
                println!("Task {id} not found.");
            }
        }

        Command::Delete { id } => {
            let mut tasks = state::load_tasks(&path)?;
            if tasks.remove(id).is_some() {
                state::save_tasks(&path, &tasks)?;
                println!("Task {id} deleted.");
            } else {
                println!("Task {id} not found.");
            }
        }

        Command::MarkInProgress { id } => mark(&path, id, TaskStatus::InProgress)?,
        Command::MarkDone { id } => mark(&path, id, TaskStatus::Done)?,

        Command::List { status } => {
            let tasks = state::load_tasks(&path)?;
            match status.map(|s| s.parse::<TaskStatus>()).transpose()? {
                Some(wanted) => {
                    for t in tasks.iter_status(wanted) {
                        print_task(t);
                    }
                }
                None => {
                    for t in tasks.iter() {
                        print_task(t);
                    }
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn mark(path: &Path, id: u32, status: TaskStatus) -> Result<()> {
    let mut tasks = state::load_tasks(path)?;
    if tasks.set_status(id, status).is_some() {
        state::save_tasks(path, &tasks)?;
        println!("Task {id} status updated.");
    } else {
        println!("Task {id} not found.");
    }
    Ok(())
}

fn print_task(task: &Task) {
    println!("ID: {} | {} | {}", task.id, task.status, task.description);
}
