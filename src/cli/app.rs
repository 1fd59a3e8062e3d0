//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use kanban_board::config::Config;
use kanban_board::models::{Priority, TaskStatus};
use kanban_board::output::OutputMode;

/// kanban - a kanban board in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "kanban",
    version,
    about = "A kanban board in your terminal",
    long_about = "Track tasks across five columns: backlog, todo, in-progress, in-review, done.\n\n\
                  Tasks are stored as one JSON list and rewritten on every change.\n\
                  Drag gestures can be replayed with `kanban drag`."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the task data (overrides the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.kanban/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board
    Board {
        /// Only show tasks whose title, description or assignee contains this
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Column to add to
        #[arg(short, long, default_value = "todo")]
        status: TaskStatus,

        /// Priority: low, medium, high, urgent
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Description
        #[arg(short, long)]
        description: Option<String>,

        /// Assignee
        #[arg(short, long)]
        assignee: Option<String>,

        /// Estimated hours
        #[arg(long)]
        hours: Option<String>,

        /// Label (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },

    /// Edit a task
    Edit {
        /// Task ID
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New status
        #[arg(short, long)]
        status: Option<TaskStatus>,

        /// New priority
        #[arg(short, long)]
        priority: Option<Priority>,

        /// New description (empty string clears it)
        #[arg(short, long)]
        description: Option<String>,

        /// New assignee (empty string clears it)
        #[arg(short, long)]
        assignee: Option<String>,

        /// New estimate in hours (empty string clears it)
        #[arg(long)]
        hours: Option<String>,

        /// Label to add (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Label to remove (repeatable)
        #[arg(long = "remove-label")]
        remove_labels: Vec<String>,
    },

    /// Show task details
    Show {
        /// Task ID
        id: String,
    },

    /// List tasks in board order
    List {
        /// Filter by status
        #[arg(short, long)]
        status: Option<TaskStatus>,

        /// Filter by search text
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Delete a task
    #[command(alias = "remove")]
    Rm {
        /// Task ID
        id: String,
    },

    /// Move a task to another column
    Move {
        /// Task ID
        id: String,

        /// Target column
        status: TaskStatus,
    },

    /// Move a task to a position within its column
    Reorder {
        /// Task ID
        id: String,

        /// Zero-based position within the column
        index: usize,
    },

    /// Replay a drag gesture: start on a task, pass over targets, drop
    Drag {
        /// Dragged task ID
        id: String,

        /// Column or task the pointer passes over (repeatable, in order)
        #[arg(long)]
        over: Vec<String>,

        /// Column or task the task is dropped on
        #[arg(long)]
        drop: Option<String>,
    },

    /// Show completion stats
    Stats,

    /// Serve the board over a local HTTP API
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on (defaults to the config file's server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let ctx = Context::new(config, output_mode);

    match cli.command {
        Some(Command::Board { search }) => commands::board(&ctx, &search),
        Some(Command::Add {
            title,
            status,
            priority,
            description,
            assignee,
            hours,
            labels,
        }) => commands::add(
            &ctx,
            commands::NewTask {
                title,
                status,
                priority,
                description,
                assignee,
                hours,
                labels,
            },
        ),
        Some(Command::Edit {
            id,
            title,
            status,
            priority,
            description,
            assignee,
            hours,
            labels,
            remove_labels,
        }) => commands::edit(
            &ctx,
            &id,
            commands::TaskEdits {
                title,
                status,
                priority,
                description,
                assignee,
                hours,
                add_labels: labels,
                remove_labels,
            },
        ),
        Some(Command::Show { id }) => commands::show(&ctx, &id),
        Some(Command::List { status, search }) => commands::list(&ctx, status, &search),
        Some(Command::Rm { id }) => commands::remove(&ctx, &id),
        Some(Command::Move { id, status }) => commands::move_task(&ctx, &id, status),
        Some(Command::Reorder { id, index }) => commands::reorder(&ctx, &id, index),
        Some(Command::Drag { id, over, drop }) => commands::drag(&ctx, &id, &over, drop),
        Some(Command::Stats) => commands::stats(&ctx),
        #[cfg(feature = "ui")]
        Some(Command::Serve { port }) => commands::serve(&ctx, port),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("kanban v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("kanban v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'kanban --help' for usage");
                println!("Run 'kanban board' to see your tasks");
            }
            Ok(())
        },
    }
}
