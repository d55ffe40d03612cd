// src/main.rs

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use taskdeck::config::CONFIG;
use taskdeck::presenter::{SortMode, TaskListPresenter, TaskListView, section_title};
use taskdeck::tasks::{self, Task, TaskManager, TaskPriority, TaskStatus};

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Task list with pluggable storage backends")]
struct Cli {
    /// Storage backend: prefs, sqlite or remote
    #[arg(long, env = "TASKDECK_STORAGE")]
    storage: Option<String>,

    /// Group the printed list by priority instead of status
    #[arg(long)]
    by_priority: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print all tasks, sectioned by the active grouping
    List,
    /// Create a task
    Add {
        title: String,
        /// Mark the new task important
        #[arg(long)]
        important: bool,
        /// Create the task already completed
        #[arg(long)]
        completed: bool,
    },
    /// Rename a task
    Retitle { id: String, title: String },
    /// Mark a task completed
    Done { id: String },
    /// Move a completed task back to planned
    Reopen { id: String },
    /// Change a task's priority (important or normal)
    Prioritize { id: String, priority: String },
    /// Move a task into another section of the active grouping
    Move { id: String, section: usize },
    /// Delete a task
    Remove { id: String },
}

/// Console rendering of the view boundary: sections go to stdout, errors to
/// stderr.
struct ConsoleView {
    sorted_by: SortMode,
}

impl TaskListView for ConsoleView {
    fn display(&self, sections: Vec<Vec<Task>>) {
        for (index, section) in sections.iter().enumerate() {
            let title = section_title(self.sorted_by, index).unwrap_or("?");
            println!("{} ({})", title, section.len());
            for task in section {
                let status = match task.status {
                    TaskStatus::Planned => " ",
                    TaskStatus::Completed => "x",
                };
                let priority = match task.priority {
                    TaskPriority::Important => "!",
                    TaskPriority::Normal => " ",
                };
                println!("  [{}]{} {}  ({})", status, priority, task.title, task.id);
            }
        }
    }

    fn display_error(&self, title: &str, message: Option<&str>) {
        match message {
            Some(message) => eprintln!("error: {}: {}", title, message),
            None => eprintln!("error: {}", title),
        }
    }
}

/// Expands an id prefix typed on the command line into the full task.
fn resolve_task(tasks: &[Task], prefix: &str) -> anyhow::Result<Task> {
    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.id.starts_with(prefix))
        .collect();
    match matches.len() {
        0 => bail!("No task with id {}", prefix),
        1 => Ok(matches[0].clone()),
        n => bail!("Task id {} is ambiguous ({} matches)", prefix, n),
    }
}

/// Edit-boundary rule: a task title must carry visible text.
fn validate_title(title: &str) -> anyhow::Result<()> {
    if title.trim().is_empty() {
        bail!("Enter the task text");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the task list.
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = CONFIG.clone();
    if let Some(storage) = cli.storage {
        config.storage_backend = storage;
    }
    info!("Starting taskdeck ({} storage)", config.storage_backend);

    let storage = tasks::connect(&config).await?;
    let mut manager = TaskManager::new(storage);

    // Populate the collection up front; id-addressed commands check their
    // target against it before any backend write.
    manager.load_tasks().await?;

    let sort_mode = if cli.by_priority {
        SortMode::ByPriority
    } else {
        SortMode::ByStatus
    };
    let view = ConsoleView {
        sorted_by: sort_mode,
    };
    let mut presenter = TaskListPresenter::with_sort_mode(view, manager, sort_mode);

    match cli.command {
        Command::List => {
            presenter.republish();
        }
        Command::Add {
            title,
            important,
            completed,
        } => {
            validate_title(&title)?;
            let priority = if important {
                TaskPriority::Important
            } else {
                TaskPriority::Normal
            };
            let status = if completed {
                TaskStatus::Completed
            } else {
                TaskStatus::Planned
            };
            presenter.add_task(&title, priority, status).await;
        }
        Command::Retitle { id, title } => {
            validate_title(&title)?;
            let mut task = resolve_task(presenter.tasks(), &id)?;
            task.title = title;
            presenter.save_task(task).await;
        }
        Command::Done { id } => {
            let task = resolve_task(presenter.tasks(), &id)?;
            presenter.change_status(&task.id, TaskStatus::Completed).await;
        }
        Command::Reopen { id } => {
            let task = resolve_task(presenter.tasks(), &id)?;
            presenter.change_status(&task.id, TaskStatus::Planned).await;
        }
        Command::Prioritize { id, priority } => {
            let priority = match priority.as_str() {
                "important" => TaskPriority::Important,
                "normal" => TaskPriority::Normal,
                other => bail!("Unknown priority '{}' (expected important or normal)", other),
            };
            let mut task = resolve_task(presenter.tasks(), &id)?;
            task.priority = priority;
            presenter.save_task(task).await;
        }
        Command::Move { id, section } => {
            let task = resolve_task(presenter.tasks(), &id)?;
            presenter.move_task(&task.id, section).await;
        }
        Command::Remove { id } => {
            let task = resolve_task(presenter.tasks(), &id)?;
            presenter.remove_task(&task.id).await;
        }
    }

    Ok(())
}
