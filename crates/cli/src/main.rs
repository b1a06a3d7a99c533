//! Habitman CLI - personal habit tracker.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use habitman_core::{Category, Habit, HabitTracker};
use habitman_storage::TrackerStore;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "habitman")]
#[command(about = "Personal habit tracker", long_about = None)]
struct Cli {
    /// Data file; the format follows the extension (.json or .csv)
    #[arg(long, default_value = "habits.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Target description, e.g. "30 minutes daily"
        target: String,
        /// Category (HEALTH, PRODUCTIVITY, LEARNING, PERSONAL, OTHER)
        #[arg(long, default_value = "OTHER")]
        category: Category,
    },
    /// Mark a habit done for a date
    Done {
        /// Habit name
        name: String,
        /// Date token: "today", "yesterday", a day offset, or YYYY-MM-DD
        #[arg(long, default_value = "today")]
        date: String,
    },
    /// Set the reminder flag on a habit
    Remind {
        /// Habit name
        name: String,
    },
    /// List habits with their current streaks
    List,
    /// Print the habit tracking report
    Report {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Csv,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("csv") => Ok(FileFormat::Csv),
            other => bail!("unsupported data file extension: {:?}", other),
        }
    }
}

fn load(tracker: &mut HabitTracker, path: &Path, format: FileFormat) -> Result<()> {
    match format {
        FileFormat::Json => tracker.load_from_json(path)?,
        FileFormat::Csv => tracker.load_from_csv(path)?,
    }
    Ok(())
}

fn save(tracker: &HabitTracker, path: &Path, format: FileFormat) -> Result<()> {
    match format {
        FileFormat::Json => tracker.save_to_json(path)?,
        FileFormat::Csv => tracker.save_to_csv(path)?,
    }
    Ok(())
}

fn find_habit_mut<'a>(tracker: &'a mut HabitTracker, name: &str) -> Result<&'a mut Habit> {
    match tracker.habits.iter_mut().find(|h| h.name == name) {
        Some(habit) => Ok(habit),
        None => bail!("no habit named '{}'", name),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let format = FileFormat::from_path(&cli.file)?;
    let mut tracker = HabitTracker::new();
    if cli.file.exists() {
        load(&mut tracker, &cli.file, format)?;
    }

    match cli.command {
        Commands::Add {
            name,
            target,
            category,
        } => {
            let habit = Habit::new(name, target, category);
            println!("Added habit: {}", habit);
            tracker.add_habit(habit);
            save(&tracker, &cli.file, format)?;
        }
        Commands::Done { name, date } => {
            let habit = find_habit_mut(&mut tracker, &name)?;
            habit.mark_done(&date);
            save(&tracker, &cli.file, format)?;
            info!("Marked '{}' done for {}", name, date);
        }
        Commands::Remind { name } => {
            let habit = find_habit_mut(&mut tracker, &name)?;
            habit.set_reminder();
            save(&tracker, &cli.file, format)?;
            println!("Reminder set for '{}'", name);
        }
        Commands::List => {
            println!("Habits ({})", tracker.habits.len());
            for habit in &tracker.habits {
                println!("  {}", habit);
            }
        }
        Commands::Report { from, to } => {
            let report = tracker.generate_habit_report(from.as_deref(), to.as_deref())?;
            print!("{}", report);
        }
    }

    Ok(())
}
