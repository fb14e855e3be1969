use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use life_os_core::config::{Config, MetricConfig, MetricType};
use life_os_core::dump::DumpReport;
use life_os_core::journal::JournalEntry;
use life_os_core::memory::{MemoryStore, Section};
use life_os_core::research::{ResearchFindings, Trend};
use life_os_core::weekly::WeeklyCheckin;
use life_os_core::Result;

mod args;
mod input;

use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Dump { file }) => handle_dump(&base_dir, file.as_deref()),
        Some(Commands::Journal) => handle_journal(&base_dir),
        Some(Commands::Weekly) => handle_weekly(&base_dir),
        Some(Commands::Setup) => handle_setup(&base_dir),
        Some(Commands::Research) => handle_research(&base_dir),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "life-os", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("LIFE_OS_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".life-os"))
        .unwrap_or_else(|| PathBuf::from(".life-os"))
}

fn handle_dump(base_dir: &Path, file: Option<&Path>) -> Result<()> {
    println!("{}", "Brain Dump Processor".cyan().bold());

    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            println!("Paste or type your thoughts. Press Ctrl+D when done.");
            input::read_all_stdin()?
        }
    };

    if text.trim().is_empty() {
        println!("No content provided.");
        return Ok(());
    }

    let report = DumpReport::process(&text)?;
    let now = Local::now();

    let store = MemoryStore::new(base_dir);
    let path = store.write_note(
        Section::BrainDumps,
        &DumpReport::filename(now),
        &report.to_markdown(now),
    )?;

    println!();
    println!("{} {}", "Saved:".green(), path.display());
    println!();
    println!("Summary:");
    println!("  Total thoughts: {}", report.thoughts.total());
    for (category, count) in report.thoughts.counts() {
        if count > 0 {
            println!("  {}: {}", category.title(), count);
        }
    }
    if !report.actions.is_empty() {
        println!("  Action items: {}", report.actions.len());
    }

    Ok(())
}

fn handle_journal(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;

    println!("{}", "Daily Journal - Evening Reflection".cyan().bold());
    println!();
    println!("Quick check-in:");

    let mood = input::prompt_or("Mood (1-10): ", "5")?;
    let energy = input::prompt_or("Energy level (1-10): ", "5")?;

    let mut entry = JournalEntry {
        mood,
        energy,
        responses: Vec::new(),
    };

    for prompt in &config.daily.prompts {
        println!();
        println!("{}", prompt);
        let answer = input::prompt("> ")?;
        if !answer.is_empty() {
            entry.responses.push((prompt.clone(), answer));
        }
    }

    let now = Local::now();
    let store = MemoryStore::new(base_dir);
    let path = store.write_note(
        Section::Journal,
        &JournalEntry::filename(now),
        &entry.to_markdown(now),
    )?;

    println!();
    println!("{} {}", "Saved:".green(), path.display());

    Ok(())
}

fn handle_weekly(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;

    println!("{}", "Weekly Check-in".cyan().bold());
    println!();

    let mut checkin = WeeklyCheckin::default();
    for metric in &config.weekly.metrics {
        println!("{}", metric.prompt);
        let value = input::prompt("> ")?;
        if !value.is_empty() {
            checkin.metrics.push((metric.name.clone(), value));
        }
    }

    let now = Local::now();
    let dashboard = checkin.to_markdown(&config.weekly.prompts, now);

    let store = MemoryStore::new(base_dir);
    let path = store.write_note(Section::Weekly, &WeeklyCheckin::filename(now), &dashboard)?;

    println!();
    println!("{} {}", "Saved:".green(), path.display());
    if let Some(last) = store.last_weekly(now) {
        println!("Last week's check-in: {}", last.display());
    }
    println!();
    println!("{}", dashboard);

    Ok(())
}

fn handle_setup(base_dir: &Path) -> Result<()> {
    println!("{}", "Weekly Check-in Setup".cyan().bold());
    println!();

    let mut config = Config::load(base_dir)?;

    println!("Let's set up your weekly check-in. Enter your metrics or press Enter to skip.");
    println!("Example: 'newsletter_subscribers' or 'revenue' or 'workouts'");
    println!("Type 'done' when finished.");
    println!();

    let mut metrics = Vec::new();
    loop {
        let name = input::prompt("Metric name (or 'done'): ")?;
        if name.is_empty() || name.eq_ignore_ascii_case("done") {
            break;
        }

        let question = input::prompt_or(
            &format!("  Prompt for {}: ", name),
            &format!("Current {}?", name),
        )?;
        let kind = input::prompt_or("  Type [number/text]: ", "text")?;
        let kind = if kind.eq_ignore_ascii_case("number") {
            MetricType::Number
        } else {
            MetricType::Text
        };

        metrics.push(MetricConfig {
            name,
            prompt: question,
            kind,
        });
    }

    if !metrics.is_empty() {
        config.weekly.metrics = metrics;
    }

    println!();
    println!("Now let's customize your reflection prompts.");
    println!("Current prompts:");
    for (i, prompt) in config.weekly.prompts.iter().enumerate() {
        println!("  {}. {}", i + 1, prompt);
    }

    println!();
    let mut custom = input::prompt("Add custom prompt (or Enter to skip): ")?;
    while !custom.is_empty() {
        config.weekly.prompts.push(custom);
        custom = input::prompt("Add another (or Enter to finish): ")?;
    }

    config.save(base_dir)?;

    println!();
    println!("{} {}", "Saved:".green(), Config::path(base_dir).display());
    println!();
    println!("To schedule your weekly check-in, add a cron entry like:");
    println!("  0 19 * * 0  life-os weekly");

    Ok(())
}

fn handle_research(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;

    println!("{}", "Content Research".cyan().bold());
    println!();
    println!("Researching: {}", config.research.interests.join(", "));
    println!("(Live source integration is not wired up; findings are entered manually.)");
    println!();
    println!("Quick research: What trends did you notice?");

    let title = input::prompt("Trend title: ")?;
    if title.is_empty() {
        println!();
        println!(
            "Skipping research entry. Configure sources in {} for future runs.",
            Config::path(base_dir).display()
        );
        return Ok(());
    }

    let summary = input::prompt("Summary: ")?;
    let source = input::prompt("Source: ")?;

    let now = Local::now();
    let findings = ResearchFindings {
        summary: Some(format!("Research completed on {}", now.format("%Y-%m-%d"))),
        trends: vec![Trend {
            title,
            summary,
            source,
            url: String::new(),
        }],
        ideas: Vec::new(),
        resources: Vec::new(),
    };

    let store = MemoryStore::new(base_dir);
    let path = store.write_note(
        Section::Research,
        &ResearchFindings::filename(now),
        &findings.to_markdown(now),
    )?;

    println!();
    println!("{} {}", "Saved:".green(), path.display());

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", Config::path(base_dir).display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::Show => {
            let config = Config::load(base_dir)?;
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}
