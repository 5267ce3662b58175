use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod analysis;
mod cli_style;
mod config;
mod provider;
mod request_log;
mod server;

use cli_style::{colors, get_styles, marks, print_banner, print_error, print_goodbye};

use config::DEFAULT_LOG_FILE;
use request_log::LogRecord;

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the request log file to watch.
    #[clap(long, default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,

    /// Number of recent entries to print on startup.
    #[clap(short, long, default_value_t = 5)]
    pub count: usize,

    /// Print the recent entries and exit instead of watching.
    #[clap(long)]
    pub once: bool,
}

fn short_timestamp(iso: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%H:%M:%S").to_string(),
        Err(_) => iso.to_string(),
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

fn format_entry(record: &LogRecord) -> String {
    let timestamp = short_timestamp(&record.timestamp);
    let text = truncate_chars(&record.request.text, 40);

    if record.success {
        let color_count = record
            .response
            .as_ref()
            .map(|r| r.colors.len())
            .unwrap_or(0);
        let mood = record
            .response
            .as_ref()
            .and_then(|r| r.mood)
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "[{}] {} '{}' -> {} colors ({})",
            timestamp.with(colors::DIM),
            marks::CHECK.with(colors::GREEN).bold(),
            text.with(colors::WHITE),
            color_count,
            mood.with(colors::PURPLE)
        )
    } else {
        let error = record.error.as_deref().unwrap_or("Unknown error");
        format!(
            "[{}] {} '{}' -> ERROR: {}",
            timestamp.with(colors::DIM),
            marks::CROSS_MARK.with(colors::RED).bold(),
            text.with(colors::WHITE),
            error.with(colors::RED)
        )
    }
}

fn print_recent(path: &Path, count: usize) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(count);

    println!("{}", "Recent entries:".with(colors::CYAN).bold());
    if lines[start..].is_empty() {
        println!("   {}", "(none yet)".with(colors::DIM));
    }
    for line in &lines[start..] {
        if let Ok(record) = serde_json::from_str::<LogRecord>(line) {
            println!("   {}", format_entry(&record));
        }
    }
    println!();
    Ok(())
}

fn watch(path: &Path) -> Result<()> {
    println!(
        "{}",
        "Watching for new entries, press Ctrl+C to stop...".with(colors::DIM)
    );
    println!();

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl+C handler")?;

    let mut last_size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_secs(1));

        let current_size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(_) => continue,
        };

        if current_size < last_size {
            // The log was cleared, start over from the new end
            last_size = current_size;
            continue;
        }
        if current_size == last_size {
            continue;
        }

        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(last_size))?;
        let mut new_content = String::new();
        file.read_to_string(&mut new_content)?;
        last_size = current_size;

        for line in new_content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(record) = serde_json::from_str::<LogRecord>(line) {
                println!(
                    " {} {}",
                    marks::ARROW_RIGHT.with(colors::CYAN),
                    format_entry(&record)
                );
            }
        }
    }

    print_goodbye();
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    print_banner();

    if !args.file.exists() {
        print_error(&format!("Log file not found: {}", args.file.display()));
        std::process::exit(1);
    }

    print_recent(&args.file, args.count)?;

    if args.once {
        return Ok(());
    }

    watch(&args.file)
}
