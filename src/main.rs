// Brainrot Studio: terminal front end for the automated video generator

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use brainrot::config::{Config, LogConfig};
use brainrot::generate::LoggingGenerator;
use brainrot::ui::theme::ThemeMode;
use brainrot::ui::App;

struct Args {
    config: Option<PathBuf>,
    light: bool,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--config <file.toml>] [--light]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>   Load settings from this TOML file");
    eprintln!("  --light           Start in light mode");
    eprintln!("  -h, --help        Show this message");
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("brainrot");

    let mut parsed = Args {
        config: None,
        light: false,
    };
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" => match rest.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config needs a file path");
                    print_usage(program_name);
                    std::process::exit(1);
                }
            },
            "--light" => parsed.light = true,
            "-h" | "--help" => {
                print_usage(program_name);
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: unexpected argument '{}'", other);
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }
    parsed
}

/// Send tracing output to the log file; the terminal belongs to the UI
fn init_logging(log: &LogConfig) -> io::Result<PathBuf> {
    let path = log.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(1);
        }
    };
    if args.light {
        config.theme = ThemeMode::Light;
    }

    let log_path = init_logging(&config.log)?;
    tracing::info!(log = %log_path.display(), "brainrot studio starting");

    let generator = LoggingGenerator::new(config.handoff_dir.clone());
    let mut app = App::new(&config, Box::new(generator));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("brainrot studio exiting");
    Ok(())
}
