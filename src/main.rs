mod app;
mod input;
mod ui;

use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{error, info, warn};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use tui_hooks::config::Config;
use tui_hooks::theme::Theme;

/// Command line options
struct Args {
    config: Option<PathBuf>,
    storage: Option<PathBuf>,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        config: None,
        storage: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                parsed.config = Some(option_value(&args, i));
                i += 2;
            }
            "-s" | "--storage" => {
                parsed.storage = Some(option_value(&args, i));
                i += 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                std::process::exit(1);
            }
        }
    }

    parsed
}

/// The argument following option `i`, or exit with an error
fn option_value(args: &[String], i: usize) -> PathBuf {
    match args.get(i + 1) {
        Some(value) => PathBuf::from(value),
        None => {
            eprintln!("Error: {} requires an argument", args[i]);
            std::process::exit(1);
        }
    }
}

/// Restore the terminal and log panics before the default hook prints them
fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );

        if let Some(location) = info.location() {
            error!(
                file = location.file(),
                line = location.line(),
                "panic occurred"
            );
        } else {
            error!("panic occurred");
        }

        if let Some(s) = info.payload().downcast_ref::<&str>() {
            error!(message = %s);
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            error!(message = %s);
        }

        default_hook(info);
    }));
}

/// Send logs to the configured file. The terminal belongs to the UI, so
/// without a file they are dropped.
fn init_logging(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level())
        .with_ansi(false);

    match config.log_file.as_ref().map(File::create) {
        Some(Ok(file)) => builder.with_writer(Mutex::new(file)).init(),
        Some(Err(e)) => {
            eprintln!("Warning: could not open log file: {}", e);
            builder.with_writer(io::sink).init();
        }
        None => builder.with_writer(io::sink).init(),
    }
}

fn print_help() {
    eprintln!("tui-hooks - undo/redo history demo for terminal UIs");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tui-hooks [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -c, --config <FILE>   Read settings from a TOML file");
    eprintln!("    -s, --storage <FILE>  Persist the value in this JSON file");
    eprintln!("    -h, --help            Print this help message");
}

fn main() -> io::Result<()> {
    let args = parse_args();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => Config::default(),
    };
    if args.storage.is_some() {
        config.storage_path = args.storage;
    }

    init_logging(&config);
    info!("tui-hooks started");

    let theme = config.load_theme().unwrap_or_else(|e| {
        warn!(error = %e, "falling back to the default theme");
        Theme::default()
    });

    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, theme);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "tui-hooks exited with an error");
    }
    result
}
