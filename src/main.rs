use anyhow::Result;
use clap::Parser;

use barcarte::app::App;
use barcarte::cli::{print_catalog, print_completions, Cli, Commands};
use barcarte::config::{get_config_path, Config};
use barcarte::menu::Catalog;
use barcarte::styles::{init_theme, ThemeType};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        // This ensures the terminal is usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        // Call the original panic hook to show the panic message
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let mut config = Config::load_or_create(&get_config_path())?;
    if let Some(menu) = cli.menu {
        config.menu_path = Some(menu);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_colors {
        config.theme = "nocolor".to_string();
    }

    // Non-interactive commands don't need the TUI or logging setup
    match cli.command {
        Some(Commands::Completions { shell }) => {
            print_completions(shell);
            return Ok(());
        }
        Some(Commands::Show) => {
            let catalog = match &config.menu_path {
                Some(path) => Catalog::load(path)?,
                None => Catalog::builtin(),
            };
            print_catalog(&catalog);
            return Ok(());
        }
        None => {}
    }

    // Set up panic hook to restore terminal on panic
    setup_panic_hook();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("barcarte");
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging (the terminal belongs to the TUI)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "barcarte.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    init_theme(config.theme.parse::<ThemeType>().unwrap_or_default());

    let mut app = App::new(config)?;
    let result = app.run();

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    drop(guard);

    result
}
