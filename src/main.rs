use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use bannerkit::App;
use bannerkit::config::{self, Config, ConfigResult};

/// Transient status banners demo
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal demo of a refreshing banner and an auto-hiding restored banner"
)]
struct Args {
    /// Config file to use instead of ~/.config/bannerkit/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// How long the restored banner stays visible, in milliseconds
    #[arg(long, value_name = "MS")]
    auto_hide_ms: Option<u64>,

    /// Default text of the refreshing banner
    #[arg(long, value_name = "TEXT")]
    refresh_message: Option<String>,

    /// Default text of the restored banner
    #[arg(long, value_name = "TEXT")]
    restore_message: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of file configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(ms) = self.auto_hide_ms {
            config.indicators.auto_hide_ms = ms;
        }
        if let Some(message) = &self.refresh_message {
            config.indicators.refresh_message = message.clone();
        }
        if let Some(message) = &self.restore_message {
            config.indicators.restore_message = message.clone();
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/bannerkit-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_logging();

    color_eyre::install()?;

    let args = Args::parse();

    // An explicit config path must exist and parse; the default one may not
    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => ConfigResult {
            config: config::load_config_from(path)?,
            warning: None,
        },
        None => config::load_config(),
    };
    args.apply_overrides(&mut config);

    if args.print_config {
        print!("{}", config::to_toml(&config)?);
        return Ok(());
    }

    let mut app = App::new(&config);
    if let Some(warning) = warning {
        app.set_status(warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BANNERKIT DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/bannerkit-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== BANNERKIT DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
