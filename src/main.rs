use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use deskstack::desktop::Desktop;
use deskstack::drivers::console::ConsoleDriver;
use deskstack::log_buffer::{LogHandle, set_global_log};
use deskstack::runner::run_desktop;
use deskstack::{ConfigError, InteractionConfig, Point, Size, StoreConfig, tracing_sub};

const POLL_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(
    name = "deskstack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stacking window desktop for the terminal"
)]
struct DeskCli {
    /// Smallest width a resize may produce, in cells.
    #[arg(long = "min-width", value_name = "CELLS", default_value_t = 16)]
    min_width: u32,

    /// Smallest height a resize may produce, in cells.
    #[arg(long = "min-height", value_name = "CELLS", default_value_t = 5)]
    min_height: u32,

    /// Cells moved or resized per arrow key press.
    #[arg(long = "step", value_name = "CELLS", default_value_t = 1)]
    step: u32,

    /// Cells per arrow key press while Shift is held.
    #[arg(long = "large-step", value_name = "CELLS", default_value_t = 4)]
    large_step: u32,

    /// Stacking distance between the regular and always-on-top bands.
    #[arg(long = "pinned-offset", value_name = "Z", default_value_t = 1000)]
    pinned_offset: u32,

    /// Extra window to open at startup, by content kind. Repeatable.
    #[arg(long = "open", value_name = "KIND")]
    open: Vec<String>,

    /// Write logs to this file instead of the in-app log window.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

struct DeskConfig {
    store: StoreConfig,
    interaction: InteractionConfig,
    open: Vec<String>,
    log_file: Option<PathBuf>,
}

impl TryFrom<&DeskCli> for DeskConfig {
    type Error = ConfigError;

    fn try_from(cli: &DeskCli) -> Result<Self, Self::Error> {
        let interaction = InteractionConfig::new(
            Size::new(cli.min_width, cli.min_height),
            cli.step,
            cli.large_step,
        )?;
        let store = StoreConfig::new(
            cli.pinned_offset,
            Point::new(2, 1),
            Size::new(40, 12).max(interaction.min_size),
        )?;
        Ok(Self {
            store,
            interaction,
            open: cli.open.clone(),
            log_file: cli.log_file.clone(),
        })
    }
}

fn main() -> io::Result<()> {
    let args = DeskCli::parse();
    let config = DeskConfig::try_from(&args)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut desktop = Desktop::new(config.store, config.interaction);
    match &config.log_file {
        Some(path) => tracing_sub::init_with_file(path)?,
        None => {
            let log = LogHandle::default();
            set_global_log(log.clone());
            tracing_sub::init_default();
            desktop = desktop.with_log(log);
        }
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let size = terminal.size()?;
    desktop.set_area(ratatui::layout::Rect::new(0, 0, size.width, size.height));
    desktop.open_defaults();
    for kind in &config.open {
        desktop.open(kind, "");
    }
    tracing::info!(windows = desktop.store().len(), "desktop ready");

    let result = run_desktop(&mut terminal, ConsoleDriver::new(), &mut desktop, POLL_INTERVAL);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_cell_sized_configs() {
        let cli = DeskCli::parse_from(["deskstack"]);
        let config = DeskConfig::try_from(&cli).unwrap();
        assert_eq!(config.interaction.min_size, Size::new(16, 5));
        assert_eq!(config.interaction.step(true), 4);
        assert_eq!(config.store.pinned_offset, 1000);
        assert!(config.open.is_empty());
    }

    #[test]
    fn open_flag_repeats() {
        let cli = DeskCli::parse_from(["deskstack", "--open", "clock", "--open", "log"]);
        let config = DeskConfig::try_from(&cli).unwrap();
        assert_eq!(config.open, vec!["clock".to_string(), "log".to_string()]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cli = DeskCli::parse_from(["deskstack", "--min-width", "0"]);
        assert!(matches!(
            DeskConfig::try_from(&cli),
            Err(ConfigError::ZeroMinimumSize { .. })
        ));
        let cli = DeskCli::parse_from(["deskstack", "--step", "5", "--large-step", "2"]);
        assert!(matches!(
            DeskConfig::try_from(&cli),
            Err(ConfigError::LargeStepTooSmall { step: 5, large: 2 })
        ));
        let cli = DeskCli::parse_from(["deskstack", "--pinned-offset", "0"]);
        assert!(matches!(
            DeskConfig::try_from(&cli),
            Err(ConfigError::ZeroPinnedOffset)
        ));
    }
}
