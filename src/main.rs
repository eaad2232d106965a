mod app;
mod components;
mod config;
mod drive;
mod error;
mod event;
mod handler;
mod logging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::App;
use crate::config::{AppConfig, GeneralConfig, ListingConfig, ThemeConfig};
use crate::drive::dataset;
use crate::event::{Event, EventHandler};
use crate::tui::{install_panic_hook, Tui};

/// A terminal cloud-drive browser.
#[derive(Parser, Debug)]
#[command(name = "drive", version, about)]
struct Cli {
    /// JSON dataset to browse (defaults to the built-in sample drive)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Config file to load on top of the default locations
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color scheme: dark, light or custom
    #[arg(long)]
    theme: Option<String>,

    /// Label of the root breadcrumb
    #[arg(long, value_name = "TEXT")]
    root_label: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Use ASCII markers instead of Nerd Font icons
    #[arg(long)]
    ascii: bool,

    /// Append log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the dataset as JSON and exit
    #[arg(long)]
    print_dataset: bool,
}

impl Cli {
    /// CLI flags as a partial config that overrides every file source.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                root_label: self.root_label.clone(),
                data_path: self.data.as_ref().map(|p| p.display().to_string()),
                mouse: self.no_mouse.then_some(false),
                log_file: self.log_file.as_ref().map(|p| p.display().to_string()),
                log_level: None,
            },
            listing: ListingConfig {
                use_icons: self.ascii.then_some(false),
                show_type_column: None,
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
        }
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    logging::init(config.log_file(), config.log_level())?;

    let entries = match config.data_path() {
        Some(path) => {
            if !path.exists() {
                return Err(error::AppError::InvalidPath(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            dataset::load_dataset(path)?
        }
        None => dataset::builtin_dataset(),
    };

    if cli.print_dataset {
        println!("{}", dataset::to_json(&entries)?);
        return Ok(());
    }

    install_panic_hook();

    let mut tui = Tui::new(config.mouse_enabled())?;
    let mut app = App::new(entries, &config);
    log::info!(
        "starting with {} root entries, theme {}",
        app.navigator.root_entries().len(),
        config.theme_scheme()
    );
    let mut events = EventHandler::new(Duration::from_millis(250));

    loop {
        tui.draw(&mut app)?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Mouse(mouse) => handler::handle_mouse_event(&mut app, mouse),
            Event::Tick => {}
            Event::Resize(w, h) => log::debug!("resized to {}x{}", w, h),
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    log::info!("exiting");
    Ok(())
}
