//! syllabus: A checkable syllabus tree for the terminal.

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use syllabus::app_state::{AppState, Command};
use syllabus::store::FileStore;
use syllabus::syllabus::Syllabus;
use syllabus::{config, logging, ui};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "syllabus")]
#[command(about = "Checkable, collapsible syllabus tree", long_about = None)]
struct Args {
    /// Syllabus document to display
    #[arg(value_name = "DATA")]
    data: Option<PathBuf>,

    /// File that stores check marks between sessions
    #[arg(long)]
    store: Option<PathBuf>,

    /// Configuration file to read instead of ./syllabus.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(config::Config::load, config::Config::load_from);

    // Override config with command line args
    if let Some(data) = args.data {
        cfg.data_path = data.to_string_lossy().to_string();
    }
    if let Some(store) = args.store {
        cfg.store_path = store.to_string_lossy().to_string();
    }

    let store_path = cfg.resolved_store_path();
    logging::init(&store_path.with_file_name("syllabus.log"), &cfg.log_filter);

    let state = match Syllabus::load(&PathBuf::from(&cfg.data_path)) {
        Ok(document) => {
            info!(
                path = %cfg.data_path,
                sections = document.sections.len(),
                "loaded syllabus"
            );
            AppState::new(document, Box::new(FileStore::open(&store_path)))
        }
        Err(e) => {
            error!(path = %cfg.data_path, error = %e, "error loading syllabus data");
            AppState::failed()
        }
    };

    run_tui(state, &cfg)
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up | KeyCode::Char('k') => {
                app.cursor_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.cursor_down();
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.collapse_or_parent();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.expand_selected();
                None
            }
            KeyCode::Char(' ') => app.check_selected(),
            KeyCode::Enter => app.toggle_selected(),
            KeyCode::Tab | KeyCode::Char(']') => app.nav.next().map(Command::ActivateSection),
            KeyCode::BackTab | KeyCode::Char('[') => app.nav.prev().map(Command::ActivateSection),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|n| usize::try_from(n).ok())
                .map(|n| Command::ActivateSection(n - 1)),
            _ => None,
        };

        if let Some(command) = command {
            app.dispatch(command);
        }
    }
}
