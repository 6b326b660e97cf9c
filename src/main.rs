mod app;
mod event;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use homerow::config::Config;
use homerow::engine::profile::LearnerProfile;
use homerow::generator::{self, GenerationMode};
use homerow::logging;
use homerow::session::practice::PracticeSession;
use homerow::store::json_store::JsonStore;

use app::App;
use event::AppEvent;

#[derive(Parser)]
#[command(name = "homerow", version, about = "Adaptive terminal typing practice")]
struct Cli {
    #[arg(short, long, value_enum, help = "Text generation mode")]
    mode: Option<GenerationMode>,

    #[arg(short, long, help = "Number of words per exercise (word mode)")]
    words: Option<usize>,

    #[arg(short, long, help = "Number of symbols per exercise (character mode)")]
    length: Option<usize>,

    #[arg(long, help = "Path to the stats file")]
    stats_file: Option<PathBuf>,

    #[arg(long, help = "Start over with a fresh profile")]
    reset: bool,

    #[arg(long, help = "Write the effective settings to the config file")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|err| {
        eprintln!("Ignoring unreadable config: {err}");
        Config::default()
    });
    if let Some(mode) = cli.mode {
        config.generation_mode = mode;
    }
    if let Some(words) = cli.words {
        config.word_count = words;
    }
    if let Some(length) = cli.length {
        config.char_length = length;
    }
    if let Some(path) = cli.stats_file {
        config.stats_file = Some(path);
    }
    config.validate();

    if cli.save_config {
        config.save()?;
    }

    let _log_guard = logging::init_tracing(&config.log_level);

    let store = match &config.stats_file {
        Some(path) => JsonStore::with_path(path),
        None => JsonStore::new(),
    };

    let mut profile = store.load_profile().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load stats, starting fresh");
        if err.is_unreadable_content()
            && let Err(backup_err) = store.move_aside()
        {
            tracing::warn!(error = %backup_err, "could not back up stats file");
        }
        LearnerProfile::new()
    });
    if cli.reset {
        tracing::info!(path = %store.path().display(), "resetting profile");
        profile.reset();
    }

    tracing::info!(
        mode = config.generation_mode.as_str(),
        size = config.exercise_size(),
        unlocked = profile.unlocked_count(),
        "starting homerow"
    );

    let text_generator = generator::build(config.generation_mode, SmallRng::from_entropy());
    let session = PracticeSession::new(
        profile,
        text_generator,
        Some(store),
        config.exercise_size(),
    );
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    if let Err(err) = app.session.finish() {
        eprintln!("Could not save progress: {err}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match event::next_event(Duration::from_millis(100))? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
