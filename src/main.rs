use std::io::{self, stdout};

use anyhow::Context;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use quest_mapper::cli::parse_args;
use quest_mapper::embed::is_embedded;
use quest_mapper::logging::{LogTarget, init_logging};
use quest_mapper::snapshot::write_snapshot;
use quest_mapper::ui::render_app;
use quest_mapper::{App, AppAction, Dataset, FilterState, MatrixView};

fn main() -> anyhow::Result<()> {
    let dataset = Dataset::builtin();
    let config = parse_args(dataset).context("failed to start quest mapper")?;
    let embedded = config.force_embed || is_embedded();

    // Snapshot mode: print the derived view and exit, no terminal setup
    if let Some(format) = config.snapshot {
        let target = config
            .log_file
            .as_deref()
            .map_or(LogTarget::Stderr, LogTarget::File);
        init_logging(target).context("failed to open log file")?;

        let state = FilterState::new(dataset, &config.initial);
        let view = MatrixView::build(dataset, &state);
        tracing::debug!(?format, pattern = %state.active_pattern_id, "writing snapshot");
        write_snapshot(&mut stdout().lock(), &view, format)?;
        return Ok(());
    }

    let target = config
        .log_file
        .as_deref()
        .map_or(LogTarget::Disabled, LogTarget::File);
    init_logging(target).context("failed to open log file")?;
    tracing::info!(
        embedded,
        config = ?config.config_source,
        "starting quest mapper"
    );

    let mut app = App::new(dataset, config.initial, embedded);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result.context("terminal I/O failed")?;
    tracing::info!("quest mapper closed");
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render_app(frame, app))?;

        // Block until the next event; resizes simply trigger a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code, key.modifiers) == AppAction::Quit {
                break;
            }
        }
    }

    Ok(())
}
