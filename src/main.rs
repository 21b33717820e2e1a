//! college-tui - browse, search and sort a list of colleges in the terminal
//!
//! Loads a static data set once, then runs the component event loop until
//! the user quits.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Args;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::time::Duration;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let args = Args::parse();
    let save_config = args.save_config;
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let settings = args.merge(config)?;
    logging::init_tracing(&settings.config.log_level);

    if let Some(e) = config_error {
        warn!(error = %e, "ignoring unreadable config, using defaults");
    }

    if save_config {
        settings.config.save()?;
        info!("saved settings as defaults");
    }

    // Load before touching the terminal so errors print normally
    let records = match &settings.config.data_path {
        Some(path) => services::load_colleges(path)
            .with_context(|| format!("could not load colleges from {}", path))?,
        None => services::bundled_colleges()?,
    };

    let mut app = App::new(records, settings)?.with_config_path(Config::config_path());
    app.init()?;

    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(250));
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        // The last row coming into view pulls in the next page
        if let Some(action) = app.after_draw() {
            dispatch(app, action)?;
            continue;
        }

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        if let Some(action) = action {
            dispatch(app, action)?;
        }
    }

    Ok(())
}

/// Apply an action and every follow-up it produces
fn dispatch(app: &mut App, action: Action) -> Result<()> {
    let mut current = Some(action);
    while let Some(a) = current {
        if !matches!(a, Action::Tick) {
            debug!(action = %a, "dispatch");
        }
        current = app.update(a)?;
    }
    Ok(())
}
