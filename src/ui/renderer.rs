use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, Component, EventHandler, EventType};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the dashboard until the user quits
pub async fn run_app(context: AppContext) -> anyhow::Result<()> {
    let mouse_enabled = context.config.ui.mouse_enabled;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(context);
    let mut event_handler = EventHandler::new();

    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| {
                let area = f.area();
                app.render(f, area);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick => {
                for action in app.process_background_actions() {
                    app.dispatch(action);
                    needs_render = true;
                }
            }
            EventType::Other => {}
            event => {
                app.handle_event(event)?;
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
