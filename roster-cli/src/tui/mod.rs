use std::io;
use std::time::{Duration, Instant};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use roster_cli::ApiClient;

mod app;
pub mod modals;
pub mod types;
pub mod views;
mod worker;

use app::App;

fn draw(frame: &mut Frame, app: &mut App) {
    views::employees::draw(
        frame,
        &app.employees,
        &mut app.table_state,
        &app.load_state,
        app.toast.as_ref(),
        app.confirm_delete,
        app.last_refresh,
        &app.server,
    );

    if let Some(employee) = &app.detail_view {
        modals::employee_detail::draw(frame, employee);
    }

    if let Some(form) = &app.form {
        modals::employee_form::draw(frame, form);
    }
}

pub async fn run(client: ApiClient) -> io::Result<()> {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (result_tx, result_rx) = mpsc::unbounded_channel();

    let server = client.base_url().to_string();
    tokio::spawn(worker::action_worker(client, action_rx, result_tx));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(action_tx, result_rx, server);
    app.refresh();

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        // Check for results from background worker
        while let Ok(result) = app.result_rx.try_recv() {
            app.handle_result(result);
        }
        app.expire_toast(Instant::now());

        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.form.is_some() {
                handle_form_input(app, key.code);
            } else if app.detail_view.is_some() {
                handle_detail_view_input(app, key.code);
            } else if app.confirm_delete.is_some() {
                handle_confirm_delete_input(app, key.code);
            } else {
                handle_normal_input(app, key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_form_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = &mut app.form {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = &mut app.form {
                form.focus_prev();
            }
        }
        KeyCode::Enter => {
            if let Some(form) = &app.form {
                if form.is_submit_field() {
                    app.submit_form();
                } else if let Some(form) = &mut app.form {
                    form.focus_next();
                }
            }
        }
        KeyCode::Right | KeyCode::Char(' ') => {
            if let Some(form) = &mut app.form {
                if form.is_department_field() {
                    form.next_department();
                } else if key_code == KeyCode::Char(' ')
                    && let Some(input) = form.current_input()
                {
                    input.push(' ');
                }
            }
        }
        KeyCode::Left => {
            if let Some(form) = &mut app.form
                && form.is_department_field()
            {
                form.prev_department();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.form
                && let Some(input) = form.current_input()
            {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = &mut app.form
                && let Some(input) = form.current_input()
            {
                input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_detail_view_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail_view(),
        KeyCode::Char('e') => app.open_edit_form(),
        _ => {}
    }
}

fn handle_confirm_delete_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
}

fn handle_normal_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down => app.next(),
        KeyCode::Up => app.previous(),
        KeyCode::Enter => app.open_detail_view(),
        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}
