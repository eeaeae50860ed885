use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use super::presenter::Presenter;
use crate::config::UiConfig;
use crate::game::COLS;
use crate::session::{GameEvent, Session};

pub struct App {
    session: Session,
    events: Receiver<GameEvent>,
    presenter: Presenter,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let mut session = Session::new();
        let events = session.subscribe();
        App {
            session,
            events,
            presenter: Presenter::new(config),
            selected_column: config.start_column,
            start_column: config.start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!("interactive game started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!("interactive game closed");
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.selected_column = self.start_column;
            }
            _ => {}
        }
        self.sync_presenter();
    }

    /// Drop piece in the given column; full columns and finished games do nothing.
    fn drop_piece(&mut self, column: usize) {
        if self.session.attempt_move(column).is_none() {
            debug!(column, "move ignored");
        }
    }

    fn sync_presenter(&mut self) {
        for event in self.events.try_iter() {
            self.presenter.apply(&event);
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.session.state(),
            &self.presenter,
            self.selected_column,
        );
    }
}
