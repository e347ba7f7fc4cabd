use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use crate::outline::browser::{Activation, Browser};
use crate::opener::Opener;
use crate::tui::input::{self, Action, Direction};
use crate::tui::render::{self, ViewRenderData};

#[derive(Debug)]
struct AppState {
    browser: Browser,
    opener: Opener,
    title: String,
    show_help: bool,
    status_message: Option<String>,
    scroll: usize,
    list_area: Rect,
}

impl AppState {
    fn new(browser: Browser, opener: Opener, title: impl Into<String>) -> Self {
        Self {
            browser,
            opener,
            title: title.into(),
            show_help: false,
            status_message: None,
            scroll: 0,
            list_area: Rect::default(),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let layout = render::layout(frame.area());
        let rows = self.browser.rows();
        let focused = self.browser.focused_index(&rows);
        self.list_area = layout.list;
        self.scroll = render::scroll_for_focus(
            self.scroll,
            focused,
            layout.list.height as usize,
            rows.len(),
        );

        let data = ViewRenderData {
            title: &self.title,
            rows: &rows,
            focused,
            scroll: self.scroll,
            mode: self.browser.mode(),
            policy: self.browser.policy(),
            message: self.status_message.as_deref(),
            show_help: self.show_help,
        };
        render::draw(frame, &layout, &data);
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = input::action_for_key(key);
        if self.show_help {
            if matches!(action, Action::ToggleHelp | Action::Quit) {
                self.show_help = false;
            }
            return false;
        }
        self.status_message = None;

        let page = (self.list_area.height as isize).max(1);
        match action {
            Action::Move(Direction::Up) => self.browser.move_focus(-1),
            Action::Move(Direction::Down) => self.browser.move_focus(1),
            Action::Move(Direction::Left) => self.browser.collapse_focused(),
            Action::Move(Direction::Right) => self.browser.expand_focused(),
            Action::First => self.browser.focus_first(),
            Action::Last => self.browser.focus_last(),
            Action::PageUp => self.browser.move_focus(-page),
            Action::PageDown => self.browser.move_focus(page),
            Action::Activate => {
                let activation = self.browser.activate_focused();
                self.apply_activation(activation);
            }
            Action::ToggleDisplayMode => {
                let mode = self.browser.toggle_display_mode();
                self.status_message = Some(format!("{} mode", mode.label()));
            }
            Action::ToggleHelp => self.show_help = true,
            Action::Quit => return true,
            Action::Noop => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(idx) = self.row_at(mouse.column, mouse.row) else {
                    return;
                };
                let rows = self.browser.rows();
                if let Some(row) = rows.get(idx) {
                    self.status_message = None;
                    let activation = self.browser.activate(&row.path);
                    self.apply_activation(activation);
                }
            }
            MouseEventKind::ScrollUp => self.browser.move_focus(-1),
            MouseEventKind::ScrollDown => self.browser.move_focus(1),
            _ => {}
        }
    }

    /// Row index under a terminal cell, if the cell lies in the outline area.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| self.scroll + (row - area.y) as usize)
    }

    fn apply_activation(&mut self, activation: Activation) {
        match activation {
            Activation::Open(url) => match self.opener.open(&url) {
                Ok(()) => self.status_message = Some(format!("opened {url}")),
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "failed to open link");
                    self.status_message = Some(format!("could not open link: {err}"));
                }
            },
            Activation::Toggled { .. } | Activation::Nothing => {}
        }
    }
}

pub fn run(browser: Browser, opener: Opener, title: &str) -> Result<()> {
    let mut app = AppState::new(browser, opener, title);
    info!(opener = app.opener.command(), "starting outline view");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| app.draw(f))?;
        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if matches!(key.kind, KeyEventKind::Release | KeyEventKind::Repeat) {
                    continue;
                }
                if app.handle_key(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }

    info!("outline view closed");
    Ok(())
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}
