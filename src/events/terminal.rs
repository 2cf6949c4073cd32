use crate::state::{DraftField, State, StateError};
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let polled = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => tx_clone.send(Event::Key(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => tx_clone.send(Event::Mouse(mouse)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => Ok(()),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if polled.is_err() || tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Key(key) => Ok(handle_key(state, key)),
            Event::Mouse(mouse) => {
                handle_mouse(state, mouse);
                Ok(true)
            }
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // The detail overlay is drawn on top, so it takes input first
    let result = if state.get_viewed_post().is_some() {
        detail_key(state, key);
        Ok(())
    } else if state.is_create_open() {
        create_key(state, key)
    } else {
        return board_key(state, key);
    };
    report(result);
    true
}

fn detail_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.close_post(),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_detail_up(),
        _ => {}
    }
}

fn create_key(state: &mut State, key: KeyEvent) -> Result<(), StateError> {
    let field = state.get_draft_field();
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.submit_draft()?
        }
        KeyCode::Esc => state.cancel_create(),
        KeyCode::Tab => state.next_draft_field(),
        KeyCode::BackTab => state.previous_draft_field(),
        KeyCode::Enter => match field {
            DraftField::Content => state.add_draft_char('\n'),
            DraftField::Submit => state.submit_draft()?,
            DraftField::Cancel => state.cancel_create(),
            DraftField::Title | DraftField::Image => state.next_draft_field(),
        },
        KeyCode::Backspace if field.is_text() => state.remove_draft_char(),
        KeyCode::Char(c)
            if field.is_text()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.add_draft_char(c)
        }
        _ => {}
    }
    Ok(())
}

fn board_key(state: &mut State, key: KeyEvent) -> bool {
    let result = match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('n') => {
            state.open_create_overlay();
            Ok(())
        }
        KeyCode::Char('r') => state.refresh_posts(),
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_post();
            Ok(())
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous_post();
            Ok(())
        }
        KeyCode::Enter => state.open_selected_post(),
        _ => Ok(()),
    };
    report(result);
    true
}

/// Apply a mouse event to the state. Only left clicks act.
///
pub fn handle_mouse(state: &mut State, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => report(state.click_at(mouse.column, mouse.row)),
        MouseEventKind::ScrollDown if state.get_viewed_post().is_some() => {
            state.scroll_detail_down()
        }
        MouseEventKind::ScrollUp if state.get_viewed_post().is_some() => state.scroll_detail_up(),
        _ => {}
    }
}

fn report(result: Result<(), StateError>) {
    if let Err(e) = result {
        error!("Failed to handle terminal event: {}", e);
    }
}
