//! Events surfaced to [`crate::screen::Screen::start_loop`] callbacks.
//!
//! [`Event::FocusGained`] is the terminal's equivalent of the application
//! becoming active again; hosts typically route it to
//! [`crate::walker::Walker::on_app_activated`].

use crossterm::event::{self, KeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The terminal regained focus, i.e. the application became active.
    FocusGained,
    /// The terminal lost focus.
    FocusLost,
    /// The terminal was resized to the given number of columns and rows.
    Resize(u16, u16),
    Char(char),
    Enter,
    Esc,
}

impl Event {
    pub fn from_crossterm_event(event: event::Event) -> Option<Self> {
        match event {
            event::Event::FocusGained => Some(Event::FocusGained),
            event::Event::FocusLost => Some(Event::FocusLost),
            event::Event::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
            event::Event::Key(key) => match key.code {
                KeyCode::Enter => Some(Event::Enter),
                KeyCode::Esc => Some(Event::Esc),
                KeyCode::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn focus_events_map() {
        assert_eq!(
            Event::from_crossterm_event(event::Event::FocusGained),
            Some(Event::FocusGained)
        );
        assert_eq!(
            Event::from_crossterm_event(event::Event::FocusLost),
            Some(Event::FocusLost)
        );
    }

    #[test]
    fn key_events_map() {
        let key = event::Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm_event(key), Some(Event::Char('q')));
        let esc = event::Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm_event(esc), Some(Event::Esc));
        let ignored = event::Event::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm_event(ignored), None);
    }

    #[test]
    fn resize_maps() {
        assert_eq!(
            Event::from_crossterm_event(event::Event::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }
}
