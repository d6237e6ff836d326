//! Keyboard and mouse handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::ui::interaction::handle_click_action;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let columns = self.grid_columns.max(1) as isize;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('m') | KeyCode::Enter => self.toggle_disclosure(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Tab => {
                self.panel.focus_next();
                self.mark_dirty();
            }
            KeyCode::BackTab => {
                self.panel.focus_prev();
                self.mark_dirty();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.panel.focus_offset(1);
                self.mark_dirty();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.panel.focus_offset(-1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.panel.focus_offset(columns);
                self.mark_dirty();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.panel.focus_offset(-columns);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let before = self.hovered_url();
                self.pointer = Some(position);
                if self.hovered_url() != before {
                    self.mark_dirty();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some(position);
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::ScrollDown => {
                self.panel.focus_offset(self.grid_columns.max(1) as isize);
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp => {
                self.panel.focus_offset(-(self.grid_columns.max(1) as isize));
                self.mark_dirty();
            }
            _ => {}
        }
    }
}
