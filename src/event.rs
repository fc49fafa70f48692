use crate::github::types::Record;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    ResizeSettled,
    ReposLoaded(std::result::Result<Vec<Record>, String>),
}
