use crossterm::event::Event;
use ratatui::Frame;

use super::Tui;

/// Trait for TUI applications.
///
/// Applications executed by `Tui::run()` must implement this trait.
pub(crate) trait App {
    /// Initializes the application. Called at the start of `Tui::run()`;
    /// use this to configure the tick rate.
    fn init(&mut self, tui: &mut Tui);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, tui: &mut Tui, event: &Event);

    /// Draws the screen (called on each render event).
    fn draw(&self, frame: &mut Frame);

    /// Updates game logic (called on each tick event).
    fn update(&mut self, tui: &mut Tui);
}
