use std::time::Duration;

use super::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the
/// [`App`] trait.
#[derive(Default, Debug)]
pub(crate) struct Tui {
    events: EventLoop,
}

impl Tui {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (Hz, ticks per second).
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn set_tick_rate(&mut self, rate: u64) {
        self.events
            .set_tick_interval(Some(Duration::from_secs_f64(1.0 / rate as f64)));
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `Tick`: calls `app.update()`
    ///    - `Render`: calls `app.draw()`
    ///    - `Crossterm`: calls `app.handle_event()`
    pub(crate) fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, &event);
                    }
                }
            }
            Ok(())
        })
    }
}
