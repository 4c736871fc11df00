use blockfall_engine::Session;
use crossterm::event::{Event, KeyCode};
use rand::Rng as _;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    view::widgets::SessionDisplay,
};

use super::CommandArgs;

pub(crate) fn run(args: &CommandArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        "starting session, seed={seed:#018x}, tick_rate={}",
        args.tick_rate,
    );

    let mut app = PlayApp::new(Session::with_seed(seed), args.tick_rate);
    Tui::new().run(&mut app)
}

#[derive(Debug)]
struct PlayApp {
    screen: PlayScreen,
    tick_rate: u64,
}

impl PlayApp {
    fn new(session: Session, tick_rate: u64) -> Self {
        Self {
            screen: PlayScreen::new(session),
            tick_rate,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(self.tick_rate);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update();
    }
}

#[derive(Debug)]
struct PlayScreen {
    session: Session,
    is_exiting: bool,
    game_over_logged: bool,
}

impl PlayScreen {
    fn new(session: Session) -> Self {
        Self {
            session,
            is_exiting: false,
            game_over_logged: false,
        }
    }

    fn handle_event(&mut self, event: &Event) {
        let is_playing = self.session.session_state().is_playing();
        let is_game_over = self.session.session_state().is_game_over();

        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Left if is_playing => _ = self.session.try_move_left(),
                KeyCode::Right if is_playing => _ = self.session.try_move_right(),
                KeyCode::Down if is_playing => _ = self.session.try_soft_drop(),
                KeyCode::Up if is_playing => self.session.hard_drop(),
                KeyCode::Char(' ') if is_playing => _ = self.session.try_rotate(),
                KeyCode::Char('c') if is_playing => _ = self.session.try_hold(),
                KeyCode::Char('r') if is_game_over => {
                    tracing::info!("session restarted");
                    self.session.restart();
                    self.game_over_logged = false;
                }
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
        self.log_game_over();
    }

    fn update(&mut self) {
        self.session.tick();
        self.log_game_over();
    }

    fn log_game_over(&mut self) {
        if !self.game_over_logged && self.session.session_state().is_game_over() {
            self.game_over_logged = true;
            tracing::info!(
                "game over, score={}, level={}, pieces={}",
                self.session.score(),
                self.session.level(),
                self.session.progress().completed_pieces(),
            );
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let help_text = if self.session.session_state().is_game_over() {
            "Controls: R (Restart) | Q (Quit)"
        } else {
            "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Hard Drop) | Space (Rotate) | C (Hold) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(SessionDisplay::new(&self.session), main_area);
        frame.render_widget(help_text, help_area);
    }
}
