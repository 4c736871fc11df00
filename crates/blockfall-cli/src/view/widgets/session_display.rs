use blockfall_engine::Session;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
    widgets::{Block as BlockWidget, Paragraph, Widget},
};

use super::{BoardDisplay, PieceDisplay, StatsDisplay, style};

/// Renders a whole session: stats and hold on the left, the board in the
/// middle, the next piece on the right, plus the game-over overlay.
pub(crate) struct SessionDisplay<'a> {
    session: &'a Session,
}

impl<'a> SessionDisplay<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session;
        let is_playing = session.session_state().is_playing();

        let ghost = session.ghost_piece();
        let mut board_display =
            BoardDisplay::new(session.board()).block(BlockWidget::bordered());
        if is_playing {
            board_display = board_display
                .falling_piece(session.active_piece())
                .ghost(&ghost);
        }

        let stats_display =
            StatsDisplay::new(session).block(BlockWidget::bordered().title("STATS"));
        let hold_display = PieceDisplay::new()
            .piece(session.held_kind())
            .block(BlockWidget::bordered().title("HOLD"));
        let next_display = PieceDisplay::new()
            .piece(Some(session.next_kind()))
            .block(BlockWidget::bordered().title("NEXT"));

        let [left_area, board_area, right_area] = Layout::horizontal([
            Constraint::Length(stats_display.width().max(hold_display.width())),
            Constraint::Length(board_display.width()),
            Constraint::Length(next_display.width()),
        ])
        .flex(Flex::Center)
        .areas::<3>(area);

        let [stats_area, hold_area] = Layout::vertical([
            Constraint::Length(stats_display.height()),
            Constraint::Length(hold_display.height()),
        ])
        .areas::<2>(left_area);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_display.height())]).areas::<1>(right_area);

        let board_area = board_area.centered(
            Constraint::Length(board_display.width()),
            Constraint::Length(board_display.height().min(area.height)),
        );

        stats_display.render(stats_area, buf);
        hold_display.render(hold_area, buf);
        board_display.render(board_area, buf);
        next_display.render(next_area, buf);

        if session.session_state().is_game_over() {
            let overlay = Text::from("GAME OVER\nPRESS R TO RESTART").style(style::OVERLAY);
            let overlay_area = board_area.centered(
                Constraint::Length(20),
                Constraint::Length(2),
            );
            Paragraph::new(overlay).centered().render(overlay_area, buf);
        }
    }
}
