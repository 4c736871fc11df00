use blockfall_engine::Session;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget},
};

/// Renders the score/level panel.
pub(crate) struct StatsDisplay<'a> {
    session: &'a Session,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        4 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let progress = self.session.progress();
        let text = Text::from(vec![
            Line::from(format!("SCORE  {}", progress.score())),
            Line::from(format!("LEVEL  {}", progress.level())),
            Line::from(format!("LINES  {}", progress.total_cleared_rows())),
            Line::from(format!("PIECES {}", progress.completed_pieces())),
        ]);
        Paragraph::new(text).render(area, buf);
    }
}
