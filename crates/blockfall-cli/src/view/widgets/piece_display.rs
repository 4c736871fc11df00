use blockfall_engine::PieceKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::BlockDisplay;

/// Renders a single piece in its spawn orientation, centered in a fixed
/// 4x2-cell area. Used for the NEXT and HOLD panels; an empty slot renders
/// as a blank grid.
#[derive(Debug, Default)]
pub(crate) struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn piece(self, piece: Option<PieceKind>) -> Self {
        Self { piece, ..self }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(kind) = self.piece else {
            BlockDisplay::new(super::style::EMPTY, "").render(area, buf);
            return;
        };

        let shape = kind.shape();
        let piece_area = area.centered(
            Constraint::Length(shape.width() as u16 * BlockDisplay::width()),
            Constraint::Length(shape.height() as u16 * BlockDisplay::height()),
        );

        let col_constraints =
            (0..shape.width()).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..shape.height()).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied: Vec<_> = shape.occupied_offsets().collect();
        for (dy, grid_row) in grid_rows.enumerate() {
            for (dx, grid_cell) in grid_row.into_iter().enumerate() {
                #[expect(clippy::cast_possible_wrap)]
                let covered = occupied.contains(&(dx as i32, dy as i32));
                let display = if covered {
                    BlockDisplay::from_kind(kind)
                } else {
                    BlockDisplay::new(super::style::EMPTY, "")
                };
                display.render(grid_cell, buf);
            }
        }
    }
}
