use std::iter;

use blockfall_engine::{ActivePiece, Board};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::BlockDisplay;

/// Renders the board grid with the falling piece and its ghost overlaid.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    board: &'a Board,
    ghost: Option<&'a ActivePiece>,
    falling_piece: Option<&'a ActivePiece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            ghost: None,
            falling_piece: None,
            block: None,
        }
    }

    pub(crate) fn ghost(self, piece: &'a ActivePiece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub(crate) fn falling_piece(self, piece: &'a ActivePiece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn width(&self) -> u16 {
        Board::WIDTH as u16 * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn height(&self) -> u16 {
        Board::HEIGHT as u16 * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

fn covered_cells(piece: Option<&ActivePiece>) -> Vec<(usize, usize)> {
    piece
        .into_iter()
        .flat_map(ActivePiece::occupied_cells)
        .filter_map(|(x, y)| Some((usize::try_from(x).ok()?, usize::try_from(y).ok()?)))
        .collect()
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let falling_cells = covered_cells(self.falling_piece);
        let ghost_cells = covered_cells(self.ghost);

        let col_constraints = (0..Board::WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..Board::HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (y, (grid_row, row)) in iter::zip(grid_rows, self.board.rows()).enumerate() {
            for (x, (grid_cell, cell)) in iter::zip(grid_row, row).enumerate() {
                let display = match self.falling_piece {
                    Some(piece) if falling_cells.contains(&(x, y)) => {
                        BlockDisplay::from_kind(piece.kind())
                    }
                    _ if cell.is_empty() && ghost_cells.contains(&(x, y)) => BlockDisplay::ghost(),
                    _ => BlockDisplay::from_cell(*cell, true),
                };
                display.render(grid_cell, buf);
            }
        }
    }
}
