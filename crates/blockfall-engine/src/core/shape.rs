use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::board::Board;

/// Enum identifying one of the seven canonical piece shapes.
///
/// The kind tag doubles as the color identity of every cell the piece locks
/// into the board: each kind maps to exactly one display color, chosen by the
/// front end. Color is never re-derived by structural matching on a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    O = 1,
    T = 2,
    S = 3,
    Z = 4,
    J = 5,
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        // Uniform with replacement; no bag randomizer.
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::S,
            4 => PieceKind::Z,
            5 => PieceKind::J,
            _ => PieceKind::L,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All seven kinds, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns this kind's canonical (unrotated) shape from the catalog.
    #[must_use]
    pub fn shape(self) -> Shape {
        const C: bool = true;
        const E: bool = false;
        let rows: &[&[bool]] = match self {
            PieceKind::I => &[&[C, C, C, C]],
            PieceKind::O => &[&[C, C], &[C, C]],
            PieceKind::T => &[&[E, C, E], &[C, C, C]],
            PieceKind::S => &[&[E, C, C], &[C, C, E]],
            PieceKind::Z => &[&[C, C, E], &[E, C, C]],
            PieceKind::J => &[&[C, E, E], &[C, C, C]],
            PieceKind::L => &[&[E, E, C], &[C, C, C]],
        };
        Shape::from_rows(self, rows)
    }
}

type ShapeRow = ArrayVec<bool, 4>;

/// An owned rows x cols boolean matrix describing the occupied sub-cells of a
/// piece, tagged with the kind it came from.
///
/// The catalog entries above are the spawn orientations; [`Shape::rotated`]
/// produces a new value and never touches the catalog. All matrices fit in a
/// 4x4 bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    rows: ArrayVec<ShapeRow, 4>,
}

impl Shape {
    fn from_rows(kind: PieceKind, rows: &[&[bool]]) -> Self {
        let rows = rows.iter().map(|row| row.iter().copied().collect()).collect();
        Self { kind, rows }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Width of the bounding box in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Height of the bounding box in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Iterates the `(dx, dy)` offsets of occupied sub-cells, row-major.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().zip(0i32..).flat_map(|(row, dy)| {
            row.iter()
                .zip(0i32..)
                .filter_map(move |(&occupied, dx)| occupied.then_some((dx, dy)))
        })
    }

    /// Returns this shape rotated 90 degrees clockwise.
    ///
    /// The transform is `new[c][R - 1 - r] = old[r][c]` where `R` is the old
    /// row count; applying it four times yields the original matrix.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let height = self.height();
        let width = self.width();
        let mut rows: ArrayVec<ShapeRow, 4> = (0..width)
            .map(|_| (0..height).map(|_| false).collect())
            .collect();
        for (row, r) in self.rows.iter().zip(0..) {
            for (&occupied, c) in row.iter().zip(0..) {
                rows[c][height - 1 - r] = occupied;
            }
        }
        Self {
            kind: self.kind,
            rows,
        }
    }
}

/// The falling piece: a shape (possibly rotated) plus its board anchor.
///
/// The anchor is the top-left of the shape's bounding box, in signed board
/// coordinates so that out-of-range move candidates are representable; the
/// board's occupancy query rejects them. An `ActivePiece` exists only while
/// falling and is consumed when locked into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    shape: Shape,
    x: i32,
    y: i32,
}

impl ActivePiece {
    /// Anchors `kind`'s canonical shape horizontally centered at the top row.
    ///
    /// Spawning performs no validity check; callers probe the board and treat
    /// an occupied spawn position as game over.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.shape();
        #[expect(clippy::cast_possible_wrap)]
        let x = (Board::WIDTH / 2) as i32 - (shape.width() / 2) as i32;
        Self { shape, x, y: 0 }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns a copy translated by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns a copy rotated 90 degrees clockwise at the same anchor.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            x: self.x,
            y: self.y,
        }
    }

    /// Iterates the board coordinates covered by occupied sub-cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_dimensions() {
        let dims: Vec<_> = PieceKind::ALL
            .iter()
            .map(|kind| {
                let shape = kind.shape();
                (shape.width(), shape.height())
            })
            .collect();
        assert_eq!(
            dims,
            [(4, 1), (2, 2), (3, 2), (3, 2), (3, 2), (3, 2), (3, 2)],
        );
    }

    #[test]
    fn catalog_occupancy_counts() {
        for kind in PieceKind::ALL {
            assert_eq!(
                kind.shape().occupied_offsets().count(),
                4,
                "{kind:?} must cover exactly 4 cells",
            );
        }
    }

    #[test]
    fn rotation_is_cyclic_of_order_four() {
        for kind in PieceKind::ALL {
            let original = kind.shape();
            let back = original.rotated().rotated().rotated().rotated();
            assert_eq!(back, original, "{kind:?} must return after 4 rotations");
        }
    }

    #[test]
    fn rotation_transposes_and_reverses_rows() {
        // T spawns as
        //   . # .
        //   # # #
        // and rotates clockwise to
        //   # .
        //   # #
        //   # .
        let rotated = PieceKind::T.shape().rotated();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        let cells: Vec<_> = rotated.occupied_offsets().collect();
        assert_eq!(cells, [(0, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn rotated_i_piece_is_vertical() {
        let rotated = PieceKind::I.shape().rotated();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
        assert_eq!(rotated.occupied_offsets().count(), 4);
    }

    #[test]
    fn rotation_preserves_kind() {
        let rotated = PieceKind::J.shape().rotated();
        assert_eq!(rotated.kind(), PieceKind::J);
    }

    #[test]
    fn spawn_is_horizontally_centered() {
        // 16-wide board: I (width 4) anchors at 8 - 2 = 6.
        let piece = ActivePiece::spawn(PieceKind::I);
        assert_eq!((piece.x(), piece.y()), (6, 0));

        // Width-2 and width-3 shapes anchor at 8 - 1 = 7.
        assert_eq!(ActivePiece::spawn(PieceKind::O).x(), 7);
        assert_eq!(ActivePiece::spawn(PieceKind::T).x(), 7);
    }

    #[test]
    fn occupied_cells_are_anchor_relative() {
        let piece = ActivePiece::spawn(PieceKind::O).translated(2, 3);
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, [(9, 3), (10, 3), (9, 4), (10, 4)]);
    }

    #[test]
    fn translation_does_not_move_the_original() {
        let piece = ActivePiece::spawn(PieceKind::S);
        let moved = piece.translated(-1, 1);
        assert_eq!(piece.x(), 7);
        assert_eq!((moved.x(), moved.y()), (6, 1));
    }
}
