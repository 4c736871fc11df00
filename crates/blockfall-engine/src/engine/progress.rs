/// Points awarded per number of rows cleared in one lock.
const SCORE_TABLE: [u32; 5] = [0, 100, 300, 500, 800];

/// Score needed for the first level-up, and added per level thereafter.
const LEVEL_SCORE_STEP: u32 = 1000;

/// Ticks per one-row descent at level 1.
pub const INITIAL_FALL_SPEED: u32 = 30;

/// Fall speed decrease per level-up.
const FALL_SPEED_STEP: u32 = 2;

/// Fall speed never drops below this many ticks per row.
pub const MIN_FALL_SPEED: u32 = 3;

/// Score, level, and fall-speed progression.
///
/// Levels are driven by score: every time the score reaches the current
/// threshold the level rises, the threshold grows by a fixed step, and the
/// fall speed tightens by a fixed step down to a floor. Several thresholds
/// crossed by one clear apply in the same update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    level: u32,
    next_level_score: u32,
    fall_speed: u32,
    total_cleared_rows: usize,
    completed_pieces: usize,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            next_level_score: LEVEL_SCORE_STEP,
            fall_speed: INITIAL_FALL_SPEED,
            total_cleared_rows: 0,
            completed_pieces: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Ticks required per one-row automatic descent at the current level.
    #[must_use]
    pub const fn fall_speed(&self) -> u32 {
        self.fall_speed
    }

    #[must_use]
    pub const fn total_cleared_rows(&self) -> usize {
        self.total_cleared_rows
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Records one locked piece and the rows it cleared.
    ///
    /// Counts above 4 are unreachable with the seven shapes; if one is ever
    /// produced it scores at the highest defined tier.
    pub fn record_lock(&mut self, cleared_rows: usize) {
        self.completed_pieces += 1;
        self.total_cleared_rows += cleared_rows;
        self.score += SCORE_TABLE[cleared_rows.min(SCORE_TABLE.len() - 1)];
        while self.score >= self.next_level_score {
            self.level += 1;
            self.next_level_score += LEVEL_SCORE_STEP;
            self.fall_speed = self
                .fall_speed
                .saturating_sub(FALL_SPEED_STEP)
                .max(MIN_FALL_SPEED);
        }
    }
}
