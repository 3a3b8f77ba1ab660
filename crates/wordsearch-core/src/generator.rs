use crate::grid::{step_within, Direction, Grid, Position, DIRECTIONS};
use crate::rng::Lcg;
use crate::ALPHABET;
use serde::{Deserialize, Serialize};

/// Attempts per word before it is reported as unplaced
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Maximum random placements tried per word
    pub max_attempts: usize,
}

impl GeneratorConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Where a word ended up on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, first letter first
    pub fn cells(&self) -> Vec<Position> {
        let len = self.word.chars().count();
        (0..len)
            .map(|i| {
                let row = self.start.row as i64 + self.direction.dr as i64 * i as i64;
                let col = self.start.col as i64 + self.direction.dc as i64 * i as i64;
                Position::new(row as usize, col as usize)
            })
            .collect()
    }
}

/// Output of a generation run
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// The lettered grid
    pub grid: Grid,
    /// Successful placements, in the order they were made (longest first)
    pub placements: Vec<Placement>,
    /// Words that found no valid spot within the attempt budget
    pub unplaced: Vec<String>,
}

impl Puzzle {
    pub fn is_placed(&self, word: &str) -> bool {
        self.placements.iter().any(|p| p.word == word)
    }
}

/// Deterministic word search generator
pub struct Generator {
    config: GeneratorConfig,
    rng: Lcg,
}

impl Generator {
    /// Create a generator for a `rows` x `cols` grid driven by `seed`
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Self::with_config(GeneratorConfig::new(rows, cols), seed)
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Lcg::with_seed(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Place `words` (already uppercased) and fill the rest of the grid.
    ///
    /// Longer words go first. Ties keep their input order, which matters for
    /// reproducing a grid from the same seed.
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Puzzle {
        let mut board: Vec<Option<char>> = vec![None; self.config.rows * self.config.cols];

        let mut ordered: Vec<Vec<char>> = words
            .iter()
            .map(|w| w.as_ref().chars().collect::<Vec<char>>())
            .collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut placements = Vec::new();
        let mut unplaced = Vec::new();
        for word in &ordered {
            if word.is_empty() {
                // Fits on the first attempt, whose draws still advance the stream
                self.draw_attempt(0);
                continue;
            }
            match self.place_word(&mut board, word) {
                Some(placement) => placements.push(placement),
                None => {
                    let text: String = word.iter().collect();
                    tracing::warn!(
                        word = %text,
                        attempts = self.config.max_attempts,
                        "could not place word"
                    );
                    unplaced.push(text);
                }
            }
        }

        // Fill remaining cells in raster order
        let cells = board
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| ALPHABET[self.rng.next_index(ALPHABET.len())] as char))
            .collect();

        let grid = Grid::from_parts(self.config.rows, self.config.cols, cells);

        tracing::debug!(
            placed = placements.len(),
            unplaced = unplaced.len(),
            "generated {}x{} grid",
            self.config.rows,
            self.config.cols
        );

        Puzzle {
            grid,
            placements,
            unplaced,
        }
    }

    /// Try random starts and directions until one fits
    fn place_word(&mut self, board: &mut [Option<char>], word: &[char]) -> Option<Placement> {
        for _ in 0..self.config.max_attempts {
            let (dir, r, c) = self.draw_attempt(word.len());
            if r < 0 || c < 0 {
                continue;
            }
            let start = Position::new(r as usize, c as usize);
            if let Some(cells) = self.fits(board, word, start, dir) {
                for (idx, letter) in cells.into_iter().zip(word) {
                    board[idx] = Some(*letter);
                }
                return Some(Placement {
                    word: word.iter().collect(),
                    start,
                    direction: dir,
                });
            }
        }
        None
    }

    /// Direction, row and column for one attempt at a word of `len` letters.
    /// Start ranges are clamped so the word stays on the board.
    fn draw_attempt(&mut self, len: usize) -> (Direction, i64, i64) {
        let rows = self.config.rows as i64;
        let cols = self.config.cols as i64;
        let len = len as i64;
        let dir = *self.rng.pick(&DIRECTIONS);

        let min_r = if dir.dr < 0 { len - 1 } else { 0 };
        let max_r = if dir.dr > 0 { rows - len } else { rows - 1 };
        let min_c = if dir.dc < 0 { len - 1 } else { 0 };
        let max_c = if dir.dc > 0 { cols - len } else { cols - 1 };

        // Both draws happen even when the span is empty, to keep the stream aligned
        let r = self.rng.next_offset(max_r - min_r + 1) + min_r;
        let c = self.rng.next_offset(max_c - min_c + 1) + min_c;
        (dir, r, c)
    }

    /// Board indices for the word if every cell is free or already holds the
    /// same letter
    fn fits(
        &self,
        board: &[Option<char>],
        word: &[char],
        start: Position,
        dir: Direction,
    ) -> Option<Vec<usize>> {
        let (rows, cols) = (self.config.rows, self.config.cols);
        let mut cells = Vec::with_capacity(word.len());
        for (i, letter) in word.iter().enumerate() {
            let pos = step_within(rows, cols, start, dir, i)?;
            let idx = pos.row * cols + pos.col;
            match board[idx] {
                Some(existing) if existing != *letter => return None,
                _ => cells.push(idx),
            }
        }
        Some(cells)
    }
}
