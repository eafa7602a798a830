//! Letter-run extraction and classification for rows and columns.
//!
//! A run is a maximal sequence of occupied cells along one line. Runs shorter
//! than [`MIN_RUN_LENGTH`] are never emitted, so an isolated letter takes no
//! part in word checks along that axis.

use crate::core::board::Board;
use crate::core::dictionary::WordList;
use crate::core::types::{Axis, BOARD_SIDE, CELL_COUNT, MinWordLength};

/// Shortest run the scanner reports, independent of the configured minimum.
pub const MIN_RUN_LENGTH: usize = 2;

/// One maximal run of letters along a row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRun {
    pub axis: Axis,
    /// Row (horizontal) or column (vertical) the run lies on.
    pub line: usize,
    /// Offset of the first letter within the line.
    pub offset: usize,
    pub text: String,
    /// Long enough and found in the word list.
    pub valid: bool,
}

impl LetterRun {
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Board indices covered by this run, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (self.offset..self.offset + self.len()).map(|offset| self.axis.cell(self.line, offset))
    }
}

/// Split a line into maximal letter runs of at least [`MIN_RUN_LENGTH`].
///
/// Returns `(offset, text)` pairs. Empty cells separate runs.
pub fn find_runs(line: &[Option<char>]) -> Vec<(usize, String)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (offset, cell) in line.iter().enumerate() {
        match cell {
            Some(letter) => match current.as_mut() {
                Some((_, text)) => text.push(*letter),
                None => current = Some((offset, letter.to_string())),
            },
            None => {
                if let Some(run) = current.take() {
                    push_if_long_enough(&mut runs, run);
                }
            }
        }
    }
    if let Some(run) = current {
        push_if_long_enough(&mut runs, run);
    }
    runs
}

fn push_if_long_enough(runs: &mut Vec<(usize, String)>, run: (usize, String)) {
    if run.1.chars().count() >= MIN_RUN_LENGTH {
        runs.push(run);
    }
}

/// Scan one row or column and classify each run against `words`.
///
/// A run is valid iff its length reaches `min_len` and its uppercase text is
/// in the word list.
pub fn scan_line<W: WordList + ?Sized>(
    axis: Axis,
    line: usize,
    cells: &[Option<char>],
    words: &W,
    min_len: MinWordLength,
) -> Vec<LetterRun> {
    find_runs(cells)
        .into_iter()
        .map(|(offset, text)| {
            let text = text.to_uppercase();
            let valid = text.chars().count() >= min_len.get() && words.contains(&text);
            LetterRun {
                axis,
                line,
                offset,
                text,
                valid,
            }
        })
        .collect()
}

/// Per-axis cell membership derived from one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisCoverage {
    in_run: [bool; CELL_COUNT],
    in_valid_run: [bool; CELL_COUNT],
}

impl AxisCoverage {
    fn new() -> Self {
        Self {
            in_run: [false; CELL_COUNT],
            in_valid_run: [false; CELL_COUNT],
        }
    }

    fn mark(&mut self, run: &LetterRun) {
        for index in run.cells() {
            self.in_run[index] = true;
            if run.valid {
                self.in_valid_run[index] = true;
            }
        }
    }

    /// Cell belongs to some run on this axis.
    pub fn in_run(&self, index: usize) -> bool {
        self.in_run.get(index).copied().unwrap_or(false)
    }

    /// Cell belongs to a valid run on this axis.
    pub fn in_valid_run(&self, index: usize) -> bool {
        self.in_valid_run.get(index).copied().unwrap_or(false)
    }

    /// Cell belongs to a run on this axis that is not a word.
    pub fn in_invalid_run(&self, index: usize) -> bool {
        self.in_run(index) && !self.in_valid_run(index)
    }
}

/// Result of scanning all ten rows and ten columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardScan {
    pub runs: Vec<LetterRun>,
    horizontal: AxisCoverage,
    vertical: AxisCoverage,
}

impl BoardScan {
    pub fn coverage(&self, axis: Axis) -> &AxisCoverage {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Cell belongs to a valid run on either axis.
    pub fn in_any_valid_run(&self, index: usize) -> bool {
        self.horizontal.in_valid_run(index) || self.vertical.in_valid_run(index)
    }

    pub fn valid_runs(&self) -> impl Iterator<Item = &LetterRun> {
        self.runs.iter().filter(|run| run.valid)
    }
}

/// Rescan every row and column of `board` from scratch.
pub fn scan_board<W: WordList + ?Sized>(
    board: &Board,
    words: &W,
    min_len: MinWordLength,
) -> BoardScan {
    let mut scan = BoardScan {
        runs: Vec::new(),
        horizontal: AxisCoverage::new(),
        vertical: AxisCoverage::new(),
    };

    for axis in Axis::ALL {
        for line in 0..BOARD_SIDE {
            let cells = axis.line_indices(line).map(|index| board.get(index));
            for run in scan_line(axis, line, &cells, words, min_len) {
                match axis {
                    Axis::Horizontal => scan.horizontal.mark(&run),
                    Axis::Vertical => scan.vertical.mark(&run),
                }
                scan.runs.push(run);
            }
        }
    }
    scan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board_from_rows, dictionary};

    fn line(text: &str) -> Vec<Option<char>> {
        text.chars()
            .map(|ch| if ch == '.' { None } else { Some(ch) })
            .collect()
    }

    #[test]
    fn find_runs_skips_single_letters_and_splits_on_gaps() {
        let runs = find_runs(&line("A.BC.D.EFG"));
        assert_eq!(
            runs,
            vec![(2, "BC".to_string()), (7, "EFG".to_string())]
        );
    }

    #[test]
    fn adjacent_singles_across_a_gap_are_never_merged() {
        assert!(find_runs(&line("A.B.......")).is_empty());
    }

    #[test]
    fn full_line_is_a_single_run() {
        let runs = find_runs(&line("ABCDEFGHIJ"));
        assert_eq!(runs, vec![(0, "ABCDEFGHIJ".to_string())]);
    }

    #[test]
    fn cat_row_is_valid_in_horizontal_axis() {
        let words = dictionary(&["CAT"]);
        let runs = scan_line(
            Axis::Horizontal,
            4,
            &line("..CAT....."),
            &words,
            MinWordLength::Two,
        );
        assert_eq!(runs.len(), 1);
        assert!(runs[0].valid);
        assert_eq!(runs[0].cells().collect::<Vec<_>>(), vec![42, 43, 44]);
    }

    #[test]
    fn unknown_word_is_covered_but_not_valid() {
        let words = dictionary(&["CAT"]);
        let board = board_from_rows(&[(0, "ZZQX")]);
        let scan = scan_board(&board, &words, MinWordLength::Two);
        let horizontal = scan.coverage(Axis::Horizontal);
        for index in 0..4 {
            assert!(horizontal.in_run(index));
            assert!(!horizontal.in_valid_run(index));
            assert!(horizontal.in_invalid_run(index));
        }
    }

    #[test]
    fn short_word_is_never_valid_below_minimum() {
        let words = dictionary(&["AT"]);
        let runs = scan_line(
            Axis::Vertical,
            0,
            &line("AT........"),
            &words,
            MinWordLength::Three,
        );
        assert_eq!(runs.len(), 1);
        assert!(!runs[0].valid);
    }

    #[test]
    fn lowercase_input_is_normalized_before_lookup() {
        let words = dictionary(&["CAT"]);
        let runs = scan_line(
            Axis::Horizontal,
            0,
            &line("cat......."),
            &words,
            MinWordLength::Two,
        );
        assert_eq!(runs[0].text, "CAT");
        assert!(runs[0].valid);
    }

    #[test]
    fn vertical_runs_map_to_column_cells() {
        let words = dictionary(&["CAT"]);
        let mut board = Board::new();
        for (index, letter) in [(3, 'C'), (13, 'A'), (23, 'T')] {
            board.place(index, letter).expect("place");
        }
        let scan = scan_board(&board, &words, MinWordLength::Two);
        let vertical = scan.coverage(Axis::Vertical);
        assert!(vertical.in_valid_run(3));
        assert!(vertical.in_valid_run(13));
        assert!(vertical.in_valid_run(23));
        assert!(!scan.coverage(Axis::Horizontal).in_run(3));
    }
}
