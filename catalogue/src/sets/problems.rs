use std::collections::HashSet;

use crate::error::{CatalogueError, Result};
use crate::two_pointer::longest_unique_substring;

/// A 9x9 grid; `None` marks an empty cell.
pub type Board = Vec<Vec<Option<u8>>>;

fn digit_square_sum(mut n: u64) -> u64 {
    let mut total = 0;
    while n > 0 {
        let d = n % 10;
        total += d * d;
        n /= 10;
    }
    total
}

/// Repeatedly replaces `n` with the sum of its squared digits; happy when it reaches 1.
pub fn is_happy(mut n: u64) -> bool {
    let mut seen = HashSet::new();
    while n != 1 && seen.insert(n) {
        n = digit_square_sum(n);
    }
    n == 1
}

/// The value that appears once when every other value appears twice.
pub fn single_number(nums: &[i64]) -> i64 {
    nums.iter().fold(0, |acc, &n| acc ^ n)
}

/// Length of the longest run of consecutive integers, in any order.
pub fn longest_consecutive(nums: &[i64]) -> usize {
    let set: HashSet<i64> = nums.iter().copied().collect();
    let mut best = 0;
    for &n in &set {
        if n != i64::MIN && set.contains(&(n - 1)) {
            continue;
        }
        let mut len = 1;
        let mut cur = n;
        while cur != i64::MAX && set.contains(&(cur + 1)) {
            cur += 1;
            len += 1;
        }
        best = best.max(len);
    }
    best
}

pub fn length_of_longest_substring(s: &str) -> usize {
    longest_unique_substring(s).0
}

/// Parses nine rows of nine cells, digits `1-9` or `.` for empty.
pub fn parse_board<S: AsRef<str>>(rows: &[S]) -> Result<Board> {
    if rows.len() != 9 {
        return Err(CatalogueError::InvalidBoard(format!("expected 9 rows, got {}", rows.len())));
    }
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let cells: Vec<Option<u8>> = row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '.' => Ok(None),
                    '1'..='9' => Ok(Some(c as u8 - b'0')),
                    other => Err(CatalogueError::InvalidBoard(format!("row {r}: unexpected `{other}`"))),
                })
                .collect::<Result<_>>()?;
            if cells.len() != 9 {
                return Err(CatalogueError::InvalidBoard(format!("row {r}: expected 9 cells, got {}", cells.len())));
            }
            Ok(cells)
        })
        .collect()
}

/// No digit repeats within a row, a column or a 3x3 box. Empty cells are ignored.
pub fn is_valid_sudoku(board: &Board) -> Result<bool> {
    if board.len() != 9 || board.iter().any(|row| row.len() != 9) {
        return Err(CatalogueError::InvalidBoard("board must be 9x9".into()));
    }
    let mut rows: [HashSet<u8>; 9] = Default::default();
    let mut cols: [HashSet<u8>; 9] = Default::default();
    let mut boxes: [HashSet<u8>; 9] = Default::default();
    for (i, row) in board.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let Some(d) = *cell else { continue };
            if !(1..=9).contains(&d) {
                return Err(CatalogueError::InvalidBoard(format!("cell ({i}, {j}) holds {d}")));
            }
            let b = (i / 3) * 3 + j / 3;
            if !rows[i].insert(d) || !cols[j].insert(d) || !boxes[b].insert(d) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 9] = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];

    #[test]
    fn happy_numbers() {
        assert!(is_happy(19));
        assert!(is_happy(7));
        assert!(!is_happy(2));
        assert!(!is_happy(0));
    }

    #[test]
    fn single_and_consecutive() {
        assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
        assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
        assert_eq!(longest_consecutive(&[0, 3, 7, 2, 5, 8, 4, 6, 0, 1]), 9);
        assert_eq!(longest_consecutive(&[]), 0);
        assert_eq!(longest_consecutive(&[i64::MAX, i64::MIN]), 1);
    }

    #[test]
    fn sudoku_validation() {
        let board = parse_board(&VALID).unwrap();
        assert_eq!(is_valid_sudoku(&board), Ok(true));

        let mut bad = VALID;
        bad[0] = "83..7....";
        let board = parse_board(&bad).unwrap();
        assert_eq!(is_valid_sudoku(&board), Ok(false));
    }

    #[test]
    fn malformed_boards() {
        assert!(parse_board(&["123"]).is_err());
        let mut bad = VALID;
        bad[4] = "4..8.3..x";
        assert!(parse_board(&bad).is_err());
        assert!(is_valid_sudoku(&vec![vec![None; 9]; 8]).is_err());
    }

    #[test]
    fn longest_substring_length() {
        assert_eq!(length_of_longest_substring("abcabcbb"), 3);
    }
}
