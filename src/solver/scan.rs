use crate::board::Board;
use crate::types::Coord;
use crate::words::{WordRecord, WordSet};

use super::ScanLimits;

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Candidate words along the straight lines through `placed`, which must
/// currently hold the speculative letter.
///
/// From each start offset, contiguous occupied cells accumulate into a run;
/// a gap resets the run, and a gap past `placed` ends that offset's scan
/// since no later run can include the new letter. Every run of at least
/// `min_len` cells whose coordinates include `placed` and whose text is in
/// the dictionary but not yet played is collected, in discovery order:
/// horizontal first, then vertical.
pub(crate) fn line_candidates(
    board: &Board,
    placed: Coord,
    limits: ScanLimits,
    words: &WordSet,
    used: &WordRecord,
) -> Vec<(String, Vec<Coord>)> {
    let mut found = Vec::new();
    scan_axis(board, placed, limits, words, used, Axis::Horizontal, &mut found);
    scan_axis(board, placed, limits, words, used, Axis::Vertical, &mut found);
    found
}

fn scan_axis(
    board: &Board,
    placed: Coord,
    limits: ScanLimits,
    words: &WordSet,
    used: &WordRecord,
    axis: Axis,
    found: &mut Vec<(String, Vec<Coord>)>,
) {
    let size = board.size();
    let pivot = match axis {
        Axis::Horizontal => placed.col,
        Axis::Vertical => placed.row,
    };

    let first_start = pivot.saturating_sub(limits.max_len.saturating_sub(1));
    for start in first_start..=pivot {
        let mut text = String::new();
        let mut cells: Vec<Coord> = Vec::new();
        let stop = (start + limits.max_len).min(size);
        for offset in start..stop {
            let at = match axis {
                Axis::Horizontal => Coord::new(placed.row, offset),
                Axis::Vertical => Coord::new(offset, placed.col),
            };
            if let Some(ch) = board.get(at) {
                text.push(ch);
                cells.push(at);
                if cells.len() >= limits.min_len
                    && cells.contains(&placed)
                    && words.contains(&text)
                    && !used.contains(&text)
                {
                    found.push((text.clone(), cells.clone()));
                }
            } else {
                text.clear();
                cells.clear();
                if offset > pivot {
                    break;
                }
            }
        }
    }
}
