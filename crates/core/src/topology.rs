//! Grid-space primitives shared by generation, reveal, and item effects.

use crate::types::Pos;

pub fn is_valid_cell(pos: Pos, rows: usize, cols: usize) -> bool {
    pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < rows && (pos.c as usize) < cols
}

/// In-bounds orthogonal and diagonal neighbours, row-major around `pos`.
pub fn neighbors8(pos: Pos, rows: usize, cols: usize) -> Vec<Pos> {
    let mut out = Vec::with_capacity(8);
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let next = pos.offset(dr, dc);
            if is_valid_cell(next, rows, cols) {
                out.push(next);
            }
        }
    }
    out
}

pub fn neighbors4(pos: Pos, rows: usize, cols: usize) -> Vec<Pos> {
    neighbors8(pos, rows, cols).into_iter().filter(|n| n.r == pos.r || n.c == pos.c).collect()
}

/// Cells crossed by the segment `from → to`, both ends included.
///
/// Walks one axis at a time, taking whichever half-cell boundary comes first.
/// When both boundaries coincide the segment passes through a cell corner and
/// the walk steps diagonally.
pub fn trace_line(from: Pos, to: Pos) -> Vec<Pos> {
    let dr = to.r - from.r;
    let dc = to.c - from.c;
    let sr = dr.signum();
    let sc = dc.signum();
    let total_r = dr.abs();
    let total_c = dc.abs();

    let mut cells = Vec::with_capacity((total_r + total_c + 1) as usize);
    let mut current = from;
    cells.push(current);

    let mut step_r = 0;
    let mut step_c = 0;
    while step_r < total_r || step_c < total_c {
        let lhs = (1 + 2 * step_c) * total_r;
        let rhs = (1 + 2 * step_r) * total_c;

        if lhs == rhs {
            current = current.offset(sr, sc);
            step_r += 1;
            step_c += 1;
        } else if lhs < rhs {
            current = current.offset(0, sc);
            step_c += 1;
        } else {
            current = current.offset(sr, 0);
            step_r += 1;
        }
        cells.push(current);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cells_have_three_neighbors() {
        assert_eq!(
            neighbors8(Pos::new(0, 0), 8, 8),
            vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
        assert_eq!(neighbors4(Pos::new(0, 0), 8, 8), vec![Pos::new(0, 1), Pos::new(1, 0)]);
    }

    #[test]
    fn interior_cells_have_full_neighborhoods() {
        assert_eq!(neighbors8(Pos::new(3, 3), 8, 8).len(), 8);
        let orthogonal = neighbors4(Pos::new(3, 3), 8, 8);
        assert_eq!(
            orthogonal,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(3, 4), Pos::new(4, 3)]
        );
    }

    #[test]
    fn validity_rejects_negative_and_overflowing_coordinates() {
        assert!(is_valid_cell(Pos::new(0, 0), 8, 8));
        assert!(is_valid_cell(Pos::new(7, 7), 8, 8));
        assert!(!is_valid_cell(Pos::new(-1, 0), 8, 8));
        assert!(!is_valid_cell(Pos::new(0, 8), 8, 8));
    }

    #[test]
    fn axis_aligned_and_diagonal_lines_are_straight() {
        assert_eq!(
            trace_line(Pos::new(2, 1), Pos::new(2, 4)),
            vec![Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3), Pos::new(2, 4)]
        );
        assert_eq!(
            trace_line(Pos::new(0, 0), Pos::new(3, 3)),
            vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3)]
        );
        assert_eq!(trace_line(Pos::new(5, 5), Pos::new(5, 5)), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn shallow_line_steps_through_crossed_cells() {
        // Slope 1/2: the boundary at column 0.5 comes before row 0.5.
        assert_eq!(
            trace_line(Pos::new(0, 0), Pos::new(1, 2)),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2)]
        );
    }

    #[test]
    fn corner_crossings_step_diagonally() {
        // Slope 1/3 crosses the corner between (0,1) and (1,2).
        assert_eq!(
            trace_line(Pos::new(0, 0), Pos::new(1, 3)),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 2), Pos::new(1, 3)]
        );
    }

    #[test]
    fn reversed_segments_visit_mirrored_cells() {
        let forward = trace_line(Pos::new(1, 1), Pos::new(4, 6));
        let mut backward = trace_line(Pos::new(4, 6), Pos::new(1, 1));
        backward.reverse();
        assert_eq!(forward.first(), backward.first());
        assert_eq!(forward.last(), backward.last());
        assert_eq!(forward.len(), backward.len());
    }
}
