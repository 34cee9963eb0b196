//! Tests for board construction, rotations and printing

#[cfg(test)]
mod tests {
    use circle16::SolverError;
    use circle16::puzzle::board::{Board, GOAL};
    use circle16::puzzle::moves::{Axis, Step};

    fn board(tiles: [u8; 16]) -> Board {
        Board::new(tiles).unwrap()
    }

    // Tests goal constant holds tiles in ascending order
    // Verified by swapping two goal tiles
    #[test]
    fn test_goal_is_sorted() {
        let expected: Vec<u8> = (1..=16).collect();
        assert_eq!(GOAL.tiles().to_vec(), expected);
        assert!(GOAL.is_goal());
        assert_eq!(Board::default(), GOAL);
    }

    // Tests permutation check rejects repeated tiles
    // Verified by removing the duplicate bit check
    #[test]
    fn test_new_rejects_duplicates() {
        let result = Board::new([1, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        match result {
            Err(SolverError::InvalidBoard { reason, .. }) => {
                assert!(reason.contains("more than once"));
            }
            _ => unreachable!("Expected InvalidBoard error"),
        }
    }

    // Tests permutation check rejects zero and values above sixteen
    // Verified by widening the accepted range
    #[test]
    fn test_new_rejects_out_of_range() {
        let zero = Board::new([0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert!(matches!(zero, Err(SolverError::InvalidBoard { .. })));

        let seventeen = Board::new([17, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert!(matches!(seventeen, Err(SolverError::InvalidBoard { .. })));
    }

    // Tests right rotation moves the last tile of the row to the front
    // Verified by swapping rotate_left and rotate_right
    #[test]
    fn test_rotate_row_forward() {
        let (rotated, mv) = GOAL.rotate_row(0, Step::Forward);
        assert_eq!(
            rotated.tiles(),
            &[4, 1, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
        );
        assert_eq!(mv.to_string(), "R1");
        assert_eq!(mv.axis(), Axis::Row);
    }

    // Tests left rotation of an inner row leaves other rows alone
    // Verified by rotating the wrong chunk
    #[test]
    fn test_rotate_row_backward() {
        let (rotated, mv) = GOAL.rotate_row(2, Step::Backward);
        assert_eq!(
            rotated.tiles(),
            &[1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 9, 13, 14, 15, 16]
        );
        assert_eq!(mv.to_string(), "L3");
    }

    // Tests down rotation moves the bottom tile of the column to the top
    // Verified by reversing the column shift
    #[test]
    fn test_rotate_col_forward() {
        let (rotated, mv) = GOAL.rotate_col(2, Step::Forward);
        assert_eq!(
            rotated.tiles(),
            &[1, 2, 15, 4, 5, 6, 3, 8, 9, 10, 7, 12, 13, 14, 11, 16]
        );
        assert_eq!(mv.to_string(), "D3");
        assert_eq!(mv.axis(), Axis::Column);
    }

    // Tests up rotation of the first column
    // Verified by using the wrong column stride
    #[test]
    fn test_rotate_col_backward() {
        let (rotated, mv) = GOAL.rotate_col(0, Step::Backward);
        assert_eq!(
            rotated.tiles(),
            &[5, 2, 3, 4, 9, 6, 7, 8, 13, 10, 11, 12, 1, 14, 15, 16]
        );
        assert_eq!(mv.to_string(), "U1");
    }

    // Tests opposite rotations cancel on every row and column
    // Verified by making backward rotation a no-op
    #[test]
    fn test_rotations_are_reversible() {
        let start = board([7, 12, 1, 16, 3, 9, 14, 5, 11, 2, 8, 13, 6, 15, 10, 4]);
        for line in 0..4 {
            for step in [Step::Backward, Step::Forward] {
                let (rows, _) = start.rotate_row(line, step);
                assert_eq!(rows.rotate_row(line, step.reversed()).0, start);

                let (cols, _) = start.rotate_col(line, step);
                assert_eq!(cols.rotate_col(line, step.reversed()).0, start);
            }
        }
    }

    // Tests four rotations of a line restore the board
    // Verified by shifting by two cells
    #[test]
    fn test_four_rotations_cycle() {
        let mut current = GOAL;
        for _ in 0..4 {
            current = current.rotate_col(3, Step::Forward).0;
        }
        assert_eq!(current, GOAL);
    }

    // Tests rotations do not mutate the source board
    // Verified by rotating in place
    #[test]
    fn test_rotation_is_pure() {
        let start = GOAL;
        let _ = start.rotate_row(1, Step::Forward);
        let _ = start.rotate_col(1, Step::Forward);
        assert!(start.is_goal());
    }

    // Tests line indices wrap modulo the grid side
    // Verified by ignoring out-of-range rows instead of wrapping
    #[test]
    fn test_line_index_wraps() {
        assert_eq!(
            GOAL.rotate_row(5, Step::Forward),
            GOAL.rotate_row(1, Step::Forward)
        );
    }

    // Tests rows are consecutive runs of four tiles
    // Verified by iterating columns instead of rows
    #[test]
    fn test_rows() {
        let start = board([7, 12, 1, 16, 3, 9, 14, 5, 11, 2, 8, 13, 6, 15, 10, 4]);
        let rows: Vec<&[u8]> = start.rows().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], &[7, 12, 1, 16]);
        assert_eq!(rows[3], &[6, 15, 10, 4]);
    }

    // Tests pretty printer writes four right-aligned columns per row
    // Verified by changing the cell width
    #[test]
    fn test_display() {
        let expected = "  1   2   3   4\n  5   6   7   8\n  9  10  11  12\n 13  14  15  16\n";
        assert_eq!(GOAL.to_string(), expected);
    }

    // Tests unchecked construction keeps repeated tiles
    // Verified by routing new_unchecked through validation
    #[test]
    fn test_new_unchecked() {
        let repeated = Board::new_unchecked([1; 16]);
        assert_eq!(repeated.tiles(), &[1; 16]);
        assert!(!repeated.is_goal());
    }
}
