//! Tests for tile distances, the distance grid and the estimators

#[cfg(test)]
mod tests {
    use circle16::puzzle::board::{Board, GOAL};
    use circle16::puzzle::moves::{Move, apply_all};
    use circle16::search::heuristic::{
        Estimator, distance_grid, grid_sum, line_bonus, misplaced_tiles, tile_distance,
        uniformity_bonus,
    };

    fn scrambled(labels: &[&str]) -> Board {
        let moves: Vec<Move> = labels.iter().map(|l| l.parse().unwrap()).collect();
        apply_all(&GOAL, &moves)
    }

    // Tests every estimator is zero on the goal
    // Verified by counting tiles in place as misplaced
    #[test]
    fn test_goal_estimates_zero() {
        for estimator in [
            Estimator::Manhattan,
            Estimator::Uniformity,
            Estimator::Misplaced,
        ] {
            assert_eq!(estimator.estimate(&GOAL), 0);
        }
        assert_eq!(distance_grid(&GOAL), [[0; 4]; 4]);
    }

    // Tests opposite outer rows cost one rotation plus the column offset
    // Verified by using plain Manhattan distance for outer rows
    #[test]
    fn test_tile_distance_outer_rows() {
        assert_eq!(tile_distance(0, 12), 1);
        assert_eq!(tile_distance(12, 0), 1);
        assert_eq!(tile_distance(0, 15), 4);
        assert_eq!(tile_distance(13, 2), 2);
    }

    // Tests opposite outer columns cost one rotation plus the row offset
    // Verified by ignoring the column special case
    #[test]
    fn test_tile_distance_outer_columns() {
        assert_eq!(tile_distance(4, 7), 1);
        assert_eq!(tile_distance(3, 4), 2);
        assert_eq!(tile_distance(11, 0), 3);
    }

    // Tests inner pairs use unwrapped Manhattan distance
    // Verified by taking the wrap-around minimum
    #[test]
    fn test_tile_distance_plain() {
        assert_eq!(tile_distance(5, 5), 0);
        assert_eq!(tile_distance(1, 11), 4);
        assert_eq!(tile_distance(5, 10), 2);
        assert_eq!(tile_distance(6, 9), 2);
    }

    // Tests distances land on each tile's goal cell
    // Verified by indexing the grid by current cell
    #[test]
    fn test_distance_grid_layout() {
        let board = scrambled(&["R1", "D2"]);
        assert_eq!(
            distance_grid(&board),
            [[2, 1, 1, 1], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]
        );
        assert_eq!(grid_sum(&distance_grid(&board)), 8);
    }

    // Tests line bonus thresholds on distinct values and zeros
    // Verified by excluding zero from the distinct count
    #[test]
    fn test_line_bonus() {
        assert_eq!(line_bonus(&[0, 0, 0, 0]), 0);
        assert_eq!(line_bonus(&[1, 1, 1, 1]), 1);
        assert_eq!(line_bonus(&[0, 1, 0, 1]), 2);
        assert_eq!(line_bonus(&[0, 0, 0, 1]), 0);
        assert_eq!(line_bonus(&[0, 1, 1, 2]), 3);
        assert_eq!(line_bonus(&[0, 1, 2, 0]), 0);
        assert_eq!(line_bonus(&[1, 2, 3, 4]), 4);
        assert_eq!(line_bonus(&[0, 1, 2, 3]), 0);
    }

    // Tests bonus sums over rows and columns
    // Verified by scoring rows only
    #[test]
    fn test_uniformity_bonus() {
        let board = scrambled(&["R1", "D2"]);
        assert_eq!(uniformity_bonus(&distance_grid(&board)), 3);

        let one_row = scrambled(&["R1"]);
        assert_eq!(uniformity_bonus(&distance_grid(&one_row)), 1);
    }

    // Tests default estimator leaves the bonus out
    // Verified by adding the bonus to the default estimate
    #[test]
    fn test_default_estimator_is_distance_sum() {
        let board = scrambled(&["R1", "D2"]);
        assert_eq!(Estimator::default(), Estimator::Manhattan);
        assert_eq!(Estimator::Manhattan.estimate(&board), 8);
        assert_eq!(Estimator::Uniformity.estimate(&board), 11);
        assert_eq!(Estimator::Misplaced.estimate(&board), 15);
    }

    // Tests misplaced tile count
    // Verified by counting matching tiles instead
    #[test]
    fn test_misplaced_tiles() {
        assert_eq!(misplaced_tiles(&GOAL), 0);
        assert_eq!(misplaced_tiles(&scrambled(&["R1"])), 4);
        assert_eq!(misplaced_tiles(&scrambled(&["R1", "D2"])), 7);
    }

    // Tests a heavily scrambled board
    // Verified by dropping the outer column rule
    #[test]
    fn test_estimates_for_scrambled_board() {
        let board =
            Board::new([7, 12, 1, 16, 3, 9, 14, 5, 11, 2, 8, 13, 6, 15, 10, 4]).unwrap();
        assert_eq!(
            distance_grid(&board),
            [[2, 2, 3, 1], [1, 3, 3, 2], [2, 2, 2, 4], [2, 3, 1, 1]]
        );
        assert_eq!(Estimator::Manhattan.estimate(&board), 34);
        assert_eq!(Estimator::Uniformity.estimate(&board), 55);
        assert_eq!(Estimator::Misplaced.estimate(&board), 50);
    }

    // Tests repeated tiles overwrite the same goal cell
    // Verified by accumulating instead of storing
    #[test]
    fn test_unchecked_board_grid() {
        let board = Board::new_unchecked([1; 16]);
        assert_eq!(Estimator::Manhattan.estimate(&board), 4);
    }
}
