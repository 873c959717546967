use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::board::Board;
use super::settings::{BOARD_HEIGHT, BOARD_WIDTH, STEP_SIZE};
use super::types::Coordinate;

const PLACEMENT_ATTEMPTS: usize = 100;

/// Seeded randomness for food placement.
///
/// Sessions seed from entropy; tests pin the seed and every food draw
/// becomes reproducible.
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a grid-aligned coordinate disjoint from the given board.
    ///
    /// Random attempts first; once the board is dense enough to defeat
    /// them, the free cells are enumerated and one is picked directly,
    /// so disjointness holds even on a nearly full grid.
    pub fn food_coordinate(&mut self, board: &Board) -> Coordinate {
        let columns = BOARD_WIDTH / STEP_SIZE;
        let rows = BOARD_HEIGHT / STEP_SIZE;

        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = Coordinate::new(
                self.rng.random_range(0..columns) * STEP_SIZE,
                self.rng.random_range(0..rows) * STEP_SIZE,
            );
            if !board.contains(pos) {
                return pos;
            }
        }

        let free: Vec<Coordinate> = (0..columns)
            .flat_map(|cx| (0..rows).map(move |cy| Coordinate::new(cx * STEP_SIZE, cy * STEP_SIZE)))
            .filter(|&cell| !board.contains(cell))
            .collect();
        assert!(!free.is_empty(), "no free cell left for food placement");
        free[self.rng.random_range(0..free.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_draws_same_food() {
        let board = crate::game::initial_board();
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.food_coordinate(&board), b.food_coordinate(&board));
        }
    }

    #[test]
    fn test_food_is_grid_aligned_and_in_bounds() {
        let board = crate::game::initial_board();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let food = rng.food_coordinate(&board);
            assert_eq!(food.x % STEP_SIZE, 0);
            assert_eq!(food.y % STEP_SIZE, 0);
            assert!((0..BOARD_WIDTH).contains(&food.x));
            assert!((0..BOARD_HEIGHT).contains(&food.y));
        }
    }

    #[test]
    fn test_food_never_lands_on_board() {
        let board = crate::game::initial_board();
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            assert!(!board.contains(rng.food_coordinate(&board)));
        }
    }

    #[test]
    fn test_dense_board_falls_back_to_free_cell_scan() {
        // Occupy every cell except one; only that cell remains legal.
        let gap = Coordinate::new(590, 390);
        let occupied = (0..BOARD_WIDTH / STEP_SIZE).flat_map(|cx| {
            (0..BOARD_HEIGHT / STEP_SIZE)
                .map(move |cy| Coordinate::new(cx * STEP_SIZE, cy * STEP_SIZE))
        });
        let board = Board::from_segments(occupied.filter(|&c| c != gap));
        let mut rng = GameRng::new(3);
        assert_eq!(rng.food_coordinate(&board), gap);
    }
}
