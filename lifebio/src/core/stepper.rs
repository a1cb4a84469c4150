//! One-generation transitions over a whole grid.

use crate::core::grid::Grid;
use crate::core::rules::{RuleSet, next_state};

/// Compute the next generation of `grid` under `rules`.
///
/// Every cell is evaluated against the input snapshot only; the result is a
/// freshly allocated grid with identical dimensions.
pub fn step(grid: &Grid, rules: RuleSet) -> Grid {
    Grid::generate(grid.height(), grid.width(), |row, col| {
        next_state(
            grid.is_alive(row, col),
            grid.live_neighbors(row, col),
            rules,
        )
    })
}

/// Lazily yield successive generations, starting with the one after `grid`.
pub fn evolve(grid: Grid, rules: RuleSet) -> impl Iterator<Item = Grid> {
    std::iter::successors(Some(grid), move |current| Some(step(current, rules))).skip(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::grid_from_strs;

    fn horizontal_blinker() -> Grid {
        Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).expect("grid")
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let start = horizontal_blinker();
        let first = step(&start, RuleSet::Standard);
        assert_eq!(
            first.alive_cells().collect::<Vec<_>>(),
            vec![(1, 2), (2, 2), (3, 2)]
        );
        let second = step(&first, RuleSet::Standard);
        assert_eq!(second, start);
    }

    #[test]
    fn dead_grid_stays_dead_under_every_rule_set() {
        let dead = Grid::new(4, 6).expect("grid");
        for rules in RuleSet::ALL {
            assert!(step(&dead, rules).is_extinct(), "{rules}");
        }
    }

    #[test]
    fn step_preserves_dimensions() {
        let grid = grid_from_strs(&["101", "010"]);
        for rules in RuleSet::ALL {
            let next = step(&grid, rules);
            assert_eq!((next.height(), next.width()), (2, 3));
        }
    }

    #[test]
    fn step_reads_only_the_input_snapshot() {
        // A vertical bar on a 3x3 torus: every dead cell sees exactly three live
        // neighbors, every live cell two. In-place updates would diverge.
        let grid = grid_from_strs(&["010", "010", "010"]);
        let next = step(&grid, RuleSet::Standard);
        assert_eq!(next.population(), 9);
        assert!(step(&next, RuleSet::Standard).is_extinct());
    }

    #[test]
    fn day_and_night_differs_from_standard_on_full_ring() {
        let ring = grid_from_strs(&["111", "101", "111"]);
        assert_ne!(
            step(&ring, RuleSet::Standard),
            step(&ring, RuleSet::DayAndNight)
        );
    }

    #[test]
    fn evolve_yields_successive_generations() {
        let generations: Vec<Grid> = evolve(horizontal_blinker(), RuleSet::Standard)
            .take(3)
            .collect();
        assert_eq!(generations.len(), 3);
        assert_eq!(generations[1], horizontal_blinker());
        assert_eq!(generations[0], generations[2]);
    }
}
