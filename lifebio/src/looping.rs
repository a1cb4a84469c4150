//! Multi-generation preview loop for `lifebio run`.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::core::grid::Grid;
use crate::core::render::DisplayMode;
use crate::core::rules::RuleSet;
use crate::core::stepper::evolve;

/// Parameters of a preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    pub rules: RuleSet,
    pub display: DisplayMode,
    /// Generations computed after the initial grid.
    pub iterations: u32,
    /// Pause before each generation; zero disables it.
    pub delay: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::Standard,
            display: DisplayMode::Half,
            iterations: 5,
            delay: Duration::ZERO,
        }
    }
}

/// One rendered generation handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// 0 for the initial grid.
    pub generation: u32,
    pub grid: &'a Grid,
    pub text: String,
}

/// First generation whose state had already been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    pub generation: u32,
    /// Generations between the two occurrences (1 for still lifes and
    /// extinction).
    pub period: u32,
}

/// Summary of a loop invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopOutcome {
    pub generations: u32,
    pub final_grid: Grid,
    pub first_repeat: Option<Repeat>,
}

/// Render `initial`, then step and render `config.iterations` times.
///
/// Every frame is passed to `on_frame` as soon as it is rendered. Repeated
/// states are recorded in the outcome but never cut the run short.
#[instrument(skip_all, fields(rules = %config.rules, display = %config.display, iterations = config.iterations))]
pub fn run_loop<F: FnMut(&Frame<'_>)>(
    initial: Grid,
    config: &LoopConfig,
    mut on_frame: F,
) -> LoopOutcome {
    // Only state hashes are kept, so memory does not grow with the grids.
    let mut seen: HashMap<u64, u32> = HashMap::new();
    let mut first_repeat = None;

    on_frame(&Frame {
        generation: 0,
        grid: &initial,
        text: config.display.render(&initial),
    });
    seen.insert(state_hash(&initial), 0);

    let mut final_grid = initial.clone();
    let generations = (1..=config.iterations).zip(evolve(initial, config.rules));
    for (generation, grid) in generations {
        if !config.delay.is_zero() {
            std::thread::sleep(config.delay);
        }
        debug!(generation, population = grid.population(), "stepped");
        on_frame(&Frame {
            generation,
            grid: &grid,
            text: config.display.render(&grid),
        });

        if first_repeat.is_none() {
            let hash = state_hash(&grid);
            if let Some(&earlier) = seen.get(&hash) {
                let repeat = Repeat {
                    generation,
                    period: generation - earlier,
                };
                info!(generation, period = repeat.period, "state repeats");
                first_repeat = Some(repeat);
                // Later states are determined by now; stop recording them.
                seen.clear();
            } else {
                seen.insert(hash, generation);
            }
        }
        final_grid = grid;
    }

    LoopOutcome {
        generations: config.iterations,
        final_grid,
        first_repeat,
    }
}

fn state_hash(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::patterns::GLIDER;
    use crate::core::stepper::step;
    use crate::test_support::grid_from_strs;

    fn blinker() -> Grid {
        Grid::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).expect("grid")
    }

    #[test]
    fn emits_initial_frame_plus_one_per_iteration() {
        let config = LoopConfig {
            iterations: 4,
            ..LoopConfig::default()
        };
        let mut generations = Vec::new();
        let outcome = run_loop(blinker(), &config, |frame| generations.push(frame.generation));
        assert_eq!(generations, vec![0, 1, 2, 3, 4]);
        assert_eq!(outcome.generations, 4);
        assert_eq!(outcome.final_grid, blinker());
    }

    #[test]
    fn frames_are_rendered_in_configured_mode() {
        let config = LoopConfig {
            display: DisplayMode::Full,
            iterations: 1,
            ..LoopConfig::default()
        };
        let mut texts = Vec::new();
        run_loop(blinker(), &config, |frame| texts.push(frame.text.clone()));
        assert_eq!(texts[0], "     \n     \n ███ \n     \n     ");
        assert_eq!(texts[1], "     \n  █  \n  █  \n  █  \n     ");
    }

    #[test]
    fn zero_iterations_only_renders_initial_grid() {
        let config = LoopConfig {
            iterations: 0,
            ..LoopConfig::default()
        };
        let mut count = 0;
        let outcome = run_loop(blinker(), &config, |_| count += 1);
        assert_eq!(count, 1);
        assert_eq!(outcome.first_repeat, None);
    }

    #[test]
    fn detects_oscillator_period() {
        let config = LoopConfig {
            iterations: 6,
            ..LoopConfig::default()
        };
        let outcome = run_loop(blinker(), &config, |_| {});
        assert_eq!(
            outcome.first_repeat,
            Some(Repeat {
                generation: 2,
                period: 2
            })
        );
    }

    #[test]
    fn extinction_repeats_with_period_one() {
        let config = LoopConfig {
            iterations: 3,
            ..LoopConfig::default()
        };
        let outcome = run_loop(grid_from_strs(&["100", "000", "000"]), &config, |_| {});
        assert!(outcome.final_grid.is_extinct());
        assert_eq!(
            outcome.first_repeat,
            Some(Repeat {
                generation: 2,
                period: 1
            })
        );
    }

    #[test]
    fn equal_states_share_a_hash() {
        assert_eq!(state_hash(&blinker()), state_hash(&blinker()));
        let vertical = Grid::with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]).expect("grid");
        assert_ne!(state_hash(&blinker()), state_hash(&vertical));
    }

    #[test]
    fn final_grid_matches_stepping_by_hand() {
        let start = GLIDER.place(8, 8).expect("grid");
        let config = LoopConfig {
            iterations: 7,
            ..LoopConfig::default()
        };
        let outcome = run_loop(start.clone(), &config, |_| {});
        let mut expected = start;
        for _ in 0..7 {
            expected = step(&expected, RuleSet::Standard);
        }
        assert_eq!(outcome.final_grid, expected);
        assert_eq!(outcome.first_repeat, None);
    }

    #[test]
    fn glider_crossing_the_torus_repeats_after_full_lap() {
        // The glider moves one cell diagonally every four generations, so on a
        // 5x5 torus it is back where it started after twenty.
        let config = LoopConfig {
            iterations: 25,
            ..LoopConfig::default()
        };
        let outcome = run_loop(GLIDER.place(5, 5).expect("grid"), &config, |_| {});
        assert_eq!(
            outcome.first_repeat,
            Some(Repeat {
                generation: 20,
                period: 20
            })
        );
    }
}
