use ndarray::Array2;

use super::*;

/// Lights every cell independently with `light_chance`, reproducible from the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLightsGenerator {
    seed: u64,
}

impl RandomLightsGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LightsGenerator for RandomLightsGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;

        let config = GameConfig::new(config.size, config.light_chance);
        let shape = config.size.to_nd_index();

        // no need to touch the rng for the degenerate chances
        let cells = if config.light_chance <= 0.0 {
            Array2::from_elem(shape, false)
        } else if config.light_chance >= 1.0 {
            Array2::from_elem(shape, true)
        } else {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            Array2::from_shape_fn(shape, |_| rng.random_bool(config.light_chance))
        };

        let grid = LightGrid { cells };
        log::debug!(
            "generated {:?} grid, seed: {}, chance: {}, lit: {}/{}",
            config.size,
            self.seed,
            config.light_chance,
            grid.lit_count(),
            grid.total_cells()
        );
        if grid.is_won() {
            log::warn!("Generated grid has no lights, it starts already solved");
        }
        grid
    }
}
