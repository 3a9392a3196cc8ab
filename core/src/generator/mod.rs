use crate::*;
pub use random::*;

mod random;

pub trait LightsGenerator {
    fn generate(self, config: GameConfig) -> LightGrid;
}
