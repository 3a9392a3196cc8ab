use serde::Serialize;

use crate::*;

/// Read model handed to the renderer: the lights and whether they are all off.
///
/// `has_won` is derived from the grid whenever a state is built, it is never set on its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    grid: LightGrid,
    has_won: bool,
}

impl GameState {
    pub fn new(grid: LightGrid) -> Self {
        let has_won = grid.is_won();
        Self { grid, has_won }
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.grid.is_lit(coords)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum SessionState {
    /// No cell activated yet. A board that starts dark is still playable here.
    Ready,
    Active,
    /// The lights were turned off by play, no more moves are accepted.
    Solved,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Owns the session's [`GameState`]; the only way to change the lights is through a cell activation or a restart.
#[derive(Clone, Debug, PartialEq)]
pub struct GameController {
    state: GameState,
    session: SessionState,
}

impl GameController {
    pub fn new(grid: LightGrid) -> Self {
        let state = GameState::new(grid);
        log::debug!(
            "new game {:?}, {} lit, won: {}",
            state.size(),
            state.grid.lit_count(),
            state.has_won
        );
        Self {
            state,
            session: Default::default(),
        }
    }

    /// Starts a session on a random grid.
    pub fn initialize(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomLightsGenerator::new(seed).generate(config))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn has_won(&self) -> bool {
        self.state.has_won
    }

    pub fn session_state(&self) -> SessionState {
        self.session
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.state.size()
    }

    /// Flips the activated cell and its neighbors.
    ///
    /// Once play has turned every light off the board is frozen and activations report
    /// [`FlipOutcome::NoChange`]. Coordinates outside the grid are rejected before anything moves.
    pub fn on_cell_activated(&mut self, coords: Coord2) -> Result<FlipOutcome> {
        let coords = self.state.grid.validate_coords(coords)?;

        if self.session.is_finished() {
            log::debug!("board already solved, ignoring {:?}", coords);
            return Ok(FlipOutcome::NoChange);
        }

        self.state.grid.flip_around(coords)?;
        self.state.has_won = self.state.grid.is_won();

        Ok(if self.state.has_won {
            log::debug!("all lights off after {:?}", coords);
            self.session = SessionState::Solved;
            FlipOutcome::Won
        } else {
            self.session = SessionState::Active;
            FlipOutcome::Flipped
        })
    }

    pub fn restart(&mut self, grid: LightGrid) {
        *self = Self::new(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn controller(size: Coord2, lit: &[Coord2]) -> GameController {
        GameController::new(LightGrid::from_lit_coords(size, lit).unwrap())
    }

    fn lit_cells(controller: &GameController) -> Vec<Coord2> {
        controller.state().grid().iter_lit().collect()
    }

    #[test]
    fn activating_center_twice_returns_to_dark() {
        let mut game = GameController::initialize(GameConfig::new((3, 3), 0.0), 5);
        assert!(game.has_won());
        assert_eq!(game.session_state(), SessionState::Ready);

        assert_eq!(game.on_cell_activated((1, 1)).unwrap(), FlipOutcome::Flipped);
        assert!(!game.has_won());
        assert_eq!(lit_cells(&game), [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);

        assert_eq!(game.on_cell_activated((1, 1)).unwrap(), FlipOutcome::Won);
        assert!(game.has_won());
        assert!(game.is_finished());
        assert!(lit_cells(&game).is_empty());
    }

    #[test]
    fn plus_shape_then_back_to_dark() {
        let mut game = controller((3, 3), &[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]);
        assert!(!game.has_won());

        let outcome = game.on_cell_activated((1, 1)).unwrap();

        assert_eq!(outcome, FlipOutcome::Won);
        assert!(game.has_won());
        assert!(game.state().grid().is_won());
    }

    #[test]
    fn flipped_outcome_reports_new_state() {
        let mut game = controller((3, 3), &[(2, 2)]);

        let outcome = game.on_cell_activated((1, 1)).unwrap();

        assert_eq!(outcome, FlipOutcome::Flipped);
        assert!(outcome.has_update());
        assert!(!game.has_won());
        assert_eq!(lit_cells(&game), [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn corner_activation_lights_three() {
        let mut game = controller((5, 5), &[(4, 4)]);

        game.on_cell_activated((0, 0)).unwrap();

        assert_eq!(lit_cells(&game), [(0, 0), (0, 1), (1, 0), (4, 4)]);
    }

    #[test]
    fn solved_board_ignores_activations() {
        let mut game = controller((3, 3), &[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(game.on_cell_activated((0, 0)).unwrap(), FlipOutcome::Won);
        let solved = game.state().clone();

        for coords in [(0, 0), (1, 1), (2, 2)] {
            let outcome = game.on_cell_activated(coords).unwrap();
            assert_eq!(outcome, FlipOutcome::NoChange);
            assert!(!outcome.has_update());
        }

        assert_eq!(game.state(), &solved);
        assert!(game.has_won());
    }

    #[test]
    fn out_of_bounds_activation_is_rejected() {
        let mut game = controller((3, 3), &[(1, 1)]);
        let before = game.state().clone();

        assert_eq!(game.on_cell_activated((3, 1)), Err(GameError::InvalidCoords));
        assert_eq!(game.on_cell_activated((1, 200)), Err(GameError::InvalidCoords));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn parsed_token_drives_activation() {
        let mut game = controller((4, 4), &[]);
        game.restart(LightGrid::from_lit_coords((4, 4), &[(3, 3)]).unwrap());

        let coords = parse_coords("3-2").unwrap();
        game.on_cell_activated(coords).unwrap();

        assert_eq!(lit_cells(&game), [(2, 2), (3, 1), (3, 2)]);
    }

    #[test]
    fn restart_recomputes_win_flag() {
        let mut game = controller((2, 2), &[]);
        assert!(game.has_won());

        game.restart(LightGrid::from_lit_coords((2, 3), &[(1, 2)]).unwrap());

        assert!(!game.has_won());
        assert_eq!(game.size(), (2, 3));
    }

    #[test]
    fn initialize_is_seeded() {
        let config = GameConfig::new((5, 5), 0.25);
        assert_eq!(
            GameController::initialize(config, 42),
            GameController::initialize(config, 42)
        );
    }

    #[test]
    fn snapshot_serializes_grid_and_win_flag() {
        let game = controller((2, 2), &[(0, 1)]);

        let value = serde_json::to_value(game.state()).unwrap();

        assert_eq!(value["has_won"], serde_json::Value::Bool(false));
        assert_eq!(value["grid"]["dim"], serde_json::json!([2, 2]));
        assert_eq!(value["grid"]["data"], serde_json::json!([false, true, false, false]));
    }
}
