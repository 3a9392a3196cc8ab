use crate::utils::*;
use clap::Args;
use lights_out_core as game;
use game::{GameConfig, LightsGenerator};
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct BoardProps {
    /// Number of rows
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
    pub rows: game::Coord,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
    pub cols: game::Coord,

    /// Chance for each light to start on
    #[arg(long, default_value_t = GameConfig::DEFAULT_LIGHT_CHANCE)]
    pub chance: f64,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start from these lit cells ("row-col") instead of a random board
    #[arg(long, value_parser = game::parse_coords)]
    pub lit: Vec<game::Coord2>,
}

impl BoardProps {
    fn game_config(&self) -> GameConfig {
        GameConfig::new((self.rows, self.cols), self.chance)
    }

    /// The configured puzzle when lit cells were given, a random board otherwise.
    fn initial_grid(&self, seed: u64) -> game::LightGrid {
        let config = self.game_config();

        if !self.lit.is_empty() {
            match game::LightGrid::from_lit_coords(config.size, &self.lit) {
                Ok(grid) => return grid,
                Err(err) => log::warn!("Ignoring lit cells {:?}: {}", self.lit, err),
            }
        }

        game::RandomLightsGenerator::new(seed).generate(config)
    }
}

impl Default for BoardProps {
    fn default() -> Self {
        Self {
            rows: GameConfig::DEFAULT_SIZE.0,
            cols: GameConfig::DEFAULT_SIZE.1,
            chance: GameConfig::DEFAULT_LIGHT_CHANCE,
            seed: None,
            lit: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellActivated(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    is_lit: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        is_lit,
        callback,
    } = props.clone();

    let class = classes!("cell", is_lit.then_some("lit"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        callback.emit((row, col));
    });

    html! {
        <td {class} {onclick}/>
    }
}

#[derive(Debug)]
pub(crate) struct BoardView {
    controller: game::GameController,
    seed: u64,
}

impl BoardView {
    fn seed_for(props: &BoardProps) -> u64 {
        props.seed.unwrap_or_else(js_random_seed)
    }

    fn activate(&mut self, coords: game::Coord2) -> bool {
        match self.controller.on_cell_activated(coords) {
            Ok(outcome) => {
                log::debug!("activate {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("rejected activation at {:?}: {}", coords, err);
                false
            }
        }
    }

    fn board_html(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let (rows, cols) = state.size();

        html! {
            <table class="board">
                <tbody>
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let is_lit = state.is_lit((row, col));
                                    let callback = ctx.link().callback(Msg::CellActivated);
                                    html! {
                                        <CellView {row} {col} {is_lit} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
                </tbody>
            </table>
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = Self::seed_for(ctx.props());
        log::debug!("seed: {}", seed);
        Self {
            controller: game::GameController::new(ctx.props().initial_grid(seed)),
            seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellActivated(coords) => self.activate(coords),
            NewGame => {
                self.seed = js_random_seed();
                log::debug!("new game, seed: {}", self.seed);
                self.controller.restart(ctx.props().initial_grid(self.seed));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        let content = if self.controller.is_finished() {
            html! {
                <div class="winner">{"Won!"}</div>
            }
        } else {
            self.board_html(ctx)
        };

        html! {
            <div class="lights-out">
                <h1>{"Lights Out"}</h1>
                {content}
                <nav>
                    <button onclick={cb_new_game}>{"New game"}</button>
                </nav>
            </div>
        }
    }
}
