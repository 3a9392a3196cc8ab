use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: board::BoardProps,
}

/// Reads `#--rows=4&--cols=6&-vv` style arguments out of the location hash.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let args = location_hash
        .split(['#', '&'])
        .filter(|arg| !arg.is_empty());
    Args::try_parse_from(std::iter::once("lights-out").chain(args))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = parse_args(&location_hash);
    let log_level = match &args {
        Ok(args) => args.verbose.log_level(),
        Err(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let props = match args {
        Ok(args) => args.board,
        Err(err) => {
            log::error!("Ignoring malformed arguments: {}", err);
            board::BoardProps::default()
        }
    };
    log::debug!("board props: {:?}", props);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, props).render();
}
