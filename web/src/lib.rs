use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod theme;

/// Options read from the page URL hash, e.g. `#-vv&--theme=dark`.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a color scheme instead of following the browser
    #[arg(short, long, value_enum)]
    theme: Option<theme::Theme>,
}

impl Args {
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
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

    let (args, parse_error) = match Args::from_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        // only fails when a logger is already installed
        let _ = console_log::init_with_level(log_level);
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring url hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    theme::Theme::apply(args.theme);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root(root).render();
}
