use codeflick::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
