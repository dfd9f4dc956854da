pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod pages;
pub mod routes;
pub mod utils;

pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Operation Engine UI starting...");

    yew::Renderer::<app::App>::new().render();
}
