use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logger;
mod toast;

fn main() {
    logger::init();
    log::info!("Brand Studio client, API at {}", config::api_url("/api"));
    yew::Renderer::<App>::new().render();
}
