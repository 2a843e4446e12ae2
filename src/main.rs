use std::sync::Arc;

use iced::Size;
use tracing_subscriber::EnvFilter;

use delve::app::State;
use delve::backend::{Backend, SimulatedBackend};
use delve::config;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load();
    let window_size = Size::new(config.window.width, config.window.height);
    let backend: Arc<dyn Backend> = Arc::new(SimulatedBackend::new(
        config.search.latency(),
        config.search.follow_up_latency(),
    ));

    tracing::info!("Starting delve");

    iced::application(
        move || State::new(config.clone(), Arc::clone(&backend)),
        State::update,
        State::view,
    )
    .title(State::title)
    .subscription(State::subscription)
    .theme(State::theme)
    .window_size(window_size)
    .run()
}
