use log::{error, info};
use service::{config::Config, logging::Logger, AppState};

mod control;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    info!("Starting webstream platform on {}...", config.api_base_url());

    let app_state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {e}");
            std::process::exit(1);
        }
    };

    // The control interface and the HTTP front door run as independent
    // tasks, coordinated only through the shared state. They are started
    // together here and torn down together at process exit.
    let control_state = app_state.clone();
    tokio::spawn(async move {
        control::run(control_state).await;
    });

    if let Err(e) = web::init_server(app_state).await {
        error!("Web server failed: {e}");
        std::process::exit(1);
    }
}
