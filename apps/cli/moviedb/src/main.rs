use moviedb::args::parse_page;
use moviedb::display::TextDisplay;
use moviedb::error::MovieDbError;
use moviedb::logger::{initialize as LoggerInitialize, is_ready as logger_is_ready};
use moviedb::startup::{prepare_config_dir, report_error};

use client_core::HttpClient;
use client_core::config::{ClientConfig, config_dir, load_api_key};
use client_core::delivery::MainQueue;
use client_core::transport::ReqwestTransport;
use client_core::upcoming::{MovieDisplay, UpcomingMoviesInteractor, UpcomingMoviesPresenter};

use std::env;
use std::io::{stderr, stdout};
use std::process::ExitCode;
use std::sync::{Arc, Weak};

use log::{debug, info};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, logger_is_ready(), &mut stderr());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), MovieDbError> {
    let config_dir = config_dir()?;

    prepare_config_dir(&config_dir)?;

    // Initialize logger FIRST
    LoggerInitialize(&config_dir)?;

    info!("moviedb starting");
    info!("Config directory: {}", config_dir.display());

    let page = parse_page(env::args().nth(1).as_deref())?;
    let config = ClientConfig::load(&config_dir)?;
    let api_key = load_api_key()?;
    let transport = ReqwestTransport::new(&config.http)?;

    // Presentation is delivered through the main queue and drained here.
    let (main_handle, mut main_queue) = MainQueue::new();
    let display = Arc::new(TextDisplay::new(stdout()));
    let weak_display: Weak<dyn MovieDisplay> = Arc::downgrade(&display) as Weak<dyn MovieDisplay>;
    let presenter = UpcomingMoviesPresenter::new(
        weak_display,
        Arc::new(main_handle),
        config.api.image_base_url.clone(),
    );

    let interactor = UpcomingMoviesInteractor::new(
        HttpClient::new(transport),
        presenter,
        config.api.clone(),
        api_key,
    );

    let result = interactor.load(page).await;

    let delivered = main_queue.run_until_idle();
    debug!("Delivered {delivered} presentation(s)");

    result?;
    Ok(())
}
