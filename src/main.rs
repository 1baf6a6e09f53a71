#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::path;
use std::process;

use anyhow::Error;
use anyhow::Result;
use domain::models::parse_backend_name;
use domain::models::Action;
use domain::models::Event;
use infrastructure::backends::BackendManager;
use tokio::sync::mpsc;
use tokio::task;
use yansi::Paint;

use crate::application::cli;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::ActionsService;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Oh no! SoilSync has failed with the following app version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

fn log_dir() -> String {
    return env::var("SOILSYNC_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("soilsync")
            .to_string_lossy()
            .to_string();
    });
}

async fn start_chat() -> Result<()> {
    let backend_name = parse_backend_name(&Config::get(ConfigKey::Backend))?;
    let backend = BackendManager::get(backend_name);

    // Chat still works through the fallback, so an unhealthy API only warns.
    if let Err(err) = backend.health_check().await {
        tracing::warn!(error = ?err, backend = %backend_name, "Backend health check failed");
        eprintln!(
            "{}",
            Paint::yellow(format!(
                "Warning: {err}. Answers will come from offline advice until the API is reachable."
            ))
        );
    }

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    let worker_tx = event_tx.clone();
    background_futures.spawn(async move {
        return ActionsService::start(backend, worker_tx, &mut action_rx).await;
    });

    let ui_future = ui::start(action_tx, event_tx, event_rx);

    return tokio::select!(
        res = background_futures.join_next() => match res {
            Some(res) => res?,
            None => Ok(()),
        },
        res = ui_future => res,
    );
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let file_appender = tracing_appender::rolling::never(log_dir(), "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("soilsync")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready = match cli::parse().await {
        Ok(ready) => ready,
        Err(err) => {
            handle_error(err);
            return;
        }
    };
    if !ready {
        process::exit(0);
    }

    if let Err(err) = start_chat().await {
        handle_error(err);
    }

    process::exit(0);
}
