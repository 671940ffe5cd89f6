use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::error;

fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "analytics", event = "config_invalid", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    let threads = cfg.analytics.server.worker_threads;
    server::bootstrap::launch("analytics", threads, move || server::run_analytics(cfg))
}
