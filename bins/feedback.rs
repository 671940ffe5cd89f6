use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::error;

fn main() -> ExitCode {
    // load .env first so RUST_LOG / DATABASE_URL take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "feedback", event = "config_invalid", error = %e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    let threads = cfg.feedback.worker_threads;
    server::bootstrap::launch("feedback", threads, move || server::run_feedback(cfg))
}
