//! Process bootstrap shared by the service binaries: panic logging, runtime
//! construction and exit-code mapping.

use std::future::Future;
use std::process::ExitCode;

use tracing::{error, info};
use uuid::Uuid;

/// Build a multi-thread runtime and drive `run` to completion.
pub fn launch<F, Fut>(service: &'static str, worker_threads: Option<usize>, run: F) -> ExitCode
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %instance_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(run()) {
        Ok(()) => {
            info!(service, event = "stop", %instance_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service returned error");
            ExitCode::FAILURE
        }
    }
}
