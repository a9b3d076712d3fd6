use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::config::{self, ConfigError, Overrides};
use crate::feature_flags::FlagStore;

/// Re-resolves the configuration and applies its flag table to `flags`.
pub fn reload_flags(path: Option<&Path>, overrides: &Overrides, flags: &FlagStore) -> Result<(), ConfigError> {
    let config = config::resolve(path, overrides)?;
    flags.apply(&config.flag_states());
    Ok(())
}

/// Reloads feature flags every time the process receives `SIGHUP`.
#[cfg(unix)]
pub fn spawn_flag_reload(
    path: Option<PathBuf>,
    overrides: Overrides,
    flags: Arc<FlagStore>,
) -> std::io::Result<tokio::task::JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangups = signal(SignalKind::hangup())?;
    Ok(tokio::spawn(async move {
        while hangups.recv().await.is_some() {
            info!("SIGHUP received, reloading feature flags");
            if let Err(e) = reload_flags(path.as_deref(), &overrides, &flags) {
                error!(error = %e, "Feature flag reload failed, keeping current state");
            }
        }
    }))
}
