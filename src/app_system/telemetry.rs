/// Installs the global subscriber.
///
/// Level comes from `RUST_LOG` and defaults to `info`. Records emitted through
/// the `log` crate (actix's request logger) are forwarded to the subscriber.
///
/// ```bash
/// RUST_LOG=debug flagged_shop
/// RUST_LOG=flagged_shop::clients=debug,actix_web=info flagged_shop
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
