//! Telemetry helpers for hosts embedding `chart-layout`.
//!
//! The layout core only emits `tracing` events (lifecycle transitions at
//! `debug`, per-message bookkeeping at `trace`, ignored input at `warn`).
//! Hosts either call `init_default_tracing` or wire their own subscriber.

/// Installs a compact stderr subscriber for layout events, filtered by
/// `RUST_LOG` and falling back to `info`.
///
/// Returns `false` when the crate was built without `telemetry` or the host
/// already installed a global subscriber; layout events then go wherever the
/// host routes them.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
