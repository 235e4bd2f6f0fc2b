//! Telemetry helpers for dashboards embedding `threshold-chart`.
//!
//! The geometry engine only emits `tracing` events; installing a subscriber
//! is left to the host. The helpers below are a convenience for binaries,
//! benches and tests that just want readable output.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "threshold_chart=info";

/// Initializes a compact `tracing` subscriber filtered by [`DEFAULT_FILTER`].
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the `telemetry` feature is disabled or if a global
/// subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive
/// (for example `"threshold_chart=trace"` while debugging segmentation).
///
/// `RUST_LOG` still wins when present.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
