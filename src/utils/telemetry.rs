// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber once, at startup.
///
/// The filter defaults to crate-level debug and can be overridden through
/// `RUST_LOG`.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sosanhgia=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
