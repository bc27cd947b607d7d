//! # Tracing Setup
//!
//! Log levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=beer_catalog=debug,actor_framework=info cargo run
//! ```
//!
//! At `debug` the clients log full payloads once at entry (`debug!(?order, ...)`) and the
//! actors log every request by id. At `info` only creations, deletions and lifecycle
//! events show up.

/// Installs the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
