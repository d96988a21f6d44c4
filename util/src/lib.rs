//! Shared helpers for the EulerMax vault services
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]

pub mod telemetry;

/// Map an error into a string-carrying error variant
///
/// Usage: `.map_err(err_str!(VaultClientError::Rpc))`
#[macro_export]
macro_rules! err_str {
    ($x:expr) => {
        |e| $x(e.to_string())
    };
}
