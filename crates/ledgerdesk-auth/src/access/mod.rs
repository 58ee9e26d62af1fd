//! Role-gated access checks.

pub mod chain;

pub use chain::AccessChain;
