//! Library components of the `folio` harness.

pub mod logging;
pub mod replay;
