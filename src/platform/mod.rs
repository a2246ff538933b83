//! Host Capabilities
//!
//! Browser APIs (localStorage, fetch, intervals) behind small traits so the
//! demo state can run against in-memory fakes.

mod storage;
mod http;
mod timer;

pub use storage::*;
pub use http::*;
pub use timer::*;

#[cfg(test)]
pub(crate) use timer::manual;
