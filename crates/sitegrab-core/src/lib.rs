//! Fetch a host over plain HTTP and mirror the body to `<authority>/<path>`.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod session;
pub mod status;
pub mod storage;
pub mod url_model;
