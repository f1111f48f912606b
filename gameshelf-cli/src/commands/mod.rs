pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod search;
