pub mod config;
pub mod contract;
pub mod group;
pub mod groups;
pub mod list_model;
pub mod logging;
pub mod model;
pub mod panel;
pub mod ranking;
pub mod runtime;
pub mod transport;
