pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod homework;
pub mod notify;
pub mod poller;

pub use app::run;
pub use config::Config;
pub use error::PollError;
