pub mod backend_service;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod state;

pub use backend_service::BackendService;
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::*;
pub use normalize::normalize;
pub use state::{ClientState, Notice, NoticeLevel};
