pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod keys;
pub mod models;
pub mod overlay;
pub mod storage;
pub mod template;
pub mod ui;
pub mod view;
pub mod state;

pub use app::router;
pub use config::Config;
pub use keys::DateKey;
pub use state::AppState;
pub use storage::{load_data, KeyValueStore, StoreData};
