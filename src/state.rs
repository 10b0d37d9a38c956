use crate::storage::StoreData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// One store for the whole process. Handlers hold the lock for their whole
/// run, so each event completes before the next one touches the store.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<StoreData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: StoreData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
