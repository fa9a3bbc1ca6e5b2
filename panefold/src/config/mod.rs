mod errors;
mod model;
mod storage;

pub(crate) use model::LayoutConfig;
pub(crate) use storage::{ConfigLoadStatus, load_initial_config};
