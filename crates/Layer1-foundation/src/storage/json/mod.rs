mod store;

pub use store::{JsonStore, APP_DIR};
