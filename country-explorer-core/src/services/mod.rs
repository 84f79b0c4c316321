//! Service layer

mod dataset_loader;
mod view_state_controller;

pub use dataset_loader::DatasetLoader;
pub use view_state_controller::ViewStateController;
