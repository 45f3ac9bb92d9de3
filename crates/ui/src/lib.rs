pub mod app;
pub mod context;
pub mod routes;
mod scripts;
pub mod speech;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, SpeechMode, UiApp};
