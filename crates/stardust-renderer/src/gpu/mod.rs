mod library;
mod renderer;
mod surface;
mod types;

pub use library::*;
pub use renderer::*;
pub use surface::*;
pub use types::*;
