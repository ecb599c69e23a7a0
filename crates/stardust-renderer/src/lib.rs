pub mod backend;
pub mod galaxy;
pub mod gpu;
pub mod matrix;
pub mod points;
pub mod scene;
pub mod session;

pub use backend::SurfaceRenderer;
pub use galaxy::{generate, GalaxyAnimation, GalaxyError, GalaxyParameters, ParticleCloud};
pub use gpu::{GraphicsLibrary, PhysicalSize, RendererError, WgpuRenderer};
pub use scene::{PerspectiveCamera, PointsMaterial, Scene};
pub use session::{Clock, FrameHost, FrameRequest, LoopState, RenderSession, SessionClock, Viewport};
