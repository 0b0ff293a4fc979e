pub mod boot;
pub mod color;
pub mod extras;
#[cfg(any(test, feature = "testing"))]
pub mod record;
pub mod scene;
pub mod surface;

pub use boot::{BootConfig, Host, SurfaceError, UNSUPPORTED_MESSAGE, run};
pub use color::Color;
pub use extras::{Extras, GraphicsExtras, install_extras};
pub use scene::{SceneConfig, draw_scene, draw_scene_with};
pub use surface::{ImageData, Rgba, Surface};

// Re-export kurbo so backends and tests share one geometry version
pub use kurbo;
