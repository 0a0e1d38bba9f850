mod camera;
mod scheduler;
mod session;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use scheduler::TickTimer;
pub use session::{Session, DEFAULT_RATE, MAX_RATE, MIN_RATE};
