use thiserror::Error;

/// Everything that can go wrong in the scene. None of it is fatal to the
/// host page: init errors leave the scene inert, frame errors skip a frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("no window available")]
    NoWindow,
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("surface: {0}")]
    Surface(String),
    #[error("device: {0}")]
    Device(String),
    #[error("geometry: {0}")]
    Geometry(String),
    #[error("frame: {0}")]
    Frame(String),
}
