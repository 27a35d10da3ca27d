use thiserror::Error;

/// Failures while bringing up the window and renderer. All of them are fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to initialise logger: {0}")]
    Logger(String),

    #[error("failed to open window: {0}")]
    Window(#[from] eframe::Error),

    #[error("no wgpu render state, cannot draw the sheet")]
    NoRenderState,
}
