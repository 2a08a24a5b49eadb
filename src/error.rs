use crate::overlay::OverlayKind;

#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum InteractionError {
    #[error("no project registered under `{0}`")]
    UnknownProject(String),
    #[error("cannot open {} while {} holds the scroll lock", .requested.as_str(), .holder.as_str())]
    OverlayBusy {
        requested: OverlayKind,
        holder: OverlayKind,
    },
    #[error("gallery has no images")]
    EmptyGallery,
    #[error("image index {index} is outside a gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("counter target `{0}` is not a number")]
    InvalidCounterTarget(String),
}

impl InteractionError {
    /// Stable identifier used as the `error_class` field of log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownProject(_) => "unknown_project",
            Self::OverlayBusy { .. } => "overlay_busy",
            Self::EmptyGallery => "empty_gallery",
            Self::IndexOutOfRange { .. } => "index_out_of_range",
            Self::InvalidCounterTarget(_) => "invalid_counter_target",
        }
    }
}
