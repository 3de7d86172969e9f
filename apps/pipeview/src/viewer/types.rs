use pv_core::PipeResolver;

pub(crate) const STATUS_IDLE: &str = "Waiting for pipe string.";
pub(crate) const STATUS_EMPTY_INPUT: &str = "Please enter the pipe string.";

/// Resolution strategy selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolverChoice {
    Registry,
    PipeUri,
}

impl ResolverChoice {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "registry" => Some(Self::Registry),
            "pipe-uri" => Some(Self::PipeUri),
            _ => None,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::PipeUri => "pipe-uri",
        }
    }
}

/// Connected-target summary shown in the viewport pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConnectedView {
    pub(crate) url: String,
    pub(crate) pipe_string: String,
    pub(crate) via_fallback: bool,
}

pub(crate) struct ViewerApp {
    pub(crate) resolver: Box<dyn PipeResolver>,
    pub(crate) pipe_input: String,
    pub(crate) status_line: String,
    pub(crate) connected: Option<ConnectedView>,
}
