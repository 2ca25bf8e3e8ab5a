use strum::AsRefStr;

/// Why notification was not shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// Event happened before the current local day started
    Stale,
    Duplicate,
    PlatformUnsupported,
    PermissionDenied,
    DisplayFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Emitted,
    Skipped(SkipReason),
}

impl Evaluation {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Evaluation::Emitted)
    }
}
