/// Lifecycle of the capture models.
///
/// `Uninitialized -> Loading -> Ready | Failed`. Both `Ready` and `Failed`
/// are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed { reason: String },
}

impl CaptureState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed { .. })
    }
}
