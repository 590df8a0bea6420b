/// Per-epoch training statistics, handed to the progress callback of
/// `Network::train_with_progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over all samples of this epoch, measured on each
    /// sample's forward pass before its update.
    pub train_loss: f64,
}
