pub mod epoch_stats;
pub mod shuffle;

pub use epoch_stats::EpochStats;
pub use shuffle::shuffle_order;
