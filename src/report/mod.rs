pub mod stats;

pub use stats::Summary;
