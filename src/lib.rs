pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod operations;
pub mod units;

pub use config::OffsetSettings;
pub use error::{GridOffsetError, Result};
pub use operations::offset::{offset_grid, OffsetRequest, OffsetResult};
