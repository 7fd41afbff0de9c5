mod arc_offset;
mod line_offset;
mod request;

pub use arc_offset::{ArcGridOffset, ArcOffset};
pub use line_offset::{LineGridOffset, LineOffset};
pub use request::{offset_grid, OffsetRequest, OffsetResult};
