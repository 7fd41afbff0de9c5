mod confirm;
mod document;
mod host;
mod session;

pub use confirm::{propose, NameDistanceOverride};
pub use document::{GridDocument, GridId};
pub use host::{
    ConfirmationInput, ConfirmationSurface, ElementInfo, GridCategoryFilter, GridRecord, GridStore,
    Proposal, Reporter, Selection, SelectionFilter,
};
pub use session::{AttemptOutcome, OffsetSession, SessionReport};
