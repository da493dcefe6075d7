pub mod error;
pub mod grouper;
pub mod interchange;
pub mod preprocess;
pub mod search;
pub mod state;
pub mod view;

pub use error::CoreError;
pub use grouper::{GroupingReport, group_rows};
pub use search::SearchIndex;
pub use state::AppState;
pub use view::{RestoreView, ViewState, ViewTracker};
