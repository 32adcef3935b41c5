//! Quest Mapper: an interactive, filterable grid of the quest curriculum.
//!
//! The curriculum is static data (`dataset`). A `FilterState` (`filter`)
//! selects stages, roles and a highlighted quest pattern; `view` derives what
//! is shown from the two; `ui` draws it with ratatui and `snapshot` prints it.

pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod embed;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod snapshot;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::{App, AppAction};
pub use dataset::Dataset;
pub use error::{QuestMapperError, Result};
pub use filter::{FilterState, InitialFilters, toggle};
pub use view::{MatrixView, StepAnnotation, order_domains};
