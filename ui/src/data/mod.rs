//! Raw statistical datasets: wire model, sector catalogue and the loader.

mod category;
pub use category::Category;

mod dataset;
pub use dataset::{DataContractError, RawDataset, RawObservation, MAX_COUNT};

pub mod loader;
pub use loader::{DatasetBundle, DatasetState, Endpoint, LoadError};
