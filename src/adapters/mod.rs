// Adapters layer: concrete implementations of the domain ports.

pub mod headless;
pub mod storage;
pub mod submit;

pub use headless::{HeadlessDocument, HeadlessView, PageState};
pub use storage::{JsonFileStore, MemoryStore};
pub use submit::{FailurePolicy, HttpSubmitter, SimulatedSubmitter};
