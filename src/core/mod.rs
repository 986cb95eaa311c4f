pub mod chrome;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod listing;
pub mod plan;
pub mod toast;
pub mod upload;

pub use crate::domain::model::{Listing, Notice, PricingPlan};
pub use crate::domain::ports::{Document, KeyValueStore, Submitter};
pub use crate::utils::error::Result;
