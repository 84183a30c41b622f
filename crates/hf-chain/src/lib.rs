//! hf-chain: delivery-chain graph and the wrappers built on it.
//!
//! A chain is a tree of [`ChainLink`]s rooted at the pump. Flow rate is
//! aggregated bottom-up from the nozzles (summed at branches), and the
//! pressure the pump must supply accumulates top-down, taking the greatest
//! requirement where branches merge.
//!
//! Graphs are never edited once queried. Scenario variations are produced by
//! [`ChainLink::duplicate`] with a [`ComponentTransform`] applied along the
//! unbranched run nearest the pump.

pub mod chain;
pub mod configuration;
pub mod link;
pub mod transform;
pub mod walkthrough;

pub use chain::{Chain, Description, format_quantity};
pub use configuration::{ConfigurationLibrary, ConfigurationSet};
pub use link::ChainLink;
pub use transform::{ComponentTransform, Identity, TransformSet};
pub use walkthrough::{WalkthroughStep, walkthrough};
