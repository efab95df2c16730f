//! Rendering contract for the ui-kit components.
//!
//! [`skeleton`] and [`card`] are pure functions from a config record to a
//! [`node::Element`] tree; hosts such as the Leptos binding or the dev server
//! gallery decide how that tree reaches a display surface.

pub mod card;
pub mod classes;
pub mod config;
pub mod node;
pub mod skeleton;

pub use card::CardConfig;
pub use node::{Element, Handler, Node, Region, RegionKind};
pub use skeleton::SkeletonConfig;
