//! Structural elements module

pub mod material;
mod member;
mod node;
mod section;
mod support;

pub use material::{Strength, WoodSpecies};
pub use member::{EndCondition, Member, MemberReleases};
pub use node::Node;
pub use section::{SectionProperties, SectionSelection};
pub use support::Support;
