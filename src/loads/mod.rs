//! Load types

mod member_load;
mod node_load;

pub use member_load::MemberLoad;
pub use node_load::NodalLoad;
