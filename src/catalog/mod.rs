pub mod graph;
pub mod reference;
pub mod types;

pub use graph::CategoryGraph;
pub use reference::reference_property_policy;
pub use types::{
    CategoryConfig, CategoryFlags, PolicyConfig, SubstitutionEdge, SubstitutionTier,
};
