pub mod link_id;
pub mod path;
pub mod simple_paths;
pub mod topology;

pub use link_id::{InterfaceAddr, LinkEndpoints};
pub use path::{LinkHop, LinkPath, NodePath, PathMetrics, ScionHop, ScionPath};
pub use simple_paths::SimplePaths;
pub use topology::{AsNode, Link, LinkAttrs, TopologyGraph};
