pub mod sir_states;
pub use sir_states::*;

pub mod route_graph;
pub use route_graph::*;

pub mod loader;
pub use loader::*;

pub mod reweight;
pub use reweight::*;

pub mod propagation;
pub use propagation::*;

pub mod curing;
pub use curing::*;

pub mod metrics;
pub use metrics::*;

pub mod node_link;
pub use node_link::*;

pub mod simulation;
pub use simulation::*;

pub mod sir_writer;
pub use sir_writer::*;
