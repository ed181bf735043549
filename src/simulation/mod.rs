mod types;

pub use types::{Message, Simulation, SimulationFile};
