mod traffic;

pub use traffic::{simulate, simulate_detailed, validate_distribution, LinkLoad, SimulationOutcome};
