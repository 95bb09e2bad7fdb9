pub mod command;
pub mod fleet;
pub mod movable;
pub mod scenario;
pub mod ship;

pub use command::{InvalidMoveReason, MoveCommand, MoveError};
pub use fleet::{Fleet, StepReport};
pub use movable::Movable;
pub use scenario::{Scenario, ScenarioError, Simulation, SimulationConfig};
pub use ship::{Ship, ShipId};
