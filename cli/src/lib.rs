pub mod replay;
pub mod scenario;

pub use replay::{Replay, TimelineEntry};
pub use scenario::{Scenario, ScenarioError, Step};
