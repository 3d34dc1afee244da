//! Daily lineup jobs: service configuration, snapshot gathering, and
//! starting-goalie swap planning shared by the `set-lineup` and
//! `swap-goalies` binaries.

pub mod config;
pub mod goalies;
pub mod inputs;
pub mod logging;

pub use config::{load_priority_list, ServiceConfig};
pub use goalies::{plan_swaps, GoalieTable};
pub use inputs::{gather_inputs, LineupInputs};
pub use logging::initialize_logging;
