pub mod body;
pub mod energy;
pub mod export;
pub mod logging;
pub mod nutrition;
pub mod plan;
pub mod report;
pub mod status;
pub mod units;
