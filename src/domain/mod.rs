pub mod drug;
pub mod errors;
pub mod money;
pub mod patient;
pub mod ports;
pub mod prescription;
pub mod stats;
