pub mod digest;
pub mod liveness;
pub mod token;
pub mod vesting;
