pub mod initialize_config;
pub mod update_config;
pub mod register;
pub mod prove_life;
pub mod update_inactivity_threshold;
pub mod add_guardian;
pub mod remove_guardian;
pub mod set_confirmation_policy;
pub mod add_beneficiary;
pub mod remove_beneficiary;
pub mod update_allocation;
pub mod deposit;
pub mod withdraw;
pub mod confirm_inactivity;
pub mod claim;
pub mod revive;
pub mod emit_protocol_state;
pub mod emit_claimable_quote;
pub mod emit_revive_status;

pub use initialize_config::*;
pub use update_config::*;
pub use register::*;
pub use prove_life::*;
pub use update_inactivity_threshold::*;
pub use add_guardian::*;
pub use remove_guardian::*;
pub use set_confirmation_policy::*;
pub use add_beneficiary::*;
pub use remove_beneficiary::*;
pub use update_allocation::*;
pub use deposit::*;
pub use withdraw::*;
pub use confirm_inactivity::*;
pub use claim::*;
pub use revive::*;
pub use emit_protocol_state::*;
pub use emit_claimable_quote::*;
pub use emit_revive_status::*;
