use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("7sqnJJ99FTvFUTsR7zTyxEJ1ki29WcJ8C3qahP2cSFWD");

#[program]
pub mod afterlife {
    use super::*;

    // Admin

    pub fn initialize_config(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
        instructions::initialize_config::initialize_config(ctx, params)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
        instructions::update_config::update_config(ctx, params)
    }

    // Owner

    /// Creates the caller's protocol instance, registries and token vault.
    pub fn register(ctx: Context<Register>, inactivity_threshold: i64) -> Result<()> {
        instructions::register::register(ctx, inactivity_threshold)
    }

    pub fn prove_life(ctx: Context<ProveLife>) -> Result<()> {
        instructions::prove_life::prove_life(ctx)
    }

    pub fn update_inactivity_threshold(
        ctx: Context<UpdateInactivityThreshold>,
        seconds: i64,
    ) -> Result<()> {
        instructions::update_inactivity_threshold::update_inactivity_threshold(ctx, seconds)
    }

    pub fn add_guardian(
        ctx: Context<AddGuardian>,
        name: String,
        wallet: Pubkey,
        is_fixed: bool,
    ) -> Result<()> {
        instructions::add_guardian::add_guardian(ctx, name, wallet, is_fixed)
    }

    pub fn remove_guardian(ctx: Context<RemoveGuardian>, wallet: Pubkey) -> Result<()> {
        instructions::remove_guardian::remove_guardian(ctx, wallet)
    }

    pub fn set_confirmation_policy(
        ctx: Context<SetConfirmationPolicy>,
        policy: ConfirmationPolicy,
    ) -> Result<()> {
        instructions::set_confirmation_policy::set_confirmation_policy(ctx, policy)
    }

    pub fn add_beneficiary(
        ctx: Context<AddBeneficiary>,
        name: String,
        wallet: Pubkey,
        allocation_bps: u16,
        vesting_type: VestingType,
        vesting_duration: i64,
    ) -> Result<()> {
        instructions::add_beneficiary::add_beneficiary(
            ctx,
            name,
            wallet,
            allocation_bps,
            vesting_type,
            vesting_duration,
        )
    }

    pub fn remove_beneficiary(ctx: Context<RemoveBeneficiary>, wallet: Pubkey) -> Result<()> {
        instructions::remove_beneficiary::remove_beneficiary(ctx, wallet)
    }

    /// Clamps the new share to what the other beneficiaries leave free.
    pub fn update_allocation(
        ctx: Context<UpdateAllocation>,
        wallet: Pubkey,
        allocation_bps: u16,
    ) -> Result<()> {
        instructions::update_allocation::update_allocation(ctx, wallet, allocation_bps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    /// Reverses a death declaration inside the configured grace window.
    pub fn revive(ctx: Context<Revive>) -> Result<()> {
        instructions::revive::revive(ctx)
    }

    // Guardian

    pub fn confirm_inactivity(ctx: Context<ConfirmInactivity>) -> Result<()> {
        instructions::confirm_inactivity::confirm_inactivity(ctx)
    }

    // Beneficiary

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    // Read-only; results are published as events.

    pub fn emit_protocol_state(ctx: Context<EmitProtocolState>) -> Result<()> {
        instructions::emit_protocol_state::emit_protocol_state(ctx)
    }

    pub fn emit_claimable_quote(ctx: Context<EmitClaimableQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claimable_quote::emit_claimable_quote(ctx, wallet)
    }

    pub fn emit_revive_status(ctx: Context<EmitReviveStatus>) -> Result<()> {
        instructions::emit_revive_status::emit_revive_status(ctx)
    }
}
