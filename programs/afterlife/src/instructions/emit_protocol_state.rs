use anchor_lang::prelude::*;

use crate::state::{BeneficiaryTable, GuardianSet, Protocol, ProtocolConfig, ProtocolState};
use crate::utils::digest::snapshot_digest;

pub fn emit_protocol_state(ctx: Context<EmitProtocolState>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let protocol = &ctx.accounts.protocol;
    let guardians = &ctx.accounts.guardians;
    let table = &ctx.accounts.beneficiaries;

    let digest = snapshot_digest(protocol, guardians, table)?;

    emit!(ProtocolSnapshot {
        owner: protocol.owner,
        mint: protocol.mint,
        state: protocol.derived_state(now, ctx.accounts.config.sync_buffer_seconds),
        observed_at: now,
        is_dead: protocol.is_dead,
        last_heartbeat: protocol.last_heartbeat,
        inactivity_threshold: protocol.inactivity_threshold,
        death_declaration_time: protocol.death_declaration_time,
        vesting_start_time: protocol.vesting_start_time,
        vault_balance: protocol.vault_balance,
        current_vault_balance: protocol.current_vault_balance,
        total_allocation_bps: table.total_allocation_bps,
        total_claimed: protocol.total_claimed,
        guardian_count: guardians.len() as u8,
        beneficiary_count: table.beneficiaries.len() as u8,
        confirmations: guardians.confirmations(),
        confirmations_required: protocol.confirmation_policy.required(),
        digest,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitProtocolState<'info> {
    #[account(seeds = [b"protocol_config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        seeds = [b"guardians", protocol.key().as_ref()],
        bump
    )]
    pub guardians: Box<Account<'info, GuardianSet>>,

    #[account(
        seeds = [b"beneficiaries", protocol.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, BeneficiaryTable>>,
}

#[event]
pub struct ProtocolSnapshot {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub state: ProtocolState,
    pub observed_at: i64,
    pub is_dead: bool,
    pub last_heartbeat: i64,
    pub inactivity_threshold: i64,
    pub death_declaration_time: i64,
    pub vesting_start_time: i64,
    pub vault_balance: u64,
    pub current_vault_balance: u64,
    pub total_allocation_bps: u16,
    pub total_claimed: u64,
    pub guardian_count: u8,
    pub beneficiary_count: u8,
    pub confirmations: u8,
    pub confirmations_required: u8,
    /// blake3 over the protocol record and both registries.
    pub digest: [u8; 32],
}
