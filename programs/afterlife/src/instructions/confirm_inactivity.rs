use anchor_lang::prelude::*;

use crate::state::{ConfirmationOutcome, GuardianSet, Protocol};

pub fn confirm_inactivity(ctx: Context<ConfirmInactivity>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let guardian = ctx.accounts.guardian.key();

    let protocol = &mut ctx.accounts.protocol;
    let outcome = protocol.confirm_inactivity(&mut ctx.accounts.guardians, &guardian, now)?;

    match outcome {
        ConfirmationOutcome::Recorded {
            confirmations,
            required,
        } => {
            emit!(InactivityConfirmationRecorded {
                owner: protocol.owner,
                guardian,
                confirmations,
                required,
            });
        }
        ConfirmationOutcome::DeathDeclared { confirmations } => {
            msg!("afterlife: owner {} declared inactive", protocol.owner);
            emit!(InactivityConfirmed {
                owner: protocol.owner,
                guardian,
                confirmations,
                death_declaration_time: protocol.death_declaration_time,
                vault_balance: protocol.vault_balance,
            });
        }
    }
    Ok(())
}

#[derive(Accounts)]
pub struct ConfirmInactivity<'info> {
    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        mut,
        seeds = [b"guardians", protocol.key().as_ref()],
        bump
    )]
    pub guardians: Box<Account<'info, GuardianSet>>,

    pub guardian: Signer<'info>,
}

#[event]
pub struct InactivityConfirmationRecorded {
    pub owner: Pubkey,
    pub guardian: Pubkey,
    pub confirmations: u8,
    pub required: u8,
}

#[event]
pub struct InactivityConfirmed {
    pub owner: Pubkey,
    pub guardian: Pubkey,
    pub confirmations: u8,
    pub death_declaration_time: i64,
    pub vault_balance: u64,
}
