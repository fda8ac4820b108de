use anchor_lang::prelude::*;

use crate::state::{ConfirmationPolicy, GuardianSet, Protocol};

pub fn set_confirmation_policy(
    ctx: Context<SetConfirmationPolicy>,
    policy: ConfirmationPolicy,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let protocol = &mut ctx.accounts.protocol;
    protocol.set_confirmation_policy(&ctx.accounts.guardians, &owner, policy)?;

    emit!(ConfirmationPolicySet {
        owner,
        policy,
        required: policy.required(),
        guardian_count: ctx.accounts.guardians.len() as u8,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetConfirmationPolicy<'info> {
    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        seeds = [b"guardians", protocol.key().as_ref()],
        bump
    )]
    pub guardians: Box<Account<'info, GuardianSet>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ConfirmationPolicySet {
    pub owner: Pubkey,
    pub policy: ConfirmationPolicy,
    pub required: u8,
    pub guardian_count: u8,
}
