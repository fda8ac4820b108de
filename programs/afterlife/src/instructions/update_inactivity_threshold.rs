use anchor_lang::prelude::*;

use crate::state::Protocol;

pub fn update_inactivity_threshold(
    ctx: Context<UpdateInactivityThreshold>,
    seconds: i64,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let protocol = &mut ctx.accounts.protocol;
    let old_threshold = protocol.update_inactivity_threshold(&owner, seconds)?;

    emit!(ThresholdUpdated {
        owner,
        old_threshold,
        new_threshold: seconds,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateInactivityThreshold<'info> {
    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ThresholdUpdated {
    pub owner: Pubkey,
    pub old_threshold: i64,
    pub new_threshold: i64,
}
