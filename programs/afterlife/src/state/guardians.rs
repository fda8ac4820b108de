use anchor_lang::prelude::*;

use crate::constants::{MAX_GUARDIANS, MAX_NAME_LEN};
use crate::error::AfterlifeError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Guardian {
    pub name: String,
    pub wallet: Pubkey,
    /// Fixed guardians cannot be removed by the owner.
    pub is_fixed: bool,
    /// Set while this guardian's inactivity confirmation is on record.
    pub confirmed: bool,
}

impl Guardian {
    pub const SIZE: usize =
        4 + MAX_NAME_LEN + // name
        32 + // wallet
        1 +  // is_fixed
        1;   // confirmed
}

/// PDA holding one owner's guardians and the confirmation tally.
#[account]
pub struct GuardianSet {
    pub protocol: Pubkey,
    pub guardians: Vec<Guardian>,
}

impl GuardianSet {
    pub const fn space(max: usize) -> usize {
        8 + 32 + 4 + max * Guardian::SIZE
    }

    pub fn new(protocol: Pubkey) -> Self {
        Self {
            protocol,
            guardians: Vec::with_capacity(MAX_GUARDIANS),
        }
    }

    pub fn len(&self) -> usize {
        self.guardians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }

    pub fn find(&self, wallet: &Pubkey) -> Option<&Guardian> {
        self.guardians.iter().find(|g| g.wallet == *wallet)
    }

    pub fn confirmations(&self) -> u8 {
        self.guardians.iter().filter(|g| g.confirmed).count() as u8
    }

    pub fn add(
        &mut self,
        name: String,
        wallet: Pubkey,
        is_fixed: bool,
    ) -> std::result::Result<(), AfterlifeError> {
        if wallet == Pubkey::default() {
            return Err(AfterlifeError::InvalidPubkey);
        }
        super::validate_name(&name)?;
        if self.find(&wallet).is_some() {
            return Err(AfterlifeError::AlreadyExists);
        }
        if self.guardians.len() >= MAX_GUARDIANS {
            return Err(AfterlifeError::GuardianListFull);
        }
        self.guardians.push(Guardian {
            name,
            wallet,
            is_fixed,
            confirmed: false,
        });
        Ok(())
    }

    /// Removes a guardian, keeping at least `min_remaining` behind.
    pub fn remove(
        &mut self,
        wallet: &Pubkey,
        min_remaining: u8,
    ) -> std::result::Result<Guardian, AfterlifeError> {
        let idx = self
            .guardians
            .iter()
            .position(|g| g.wallet == *wallet)
            .ok_or(AfterlifeError::NotFound)?;
        if self.guardians[idx].is_fixed {
            return Err(AfterlifeError::GuardianFixed);
        }
        if self.confirmations() > 0 {
            return Err(AfterlifeError::ConfirmationInProgress);
        }
        if self.guardians.len() - 1 < min_remaining as usize {
            return Err(AfterlifeError::InvalidConfirmationPolicy);
        }
        Ok(self.guardians.remove(idx))
    }

    /// Records `wallet`'s confirmation and returns the new tally.
    pub fn record_confirmation(
        &mut self,
        wallet: &Pubkey,
    ) -> std::result::Result<u8, AfterlifeError> {
        let guardian = self
            .guardians
            .iter_mut()
            .find(|g| g.wallet == *wallet)
            .ok_or(AfterlifeError::NotGuardian)?;
        if guardian.confirmed {
            return Err(AfterlifeError::AlreadyConfirmed);
        }
        guardian.confirmed = true;
        Ok(self.confirmations())
    }

    pub fn reset_confirmations(&mut self) {
        for g in self.guardians.iter_mut() {
            g.confirmed = false;
        }
    }
}
