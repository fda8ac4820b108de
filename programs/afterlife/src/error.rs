use anchor_lang::prelude::*;

/// Custom error codes for the afterlife program.
#[error_code]
pub enum AfterlifeError {
    // Authorization
    #[msg("Unauthorized: protocol owner signature required")]
    NotOwner,

    #[msg("Unauthorized: caller is not a registered guardian")]
    NotGuardian,

    #[msg("Unauthorized: caller is not a registered beneficiary")]
    NotBeneficiary,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    // Preconditions
    #[msg("Protocol is dead; registry and vault are frozen")]
    ProtocolDead,

    #[msg("Protocol is active; owner has not been declared dead")]
    ProtocolActive,

    #[msg("Owner is still within the inactivity threshold")]
    OwnerActive,

    #[msg("Owner has already been declared dead")]
    AlreadyDead,

    #[msg("Entry already exists")]
    AlreadyExists,

    #[msg("Entry not found")]
    NotFound,

    #[msg("Guardian has already confirmed inactivity")]
    AlreadyConfirmed,

    #[msg("Guardian is fixed and cannot be removed")]
    GuardianFixed,

    #[msg("Inactivity confirmation is in progress")]
    ConfirmationInProgress,

    #[msg("Invalid confirmation policy for the current guardian set")]
    InvalidConfirmationPolicy,

    #[msg("Revive is disabled")]
    ReviveDisabled,

    #[msg("Revive grace window has closed")]
    ReviveWindowClosed,

    #[msg("Claims have already been paid out")]
    ClaimsAlreadyStarted,

    // Resources
    #[msg("Allocation sum would exceed 100%")]
    AllocationExceeded,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Nothing claimable")]
    NothingClaimable,

    #[msg("Guardian list is full")]
    GuardianListFull,

    #[msg("Beneficiary list is full")]
    BeneficiaryListFull,

    // Input validation
    #[msg("Invalid inactivity threshold")]
    InvalidThreshold,

    #[msg("Invalid allocation (basis points, 1-10000)")]
    InvalidAllocation,

    #[msg("Invalid vesting duration")]
    InvalidVestingDuration,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Name is empty or too long")]
    NameTooLong,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Platform fee exceeds maximum")]
    InvalidFee,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Account serialization failed")]
    SerializationFailed,
}
