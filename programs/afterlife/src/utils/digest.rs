use anchor_lang::prelude::*;

use crate::error::AfterlifeError;
use crate::state::{BeneficiaryTable, GuardianSet, Protocol};

/// blake3 over the borsh encoding of the full per-owner record.
/// Equal digests mean an observer can skip re-rendering a snapshot.
pub fn snapshot_digest(
    protocol: &Protocol,
    guardians: &GuardianSet,
    beneficiaries: &BeneficiaryTable,
) -> std::result::Result<[u8; 32], AfterlifeError> {
    let mut buf = Vec::new();
    protocol
        .serialize(&mut buf)
        .map_err(|_| AfterlifeError::SerializationFailed)?;
    guardians
        .serialize(&mut buf)
        .map_err(|_| AfterlifeError::SerializationFailed)?;
    beneficiaries
        .serialize(&mut buf)
        .map_err(|_| AfterlifeError::SerializationFailed)?;
    Ok(*blake3::hash(&buf).as_bytes())
}
