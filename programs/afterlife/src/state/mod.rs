pub mod beneficiaries;
pub mod config;
pub mod guardians;
pub mod protocol;

pub use beneficiaries::*;
pub use config::*;
pub use guardians::*;
pub use protocol::*;

use crate::constants::MAX_NAME_LEN;
use crate::error::AfterlifeError;

pub(crate) fn validate_name(name: &str) -> Result<(), AfterlifeError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(AfterlifeError::NameTooLong);
    }
    Ok(())
}
