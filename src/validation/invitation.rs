use crate::error::ApiError;

/// 邀请码长度固定为 6 位
pub const INVITATION_CODE_LEN: usize = 6;

/// Length is the only check the mock performs; the code is not matched
/// against any workshop. A real backend would look the code up.
pub fn validate_invitation_code(code: &str) -> Result<(), ApiError> {
    if code.chars().count() != INVITATION_CODE_LEN {
        return Err(ApiError::invalid_invitation_code(format!(
            "Invitation code must be exactly {} characters",
            INVITATION_CODE_LEN
        )));
    }
    Ok(())
}
