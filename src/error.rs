use thiserror::Error;

/// 模拟 API 的错误类型。
///
/// The mock models exactly two API failures; everything else always resolves.
/// A real backend client will need a wider taxonomy (network, not-found,
/// authorization), which gets added when this layer is replaced.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid credentials: {message}")]
    InvalidCredentials { message: String },

    #[error("Invalid invitation code: {message}")]
    InvalidInvitationCode { message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// 便捷的错误创建函数
impl ApiError {
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    pub fn invalid_invitation_code(message: impl Into<String>) -> Self {
        Self::InvalidInvitationCode {
            message: message.into(),
        }
    }
}
