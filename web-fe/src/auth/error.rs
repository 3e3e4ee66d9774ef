use thiserror::Error;

use crate::storage::StoreError;

/// Every variant's `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Vui lòng nhập đầy đủ thông tin kết nối.")]
    MissingFields,
    #[error("URL không hợp lệ. Phải bắt đầu bằng https://")]
    InvalidScheme,
    #[error("Lỗi lưu trữ cục bộ.")]
    Storage(#[from] StoreError),
}

impl AuthError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingFields | Self::InvalidScheme)
    }
}
