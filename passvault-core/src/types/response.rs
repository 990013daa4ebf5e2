//! API 响应相关类型定义

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 错误响应体：`{"error": "<code>"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// 机器可读的错误码
    pub error: String,
}

impl ErrorBody {
    /// 创建错误响应体
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { error: code.into() }
    }
}

impl From<&CoreError> for ErrorBody {
    fn from(err: &CoreError) -> Self {
        Self::new(err.wire_code())
    }
}
