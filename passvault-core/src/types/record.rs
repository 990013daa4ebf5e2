//! 凭证记录相关类型定义

use serde::{Deserialize, Serialize};

/// 一条已保存的凭证记录
///
/// `password` 以明文保存和传输，与现有的 JSON 线格式保持兼容。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// 记录 ID（创建时由存储层分配，之后不可变）
    pub id: String,
    /// 网站
    pub website: String,
    /// 用户名
    #[serde(default)]
    pub username: String,
    /// 密码
    #[serde(default)]
    pub password: String,
}

/// 创建记录请求
///
/// 所有字段在线格式上都是可选的，`website` 缺失或为空时由服务层拒绝。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// 网站（必填）
    #[serde(default)]
    pub website: Option<String>,
    /// 用户名（缺省为空字符串）
    #[serde(default)]
    pub username: Option<String>,
    /// 密码（缺省为空字符串）
    #[serde(default)]
    pub password: Option<String>,
}

impl CreateRecordRequest {
    /// 便捷构造
    #[must_use]
    pub fn new(website: impl Into<String>) -> Self {
        Self {
            website: Some(website.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// 更新记录请求（部分更新）
///
/// 未提供的字段保留原值。载荷中的 `id` 字段被忽略。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    /// 新的网站（可选，提供时不能为空）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// 新的用户名（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 新的密码（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateRecordRequest {
    /// 将提供的字段合并到已有记录上
    pub fn apply_to(&self, record: &mut Record) {
        if let Some(ref website) = self.website {
            record.website.clone_from(website);
        }
        if let Some(ref username) = self.username {
            record.username.clone_from(username);
        }
        if let Some(ref password) = self.password {
            record.password.clone_from(password);
        }
    }
}
