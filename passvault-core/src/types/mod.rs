//! 类型定义模块

mod record;
mod response;

pub use record::{CreateRecordRequest, Record, UpdateRecordRequest};
pub use response::ErrorBody;
