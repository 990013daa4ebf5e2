//! 工具模块

mod id;

pub use id::IdGenerator;
