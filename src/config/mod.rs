//! 配置管理
//!
//! 配置文件 + VENDORSYSTEM_* 环境变量分层加载，全局 OnceLock 单例。

mod r#impl;
mod structs;

pub use structs::*;
