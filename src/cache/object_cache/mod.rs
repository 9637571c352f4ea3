//! 对象缓存后端插件

pub mod moka;
pub mod redis;
