//! 对象缓存抽象

use async_trait::async_trait;

/// 缓存查询结果
///
/// 与 `Option` 的区别在于区分「未命中」和「后端暂时不可用」，
/// 调用方据此决定是回源还是直接放弃缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 键不存在
    NotFound,
    /// 后端异常或值不可用，视为未命中但不应回写
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// 字符串键值对象缓存
///
/// 所有后端以字符串存取，结构化数据由调用方自行序列化。
/// 写入和删除失败只记录日志不向上传播，缓存不可用不应影响主流程。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 单位为秒，0 表示使用后端的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_result_into_option() {
        assert_eq!(
            CacheResult::Found("v".to_string()).into_option(),
            Some("v".to_string())
        );
        assert_eq!(CacheResult::<String>::NotFound.into_option(), None);
        assert_eq!(CacheResult::<String>::ExistsButNoValue.into_option(), None);
    }
}
