//! 缓存模块
//!
//! 插件在进程启动前通过 `declare_object_cache_plugin!` 注册到全局注册表，
//! 启动流程按配置的 `cache.cache_type` 名称取出构造器实例化后端。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在插件模块顶部调用，插件类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            let constructor: $crate::cache::register::ObjectCacheConstructor =
                ::std::sync::Arc::new(|| {
                    ::std::boxed::Box::pin(async {
                        let cache = <$plugin>::new()
                            .map_err($crate::errors::VendorSystemError::cache_connection)?;
                        ::std::result::Result::Ok(::std::boxed::Box::new(cache)
                            as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                    })
                });
            $crate::cache::register::register_object_cache_plugin($name, constructor);
        }
    };
}
