//! 缓存层（Moka/Redis）
//!
//! 通过 `ObjectCache` trait 抽象缓存后端，后端以插件形式注册，
//! 由配置 `cache.type` 选择。身份中间件用它缓存请求者信息，
//! 避免每个请求都查一次数据库。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个缓存后端插件
///
/// 在模块加载时（ctor）向全局注册表登记构造函数，
/// 构造函数返回装箱的异步初始化过程。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::SMSystemError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
