//! 对象缓存
//!
//! 后端以插件形式注册（moka 内存缓存 / redis），启动时按配置选择。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个缓存插件，程序加载时自动注册到插件表
///
/// 类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[::ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                ::std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::SchoolMateError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

/// 用户缓存键（按 access token）
pub fn user_cache_key(token: &str) -> String {
    format!("user:{token}")
}

/// 读取并反序列化缓存值，反序列化失败时删除该键
pub async fn get_json<T: serde::de::DeserializeOwned>(
    cache: &dyn ObjectCache,
    key: &str,
) -> Option<T> {
    let raw = cache.get_raw(key).await.into_option()?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Failed to deserialize cached value '{}': {}", key, e);
            cache.remove(key).await;
            None
        }
    }
}

pub async fn insert_json<T: serde::Serialize>(
    cache: &dyn ObjectCache,
    key: String,
    value: &T,
    ttl: u64,
) {
    match serde_json::to_string(value) {
        Ok(raw) => cache.insert_raw(key, raw, ttl).await,
        Err(e) => tracing::error!("Failed to serialize cache value '{}': {}", key, e),
    }
}
