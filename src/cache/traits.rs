//! 缓存后端统一接口

use async_trait::async_trait;

/// 缓存查询结果
///
/// `ExistsButNoValue` 表示后端出错或值不可用，调用方应回源而不是报错。
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

/// 对象缓存接口
///
/// 值以 JSON 字符串形式存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);

    /// 清空全部缓存
    async fn invalidate_all(&self);
}
