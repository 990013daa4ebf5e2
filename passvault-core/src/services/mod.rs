//! 业务逻辑服务层

mod record_service;

pub use record_service::RecordService;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::traits::RecordStore;
use crate::utils::IdGenerator;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 记录存储
    record_store: Arc<dyn RecordStore>,
    /// 记录 ID 生成器
    id_generator: IdGenerator,
    /// 单写者队列（`None` 时不对读-改-写周期加锁）
    mutation_lock: Option<Mutex<()>>,
}

impl ServiceContext {
    /// 创建服务上下文
    ///
    /// 默认不串行化变更：并发的读-改-写周期按最后写入者为准。
    #[must_use]
    pub fn new(record_store: Arc<dyn RecordStore>) -> Self {
        Self {
            record_store,
            id_generator: IdGenerator::default(),
            mutation_lock: None,
        }
    }

    /// 通过单一互斥锁串行化所有变更操作
    #[must_use]
    pub fn with_serialized_mutations(mut self) -> Self {
        self.mutation_lock = Some(Mutex::new(()));
        self
    }

    /// 替换 ID 生成器
    #[must_use]
    pub fn with_id_generator(mut self, id_generator: IdGenerator) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// 获取记录存储
    #[must_use]
    pub fn record_store(&self) -> &Arc<dyn RecordStore> {
        &self.record_store
    }

    /// 获取 ID 生成器
    #[must_use]
    pub fn id_generator(&self) -> &IdGenerator {
        &self.id_generator
    }

    /// 是否串行化变更
    #[must_use]
    pub fn serializes_mutations(&self) -> bool {
        self.mutation_lock.is_some()
    }

    /// 开始一次变更；串行化模式下持有返回的守卫直到写入完成
    pub async fn begin_mutation(&self) -> Option<MutexGuard<'_, ()>> {
        match self.mutation_lock {
            Some(ref lock) => Some(lock.lock().await),
            None => None,
        }
    }
}
