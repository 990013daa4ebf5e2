#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Barrier, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::services::{RecordService, ServiceContext};
use crate::traits::RecordStore;
use crate::types::Record;

// ===== MockRecordStore =====

pub struct MockRecordStore {
    records: RwLock<Vec<Record>>,
    /// 如果 Some，replace 时返回此错误（用于测试写入失败路径）
    write_error: Mutex<Option<String>>,
    /// 接下来 N 次 load 在同一屏障处汇合（用于复现并发读-改-写）
    load_barrier: Mutex<Option<(Arc<Barrier>, usize)>>,
    /// load 时让出一次调度
    yield_on_load: Mutex<bool>,
    replace_count: AtomicUsize,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            write_error: Mutex::new(None),
            load_barrier: Mutex::new(None),
            yield_on_load: Mutex::new(false),
            replace_count: AtomicUsize::new(0),
        }
    }

    pub fn set_write_error(&self, err: Option<String>) {
        *self.write_error.lock().unwrap() = err;
    }

    pub fn set_load_barrier(&self, parties: usize) {
        *self.load_barrier.lock().unwrap() = Some((Arc::new(Barrier::new(parties)), parties));
    }

    pub fn set_yield_on_load(&self, enabled: bool) {
        *self.yield_on_load.lock().unwrap() = enabled;
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count.load(Ordering::SeqCst)
    }

    fn take_barrier(&self) -> Option<Arc<Barrier>> {
        let mut slot = self.load_barrier.lock().unwrap();
        let (barrier, remaining) = slot.as_mut()?;
        let barrier = Arc::clone(barrier);
        *remaining -= 1;
        if *remaining == 0 {
            *slot = None;
        }
        Some(barrier)
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn load(&self) -> Vec<Record> {
        let snapshot = self.records.read().await.clone();
        if let Some(barrier) = self.take_barrier() {
            barrier.wait().await;
        }
        let should_yield = *self.yield_on_load.lock().unwrap();
        if should_yield {
            tokio::task::yield_now().await;
        }
        snapshot
    }

    async fn replace(&self, records: &[Record]) -> CoreResult<()> {
        let err = self.write_error.lock().unwrap().clone();
        if let Some(msg) = err {
            return Err(CoreError::PersistenceFailure(msg));
        }
        *self.records.write().await = records.to_vec();
        self.replace_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `RecordService`（不串行化变更）
pub fn create_test_record_service() -> (RecordService, Arc<MockRecordStore>) {
    let store = Arc::new(MockRecordStore::new());
    let service = create_test_service_with(store.clone(), |ctx| ctx);
    (service, store)
}

/// 以自定义上下文配置创建 `RecordService`
pub fn create_test_service_with<F>(store: Arc<MockRecordStore>, configure: F) -> RecordService
where
    F: FnOnce(ServiceContext) -> ServiceContext,
{
    let ctx = configure(ServiceContext::new(store));
    RecordService::new(Arc::new(ctx))
}
