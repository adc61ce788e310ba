//! 识别历史列表
//!
//! 远程记录表是唯一的数据源；本地列表只在远程操作成功后才改变。

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use leafscan_shared::{DetectionRecord, NewDetection};

use crate::error::AppResult;

/// 识别记录表
#[async_trait(?Send)]
pub trait RecordStore {
    /// 插入一行并返回服务端生成的完整记录
    async fn insert(&self, record: &NewDetection) -> AppResult<DetectionRecord>;
    /// 用户的全部记录，按创建时间倒序
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<DetectionRecord>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct HistoryManager<R> {
    store: R,
    records: RefCell<Vec<DetectionRecord>>,
}

impl<R: RecordStore> HistoryManager<R> {
    pub fn new(store: R) -> Self {
        Self {
            store,
            records: RefCell::new(Vec::new()),
        }
    }

    /// 加载用户的历史记录（最新的在前）
    ///
    /// 失败时列表清空，错误交给调用方提示。
    pub async fn load(&self, user_id: &str) -> AppResult<()> {
        match self.store.list_for_user(user_id).await {
            Ok(mut list) => {
                list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                tracing::info!(user_id = %user_id, count = list.len(), "history loaded");
                *self.records.borrow_mut() = list;
                Ok(())
            }
            Err(e) => {
                self.records.borrow_mut().clear();
                Err(e.in_op_with("history.load", user_id))
            }
        }
    }

    /// 删除一条记录：远程删除成功后才从本地列表移除
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| e.in_op_with("history.delete", id))?;
        self.records.borrow_mut().retain(|r| r.id != id);
        tracing::info!(id = %id, "detection deleted");
        Ok(())
    }

    pub fn records(&self) -> Vec<DetectionRecord> {
        self.records.borrow().clone()
    }
}

// =========================================================
// 时间展示
// =========================================================

/// 由 JS `Date.getTimezoneOffset()` 的返回值（UTC 减本地，分钟）构造时区
pub fn offset_from_minutes_west(minutes: i32) -> FixedOffset {
    FixedOffset::west_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
}

/// 形如 `Oct 18, 2026, 3:04 PM`
pub fn display_time(at: &DateTime<Utc>, offset: &FixedOffset) -> String {
    at.with_timezone(offset)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

/// 按记录自身时刻的本地偏移展示
///
/// `minutes_west_at` 接收毫秒时间戳，返回该时刻的 `getTimezoneOffset()`，
/// 夏令时前后的记录因此各自使用正确的偏移。
pub fn display_local_time<F>(at: &DateTime<Utc>, minutes_west_at: F) -> String
where
    F: Fn(i64) -> i32,
{
    let offset = offset_from_minutes_west(minutes_west_at(at.timestamp_millis()));
    display_time(at, &offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::TimeZone;

    fn record(id: &str, hour: u32) -> DetectionRecord {
        DetectionRecord {
            id: id.into(),
            user_id: "u-1".into(),
            image_url: format!("https://cdn/{}.jpg", id),
            disease_name: "Leaf Blight".into(),
            is_healthy: false,
            confidence: 90.0,
            remedy: "Apply copper fungicide".into(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, hour, 0, 0).unwrap(),
        }
    }

    #[derive(Default)]
    struct MockRecords {
        rows: RefCell<Vec<DetectionRecord>>,
        fail_list: bool,
        fail_delete: bool,
        log: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl RecordStore for MockRecords {
        async fn insert(&self, _record: &NewDetection) -> AppResult<DetectionRecord> {
            unreachable!("history never inserts")
        }

        async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<DetectionRecord>> {
            self.log.borrow_mut().push(format!("list:{}", user_id));
            if self.fail_list {
                return Err(AppError::database("relation does not exist"));
            }
            Ok(self.rows.borrow().clone())
        }

        async fn delete(&self, id: &str) -> AppResult<()> {
            self.log.borrow_mut().push(format!("delete:{}", id));
            if self.fail_delete {
                return Err(AppError::database("permission denied"));
            }
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    fn ids(manager: &HistoryManager<MockRecords>) -> Vec<String> {
        manager.records().into_iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_load_orders_newest_first() {
        let store = MockRecords::default();
        *store.rows.borrow_mut() = vec![record("t1", 1), record("t3", 3), record("t2", 2)];
        let manager = HistoryManager::new(store);

        manager.load("u-1").await.unwrap();
        assert_eq!(ids(&manager), vec!["t3", "t2", "t1"]);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_list() {
        let manager = HistoryManager::new(MockRecords {
            fail_list: true,
            ..Default::default()
        });
        *manager.records.borrow_mut() = vec![record("stale", 1)];

        let err = manager.load("u-1").await.unwrap_err();
        assert_eq!(err.message(), "relation does not exist");
        assert!(manager.records().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_only_after_remote_success() {
        let store = MockRecords::default();
        *store.rows.borrow_mut() = vec![record("a", 1), record("b", 2)];
        let manager = HistoryManager::new(store);
        manager.load("u-1").await.unwrap();

        manager.delete("a").await.unwrap();
        assert_eq!(ids(&manager), vec!["b"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_record() {
        let store = MockRecords {
            fail_delete: true,
            ..Default::default()
        };
        *store.rows.borrow_mut() = vec![record("a", 1), record("b", 2)];
        let manager = HistoryManager::new(store);
        manager.load("u-1").await.unwrap();

        assert!(manager.delete("a").await.is_err());
        assert_eq!(ids(&manager), vec!["b", "a"]);
        assert_eq!(
            *manager.store.log.borrow(),
            vec!["list:u-1".to_string(), "delete:a".to_string()]
        );
    }

    #[test]
    fn test_formats_local_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 34, 0).unwrap();
        // UTC+05:30 → getTimezoneOffset() == -330
        let ist = offset_from_minutes_west(-330);
        assert_eq!(display_time(&at, &ist), "Oct 18, 2026, 3:04 PM");
        assert_eq!(display_time(&at, &Utc.fix()), "Oct 18, 2026, 9:34 AM");
    }

    #[test]
    fn test_each_record_uses_offset_at_its_own_instant() {
        // 柏林：3 月 29 日 01:00 UTC 起为夏令时
        let dst_start = Utc.with_ymd_and_hms(2026, 3, 29, 1, 0, 0).unwrap();
        let berlin = |ms: i64| {
            if ms >= dst_start.timestamp_millis() {
                -120
            } else {
                -60
            }
        };

        let winter = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 10, 12, 0, 0).unwrap();
        assert_eq!(display_local_time(&winter, berlin), "Jan 10, 2026, 1:00 PM");
        assert_eq!(display_local_time(&summer, berlin), "Jul 10, 2026, 2:00 PM");
    }
}
