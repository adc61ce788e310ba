//! 病害识别提交流程
//!
//! 严格顺序执行，不重试：
//! `Idle → Validating → Encoding → Uploading → Classifying → Persisting → Done | Failed`
//!
//! - 同一时刻只允许一次提交，重入直接返回 `Busy`，不发起任何远程调用
//! - 上传成功后若识别或写库失败，尽力删除一次已上传的对象，清理失败只记日志

use std::cell::Cell;

use async_trait::async_trait;
use leafscan_shared::{ClassificationResult, DetectionRecord, NewDetection, Timestamp};

use crate::clock::{Clock, SystemClock};
use crate::error::{AppError, AppResult, ValidationError};
use crate::history::RecordStore;

const MIB: u64 = 1024 * 1024;

// =========================================================
// 协作方
// =========================================================

/// 用户选中的图片文件
#[async_trait(?Send)]
pub trait ImageFile {
    fn name(&self) -> String;
    /// 浏览器声明的 MIME 类型
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
    /// 读取为 base64 data URI，同时用于预览和识别请求
    async fn read_data_uri(&self) -> AppResult<String>;
}

/// 图片对象存储（桶由实现方持有）
#[async_trait(?Send)]
pub trait ObjectStore<F: ?Sized> {
    async fn upload(&self, key: &str, file: &F) -> AppResult<()>;
    fn public_url(&self, key: &str) -> String;
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// 远程识别函数
#[async_trait(?Send)]
pub trait Classifier {
    async fn classify(&self, image_data: &str) -> AppResult<ClassificationResult>;
}

// =========================================================
// 纯函数
// =========================================================

/// 校验文件类型与大小；恰好等于上限时接受
pub fn validate(media_type: &str, size: u64, limit: u64) -> Result<(), ValidationError> {
    if !media_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            media_type: media_type.to_string(),
        });
    }
    if size > limit {
        return Err(ValidationError::TooLarge {
            size,
            limit_mib: limit / MIB,
        });
    }
    Ok(())
}

/// 文件扩展名：取文件名最后一个 `.` 之后的部分，否则取 MIME 子类型
fn extension(name: &str, media_type: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => media_type
            .split_once('/')
            .map(|(_, sub)| sub.split('+').next().unwrap_or(sub))
            .filter(|sub| !sub.is_empty())
            .unwrap_or("bin")
            .to_ascii_lowercase(),
    }
}

/// 上传对象的 key：`{user_id}/{unix_millis}.{ext}`
pub fn object_key(user_id: &str, now: Timestamp, name: &str, media_type: &str) -> String {
    format!(
        "{}/{}.{}",
        user_id,
        now.as_millis(),
        extension(name, media_type)
    )
}

// =========================================================
// 状态
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Encoding,
    Uploading,
    Classifying,
    Persisting,
    Done,
    Failed,
}

impl SubmissionPhase {
    /// 进行中（界面据此禁用文件选择并显示进度）
    pub fn is_busy(&self) -> bool {
        !matches!(
            self,
            SubmissionPhase::Idle | SubmissionPhase::Done | SubmissionPhase::Failed
        )
    }

    /// 进度提示文案的键
    pub fn label_key(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "click_upload",
            SubmissionPhase::Validating
            | SubmissionPhase::Encoding
            | SubmissionPhase::Uploading => "uploading",
            SubmissionPhase::Classifying => "analyzing",
            SubmissionPhase::Persisting => "saving",
            SubmissionPhase::Done => "analysis_success",
            SubmissionPhase::Failed => "analysis_failed",
        }
    }
}

/// 推送给界面的进度事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmissionEvent<'a> {
    Phase(SubmissionPhase),
    /// 编码完成后的预览 data URI
    Preview(&'a str),
}

/// 仪表盘上的待处理上传（不持久化）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingUpload {
    pub preview: Option<String>,
    pub phase: SubmissionPhase,
    pub result: Option<ClassificationResult>,
    pub error: Option<String>,
}

impl PendingUpload {
    /// 开始新的选择时清空上一次的结果
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, event: SubmissionEvent<'_>) {
        match event {
            SubmissionEvent::Phase(phase) => self.phase = phase,
            SubmissionEvent::Preview(uri) => self.preview = Some(uri.to_string()),
        }
    }

    pub fn finish(&mut self, outcome: &AppResult<DetectionRecord>) {
        match outcome {
            Ok(record) => {
                self.phase = SubmissionPhase::Done;
                self.result = Some(ClassificationResult::from(record));
                self.error = None;
            }
            Err(e) => {
                self.phase = SubmissionPhase::Failed;
                self.result = None;
                self.error = Some(e.message().to_string());
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}

// =========================================================
// 流程
// =========================================================

/// 在途标记，drop 时清除（覆盖所有返回路径）
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct DetectionWorkflow<S, C, R, K = SystemClock> {
    store: S,
    classifier: C,
    records: R,
    clock: K,
    max_bytes: u64,
    in_flight: Cell<bool>,
}

impl<S, C, R> DetectionWorkflow<S, C, R, SystemClock> {
    pub fn new(store: S, classifier: C, records: R, max_bytes: u64) -> Self {
        Self::with_clock(store, classifier, records, max_bytes, SystemClock)
    }
}

impl<S, C, R, K> DetectionWorkflow<S, C, R, K> {
    pub fn with_clock(store: S, classifier: C, records: R, max_bytes: u64, clock: K) -> Self {
        Self {
            store,
            classifier,
            records,
            clock,
            max_bytes,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }
}

impl<S, C, R, K> DetectionWorkflow<S, C, R, K>
where
    C: Classifier,
    R: RecordStore,
    K: Clock,
{
    /// 提交一张图片并返回写入的记录
    ///
    /// `user_id` 取自提交时刻的会话镜像。`observe` 依次收到每个阶段，
    /// 以及编码完成后的预览；最终阶段为 `Done` 或 `Failed`。
    pub async fn submit<F, O>(
        &self,
        user_id: Option<&str>,
        file: &F,
        observe: O,
    ) -> AppResult<DetectionRecord>
    where
        F: ImageFile + ?Sized,
        S: ObjectStore<F>,
        O: Fn(SubmissionEvent<'_>),
    {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            tracing::warn!("submission rejected, another one is in flight");
            return Err(AppError::busy());
        };

        let outcome = self.run(user_id, file, &observe).await;
        match &outcome {
            Ok(record) => {
                tracing::info!(id = %record.id, disease = %record.disease_name, "detection saved");
                observe(SubmissionEvent::Phase(SubmissionPhase::Done));
            }
            Err(e) => {
                tracing::error!(error = %e, "detection failed");
                observe(SubmissionEvent::Phase(SubmissionPhase::Failed));
            }
        }
        outcome
    }

    async fn run<F, O>(&self, user_id: Option<&str>, file: &F, observe: &O) -> AppResult<DetectionRecord>
    where
        F: ImageFile + ?Sized,
        S: ObjectStore<F>,
        O: Fn(SubmissionEvent<'_>),
    {
        let phase = |p: SubmissionPhase| {
            tracing::debug!(phase = ?p, "submission phase");
            observe(SubmissionEvent::Phase(p));
        };

        phase(SubmissionPhase::Validating);
        let media_type = file.media_type();
        validate(&media_type, file.size(), self.max_bytes)?;
        let user_id = user_id.ok_or_else(AppError::no_session)?;

        phase(SubmissionPhase::Encoding);
        let data_uri = file
            .read_data_uri()
            .await
            .map_err(|e| e.in_op("workflow.encode"))?;
        observe(SubmissionEvent::Preview(&data_uri));

        phase(SubmissionPhase::Uploading);
        let key = object_key(user_id, self.clock.now(), &file.name(), &media_type);
        self.store
            .upload(&key, file)
            .await
            .map_err(|e| e.in_op_with("workflow.upload", &key))?;
        let image_url = self.store.public_url(&key);

        match self.classify_and_persist(user_id, &image_url, &data_uri, &phase).await {
            Ok(record) => Ok(record),
            Err(e) => {
                if let Err(cleanup) = self.store.remove(&key).await {
                    tracing::warn!(key = %key, error = %cleanup, "failed to remove orphaned upload");
                }
                Err(e)
            }
        }
    }

    async fn classify_and_persist(
        &self,
        user_id: &str,
        image_url: &str,
        data_uri: &str,
        phase: &dyn Fn(SubmissionPhase),
    ) -> AppResult<DetectionRecord> {
        phase(SubmissionPhase::Classifying);
        let result = self
            .classifier
            .classify(data_uri)
            .await
            .map_err(|e| e.in_op("workflow.classify"))?;

        phase(SubmissionPhase::Persisting);
        let row = NewDetection::from_result(user_id, image_url, &result);
        self.records
            .insert(&row)
            .await
            .map_err(|e| e.in_op("workflow.persist"))
    }
}

#[cfg(test)]
mod tests;
