use super::*;
use crate::clock::FixedClock;
use crate::error::ErrorKind;
use chrono::{TimeZone, Utc};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;

const NOW_MS: i64 = 1_792_315_800_000;
const LIMIT: u64 = 5 * MIB;

// =========================================================
// Shared Mock Components
// =========================================================

struct TestContext {
    /// Operation log to verify calling order
    log: RefCell<Vec<String>>,
    inserted: RefCell<Vec<NewDetection>>,
    fail_upload: Cell<bool>,
    fail_classify: Cell<bool>,
    fail_insert: Cell<bool>,
    fail_remove: Cell<bool>,
    /// Classification waits on this gate when present
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            inserted: RefCell::new(Vec::new()),
            fail_upload: Cell::new(false),
            fail_classify: Cell::new(false),
            fail_insert: Cell::new(false),
            fail_remove: Cell::new(false),
            gate: RefCell::new(None),
        }
    }

    fn push_log(&self, msg: String) {
        self.log.borrow_mut().push(msg);
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

struct TestFile {
    ctx: Rc<TestContext>,
    name: &'static str,
    media_type: &'static str,
    size: u64,
}

#[async_trait(?Send)]
impl ImageFile for TestFile {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn media_type(&self) -> String {
        self.media_type.to_string()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_data_uri(&self) -> AppResult<String> {
        self.ctx.push_log("file:read".to_string());
        Ok(format!("data:{};base64,AAAA", self.media_type))
    }
}

struct TestStorage {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl ObjectStore<TestFile> for TestStorage {
    async fn upload(&self, key: &str, _file: &TestFile) -> AppResult<()> {
        self.ctx.push_log(format!("storage:upload:{}", key));
        if self.ctx.fail_upload.get() {
            return Err(AppError::storage("The resource already exists"));
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/leaf-images/{}", key)
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.ctx.push_log(format!("storage:remove:{}", key));
        if self.ctx.fail_remove.get() {
            return Err(AppError::storage("Object not found"));
        }
        Ok(())
    }
}

struct TestClassifier {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl Classifier for TestClassifier {
    async fn classify(&self, image_data: &str) -> AppResult<ClassificationResult> {
        self.ctx.push_log("classify".to_string());
        assert!(image_data.starts_with("data:image/"));

        let gate = self.ctx.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.ctx.fail_classify.get() {
            return Err(AppError::classification(
                "Edge Function returned a non-2xx status code",
            ));
        }
        Ok(ClassificationResult {
            is_healthy: false,
            disease_name: "Leaf Blight".into(),
            confidence: 92.0,
            remedy: "Apply copper fungicide".into(),
        })
    }
}

struct TestRecords {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl RecordStore for TestRecords {
    async fn insert(&self, row: &NewDetection) -> AppResult<DetectionRecord> {
        self.ctx.push_log("records:insert".to_string());
        if self.ctx.fail_insert.get() {
            return Err(AppError::database("new row violates row-level security policy"));
        }
        self.ctx.inserted.borrow_mut().push(row.clone());
        Ok(DetectionRecord {
            id: "rec-1".into(),
            user_id: row.user_id.clone(),
            image_url: row.image_url.clone(),
            disease_name: row.disease_name.clone(),
            is_healthy: row.is_healthy,
            confidence: row.confidence,
            remedy: row.remedy.clone(),
            created_at: Utc.timestamp_millis_opt(NOW_MS).unwrap(),
        })
    }

    async fn list_for_user(&self, _user_id: &str) -> AppResult<Vec<DetectionRecord>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &str) -> AppResult<()> {
        Ok(())
    }
}

type TestWorkflow = DetectionWorkflow<TestStorage, TestClassifier, TestRecords, FixedClock>;

fn setup() -> (Rc<TestContext>, TestWorkflow) {
    let ctx = Rc::new(TestContext::new());
    let workflow = DetectionWorkflow::with_clock(
        TestStorage { ctx: ctx.clone() },
        TestClassifier { ctx: ctx.clone() },
        TestRecords { ctx: ctx.clone() },
        LIMIT,
        FixedClock(Timestamp::new(NOW_MS)),
    );
    (ctx, workflow)
}

fn jpeg(ctx: &Rc<TestContext>, size: u64) -> TestFile {
    TestFile {
        ctx: ctx.clone(),
        name: "leaf.jpg",
        media_type: "image/jpeg",
        size,
    }
}

fn key() -> String {
    format!("u-1/{}.jpg", NOW_MS)
}

/// 把事件记成字符串，便于断言顺序
fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(SubmissionEvent<'_>)) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let observe = move |event: SubmissionEvent<'_>| {
        let entry = match event {
            SubmissionEvent::Phase(p) => format!("{:?}", p),
            SubmissionEvent::Preview(_) => "preview".to_string(),
        };
        sink.borrow_mut().push(entry);
    };
    (events, observe)
}

// =========================================================
// Validation
// =========================================================

#[tokio::test]
async fn test_non_image_rejected_before_any_call() {
    let (ctx, workflow) = setup();
    let file = TestFile {
        ctx: ctx.clone(),
        name: "notes.txt",
        media_type: "text/plain",
        size: 10,
    };
    let (events, observe) = recorder();

    let err = workflow.submit(Some("u-1"), &file, observe).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.message(), "Please upload an image file");
    assert!(ctx.log().is_empty());
    assert_eq!(*events.borrow(), vec!["Validating", "Failed"]);
}

#[tokio::test]
async fn test_size_limit_is_inclusive() {
    let (ctx, workflow) = setup();

    let err = workflow
        .submit(Some("u-1"), &jpeg(&ctx, LIMIT + 1), |_| {})
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Image size should be less than 5MB");
    assert!(ctx.log().is_empty());

    workflow
        .submit(Some("u-1"), &jpeg(&ctx, LIMIT), |_| {})
        .await
        .unwrap();
    assert_eq!(ctx.inserted.borrow().len(), 1);
}

#[tokio::test]
async fn test_missing_session_fails_before_remote_calls() {
    let (ctx, workflow) = setup();
    let err = workflow
        .submit(None, &jpeg(&ctx, 1024), |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Auth);
    assert!(ctx.log().is_empty());
}

// =========================================================
// Remote sequence
// =========================================================

#[tokio::test]
async fn test_success_persists_classification_and_upload_url() {
    let (ctx, workflow) = setup();
    let (events, observe) = recorder();

    let record = workflow
        .submit(Some("u-1"), &jpeg(&ctx, 2048), observe)
        .await
        .unwrap();

    assert_eq!(
        ctx.inserted.borrow()[0],
        NewDetection {
            user_id: "u-1".into(),
            image_url: format!("https://cdn.test/leaf-images/{}", key()),
            disease_name: "Leaf Blight".into(),
            is_healthy: false,
            confidence: 92.0,
            remedy: "Apply copper fungicide".into(),
        }
    );
    assert_eq!(record.id, "rec-1");
    assert_eq!(
        ctx.log(),
        vec![
            "file:read".to_string(),
            format!("storage:upload:{}", key()),
            "classify".to_string(),
            "records:insert".to_string(),
        ]
    );
    assert_eq!(
        *events.borrow(),
        vec![
            "Validating",
            "Encoding",
            "preview",
            "Uploading",
            "Classifying",
            "Persisting",
            "Done"
        ]
    );
}

#[tokio::test]
async fn test_storage_failure_never_classifies() {
    let (ctx, workflow) = setup();
    ctx.fail_upload.set(true);

    let err = workflow
        .submit(Some("u-1"), &jpeg(&ctx, 2048), |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Storage);
    assert_eq!(err.message(), "The resource already exists");
    assert_eq!(
        ctx.log(),
        vec!["file:read".to_string(), format!("storage:upload:{}", key())]
    );
}

#[tokio::test]
async fn test_classification_failure_removes_upload_once() {
    let (ctx, workflow) = setup();
    ctx.fail_classify.set(true);

    let err = workflow
        .submit(Some("u-1"), &jpeg(&ctx, 2048), |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Classification);
    assert!(ctx.inserted.borrow().is_empty());
    let removes: Vec<_> = ctx
        .log()
        .into_iter()
        .filter(|l| l.starts_with("storage:remove"))
        .collect();
    assert_eq!(removes, vec![format!("storage:remove:{}", key())]);
}

#[tokio::test]
async fn test_persist_failure_surfaces_original_error_when_cleanup_fails() {
    let (ctx, workflow) = setup();
    ctx.fail_insert.set(true);
    ctx.fail_remove.set(true);

    let err = workflow
        .submit(Some("u-1"), &jpeg(&ctx, 2048), |_| {})
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Database);
    assert_eq!(err.message(), "new row violates row-level security policy");
    assert_eq!(
        ctx.log().last().map(String::as_str),
        Some(format!("storage:remove:{}", key()).as_str())
    );
}

// =========================================================
// Re-entrancy
// =========================================================

#[tokio::test]
async fn test_overlapping_submit_is_rejected_as_busy() {
    let (ctx, workflow) = setup();
    let (release, gate) = oneshot::channel();
    *ctx.gate.borrow_mut() = Some(gate);

    let first_file = jpeg(&ctx, 2048);
    let second_file = jpeg(&ctx, 4096);
    let first = workflow.submit(Some("u-1"), &first_file, |_| {});
    let second = async {
        // 第一次提交此时停在识别阶段
        assert!(workflow.is_busy());
        let result = workflow.submit(Some("u-1"), &second_file, |_| {}).await;
        let _ = release.send(());
        result
    };

    let (first, second) = futures::join!(first, second);

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err().kind, ErrorKind::Busy);
    assert_eq!(ctx.log().iter().filter(|l| *l == "file:read").count(), 1);
    assert_eq!(ctx.inserted.borrow().len(), 1);
    assert!(!workflow.is_busy());
}

#[tokio::test]
async fn test_failed_submission_can_be_retried() {
    let (ctx, workflow) = setup();
    ctx.fail_classify.set(true);
    assert!(workflow.submit(Some("u-1"), &jpeg(&ctx, 2048), |_| {}).await.is_err());
    assert!(!workflow.is_busy());

    ctx.fail_classify.set(false);
    assert!(workflow.submit(Some("u-1"), &jpeg(&ctx, 2048), |_| {}).await.is_ok());
}

// =========================================================
// Pure helpers
// =========================================================

#[test]
fn test_object_key_uses_extension_or_media_subtype() {
    let now = Timestamp::new(42);
    assert_eq!(object_key("u", now, "Leaf.PNG", "image/png"), "u/42.png");
    assert_eq!(object_key("u", now, "archive.tar.gz", "image/jpeg"), "u/42.gz");
    assert_eq!(object_key("u", now, "photo", "image/svg+xml"), "u/42.svg");
    assert_eq!(object_key("u", now, ".hidden", "image/webp"), "u/42.webp");
    assert_eq!(object_key("u", now, "noext", "image/JPEG"), "u/42.jpeg");
}

#[test]
fn test_pending_upload_tracks_events_and_outcome() {
    let mut pending = PendingUpload::default();
    pending.apply(SubmissionEvent::Phase(SubmissionPhase::Encoding));
    pending.apply(SubmissionEvent::Preview("data:image/png;base64,AA"));
    assert!(pending.is_busy());
    assert_eq!(pending.phase.label_key(), "uploading");

    pending.finish(&Err(AppError::classification("model offline")));
    assert!(!pending.is_busy());
    assert_eq!(pending.error.as_deref(), Some("model offline"));
    assert_eq!(pending.preview.as_deref(), Some("data:image/png;base64,AA"));

    pending.reset();
    assert_eq!(pending, PendingUpload::default());
}
