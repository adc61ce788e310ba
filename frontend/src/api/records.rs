//! 表端点（PostgREST 风格）

use async_trait::async_trait;
use leafscan::history::RecordStore;
use leafscan::onboarding::ProfileStore;
use leafscan::{AppError, AppResult, ErrorKind};
use leafscan_shared::protocol::{HttpMethod, table_path};
use leafscan_shared::{DetectionRecord, HEADER_PREFER, NewDetection, Profile};

use super::LeafScanApi;

/// 过滤值需要 URL 编码
fn eq(value: &str) -> String {
    format!("eq.{}", String::from(js_sys::encode_uri_component(value)))
}

#[async_trait(?Send)]
impl RecordStore for LeafScanApi {
    async fn insert(&self, record: &NewDetection) -> AppResult<DetectionRecord> {
        let path = table_path(&self.config().detections_table);
        let builder = self
            .request(HttpMethod::Post, &path)
            .header(HEADER_PREFER, "return=representation")
            .json(record)?;

        let rows: Vec<DetectionRecord> = self
            .send(builder, ErrorKind::Database)
            .await
            .map_err(|e| e.in_op("records.insert"))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::database("Insert returned no rows").in_op("records.insert"))
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<DetectionRecord>> {
        let path = format!(
            "{}?select=*&user_id={}&order=created_at.desc",
            table_path(&self.config().detections_table),
            eq(user_id)
        );
        self.send(self.request(HttpMethod::Get, &path), ErrorKind::Database)
            .await
            .map_err(|e| e.in_op_with("records.list", user_id))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let path = format!(
            "{}?id={}",
            table_path(&self.config().detections_table),
            eq(id)
        );
        self.send(self.request(HttpMethod::Delete, &path), ErrorKind::Database)
            .await
            .map_err(|e| e.in_op_with("records.delete", id))
    }
}

#[async_trait(?Send)]
impl ProfileStore for LeafScanApi {
    async fn insert_profile(&self, profile: &Profile, bearer: Option<&str>) -> AppResult<()> {
        let path = table_path(&self.config().profiles_table);
        let builder = self
            .request_as(HttpMethod::Post, &path, bearer)
            .header(HEADER_PREFER, "return=minimal")
            .json(profile)?;

        self.send(builder, ErrorKind::Database)
            .await
            .map_err(|e| e.in_op_with("profiles.insert", &profile.id))
    }
}
