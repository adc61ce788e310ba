//! 对象存储端点
//!
//! 上传直接发送文件的原始字节，不经过 base64。

use async_trait::async_trait;
use leafscan::workflow::{ImageFile, ObjectStore};
use leafscan::{AppResult, ErrorKind};
use leafscan_shared::protocol::{HttpMethod, object_path, public_object_path};

use super::LeafScanApi;
use crate::web::BrowserFile;

#[async_trait(?Send)]
impl ObjectStore<BrowserFile> for LeafScanApi {
    async fn upload(&self, key: &str, file: &BrowserFile) -> AppResult<()> {
        let bucket = &self.config().image_bucket;
        let builder = self
            .request(HttpMethod::Post, &object_path(bucket, key))
            .blob(file.blob(), &file.media_type());

        let _: serde_json::Value = self
            .send(builder, ErrorKind::Storage)
            .await
            .map_err(|e| e.in_op_with("storage.upload", key))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.config()
            .url(&public_object_path(&self.config().image_bucket, key))
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let bucket = &self.config().image_bucket;
        let builder = self.request(HttpMethod::Delete, &object_path(bucket, key));

        let _: serde_json::Value = self
            .send(builder, ErrorKind::Storage)
            .await
            .map_err(|e| e.in_op_with("storage.remove", key))?;
        Ok(())
    }
}
