use async_trait::async_trait;
use leafscan::workflow::Classifier;
use leafscan::{AppResult, ErrorKind};
use leafscan_shared::ClassificationResult;
use leafscan_shared::protocol::{ClassifyRequest, HttpMethod, function_path};

use super::LeafScanApi;

#[async_trait(?Send)]
impl Classifier for LeafScanApi {
    async fn classify(&self, image_data: &str) -> AppResult<ClassificationResult> {
        let name = &self.config().detect_function;
        let request = ClassifyRequest {
            image_data: image_data.to_string(),
        };
        let builder = self
            .request(HttpMethod::Post, &function_path(name))
            .json(&request)?;

        self.send(builder, ErrorKind::Classification)
            .await
            .map_err(|e| e.in_op_with("functions.invoke", name))
    }
}
