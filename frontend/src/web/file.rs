//! 文件读取封装
//!
//! 用户选中的文件通过 `FileReader` 读取为 data URI，原始 `Blob` 直接作为上传请求体。

use async_trait::async_trait;
use js_sys::Promise;
use leafscan::AppResult;
use leafscan::error::AppError;
use leafscan::workflow::ImageFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FileReader, HtmlInputElement};

/// 浏览器文件句柄
#[derive(Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// 取 `<input type="file">` 的第一个文件
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        input.files()?.get(0).map(Self)
    }

    pub fn blob(&self) -> &Blob {
        &self.0
    }
}

#[async_trait(?Send)]
impl ImageFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }

    async fn read_data_uri(&self) -> AppResult<String> {
        let reader = FileReader::new()
            .map_err(|e| AppError::network(format!("FileReader: {:?}", e)))?;

        let done = Promise::new(&mut |resolve, reject| {
            reader.set_onload(Some(&resolve));
            reader.set_onerror(Some(&reject));
        });

        reader
            .read_as_data_url(&self.0)
            .map_err(|e| AppError::network(format!("read_as_data_url: {:?}", e)))?;

        JsFuture::from(done)
            .await
            .map_err(|_| AppError::network("Failed to read the selected file"))?;

        reader
            .result()
            .ok()
            .and_then(|v| v.as_string())
            .ok_or_else(|| AppError::network("Failed to read the selected file"))
    }
}
