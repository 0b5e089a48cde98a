//! Blob and image transfer.

use bytes::Bytes;
use socialplus_core::{BlobHandle, ImageSize, ImageType, PostBlobResponse, PostImageResponse};

use super::{Blobs, Images};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::CallOptions;
use crate::request::ApiCall;
use crate::url::segment;

impl<B: HttpBackend> Blobs<'_, B> {
    /// Upload a blob. Images belong in [`Images::post_image`] instead.
    ///
    /// `content_type` defaults to `application/octet-stream`.
    pub async fn post_blob(
        &self,
        blob: Bytes,
        content_type: Option<&str>,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<PostBlobResponse> {
        let call = ApiCall::post("blobs", options)
            .bearer(authorization)
            .binary(blob, content_type);
        self.client.fetch(call).await
    }

    /// Download a blob.
    pub async fn get_blob(
        &self,
        blob_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<Bytes> {
        let call = ApiCall::get(format!("blobs/{}", segment(blob_handle)), options).bearer(authorization);
        self.client.fetch_bytes(call).await
    }
}

impl<B: HttpBackend> Images<'_, B> {
    /// Upload an image. The service derives the resize tiers `image_type` allows.
    pub async fn post_image(
        &self,
        image_type: ImageType,
        image: Bytes,
        content_type: Option<&str>,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<PostImageResponse> {
        let call = ApiCall::post(format!("images/{}", image_type.as_str()), options)
            .bearer(authorization)
            .binary(image, content_type);
        self.client.fetch(call).await
    }

    /// Download an image, optionally at a resize tier (`<handle><suffix>`).
    pub async fn get_image(&self, blob_handle: &str, options: &CallOptions) -> ClientResult<Bytes> {
        let call = ApiCall::get(format!("images/{}", segment(blob_handle)), options);
        self.client.fetch_bytes(call).await
    }

    /// Download the `size` rendition of an uploaded image.
    pub async fn get_image_resized(
        &self,
        blob_handle: &BlobHandle,
        size: ImageSize,
        options: &CallOptions,
    ) -> ClientResult<Bytes> {
        self.get_image(blob_handle.resized(size).as_str(), options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{BEARER, test_client};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::http::{Method, RequestBody};
    use crate::options::CallOptions;
    use bytes::Bytes;
    use serde_json::json;
    use socialplus_core::{BlobHandle, ImageSize, ImageType};

    #[tokio::test]
    async fn test_post_blob_sends_raw_bytes() {
        let backend = FakeBackend::new()
            .with_response("blobs", CannedResponse::json(&json!({"blobHandle": "b1"})));
        let client = test_client(backend);

        let response = client
            .blobs()
            .post_blob(Bytes::from_static(b"\x00\x01"), Some("video/mp4"), BEARER, &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(response.blob_handle, BlobHandle::new("b1"));

        let request = client.backend().single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/v0.7/blobs");
        assert_eq!(request.header("Authorization"), Some(BEARER));
        assert_eq!(
            request.body,
            RequestBody::Binary {
                content_type: "video/mp4".to_string(),
                data: Bytes::from_static(b"\x00\x01"),
            }
        );
    }

    #[tokio::test]
    async fn test_get_blob_returns_bytes() {
        let backend = FakeBackend::new().with_response("blobs/b1", CannedResponse::bytes(b"payload"));
        let client = test_client(backend);

        let data = client
            .blobs()
            .get_blob("b1", BEARER, &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(&data[..], b"payload");
    }

    #[tokio::test]
    async fn test_post_image_uses_image_type_segment() {
        let backend = FakeBackend::new()
            .with_response("images/UserPhoto", CannedResponse::json(&json!({"blobHandle": "img1"})));
        let client = test_client(backend);

        let response = client
            .images()
            .post_image(ImageType::UserPhoto, Bytes::from_static(b"png"), None, BEARER, &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(response.blob_handle.as_str(), "img1");
    }

    #[tokio::test]
    async fn test_get_image_resized_appends_suffix() {
        let backend = FakeBackend::new().with_response("images/img1p", CannedResponse::bytes(b"small"));
        let client = test_client(backend);

        let data = client
            .images()
            .get_image_resized(&BlobHandle::new("img1"), ImageSize::Px250, &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(&data[..], b"small");

        let request = client.backend().single_request();
        assert_eq!(request.url.path(), "/v0.7/images/img1p");
        assert_eq!(request.header("Authorization"), None);
    }
}
