//! Service build information.

use socialplus_core::BuildsCurrentResponse;

use super::Builds;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::CallOptions;
use crate::request::ApiCall;

impl<B: HttpBackend> Builds<'_, B> {
    /// Build information of the running service.
    pub async fn get_builds_current(&self, options: &CallOptions) -> ClientResult<BuildsCurrentResponse> {
        self.client.fetch(ApiCall::get("builds/current", options)).await
    }
}
