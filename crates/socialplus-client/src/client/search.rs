//! Search and hashtag discovery.

use socialplus_core::{FeedResponse, TopicView, TypeDescriptor, UserCompactView};

use super::{Hashtags, Search};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;

const HASHTAGS: TypeDescriptor = TypeDescriptor::Sequence(&TypeDescriptor::String);

impl<B: HttpBackend> Search<'_, B> {
    /// Full-text search over topics.
    pub async fn get_topics(
        &self,
        query: &str,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("search/topics", options)
            .query("query", query)
            .page(page);
        self.client.fetch(call).await
    }

    /// Search users by name.
    pub async fn get_users(
        &self,
        query: &str,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<UserCompactView>> {
        let call = ApiCall::get("search/users", options)
            .query("query", query)
            .page(page);
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> Hashtags<'_, B> {
    pub async fn get_trending_hashtags(&self, options: &CallOptions) -> ClientResult<Vec<String>> {
        let call = ApiCall::get("hashtags/trending", options);
        self.client.fetch_as(call, &HASHTAGS).await
    }

    /// Hashtags starting with `query`, which must begin with `#`.
    pub async fn get_autocompleted_hashtags(
        &self,
        query: &str,
        options: &CallOptions,
    ) -> ClientResult<Vec<String>> {
        let call = ApiCall::get("hashtags/autocomplete", options).query("query", query);
        self.client.fetch_as(call, &HASHTAGS).await
    }
}
