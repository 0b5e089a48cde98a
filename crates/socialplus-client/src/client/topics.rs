//! Topics: creation, lookup, editing and ranked feeds.

use socialplus_core::{
    FeedResponse, PostTopicRequest, PostTopicResponse, PutTopicRequest, TimeRange, TopicView,
};

use super::Topics;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

impl<B: HttpBackend> Topics<'_, B> {
    /// Recent topics across the app.
    pub async fn get_topics(
        &self,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        self.client.fetch(ApiCall::get("topics", options).page(page)).await
    }

    /// Create a topic. Upload any blob or image first and reference its handle.
    pub async fn post_topic(
        &self,
        request: &PostTopicRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<PostTopicResponse> {
        let call = ApiCall::post("topics", options)
            .bearer(authorization)
            .json(request)?;
        self.client.fetch(call).await
    }

    pub async fn get_topic(&self, topic_handle: &str, options: &CallOptions) -> ClientResult<TopicView> {
        let call = ApiCall::get(format!("topics/{}", segment(topic_handle)), options);
        self.client.fetch(call).await
    }

    pub async fn put_topic(
        &self,
        topic_handle: &str,
        request: &PutTopicRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::put(format!("topics/{}", segment(topic_handle)), options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn delete_topic(
        &self,
        topic_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::delete(format!("topics/{}", segment(topic_handle)), options)
            .bearer(authorization);
        self.client.send(call).await
    }

    /// Most popular topics over `time_range`.
    pub async fn get_popular_topics(
        &self,
        time_range: TimeRange,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get(format!("topics/popular/{}", time_range.as_str()), options).page(page);
        self.client.fetch(call).await
    }

    /// Topics featured by the app administrator.
    pub async fn get_featured_topics(
        &self,
        page: &PageOptions,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<TopicView>> {
        let call = ApiCall::get("topics/featured", options).page(page);
        self.client.fetch(call).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{BEARER, test_client, topic_feed_json, topic_json};
    use crate::error::ClientError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::http::{Method, RequestBody};
    use crate::options::{CallOptions, PageOptions};
    use serde_json::json;
    use socialplus_core::{PostTopicRequest, PublisherType, PutTopicRequest, TimeRange};

    #[tokio::test]
    async fn test_get_topic_decodes_view() {
        let backend = FakeBackend::new().with_response("topics/t1", CannedResponse::json(&topic_json("t1")));
        let client = test_client(backend);

        let topic = client.topics().get_topic("t1", &CallOptions::new()).await.unwrap();
        assert_eq!(topic.publisher_type, PublisherType::User);
        assert_eq!(topic.total_likes, 2);
        assert_eq!(topic.user.map(|u| u.user_handle), Some("u1".to_string()));
        assert_eq!(topic.created_time.to_rfc3339(), "2016-10-19T12:00:00+00:00");
    }

    #[tokio::test]
    async fn test_post_topic() {
        let backend = FakeBackend::new()
            .with_response("topics", CannedResponse::json(&json!({"topicHandle": "t7"})));
        let client = test_client(backend);

        let response = client
            .topics()
            .post_topic(&PostTopicRequest::new("hello").with_title("hi"), BEARER, &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(response.topic_handle, "t7");

        let sent = client.backend().single_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(
            sent.body,
            RequestBody::Json(json!({"publisherType": "User", "title": "hi", "text": "hello"}))
        );
    }

    #[tokio::test]
    async fn test_post_topic_response_missing_handle() {
        let backend = FakeBackend::new().with_response("topics", CannedResponse::json(&json!({})));
        let client = test_client(backend);

        let err = client
            .topics()
            .post_topic(&PostTopicRequest::new("hello"), BEARER, &CallOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Mapping(_)));
        assert_eq!(err.validation().map(|e| e.path()), Some("topicHandle"));
    }

    #[tokio::test]
    async fn test_put_and_delete_topic() {
        let backend = FakeBackend::new().with_response("topics/t1", CannedResponse::no_content());
        let client = test_client(backend);
        let options = CallOptions::new();
        let request = PutTopicRequest {
            title: None,
            text: "edited".to_string(),
            categories: Some("news".to_string()),
        };

        client.topics().put_topic("t1", &request, BEARER, &options).await.unwrap();
        client.topics().delete_topic("t1", BEARER, &options).await.unwrap();

        let requests = client.backend().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({"text": "edited", "categories": "news"}))
        );
        assert_eq!(requests[1].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_ranked_feeds() {
        let backend = FakeBackend::new().with_response("topics", CannedResponse::json(&topic_feed_json()));
        let client = test_client(backend);
        let options = CallOptions::new();
        let page = PageOptions::new().with_limit(10);

        client.topics().get_topics(&page, &options).await.unwrap();
        client
            .topics()
            .get_popular_topics(TimeRange::ThisWeek, &page, &options)
            .await
            .unwrap();
        client.topics().get_featured_topics(&page, &options).await.unwrap();

        let paths: Vec<_> = client
            .backend()
            .requests()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            ["/v0.7/topics", "/v0.7/topics/popular/ThisWeek", "/v0.7/topics/featured"]
        );
    }
}
