//! Likes on topics, comments and replies.
//!
//! The three groups share one shape and differ only in the parent resource.

use socialplus_core::{FeedResponse, UserCompactView};

use super::{CommentLikes, ReplyLikes, TopicLikes};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

macro_rules! like_operations {
    ($group:ident, $collection:literal, $handle:ident) => {
        impl<B: HttpBackend> $group<'_, B> {
            #[doc = concat!("Users who liked the item in `", $collection, "`.")]
            pub async fn get_likes(
                &self,
                $handle: &str,
                page: &PageOptions,
                options: &CallOptions,
            ) -> ClientResult<FeedResponse<UserCompactView>> {
                let path = format!(concat!($collection, "/{}/likes"), segment($handle));
                self.client.fetch(ApiCall::get(path, options).page(page)).await
            }

            /// Like the item as the signed-in user.
            pub async fn post_like(
                &self,
                $handle: &str,
                authorization: &str,
                options: &CallOptions,
            ) -> ClientResult<()> {
                let path = format!(concat!($collection, "/{}/likes"), segment($handle));
                self.client
                    .send(ApiCall::post(path, options).bearer(authorization))
                    .await
            }

            /// Remove the signed-in user's like.
            pub async fn delete_like(
                &self,
                $handle: &str,
                authorization: &str,
                options: &CallOptions,
            ) -> ClientResult<()> {
                let path = format!(concat!($collection, "/{}/likes"), segment($handle));
                self.client
                    .send(ApiCall::delete(path, options).bearer(authorization))
                    .await
            }
        }
    };
}

like_operations!(TopicLikes, "topics", topic_handle);
like_operations!(CommentLikes, "comments", comment_handle);
like_operations!(ReplyLikes, "replies", reply_handle);

#[cfg(test)]
mod tests {
    use crate::client::tests::{BEARER, test_client, user_feed_json};
    use crate::http::Method;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::options::{CallOptions, PageOptions};

    #[tokio::test]
    async fn test_get_likes_without_authorization() {
        let backend =
            FakeBackend::new().with_response("topics/t1/likes", CannedResponse::json(&user_feed_json()));
        let client = test_client(backend);

        let feed = client
            .topic_likes()
            .get_likes("t1", &PageOptions::new().with_cursor("c0"), &CallOptions::new())
            .await
            .unwrap();
        assert_eq!(feed.data.len(), 2);
        assert_eq!(feed.data[1].user_handle, "u2");

        let request = client.backend().single_request();
        assert_eq!(request.url.query(), Some("cursor=c0"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_like_and_unlike_each_parent() {
        let backend = FakeBackend::new().with_response("/likes", CannedResponse::no_content());
        let client = test_client(backend);
        let options = CallOptions::new();

        client.comment_likes().post_like("c1", BEARER, &options).await.unwrap();
        client.reply_likes().post_like("r1", BEARER, &options).await.unwrap();
        client.topic_likes().delete_like("t1", BEARER, &options).await.unwrap();

        let sent: Vec<_> = client
            .backend()
            .requests()
            .into_iter()
            .map(|request| (request.method, request.url.path().to_string()))
            .collect();
        assert_eq!(
            sent,
            [
                (Method::Post, "/v0.7/comments/c1/likes".to_string()),
                (Method::Post, "/v0.7/replies/r1/likes".to_string()),
                (Method::Delete, "/v0.7/topics/t1/likes".to_string()),
            ]
        );
    }
}
