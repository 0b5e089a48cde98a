//! Reporting users and content for moderation.

use socialplus_core::PostReportRequest;

use super::{CommentReports, ReplyReports, TopicReports, UserReports};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::CallOptions;
use crate::request::ApiCall;
use crate::url::segment;

macro_rules! report_operation {
    ($group:ident, $collection:literal, $handle:ident) => {
        impl<B: HttpBackend> $group<'_, B> {
            /// File a report. Repeated reports by the same user are accepted.
            pub async fn post_report(
                &self,
                $handle: &str,
                request: &PostReportRequest,
                authorization: &str,
                options: &CallOptions,
            ) -> ClientResult<()> {
                let path = format!(concat!($collection, "/{}/reports"), segment($handle));
                let call = ApiCall::post(path, options)
                    .bearer(authorization)
                    .json(request)?;
                self.client.send(call).await
            }
        }
    };
}

report_operation!(UserReports, "users", user_handle);
report_operation!(TopicReports, "topics", topic_handle);
report_operation!(CommentReports, "comments", comment_handle);
report_operation!(ReplyReports, "replies", reply_handle);

#[cfg(test)]
mod tests {
    use crate::client::tests::{BEARER, test_client};
    use crate::http::RequestBody;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::options::CallOptions;
    use serde_json::json;
    use socialplus_core::{PostReportRequest, ReportReason};

    #[tokio::test]
    async fn test_post_report_body_and_path() {
        let backend = FakeBackend::new().with_response("/reports", CannedResponse::status(202));
        let client = test_client(backend);
        let request = PostReportRequest {
            reason: ReportReason::ChildEndangerment,
        };

        client
            .user_reports()
            .post_report("u 1", &request, BEARER, &CallOptions::new())
            .await
            .unwrap();

        let sent = client.backend().single_request();
        assert_eq!(sent.url.path(), "/v0.7/users/u%201/reports");
        assert_eq!(sent.body, RequestBody::Json(json!({"reason": "ChildEndangerment"})));
    }

    #[tokio::test]
    async fn test_each_report_group_targets_its_collection() {
        let backend = FakeBackend::new().with_response("/reports", CannedResponse::no_content());
        let client = test_client(backend);
        let request = PostReportRequest {
            reason: ReportReason::Spam,
        };
        let options = CallOptions::new();

        client.topic_reports().post_report("t1", &request, BEARER, &options).await.unwrap();
        client.comment_reports().post_report("c1", &request, BEARER, &options).await.unwrap();
        client.reply_reports().post_report("r1", &request, BEARER, &options).await.unwrap();

        let paths: Vec<_> = client
            .backend()
            .requests()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            ["/v0.7/topics/t1/reports", "/v0.7/comments/c1/reports", "/v0.7/replies/r1/reports"]
        );
    }
}
