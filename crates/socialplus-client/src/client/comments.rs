//! Comments and replies.

use socialplus_core::{
    CommentView, FeedResponse, PostCommentRequest, PostCommentResponse, PostReplyRequest,
    PostReplyResponse, ReplyView,
};

use super::{CommentReplies, Comments, Replies, TopicComments};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::{CallOptions, PageOptions};
use crate::request::ApiCall;
use crate::url::segment;

impl<B: HttpBackend> TopicComments<'_, B> {
    /// Comments on a topic, newest first.
    pub async fn get_topic_comments(
        &self,
        topic_handle: &str,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<CommentView>> {
        let call = ApiCall::get(format!("topics/{}/comments", segment(topic_handle)), options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Comment on a topic.
    pub async fn post_comment(
        &self,
        topic_handle: &str,
        request: &PostCommentRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<PostCommentResponse> {
        let call = ApiCall::post(format!("topics/{}/comments", segment(topic_handle)), options)
            .bearer(authorization)
            .json(request)?;
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> Comments<'_, B> {
    pub async fn get_comment(
        &self,
        comment_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<CommentView> {
        let call = ApiCall::get(format!("comments/{}", segment(comment_handle)), options)
            .bearer(authorization);
        self.client.fetch(call).await
    }

    pub async fn delete_comment(
        &self,
        comment_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::delete(format!("comments/{}", segment(comment_handle)), options)
            .bearer(authorization);
        self.client.send(call).await
    }
}

impl<B: HttpBackend> CommentReplies<'_, B> {
    /// Replies to a comment.
    pub async fn get_replies(
        &self,
        comment_handle: &str,
        page: &PageOptions,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<FeedResponse<ReplyView>> {
        let call = ApiCall::get(format!("comments/{}/replies", segment(comment_handle)), options)
            .bearer(authorization)
            .page(page);
        self.client.fetch(call).await
    }

    /// Reply to a comment.
    pub async fn post_reply(
        &self,
        comment_handle: &str,
        request: &PostReplyRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<PostReplyResponse> {
        let call = ApiCall::post(format!("comments/{}/replies", segment(comment_handle)), options)
            .bearer(authorization)
            .json(request)?;
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> Replies<'_, B> {
    pub async fn get_reply(
        &self,
        reply_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<ReplyView> {
        let call =
            ApiCall::get(format!("replies/{}", segment(reply_handle)), options).bearer(authorization);
        self.client.fetch(call).await
    }

    pub async fn delete_reply(
        &self,
        reply_handle: &str,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::delete(format!("replies/{}", segment(reply_handle)), options)
            .bearer(authorization);
        self.client.send(call).await
    }
}
