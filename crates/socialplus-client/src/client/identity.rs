//! Sessions, request tokens and linked third-party accounts.

use socialplus_core::{
    GetRequestTokenResponse, IdentityProvider, LinkedAccountView, PostLinkedAccountRequest,
    PostSessionRequest, PostSessionResponse, TypeDescriptor,
};

use super::{MyLinkedAccounts, RequestTokens, Sessions};
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::options::CallOptions;
use crate::request::ApiCall;

const LINKED_ACCOUNTS: TypeDescriptor =
    TypeDescriptor::Sequence(&TypeDescriptor::Composite("LinkedAccountView"));

impl<B: HttpBackend> Sessions<'_, B> {
    /// Sign in with a third-party credential.
    ///
    /// The returned session token goes into the `Authorization` header as
    /// `Bearer <token>` on later calls.
    pub async fn post_session(
        &self,
        request: &PostSessionRequest,
        options: &CallOptions,
    ) -> ClientResult<PostSessionResponse> {
        let call = ApiCall::post("sessions", options).json(request)?;
        self.client.fetch(call).await
    }

    /// Sign out, invalidating the session token.
    pub async fn delete_session(&self, authorization: &str, options: &CallOptions) -> ClientResult<()> {
        let call = ApiCall::delete("sessions", options).bearer(authorization);
        self.client.send(call).await
    }
}

impl<B: HttpBackend> RequestTokens<'_, B> {
    /// Request token for providers with a three-legged flow (Twitter).
    pub async fn get_request_token(
        &self,
        identity_provider: IdentityProvider,
        options: &CallOptions,
    ) -> ClientResult<GetRequestTokenResponse> {
        let call = ApiCall::get(
            format!("request_tokens/{}", identity_provider.as_str()),
            options,
        );
        self.client.fetch(call).await
    }
}

impl<B: HttpBackend> MyLinkedAccounts<'_, B> {
    pub async fn get_linked_accounts(
        &self,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<Vec<LinkedAccountView>> {
        let call = ApiCall::get("users/me/linked_accounts", options).bearer(authorization);
        self.client.fetch_as(call, &LINKED_ACCOUNTS).await
    }

    /// Link another provider's account to the signed-in user.
    pub async fn post_linked_account(
        &self,
        request: &PostLinkedAccountRequest,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let call = ApiCall::post("users/me/linked_accounts", options)
            .bearer(authorization)
            .json(request)?;
        self.client.send(call).await
    }

    pub async fn delete_linked_account(
        &self,
        identity_provider: IdentityProvider,
        authorization: &str,
        options: &CallOptions,
    ) -> ClientResult<()> {
        let path = format!("users/me/linked_accounts/{}", identity_provider.as_str());
        self.client
            .send(ApiCall::delete(path, options).bearer(authorization))
            .await
    }
}
