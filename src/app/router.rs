//! Request dispatch
//!
//! Decides, per parsed request, between the user operations (create, login,
//! list) and static file serving, and produces the response for the
//! connection to write.

use crate::app::static_files::{self, HTML_CONTENT_TYPE};
use crate::app::users::{User, UserStore};
use crate::http::request::Request;
use crate::http::response::Response;
use anyhow::Result;
use std::path::PathBuf;

const INDEX_PAGE: &str = "/index.html";
const LOGIN_FAILED_PAGE: &str = "/user/login_failed.html";

const USER_CREATE_PATH: &str = "/user/create";
const USER_LOGIN_PATH: &str = "/user/login";
const USER_LIST_PATH: &str = "/user/list";

const LOGIN_COOKIE: &str = "logined=true";

/// Routes requests to user handling or static files.
///
/// Holds the shared user directory and the document root; cloning shares
/// the directory, so the listener hands every connection its own handle.
#[derive(Debug, Clone)]
pub struct Router {
    store: UserStore,
    docroot: PathBuf,
}

impl Router {
    pub fn new(store: UserStore, docroot: impl Into<PathBuf>) -> Self {
        Self {
            store,
            docroot: docroot.into(),
        }
    }

    /// Decides the response for one request.
    ///
    /// Evaluation order: POST requests are form submissions; the user list
    /// is gated on the login cookie; every remaining path is looked up
    /// under the document root. Path matching is exact and case-sensitive.
    /// An error (unreadable file, rejected path) is fatal for the
    /// connection and produces no response.
    pub async fn dispatch(&self, request: &Request) -> Result<Response> {
        if request.method.is_post() {
            return Ok(self.handle_form_post(request).await);
        }

        if request.path == USER_LIST_PATH {
            return Ok(self.handle_user_list(request).await);
        }

        self.handle_static(&request.path).await
    }

    /// POST dispatch: the body is a form-encoded user, whatever the path.
    async fn handle_form_post(&self, request: &Request) -> Response {
        let user = User::from_params(&request.form_params());

        match request.path.as_str() {
            USER_CREATE_PATH => {
                tracing::debug!(user_id = %user.user_id, "Creating user");
                self.store.add(user).await;
                Response::redirect(INDEX_PAGE)
            }

            USER_LOGIN_PATH => {
                // Login succeeds by existence alone; the password is not
                // compared.
                match self.store.find_by_id(&user.user_id).await {
                    Some(_) => {
                        tracing::info!(user_id = %user.user_id, "User logged in");
                        Response::redirect(INDEX_PAGE).with_cookie(LOGIN_COOKIE)
                    }
                    None => {
                        tracing::warn!(user_id = %user.user_id, "Login failed: unknown user");
                        Response::redirect(LOGIN_FAILED_PAGE)
                    }
                }
            }

            _ => {
                tracing::debug!(path = %request.path, "Unrouted POST: {}", user);
                Response::redirect(INDEX_PAGE)
            }
        }
    }

    /// The user list is only shown to clients carrying `logined=true`.
    async fn handle_user_list(&self, request: &Request) -> Response {
        let cookies = request.cookies();
        let logined = cookies
            .get("logined")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if !logined {
            return Response::redirect(INDEX_PAGE);
        }

        let users = self.store.find_all().await;
        let body = users
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        Response::ok(HTML_CONTENT_TYPE, body.into_bytes())
    }

    async fn handle_static(&self, path: &str) -> Result<Response> {
        let body = static_files::load(&self.docroot, path).await?;
        tracing::debug!(path = %path, bytes = body.len(), "Serving static file");

        Ok(Response::ok(static_files::content_type_for(path), body))
    }
}
