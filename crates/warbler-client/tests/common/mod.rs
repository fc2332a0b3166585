use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use warbler_api_types::lists::request::ListMemberAdd;
use warbler_api_types::lists::response::{
    ListMembersDeleteResponse, ListMembersGetResponse, ListMembersIncludes,
    ListMembersPostResponse, ListMembership,
};
use warbler_api_types::resources::{ListMembersGetMeta, PartialError, Tweet, User};
use warbler_client::Client;

pub const TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAMLheAAAAAAA0%2BuSeid";

/// In-process stand-in for the list-members endpoints.
///
/// A few list ids are reserved to make the mock fail: `403`, `404`, `429` and
/// `503` answer with that status, `999` answers 200 with a body that is not JSON.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    members: Vec<User>,
    pinned: Vec<Tweet>,
    queries: Vec<HashMap<String, String>>,
    requests: usize,
}

impl MockApi {
    pub fn new(members: Vec<User>, pinned: Vec<Tweet>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                members,
                pinned,
                ..Inner::default()
            })),
        }
    }

    pub fn requests(&self) -> usize {
        self.inner.lock().unwrap().requests
    }

    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.inner.lock().unwrap().queries.last().cloned()
    }

    pub async fn spawn(&self) -> Client {
        let router = Router::new()
            .route("/2/lists/:id/members", get(get_members).post(add_member))
            .route("/2/lists/:id/members/:user_id", delete(remove_member))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service())
                .await
                .unwrap();
        });

        Client::from_reqwest(&format!("http://{addr}/2/"), TOKEN, reqwest::Client::new())
    }

    /// Common checks for every request. Returns the response to short-circuit with.
    fn gate(&self, headers: &HeaderMap, list_id: &str) -> Option<Response> {
        self.inner.lock().unwrap().requests += 1;

        let expected = format!("Bearer {TOKEN}");
        if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
            return Some(problem(StatusCode::UNAUTHORIZED, "Unauthorized"));
        }

        match list_id {
            "403" => Some(problem(StatusCode::FORBIDDEN, "Forbidden")),
            "404" => Some(problem(StatusCode::NOT_FOUND, "Not Found Error")),
            "429" => Some(problem(StatusCode::TOO_MANY_REQUESTS, "Too Many Requests")),
            "503" => Some(problem(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")),
            "999" => Some((StatusCode::OK, "<html>upstream hiccup</html>").into_response()),
            _ => None,
        }
    }
}

fn problem(status: StatusCode, title: &str) -> Response {
    let body = serde_json::json!({
        "title": title,
        "detail": title,
        "type": "about:blank",
        "status": status.as_u16(),
    });
    (status, Json(body)).into_response()
}

async fn get_members(
    State(api): State<MockApi>,
    Path(list_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Some(rejection) = api.gate(&headers, &list_id) {
        return rejection;
    }

    let mut inner = api.inner.lock().unwrap();
    inner.queries.push(query.clone());

    let offset: usize = query
        .get("pagination_token")
        .map_or(0, |t| t.parse().unwrap());
    let max: usize = query.get("max_results").map_or(100, |m| m.parse().unwrap());
    let end = (offset + max).min(inner.members.len());
    let page = inner.members[offset.min(end)..end].to_vec();

    let mut includes = ListMembersIncludes::default();
    let mut errors = Vec::new();

    let expand_pinned = query
        .get("expansions")
        .is_some_and(|e| e.split(',').any(|x| x == "pinned_tweet_id"));

    if expand_pinned {
        for pinned_id in page.iter().filter_map(|u| u.pinned_tweet_id.as_deref()) {
            match inner.pinned.iter().find(|t| t.id == pinned_id) {
                Some(tweet) => includes.tweets.push(tweet.clone()),
                None => errors.push(PartialError {
                    title: Some("Not Found Error".into()),
                    detail: Some(format!(
                        "Could not find tweet with pinned_tweet_id: [{pinned_id}]."
                    )),
                    error_type: Some(
                        "https://api.twitter.com/2/problems/resource-not-found".into(),
                    ),
                    resource_type: Some("tweet".into()),
                    resource_id: Some(pinned_id.to_owned()),
                    parameter: Some("pinned_tweet_id".into()),
                    value: Some(pinned_id.to_owned()),
                    section: None,
                }),
            }
        }
    }

    let meta = ListMembersGetMeta {
        result_count: u32::try_from(page.len()).unwrap(),
        next_token: (end < inner.members.len()).then(|| end.to_string()),
        previous_token: (offset > 0).then(|| offset.saturating_sub(max).to_string()),
    };

    Json(ListMembersGetResponse {
        data: page,
        includes,
        meta,
        errors: (!errors.is_empty()).then_some(errors),
    })
    .into_response()
}

async fn add_member(
    State(api): State<MockApi>,
    Path(list_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<ListMemberAdd>,
) -> Response {
    if let Some(rejection) = api.gate(&headers, &list_id) {
        return rejection;
    }

    let mut inner = api.inner.lock().unwrap();
    if !inner.members.iter().any(|u| u.id == body.user_id) {
        inner.members.push(User {
            id: body.user_id,
            ..User::default()
        });
    }

    Json(ListMembersPostResponse {
        data: ListMembership { is_member: true },
    })
    .into_response()
}

async fn remove_member(
    State(api): State<MockApi>,
    Path((list_id, user_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Some(rejection) = api.gate(&headers, &list_id) {
        return rejection;
    }

    api.inner.lock().unwrap().members.retain(|u| u.id != user_id);

    Json(ListMembersDeleteResponse {
        data: ListMembership { is_member: false },
    })
    .into_response()
}

pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_owned(),
        name: username.to_owned(),
        username: username.to_owned(),
        ..User::default()
    }
}
