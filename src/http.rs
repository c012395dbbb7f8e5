//! Request building and response handling shared by both clients.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::error;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::rankings::LeaderboardMode;

/// An API endpoint. Tags are expected in normalized `#TAG` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Player(String),
    BattleLog(String),
    Club(String),
    ClubMembers(String),
    Rankings {
        country: String,
        mode: LeaderboardMode,
        brawler: Option<u32>,
        limit: u32,
    },
    Brawlers,
    EventRotation,
}

impl Route {
    /// Appends the route to `base`. Each segment gets percent-encoded, so
    /// `#TAG` goes out as `%23TAG`.
    pub(crate) fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::invalid(format!("{base} cannot be a base url")))?;
            segments.pop_if_empty();

            match self {
                Route::Player(tag) => {
                    segments.extend(["players", tag.as_str()]);
                }
                Route::BattleLog(tag) => {
                    segments.extend(["players", tag.as_str(), "battlelog"]);
                }
                Route::Club(tag) => {
                    segments.extend(["clubs", tag.as_str()]);
                }
                Route::ClubMembers(tag) => {
                    segments.extend(["clubs", tag.as_str(), "members"]);
                }
                Route::Rankings {
                    country,
                    mode,
                    brawler,
                    ..
                } => {
                    segments.extend(["rankings", country.as_str(), mode.as_str()]);
                    if let Some(id) = brawler {
                        segments.push(&id.to_string());
                    }
                }
                Route::Brawlers => {
                    segments.push("brawlers");
                }
                Route::EventRotation => {
                    segments.extend(["events", "rotation"]);
                }
            }
        }

        if let Route::Rankings { limit, .. } = self {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        Ok(url)
    }
}

/// Headers sent with every request. The user agent and timeout are set on
/// the client builders.
pub(crate) fn default_headers(config: &Config) -> Result<HeaderMap> {
    if config.token.trim().is_empty() {
        return Err(Error::invalid("an API token is required"));
    }

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token.trim()))
        .map_err(|_| Error::invalid("the API token contains characters not allowed in a header"))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

/// Error body the API sends along with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    reason: Option<String>,
    message: Option<String>,
}

pub(crate) fn check_status(url: &Url, status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let reason = serde_json::from_slice::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message.or(body.reason));
    error!(
        %url,
        %status,
        reason = reason.as_deref().unwrap_or("none given"),
        "request failed"
    );

    let url = url.clone();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized { url },
        StatusCode::NOT_FOUND => Error::NotFound { url },
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited { url },
        status if status.is_server_error() => Error::ServiceUnavailable { url, status },
        status => Error::Request {
            url,
            status,
            reason,
        },
    })
}

pub(crate) fn decode<T: DeserializeOwned>(url: &Url, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::MalformedResponse {
        url: url.clone(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Club;

    fn base() -> Url {
        Url::parse("https://api.brawlstars.com/v1").unwrap()
    }

    #[test]
    fn test_route_urls() {
        let cases = [
            (
                Route::Player("#80V2R98CQ".into()),
                "https://api.brawlstars.com/v1/players/%2380V2R98CQ",
            ),
            (
                Route::BattleLog("#80V2R98CQ".into()),
                "https://api.brawlstars.com/v1/players/%2380V2R98CQ/battlelog",
            ),
            (
                Route::Club("#CLUBTAG".into()),
                "https://api.brawlstars.com/v1/clubs/%23CLUBTAG",
            ),
            (
                Route::ClubMembers("#CLUBTAG".into()),
                "https://api.brawlstars.com/v1/clubs/%23CLUBTAG/members",
            ),
            (
                Route::Rankings {
                    country: "global".into(),
                    mode: LeaderboardMode::Players,
                    brawler: None,
                    limit: 200,
                },
                "https://api.brawlstars.com/v1/rankings/global/players?limit=200",
            ),
            (
                Route::Rankings {
                    country: "de".into(),
                    mode: LeaderboardMode::Brawlers,
                    brawler: Some(16000000),
                    limit: 5,
                },
                "https://api.brawlstars.com/v1/rankings/de/brawlers/16000000?limit=5",
            ),
            (Route::Brawlers, "https://api.brawlstars.com/v1/brawlers"),
            (
                Route::EventRotation,
                "https://api.brawlstars.com/v1/events/rotation",
            ),
        ];

        for (route, expected) in cases {
            assert_eq!(route.url(&base()).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = Route::Player("#A/B?C".into()).url(&base()).unwrap();
        assert_eq!(url.path(), "/v1/players/%23A%2FB%3FC");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:1234/").unwrap();
        let url = Route::Brawlers.url(&base).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/brawlers");
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers(&Config::new("asdf1234")).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer asdf1234");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ACCEPT], "application/json");

        assert!(matches!(
            default_headers(&Config::new("")),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            default_headers(&Config::new("bad\ntoken")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_status() {
        let url = base();
        let body = br#"{"reason": "notFound", "message": "Not found with tag %2380V2R98CQ"}"#;

        assert!(check_status(&url, StatusCode::OK, b"").is_ok());
        assert!(matches!(
            check_status(&url, StatusCode::UNAUTHORIZED, b""),
            Err(Error::Unauthorized { .. })
        ));
        assert!(matches!(
            check_status(&url, StatusCode::FORBIDDEN, b""),
            Err(Error::Unauthorized { .. })
        ));
        assert!(matches!(
            check_status(&url, StatusCode::NOT_FOUND, body),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            check_status(&url, StatusCode::TOO_MANY_REQUESTS, b""),
            Err(Error::RateLimited { .. })
        ));
        assert!(matches!(
            check_status(&url, StatusCode::SERVICE_UNAVAILABLE, b""),
            Err(Error::ServiceUnavailable {
                status: StatusCode::SERVICE_UNAVAILABLE,
                ..
            })
        ));
        assert!(matches!(
            check_status(&url, StatusCode::INTERNAL_SERVER_ERROR, b"not json"),
            Err(Error::ServiceUnavailable { .. })
        ));

        match check_status(&url, StatusCode::BAD_REQUEST, br#"{"reason": "badRequest"}"#) {
            Err(Error::Request { status, reason, .. }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(reason.as_deref(), Some("badRequest"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_decode() {
        let url = base();
        let club: Club = decode(&url, br##"{"tag": "#CLUBTAG", "name": "x"}"##).unwrap();
        assert_eq!(club.tag, "#CLUBTAG");

        assert!(matches!(
            decode::<Club>(&url, br#"{"name": "x"}"#),
            Err(Error::MalformedResponse { .. })
        ));
        assert!(matches!(
            decode::<Club>(&url, b"<html>"),
            Err(Error::MalformedResponse { .. })
        ));
    }
}
