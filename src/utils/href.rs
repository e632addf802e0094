//! Builds sanitized hrefs for the backend OAuth login endpoints.

use url::Url;

const UNSAFE_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

/// Strips control and whitespace characters and rejects hrefs carrying an
/// unsafe scheme. Relative hrefs (no scheme) pass through untouched.
pub fn purify_href(href: &str) -> String {
    let cleaned: String = href
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .collect();

    if let Ok(url) = Url::parse(&cleaned) {
        if UNSAFE_SCHEMES.contains(&url.scheme()) {
            return String::new();
        }
    }

    cleaned
}

/// Whether the current query string carries an invite token.
pub fn has_invite_token(search: &str) -> bool {
    url::form_urlencoded::parse(search.as_bytes()).any(|(key, _)| key == "invite_token")
}

/// Builds the login URL for a provider endpoint.
///
/// When the page was opened with an invite token, the *entire* current
/// query string is passed through to the backend, not just the token.
/// `search` is the raw query string without the leading `?`.
pub fn build_login_url(base: &str, path: &str, search: &str) -> String {
    let url = purify_href(&format!("{base}{path}"));
    if has_invite_token(search) {
        return format!("{url}?{search}");
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purify_keeps_plain_paths() {
        assert_eq!(
            purify_href("/console/api/oauth/login/github"),
            "/console/api/oauth/login/github"
        );
        assert_eq!(
            purify_href("https://cloud.example.com/api"),
            "https://cloud.example.com/api"
        );
    }

    #[test]
    fn purify_strips_control_and_whitespace() {
        assert_eq!(purify_href("/console\n/api\t "), "/console/api");
    }

    #[test]
    fn purify_rejects_unsafe_schemes() {
        assert_eq!(purify_href("javascript:alert(1)"), "");
        assert_eq!(purify_href("data:text/html,x"), "");
        // whitespace smuggled into the scheme still gets caught
        assert_eq!(purify_href("java script:alert(1)"), "");
    }

    #[test]
    fn no_query_without_invite_token() {
        let url = build_login_url("/console/api", "/oauth/login/github", "");
        assert_eq!(url, "/console/api/oauth/login/github");

        // unrelated params are not forwarded
        let url = build_login_url("/console/api", "/oauth/login/github", "utm_source=mail");
        assert_eq!(url, "/console/api/oauth/login/github");
    }

    #[test]
    fn invite_token_forwards_the_whole_query_string() {
        let url = build_login_url(
            "/console/api",
            "/oauth/login/google",
            "invite_token=abc&locale=en-US",
        );
        assert_eq!(
            url,
            "/console/api/oauth/login/google?invite_token=abc&locale=en-US"
        );
    }

    #[test]
    fn github_login_url_under_the_configured_prefix() {
        use crate::{consts::api_prefix, providers::SocialProvider};

        let url = build_login_url(api_prefix(), &SocialProvider::Github.login_path(), "");
        assert_eq!(url, format!("{}/oauth/login/github", api_prefix()));
    }

    #[test]
    fn invite_token_alone_is_forwarded() {
        let url = build_login_url("/console/api", "/oauth/login/github", "invite_token=abc");
        assert_eq!(url, "/console/api/oauth/login/github?invite_token=abc");
    }
}
