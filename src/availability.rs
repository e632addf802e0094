//! Probes whether each OAuth provider is configured on the backend.
//!
//! The backend answers `GET /oauth/login/{provider}` with a redirect when
//! the provider is configured and with 400 when it is not. The probe issues
//! that request without following redirects, so a configured provider shows
//! up either as a 3xx status or as an opaque cross-origin redirect.

use std::{cell::Cell, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{error::SignInError, providers::SocialProvider};

/// Typed probe result. Fail-open behavior is expressed through this type
/// rather than through a silently defaulted exception path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderAvailability {
    Available,
    Unavailable,
}

impl ProviderAvailability {
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<ProviderAvailability> for bool {
    fn from(value: ProviderAvailability) -> Self {
        value.is_available()
    }
}

/// What a single probe observed on the wire.
///
/// An opaque cross-origin redirect carries no readable status (the browser
/// reports status 0), so the redirect indicator is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    pub opaque_redirect: bool,
}

/// Available ⇔ the response is redirect-shaped. Anything else, notably the
/// backend's explicit 400 "not configured" signal, hides the provider.
pub fn interpret_probe(outcome: &ProbeOutcome) -> ProviderAvailability {
    if (300..400).contains(&outcome.status) || outcome.opaque_redirect {
        ProviderAvailability::Available
    } else {
        ProviderAvailability::Unavailable
    }
}

/// Collapses a probe result into an availability flag, failing open on
/// transport errors so users are not blocked from a working login option
/// by a flaky check.
pub fn resolve_probe(
    outcome: Result<ProbeOutcome, SignInError>,
    provider: SocialProvider,
) -> ProviderAvailability {
    match outcome {
        Ok(outcome) => interpret_probe(&outcome),
        Err(e) => {
            log::error!("failed to check {provider} oauth availability: {e}");
            ProviderAvailability::Available
        }
    }
}

/// Per-provider availability flags, initialized optimistically so both
/// buttons render before the probes settle. Overwritten exactly once,
/// after both probes resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableProviders {
    pub github: bool,
    pub google: bool,
}

impl Default for AvailableProviders {
    fn default() -> Self {
        Self {
            github: true,
            google: true,
        }
    }
}

impl AvailableProviders {
    pub fn get(&self, provider: SocialProvider) -> bool {
        match provider {
            SocialProvider::Github => self.github,
            SocialProvider::Google => self.google,
        }
    }

    pub fn none(&self) -> bool {
        !self.github && !self.google
    }
}

/// The render rule: once the probes have settled with nothing available,
/// render nothing; otherwise show a button per currently-available provider.
/// The current flags are honored even before the checked flag flips.
pub fn visible_providers(available: AvailableProviders, checked: bool) -> Vec<SocialProvider> {
    if checked && available.none() {
        return Vec::new();
    }

    SocialProvider::ALL
        .into_iter()
        .filter(|p| available.get(*p))
        .collect()
}

/// Cooperative cancellation for the probe pass.
///
/// Unmounting cancels the guard; an in-flight fetch is not aborted, its
/// result is simply discarded so no state update lands on a dead component.
#[derive(Debug, Clone, Default)]
pub struct CancelGuard(Rc<Cell<bool>>);

impl CancelGuard {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_probe(url: &str) -> Result<ProbeOutcome, SignInError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, RequestRedirect, Response, ResponseType};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_redirect(RequestRedirect::Manual);
    opts.set_credentials(RequestCredentials::Include);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| SignInError::browser(format!("{e:?}")))?;
    let window = web_sys::window().ok_or_else(|| SignInError::browser("no window"))?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SignInError::transport(format!("{e:?}")))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| SignInError::browser("fetch did not return a Response"))?;

    Ok(ProbeOutcome {
        status: resp.status(),
        opaque_redirect: resp.type_() == ResponseType::Opaqueredirect,
    })
}

/// Probes one provider's login endpoint. Never fails: transport errors
/// resolve to `Available`.
#[cfg(feature = "hydrate")]
pub async fn check_provider(provider: SocialProvider, url: String) -> ProviderAvailability {
    resolve_probe(fetch_probe(&url).await, provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16) -> ProbeOutcome {
        ProbeOutcome {
            status,
            opaque_redirect: false,
        }
    }

    #[test]
    fn redirect_statuses_mean_available() {
        for status in [300, 302, 307, 399] {
            assert_eq!(
                interpret_probe(&outcome(status)),
                ProviderAvailability::Available
            );
        }
    }

    #[test]
    fn opaque_redirect_means_available() {
        // cross-origin redirect with manual redirect mode: status reads 0
        let opaque = ProbeOutcome {
            status: 0,
            opaque_redirect: true,
        };
        assert_eq!(interpret_probe(&opaque), ProviderAvailability::Available);
    }

    #[test]
    fn non_redirect_statuses_mean_unavailable() {
        for status in [200, 400, 404, 500] {
            assert_eq!(
                interpret_probe(&outcome(status)),
                ProviderAvailability::Unavailable
            );
        }
    }

    #[test]
    fn transport_failure_fails_open() {
        let res = resolve_probe(
            Err(SignInError::transport("connection reset")),
            SocialProvider::Github,
        );
        assert_eq!(res, ProviderAvailability::Available);
    }

    #[test]
    fn explicit_not_configured_resolves_unavailable() {
        let res = resolve_probe(Ok(outcome(400)), SocialProvider::Google);
        assert_eq!(res, ProviderAvailability::Unavailable);
    }

    #[test]
    fn both_buttons_render_before_probes_settle() {
        let visible = visible_providers(AvailableProviders::default(), false);
        assert_eq!(visible, vec![SocialProvider::Github, SocialProvider::Google]);
    }

    #[test]
    fn only_redirecting_provider_remains_after_check() {
        let available = AvailableProviders {
            github: true,
            google: false,
        };
        assert_eq!(
            visible_providers(available, true),
            vec![SocialProvider::Github]
        );
    }

    #[test]
    fn nothing_renders_once_both_are_unavailable() {
        let available = AvailableProviders {
            github: false,
            google: false,
        };
        assert!(visible_providers(available, true).is_empty());
    }

    #[test]
    fn current_flags_are_honored_even_before_checked() {
        let available = AvailableProviders {
            github: false,
            google: true,
        };
        assert_eq!(
            visible_providers(available, false),
            vec![SocialProvider::Google]
        );
    }

    #[test]
    fn cancelled_guard_discards_results() {
        let guard = CancelGuard::default();
        assert!(!guard.is_cancelled());

        let updated = Cell::new(false);
        guard.cancel();
        if !guard.is_cancelled() {
            updated.set(true);
        }
        assert!(!updated.get());
    }

    #[test]
    fn cancel_guard_clones_share_state() {
        let guard = CancelGuard::default();
        let cleanup_handle = guard.clone();
        cleanup_handle.cancel();
        assert!(guard.is_cancelled());
    }
}
