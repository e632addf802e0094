use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_location;

use crate::{
    availability::AvailableProviders,
    components::{button::Button, github_symbol::GithubSymbol, google_symbol::GoogleSymbol},
    consts::api_prefix,
    i18n::t,
    providers::SocialProvider,
    utils::href::build_login_url,
};

/// Sign-in buttons for the third-party identity providers.
///
/// Renders both buttons optimistically, probes the backend login endpoints
/// once on mount, and reconciles in a single state transition when both
/// probes settle. Renders nothing once the probes confirm that neither
/// provider is configured.
#[component]
pub fn SocialAuth(
    /// Disables the buttons, e.g. while the enclosing form is submitting
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let location = use_location();
    let search = location.search;

    let disabled = Signal::derive(move || disabled.get().unwrap_or(false));
    let available = RwSignal::new(AvailableProviders::default());
    let checked = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use futures::future::join;
        use leptos::task::spawn_local;

        use crate::availability::{check_provider, CancelGuard};

        let guard = CancelGuard::default();
        on_cleanup({
            let guard = guard.clone();
            move || guard.cancel()
        });

        Effect::new(move |_| {
            let guard = guard.clone();
            let github_url = build_login_url(
                api_prefix(),
                &SocialProvider::Github.login_path(),
                &search.get_untracked(),
            );
            let google_url = build_login_url(
                api_prefix(),
                &SocialProvider::Google.login_path(),
                &search.get_untracked(),
            );

            spawn_local(async move {
                let (github, google) = join(
                    check_provider(SocialProvider::Github, github_url),
                    check_provider(SocialProvider::Google, google_url),
                )
                .await;

                // the component unmounted while the probes were in flight;
                // the result is discarded, never applied
                if guard.is_cancelled() {
                    return;
                }

                available.set(AvailableProviders {
                    github: github.is_available(),
                    google: google.is_available(),
                });
                checked.set(true);
            });
        });
    }

    view! {
        <Show when=move || !(checked.get() && available.get().none())>
            <div class="flex flex-col gap-3 w-full">
                <Show when=move || available.get().github>
                    <SocialAuthButton provider=SocialProvider::Github disabled=disabled search=search />
                </Show>
                <Show when=move || available.get().google>
                    <SocialAuthButton provider=SocialProvider::Google disabled=disabled search=search />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn SocialAuthButton(
    provider: SocialProvider,
    disabled: Signal<bool>,
    search: Memo<String>,
) -> impl IntoView {
    let href = move || build_login_url(api_prefix(), &provider.login_path(), &search.get());

    let symbol = match provider {
        SocialProvider::Github => Either::Left(view! { <GithubSymbol class="mr-2 w-5 h-5" /> }),
        SocialProvider::Google => Either::Right(view! { <GoogleSymbol class="mr-2 w-5 h-5" /> }),
    };

    view! {
        <div class="w-full">
            // plain anchor: clicking starts the backend's redirect flow as a
            // full-page navigation, not a router transition
            <a href=href rel="external">
                <Button disabled=disabled class="w-full">
                    {symbol}
                    <span class="truncate leading-normal">{t(provider.label_key())}</span>
                </Button>
            </a>
        </div>
    }
}
