use leptos::prelude::*;

use crate::{components::social_auth::SocialAuth, i18n::t};

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="w-dvw h-dvh flex justify-center items-center bg-neutral-900">
            <div class="flex flex-col items-center w-80 text-white cursor-auto">
                <span class="text-2xl mb-6">{t("login.title")}</span>
                <SocialAuth />
            </div>
        </div>
    }
}
