use leptos::prelude::*;

use crate::utils::classnames;

/// Base button primitive.
#[component]
pub fn Button(
    /// Whether the button is disabled
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Extra classes merged into the base style
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = classnames([
        "inline-flex justify-center items-center py-2 px-4 rounded-lg bg-white text-neutral-900 hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer",
        class.as_str(),
    ]);

    view! {
        <button class=class disabled=move || disabled.get().unwrap_or(false)>
            {children()}
        </button>
    }
}
