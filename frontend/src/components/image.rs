use leptos::*;

use crate::reconcile::ImageFallback;

/// `<img>` that swaps to the bundled avatar the first time its source fails to load.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let fallback = create_rw_signal(ImageFallback::default());
    let resolved = move || fallback.with(|state| state.resolve(&src.get()));
    let on_error = move |_| {
        let failed = src.get_untracked();
        fallback.update(|state| {
            if state.record_error(&failed) {
                log::debug!("image {} failed to load; using placeholder", failed);
            }
        });
    };

    view! { <img src=resolved alt=alt class=class on:error=on_error /> }
}
