//! The single toast in the corner of the screen.

use leptos::prelude::*;

use crate::state::notification::Notifier;

#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let state = notifier.state();

    move || {
        state.with(|s| s.current.clone()).map(|current| {
            view! {
                <div class=current.kind.css_class() role="alert">
                    <span class="toast__message">{current.message}</span>
                    <button class="toast__close" aria-label="Tutup" on:click=move |_| notifier.dismiss()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
