//! Login Modal
//!
//! Shared by the admin and doctor portals on the landing page and by the
//! patient login page.

use hospital_portal::pages::landing;
use hospital_portal::{LoginForm, LoginKind};
use leptos::*;

use crate::state::use_portal;

#[component]
pub fn LoginModal(kind: LoginKind) -> impl IntoView {
    let state = use_portal();
    let form = create_rw_signal(LoginForm::default());

    let (title, identifier_label, identifier_type) = match kind {
        LoginKind::Admin => ("Admin Login", "Username", "text"),
        LoginKind::Doctor => ("Doctor Login", "Email", "email"),
        LoginKind::Patient => ("Patient Login", "Email", "email"),
    };

    let on_submit = {
        let state = state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let ctx = state.ctx.clone();
            let host = state.host();
            let form = form.get_untracked();
            spawn_local(async move {
                landing::login(&*ctx, kind, &form, &host).await;
            });
        }
    };

    let close = move |_: web_sys::MouseEvent| state.modal.set(None);

    view! {
        <div id="modal" class="modal">
            <div class="modal-content">
                <span class="close" on:click=close>"×"</span>
                <h2>{title}</h2>
                <form on:submit=on_submit>
                    <label for="identifier">{identifier_label}</label>
                    <input
                        id="identifier"
                        type=identifier_type
                        class="input-field"
                        on:input=move |ev| form.update(|f| f.identifier = event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="input-field"
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button type="submit" class="dashboard-btn">"Login"</button>
                </form>
            </div>
        </div>
    }
}
