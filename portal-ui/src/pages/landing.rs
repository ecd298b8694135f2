//! Landing Page
//!
//! Role selection. Visiting it resets the session (see the header).

use hospital_portal::pages::landing::select_role;
use hospital_portal::{Modal, Role};
use leptos::*;

use crate::components::LoginModal;
use crate::state::use_portal;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_portal();
    let modal = state.modal;
    let stored = store_value(state);

    let select = move |role: Role| {
        stored.with_value(|state| select_role(&*state.ctx, role, &state.host()));
    };

    view! {
        <div class="main-content">
            <h2>"Select Your Role:"</h2>
            <button class="dashboard-btn" on:click=move |_| select(Role::Admin)>"Admin"</button>
            <button class="dashboard-btn" on:click=move |_| select(Role::Patient)>"Patient"</button>
            <button class="dashboard-btn" on:click=move |_| select(Role::Doctor)>"Doctor"</button>

            {move || match modal.get() {
                Some(Modal::Login(kind)) => view! { <LoginModal kind=kind /> }.into_view(),
                _ => view! {}.into_view(),
            }}
        </div>
    }
}
