//! Admin Dashboard Page
//!
//! Doctor directory with filters, delete buttons on every card, and the
//! add-doctor modal.

use hospital_portal::{AdminDashboard, DoctorFilter, Modal, Node};
use leptos::*;

use crate::components::{AddDoctorModal, DoctorFilters, NodeList};
use crate::state::use_portal;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let state = use_portal();
    let dashboard = AdminDashboard::new();
    let cards = create_rw_signal(Vec::<Node>::new());
    let modal = state.modal;

    // Initial load
    {
        let dashboard = dashboard.clone();
        let ctx = state.ctx.clone();
        spawn_local(async move {
            if let Some(loaded) = dashboard.load_all(&*ctx).await {
                cards.set(loaded);
            }
        });
    }

    let on_filter = {
        let dashboard = dashboard.clone();
        let ctx = state.ctx.clone();
        Callback::new(move |filter: DoctorFilter| {
            let dashboard = dashboard.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Some(found) = dashboard.apply_filter(&*ctx, &filter).await {
                    cards.set(found);
                }
            });
        })
    };

    let open_add = move |_: web_sys::MouseEvent| modal.set(Some(Modal::AddDoctor));

    view! {
        <div class="main-content">
            <button id="addDoctorBtn" class="adminBtn" on:click=open_add>"Add Doctor"</button>
            <DoctorFilters on_change=on_filter />
            <div id="content">
                <NodeList nodes=cards on_action=state.on_action() />
            </div>
            {move || {
                (modal.get() == Some(Modal::AddDoctor))
                    .then(|| view! { <AddDoctorModal dashboard=dashboard.clone() cards=cards /> })
            }}
        </div>
    }
}
