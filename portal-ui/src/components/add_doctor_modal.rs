//! Add Doctor Modal
//!
//! Collects the new doctor's fields and hands them to the admin dashboard
//! controller. Stays open when saving fails.

use hospital_portal::pages::AddDoctorOutcome;
use hospital_portal::{AdminDashboard, DoctorForm, Node};
use leptos::*;

use crate::state::use_portal;

#[component]
pub fn AddDoctorModal(dashboard: AdminDashboard, cards: RwSignal<Vec<Node>>) -> impl IntoView {
    let state = use_portal();
    let form = create_rw_signal(DoctorForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = {
        let state = state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_submitting.set(true);

            let ctx = state.ctx.clone();
            let host = state.host();
            let dashboard = dashboard.clone();
            let form = form.get_untracked();
            spawn_local(async move {
                if let AddDoctorOutcome::Saved(Some(reloaded)) = dashboard.add_doctor(&*ctx, &form, &host).await {
                    cards.set(reloaded);
                }
                set_submitting.set(false);
            });
        }
    };

    let close = move |_: web_sys::MouseEvent| state.modal.set(None);

    view! {
        <div id="modal" class="modal">
            <div class="modal-content">
                <span class="close" on:click=close>"×"</span>
                <h2>"Add Doctor"</h2>
                <form on:submit=on_submit>
                    <Field id="doctorName" label="Name" kind="text"
                        on_input=move |v| form.update(|f| f.name = v) />
                    <Field id="doctorEmail" label="Email" kind="email"
                        on_input=move |v| form.update(|f| f.email = v) />
                    <Field id="doctorPhone" label="Phone" kind="tel"
                        on_input=move |v| form.update(|f| f.phone = v) />
                    <Field id="doctorPassword" label="Password" kind="password"
                        on_input=move |v| form.update(|f| f.password = v) />
                    <Field id="doctorSpecialty" label="Specialty" kind="text"
                        on_input=move |v| form.update(|f| f.specialty = v) />
                    <Field id="doctorTimes" label="Available times (comma separated)" kind="text"
                        on_input=move |v| form.update(|f| f.times = v) />
                    <button type="submit" class="dashboard-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input id=id type=kind class="input-field" on:input=move |ev| on_input(event_target_value(&ev)) />
    }
}
