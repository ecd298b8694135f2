//! Booking Overlay
//!
//! Opened by a logged-in patient's "Book Now": pick a date and one of the
//! doctor's slots, then confirm.

use chrono::NaiveDate;
use leptos::*;

use crate::state::{use_portal, BookingDraft};

#[component]
pub fn BookingOverlay(draft: BookingDraft) -> impl IntoView {
    let state = use_portal();
    let (date, set_date) = create_signal(String::new());
    let (slot, set_slot) = create_signal(draft.doctor.available_times.first().cloned().unwrap_or_default());

    let slots = draft.doctor.available_times.clone();
    let title = format!("Book appointment with {}", draft.doctor.name);
    let patient_name = draft.patient.name.clone();
    let specialty = draft.doctor.specialty.clone();

    let on_confirm = {
        let state = state.clone();
        move |_: web_sys::MouseEvent| {
            let ctx = state.ctx.clone();
            let host = state.host();
            let booking = state.booking;
            let draft = draft.clone();
            let date = NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d").ok();
            let slot = slot.get_untracked();
            spawn_local(async move {
                if ctx
                    .confirm_booking(&draft.doctor, &draft.patient, date, &slot, &host)
                    .await
                {
                    booking.set(None);
                }
            });
        }
    };

    let close = move |_: web_sys::MouseEvent| state.booking.set(None);

    view! {
        <div class="modalApp active">
            <h2>{title}</h2>
            <input class="input-field" type="text" value=patient_name disabled=true />
            <input class="input-field" type="text" value=specialty disabled=true />
            <input
                class="input-field"
                type="date"
                on:change=move |ev| set_date.set(event_target_value(&ev))
            />
            <select class="input-field" on:change=move |ev| set_slot.set(event_target_value(&ev))>
                {slots
                    .into_iter()
                    .map(|s| view! { <option value=s.clone()>{s}</option> })
                    .collect_view()}
            </select>
            <button class="confirm-booking" on:click=on_confirm>"Confirm Booking"</button>
            <button class="close-booking" on:click=close>"Cancel"</button>
        </div>
    }
}
