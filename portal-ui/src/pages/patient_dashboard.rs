//! Patient Dashboard Page
//!
//! Doctor directory for browsing and logged-in patients. Card buttons
//! depend on the stored role; a logged-in patient's "Book Now" opens the
//! booking overlay.

use hospital_portal::{DoctorDirectory, DoctorFilter, Node};
use leptos::*;

use crate::components::{BookingOverlay, DoctorFilters, NodeList};
use crate::state::use_portal;

#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    let state = use_portal();
    let directory = DoctorDirectory::new();
    let cards = create_rw_signal(Vec::<Node>::new());
    let booking = state.booking;

    // Initial load
    {
        let directory = directory.clone();
        let ctx = state.ctx.clone();
        spawn_local(async move {
            if let Some(loaded) = directory.load_all(&*ctx).await {
                cards.set(loaded);
            }
        });
    }

    let on_filter = {
        let ctx = state.ctx.clone();
        Callback::new(move |filter: DoctorFilter| {
            let directory = directory.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Some(found) = directory.apply_filter(&*ctx, &filter).await {
                    cards.set(found);
                }
            });
        })
    };

    view! {
        <div class="main-content">
            <DoctorFilters on_change=on_filter />
            <div id="content">
                <NodeList nodes=cards on_action=state.on_action() />
            </div>
            {move || booking.get().map(|draft| view! { <BookingOverlay draft=draft /> })}
        </div>
    }
}
