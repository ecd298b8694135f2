//! Doctor Dashboard Page
//!
//! Appointment table for one day, narrowed by patient name. Every filter
//! event reloads the table once.

use hospital_portal::{AppointmentFilter, DoctorDashboard, Node};
use leptos::*;

use crate::components::NodeList;
use crate::state::use_portal;

#[component]
pub fn DoctorDashboardPage() -> impl IntoView {
    let state = use_portal();
    let dashboard = DoctorDashboard::new();
    let filter = create_rw_signal(AppointmentFilter::new());
    let rows = create_rw_signal(Vec::<Node>::new());

    let load = {
        let ctx = state.ctx.clone();
        Callback::new(move |()| {
            let dashboard = dashboard.clone();
            let ctx = ctx.clone();
            let current = filter.get_untracked();
            spawn_local(async move {
                if let Some(loaded) = dashboard.load_appointments(&*ctx, &current).await {
                    rows.set(loaded);
                }
            });
        })
    };

    load.call(());

    view! {
        <div class="main-content">
            <div class="filter-wrapper">
                <input
                    id="searchBar"
                    class="searchBar"
                    type="text"
                    placeholder="Search by patient name"
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.on_search(&value));
                        load.call(());
                    }
                />
                <button
                    id="todayButton"
                    class="today-btn"
                    on:click=move |_| {
                        filter.update(|f| f.on_today());
                        load.call(());
                    }
                >
                    "Today"
                </button>
                <input
                    id="datePicker"
                    class="date-picker"
                    type="date"
                    prop:value=move || filter.with(|f| f.date_value())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if filter.try_update(|f| f.on_date_change(&value)).unwrap_or(false) {
                            load.call(());
                        }
                    }
                />
            </div>
            <table id="patientTable">
                <thead class="table-header">
                    <tr>
                        <th>"Patient Id"</th>
                        <th>"Name"</th>
                        <th>"Phone No."</th>
                        <th>"Email"</th>
                        <th>"Prescription"</th>
                    </tr>
                </thead>
                <tbody id="patientTableBody">
                    <NodeList nodes=rows on_action=state.on_action() />
                </tbody>
            </table>
        </div>
    }
}
