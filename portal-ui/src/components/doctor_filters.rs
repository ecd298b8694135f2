//! Directory Filter Bar
//!
//! Search box plus time and specialty selects. Every change emits the full
//! filter; no debouncing.

use hospital_portal::DoctorFilter;
use leptos::*;

const SPECIALTIES: &[&str] = &[
    "cardiologist",
    "dermatologist",
    "neurologist",
    "pediatrician",
    "orthopedic",
    "gynecologist",
    "psychiatrist",
    "dentist",
    "ophthalmologist",
    "ent",
    "urologist",
    "oncologist",
    "gastroenterologist",
    "general",
];

#[component]
pub fn DoctorFilters(on_change: Callback<DoctorFilter>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (time, set_time) = create_signal(String::new());
    let (specialty, set_specialty) = create_signal(String::new());

    let emit = move || {
        let filter = DoctorFilter::from_inputs(
            &name.get_untracked(),
            &time.get_untracked(),
            &specialty.get_untracked(),
        );
        on_change.call(filter);
    };

    view! {
        <div class="filter-wrapper">
            <input
                id="searchBar"
                class="searchBar"
                type="text"
                placeholder="Search by doctor name"
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                    emit();
                }
            />
            <select
                id="timeFilter"
                class="filter-select"
                on:change=move |ev| {
                    set_time.set(event_target_value(&ev));
                    emit();
                }
            >
                <option value="">"Sort by Time"</option>
                <option value="AM">"AM"</option>
                <option value="PM">"PM"</option>
            </select>
            <select
                id="specialtyFilter"
                class="filter-select"
                on:change=move |ev| {
                    set_specialty.set(event_target_value(&ev));
                    emit();
                }
            >
                <option value="">"Filter by Specialty"</option>
                {SPECIALTIES
                    .iter()
                    .map(|s| view! { <option value=*s>{*s}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
