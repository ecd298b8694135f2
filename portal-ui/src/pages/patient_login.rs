//! Patient Login Page

use hospital_portal::LoginKind;
use leptos::*;

use crate::components::LoginModal;

#[component]
pub fn PatientLoginPage() -> impl IntoView {
    view! {
        <div class="main-content">
            <LoginModal kind=LoginKind::Patient />
        </div>
    }
}
