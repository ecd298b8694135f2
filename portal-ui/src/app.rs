//! App Root Component
//!
//! Main application component with routing and global providers. Route
//! paths come from the same `RoutesConfig` the core navigates with.

use leptos::*;
use leptos_router::*;

use crate::components::Header;
use crate::pages::{
    AdminDashboardPage, DoctorDashboardPage, Landing, PatientDashboardPage, PatientLoginPage,
};
use crate::state::{provide_portal_state, use_portal};

/// Static entry file served for the landing page
const INDEX_PATH: &str = "/index.html";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_portal_state();
    let routes = use_portal().ctx.routes.clone();

    view! {
        <Router>
            <div class="wrapper">
                <Header />

                <main class="main-content">
                    <Routes>
                        <Route path=routes.landing.clone() view=Landing />
                        <Route path=INDEX_PATH view=Landing />
                        <Route path=routes.admin_dashboard.clone() view=AdminDashboardPage />
                        <Route path=routes.doctor_dashboard.clone() view=DoctorDashboardPage />
                        <Route path=routes.patient_dashboard.clone() view=PatientDashboardPage />
                        <Route path=routes.logged_patient_dashboard.clone() view=PatientDashboardPage />
                        <Route path=routes.patient_login.clone() view=PatientLoginPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <footer class="footer">
                    <p>"© 2025 Hospital CMS. All rights reserved."</p>
                </footer>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let landing = use_portal().ctx.routes.landing.clone();

    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=landing>"Go to Home"</A>
        </div>
    }
}
