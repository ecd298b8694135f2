//! Global Application State
//!
//! Portal context plus the reactive overlay state, provided to all
//! components.

use hospital_portal::{
    Action, ApiClient, Config, Doctor, Host, Modal, Patient, PortalContext, Session,
};
use leptos::*;
use std::rc::Rc;

use super::session::LocalStorageStore;
use crate::api::{get_api_base, GlooTransport};

pub type Portal = PortalContext<GlooTransport, LocalStorageStore>;

/// Doctor and patient shown in the booking overlay
#[derive(Clone, Debug, PartialEq)]
pub struct BookingDraft {
    pub doctor: Doctor,
    pub patient: Patient,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct PortalState {
    pub ctx: Rc<Portal>,
    /// Open modal, if any
    pub modal: RwSignal<Option<Modal>>,
    /// Open booking overlay, if any
    pub booking: RwSignal<Option<BookingDraft>>,
}

/// Provide global state to the component tree
pub fn provide_portal_state() {
    let ctx = PortalContext::new(
        ApiClient::new(get_api_base(), GlooTransport),
        Session::new(LocalStorageStore),
        Config::default().routes,
    );

    provide_context(PortalState {
        ctx: Rc::new(ctx),
        modal: create_rw_signal(None),
        booking: create_rw_signal(None),
    });
}

pub fn use_portal() -> PortalState {
    use_context::<PortalState>().expect("PortalState not found")
}

impl PortalState {
    pub fn host(&self) -> BrowserHost {
        BrowserHost {
            modal: self.modal,
            booking: self.booking,
        }
    }

    /// Run a clicked action in the background
    pub fn dispatch(&self, action: Action) {
        let ctx = Rc::clone(&self.ctx);
        let host = self.host();
        spawn_local(async move {
            ctx.perform(&action, &host).await;
        });
    }

    /// Click handler for mounted fragments
    pub fn on_action(&self) -> Callback<Action> {
        let state = self.clone();
        Callback::new(move |action: Action| state.dispatch(action))
    }
}

/// Host backed by `window` dialogs and the overlay signals
#[derive(Clone, Copy)]
pub struct BrowserHost {
    modal: RwSignal<Option<Modal>>,
    booking: RwSignal<Option<BookingDraft>>,
}

impl Host for BrowserHost {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!(path, error = ?e, "Navigation failed");
            }
        }
    }

    fn remove_element(&self, id: &str) {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            element.remove();
        }
    }

    fn open_modal(&self, modal: Modal) {
        self.modal.set(Some(modal));
    }

    fn close_modal(&self, modal: Modal) {
        if self.modal.get_untracked() == Some(modal) {
            self.modal.set(None);
        }
    }

    fn show_booking_overlay(&self, doctor: &Doctor, patient: &Patient) {
        self.booking.set(Some(BookingDraft {
            doctor: doctor.clone(),
            patient: patient.clone(),
        }));
    }
}
