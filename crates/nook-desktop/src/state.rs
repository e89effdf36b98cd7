//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;

use dioxus::prelude::*;
use nook_core::config::Settings;
use nook_core::palette::CreateKind;
use nook_core::Route;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Page currently shown
    pub route: Signal<Route>,
    /// Settings loaded at startup
    pub settings: Signal<Settings>,
    /// Creation requested from the palette, shown until dismissed
    pub create_request: Signal<Option<CreateKind>>,
    /// App container; it must hold focus for window-wide shortcuts to fire
    pub focus_home: Signal<Option<Rc<MountedData>>>,
}

impl AppState {
    /// Client-side navigation; unknown targets are logged and ignored
    pub fn navigate(&mut self, target: &str) {
        match Route::parse(target) {
            Ok(route) => {
                tracing::info!("Navigating to {}", target);
                self.route.set(route);
            }
            Err(e) => {
                tracing::warn!("Ignoring navigation to {}: {}", target, e);
            }
        }
    }

    /// Move keyboard focus back to the app container
    pub fn restore_focus(&self) {
        let Some(home) = self.focus_home.peek().clone() else {
            return;
        };
        spawn(async move {
            if let Err(e) = home.set_focus(true).await {
                tracing::warn!("Failed to restore focus: {:?}", e);
            }
        });
    }

    /// Record a creation request from the palette
    pub fn request_create(&mut self, kind: CreateKind) {
        tracing::info!("Create {} requested", kind);
        self.create_request.set(Some(kind));
    }
}
