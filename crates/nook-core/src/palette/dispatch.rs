//! Dispatch of palette selections to the outside world

use std::collections::VecDeque;
use std::fmt;

use super::catalog::CreateKind;

/// The single external effect of a palette selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Client-side route change
    Navigate(String),
    /// Run the caller's creation callback for a kind
    Create(CreateKind),
}

impl fmt::Display for PaletteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigate(path) => write!(f, "navigate {path}"),
            Self::Create(kind) => write!(f, "create {kind}"),
        }
    }
}

/// Performs client-side route changes
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, path: &str) {
        self(path);
    }
}

/// Zero-argument creation callback
pub type CreateCallback = Box<dyn FnMut()>;

/// Optional caller-supplied creation callbacks, one slot per kind
#[derive(Default)]
pub struct CreateCallbacks {
    pub on_create_source: Option<CreateCallback>,
    pub on_create_notebook: Option<CreateCallback>,
    pub on_create_podcast: Option<CreateCallback>,
}

impl CreateCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback for a kind, replacing any previous one
    #[must_use]
    pub fn with(mut self, kind: CreateKind, callback: impl FnMut() + 'static) -> Self {
        *self.slot_mut(kind) = Some(Box::new(callback));
        self
    }

    /// Run the callback for a kind. Returns `false` when none is registered.
    pub fn invoke(&mut self, kind: CreateKind) -> bool {
        match self.slot_mut(kind) {
            Some(callback) => {
                callback();
                true
            }
            None => {
                tracing::debug!(%kind, "No creation callback registered");
                false
            }
        }
    }

    fn slot_mut(&mut self, kind: CreateKind) -> &mut Option<CreateCallback> {
        match kind {
            CreateKind::Source => &mut self.on_create_source,
            CreateKind::Notebook => &mut self.on_create_notebook,
            CreateKind::Podcast => &mut self.on_create_podcast,
        }
    }
}

impl fmt::Debug for CreateCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCallbacks")
            .field("on_create_source", &self.on_create_source.is_some())
            .field("on_create_notebook", &self.on_create_notebook.is_some())
            .field("on_create_podcast", &self.on_create_podcast.is_some())
            .finish()
    }
}

impl PaletteAction {
    /// Fire the effect
    pub fn perform(self, navigator: &mut impl Navigator, callbacks: &mut CreateCallbacks) {
        tracing::debug!(action = %self, "Dispatching palette action");
        match self {
            Self::Navigate(path) => navigator.navigate_to(&path),
            Self::Create(kind) => {
                callbacks.invoke(kind);
            }
        }
    }
}

/// Actions waiting for the current UI update to finish
///
/// The palette closes synchronously; the action it returns is scheduled here
/// and performed on the next drain, each exactly once.
#[derive(Debug, Default)]
pub struct DeferredActions {
    queue: VecDeque<PaletteAction>,
}

impl DeferredActions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, action: PaletteAction) {
        self.queue.push_back(action);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Perform every scheduled action in order; returns how many ran
    pub fn run_pending(
        &mut self,
        navigator: &mut impl Navigator,
        callbacks: &mut CreateCallbacks,
    ) -> usize {
        let mut performed = 0;
        while let Some(action) = self.queue.pop_front() {
            action.perform(navigator, callbacks);
            performed += 1;
        }
        performed
    }
}
