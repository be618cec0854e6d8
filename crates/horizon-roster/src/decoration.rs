//! Decoration configuration: header, footer, load-more trigger, and the
//! empty-state placeholders.
//!
//! [`DecorationState`] is a plain configuration holder. It owns the view
//! references for every optional decoration and knows which placeholder is
//! currently selected, but it performs no locking and emits no
//! notifications of its own; the adapter wraps it and decides which
//! configuration calls trigger a full re-render.
//!
//! Three placeholder views can be configured: a *default* view (nothing
//! loaded yet), an *empty* view (loaded, no content), and a *bad-state*
//! view (loading failed). Configuring any of them enables placeholder mode
//! and re-derives the active selection by fixed priority: default, then
//! empty, then bad-state. An explicit `show_*` call overrides the priority
//! until the next configuration call re-derives it.

use crate::slots::DecorationFlags;

/// Which of the three configurable placeholder views is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// The initial "nothing loaded yet" view.
    Default,
    /// The "loaded, but no content" view.
    Empty,
    /// The "failed to load" view.
    BadState,
}

/// Content rendered inside the load-more trigger slot.
///
/// Configuring trigger content never touches the independent enable flag
/// ([`DecorationState::set_has_more`]); a trigger can be enabled with stock
/// content, or configured long before it is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerContent<V> {
    /// No custom content; the surface renders its stock trigger.
    Stock,
    /// A caller-supplied view.
    View(V),
    /// A host resource identifier the surface inflates itself.
    Resource(u32),
}

impl<V> Default for TriggerContent<V> {
    fn default() -> Self {
        Self::Stock
    }
}

/// Configuration holder for every optional decoration.
///
/// `V` is the host toolkit's view handle type. The holder stores handles
/// verbatim and never interprets them; layout and inflation stay with the
/// rendering surface.
#[derive(Debug)]
pub struct DecorationState<V> {
    header: Option<V>,
    has_header: bool,
    footer: Option<V>,
    has_footer: bool,

    has_more: bool,
    trigger: TriggerContent<V>,

    default_view: Option<V>,
    empty_view: Option<V>,
    bad_state_view: Option<V>,
    placeholder_enabled: bool,
    suppress_header: bool,
    suppress_footer: bool,
    active_placeholder: Option<PlaceholderKind>,
}

impl<V> Default for DecorationState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DecorationState<V> {
    /// Creates a holder with no decorations configured.
    pub fn new() -> Self {
        Self {
            header: None,
            has_header: false,
            footer: None,
            has_footer: false,
            has_more: false,
            trigger: TriggerContent::Stock,
            default_view: None,
            empty_view: None,
            bad_state_view: None,
            placeholder_enabled: false,
            suppress_header: false,
            suppress_footer: false,
            active_placeholder: None,
        }
    }

    /// The current effective flag snapshot.
    pub fn flags(&self) -> DecorationFlags {
        DecorationFlags {
            has_header: self.has_header,
            has_footer: self.has_footer,
            has_more: self.has_more,
            placeholder_configured: self.placeholder_enabled,
            suppress_header_in_placeholder: self.suppress_header,
            suppress_footer_in_placeholder: self.suppress_footer,
        }
    }

    // -------------------------------------------------------------------
    // Header / footer
    // -------------------------------------------------------------------

    /// Configures the header view and marks the header present.
    pub fn set_header(&mut self, view: V) {
        self.header = Some(view);
        self.has_header = true;
    }

    /// Removes the header view and its presence flag.
    pub fn remove_header(&mut self) {
        self.header = None;
        self.has_header = false;
    }

    /// Configures the footer view and marks the footer present.
    pub fn set_footer(&mut self, view: V) {
        self.footer = Some(view);
        self.has_footer = true;
    }

    /// Removes the footer view and its presence flag.
    pub fn remove_footer(&mut self) {
        self.footer = None;
        self.has_footer = false;
    }

    /// Returns the configured header view, if any.
    pub fn header_view(&self) -> Option<&V> {
        self.header.as_ref()
    }

    /// Returns the configured footer view, if any.
    pub fn footer_view(&self) -> Option<&V> {
        self.footer.as_ref()
    }

    /// A header is currently present.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// A footer is currently present.
    pub fn has_footer(&self) -> bool {
        self.has_footer
    }

    // -------------------------------------------------------------------
    // Load-more trigger
    // -------------------------------------------------------------------

    /// Enables or disables the load-more trigger slot.
    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    /// The load-more trigger is enabled.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Replaces the trigger content with a caller-supplied view.
    pub fn set_trigger_view(&mut self, view: V) {
        self.trigger = TriggerContent::View(view);
    }

    /// Replaces the trigger content with a host resource identifier.
    pub fn set_trigger_resource(&mut self, resource: u32) {
        self.trigger = TriggerContent::Resource(resource);
    }

    /// Returns the configured trigger content.
    pub fn trigger(&self) -> &TriggerContent<V> {
        &self.trigger
    }

    // -------------------------------------------------------------------
    // Placeholders
    // -------------------------------------------------------------------

    /// Configures the default placeholder, suppressing header and footer
    /// while it is active.
    pub fn set_default_view(&mut self, view: V) {
        self.set_default_view_with(true, true, view);
    }

    /// Configures the default placeholder with explicit suppression flags.
    pub fn set_default_view_with(&mut self, suppress_header: bool, suppress_footer: bool, view: V) {
        self.default_view = Some(view);
        self.enable_placeholder(suppress_header, suppress_footer);
    }

    /// Configures the empty placeholder, suppressing header and footer
    /// while it is active.
    pub fn set_empty_view(&mut self, view: V) {
        self.set_empty_view_with(true, true, view);
    }

    /// Configures the empty placeholder with explicit suppression flags.
    pub fn set_empty_view_with(&mut self, suppress_header: bool, suppress_footer: bool, view: V) {
        self.empty_view = Some(view);
        self.enable_placeholder(suppress_header, suppress_footer);
    }

    /// Configures the bad-state placeholder, suppressing header and footer
    /// while it is active.
    pub fn set_bad_state_view(&mut self, view: V) {
        self.set_bad_state_view_with(true, true, view);
    }

    /// Configures the bad-state placeholder with explicit suppression
    /// flags.
    pub fn set_bad_state_view_with(
        &mut self,
        suppress_header: bool,
        suppress_footer: bool,
        view: V,
    ) {
        self.bad_state_view = Some(view);
        self.enable_placeholder(suppress_header, suppress_footer);
    }

    /// Selects the default placeholder explicitly.
    ///
    /// The selection sticks until the next `set_*_view*` call re-derives
    /// it. Showing a placeholder does not by itself enable placeholder
    /// mode; only configuration calls do.
    pub fn show_default_view(&mut self) {
        self.active_placeholder = Some(PlaceholderKind::Default);
    }

    /// Selects the empty placeholder explicitly.
    pub fn show_empty_view(&mut self) {
        self.active_placeholder = Some(PlaceholderKind::Empty);
    }

    /// Selects the bad-state placeholder explicitly.
    pub fn show_bad_state_view(&mut self) {
        self.active_placeholder = Some(PlaceholderKind::BadState);
    }

    /// The currently selected placeholder, if any.
    pub fn active_placeholder(&self) -> Option<PlaceholderKind> {
        self.active_placeholder
    }

    /// Resolves the selected placeholder to its configured view.
    ///
    /// Returns `None` when nothing is selected or the selected kind was
    /// never given a view (an explicit `show_*` for an unconfigured kind);
    /// the surface treats that as nothing to render.
    pub fn placeholder_view(&self) -> Option<&V> {
        match self.active_placeholder? {
            PlaceholderKind::Default => self.default_view.as_ref(),
            PlaceholderKind::Empty => self.empty_view.as_ref(),
            PlaceholderKind::BadState => self.bad_state_view.as_ref(),
        }
    }

    /// Returns the configured default placeholder view, if any.
    pub fn default_view(&self) -> Option<&V> {
        self.default_view.as_ref()
    }

    /// Returns the configured empty placeholder view, if any.
    pub fn empty_view(&self) -> Option<&V> {
        self.empty_view.as_ref()
    }

    /// Returns the configured bad-state placeholder view, if any.
    pub fn bad_state_view(&self) -> Option<&V> {
        self.bad_state_view.as_ref()
    }

    /// Shared tail of every placeholder configuration call: overwrite both
    /// suppression flags, enable placeholder mode, and re-derive the
    /// selection by priority (default, then empty, then bad-state).
    fn enable_placeholder(&mut self, suppress_header: bool, suppress_footer: bool) {
        self.suppress_header = suppress_header;
        self.suppress_footer = suppress_footer;
        self.placeholder_enabled = true;

        self.active_placeholder = if self.default_view.is_some() {
            Some(PlaceholderKind::Default)
        } else if self.empty_view.is_some() {
            Some(PlaceholderKind::Empty)
        } else if self.bad_state_view.is_some() {
            Some(PlaceholderKind::BadState)
        } else {
            None
        };
    }
}
