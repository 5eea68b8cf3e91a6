//! Navigation chrome state: active section, mobile drawer, header style.
//!
//! DESIGN
//! ======
//! All decisions are made from plain numbers (section tops, scroll offset,
//! viewport width) so the state machine runs without a document. Every
//! transition reports whether anything changed; the browser glue writes to
//! the DOM only when it did.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavConfig;

/// One navigable content region, addressed by element id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// In-page anchor for this section.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    /// The hamburger control was clicked.
    Toggle,
    /// A click landed outside the navigation.
    OutsideClick,
    Escape,
    /// A navigation link was followed.
    LinkClicked,
    Resized { width: f64 },
}

/// Scroll position plus the geometry needed to detect the page bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            offset,
            viewport_height: 0.0,
            document_height: f64::INFINITY,
        }
    }

    fn at_bottom(&self) -> bool {
        self.document_height.is_finite()
            && self.document_height > self.viewport_height
            && self.offset + self.viewport_height >= self.document_height - 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Changes produced by one scroll evaluation; `None` fields did not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub active: Option<ActiveChange>,
    pub scrolled: Option<bool>,
    pub back_to_top: Option<bool>,
}

impl ScrollUpdate {
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.scrolled.is_none() && self.back_to_top.is_none()
    }
}

/// Index of the last section whose top sits at or above `offset + header_offset`.
pub fn active_index(section_tops: &[f64], offset: f64, header_offset: f64) -> Option<usize> {
    let line = offset + header_offset;
    section_tops.iter().rposition(|top| *top <= line)
}

#[derive(Clone, Debug)]
pub struct NavState {
    sections: Vec<Section>,
    active: Option<usize>,
    drawer: DrawerState,
    scrolled: bool,
    back_to_top: bool,
    config: NavConfig,
}

impl NavState {
    pub fn new(sections: Vec<Section>, config: NavConfig) -> Self {
        Self {
            sections,
            active: None,
            drawer: DrawerState::Closed,
            scrolled: false,
            back_to_top: false,
            config,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> Option<&Section> {
        self.active.and_then(|i| self.sections.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|s| s.id == id)
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer == DrawerState::Open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.back_to_top
    }

    /// Re-evaluate header state and the active section.
    ///
    /// `section_tops` are document-relative tops in section order; a missing
    /// element is reported as `f64::INFINITY` so it never becomes active.
    pub fn update_scroll(&mut self, section_tops: &[f64], metrics: ScrollMetrics) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();

        let mut next = active_index(section_tops, metrics.offset, self.config.header_offset);
        if metrics.at_bottom() {
            if let Some(last) = section_tops.iter().rposition(|top| top.is_finite()) {
                next = Some(last);
            }
        }
        if next != self.active {
            update.active = Some(ActiveChange {
                previous: self.active,
                current: next,
            });
            self.active = next;
        }

        let scrolled = metrics.offset > self.config.scrolled_threshold;
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            update.scrolled = Some(scrolled);
        }

        let back_to_top = metrics.offset > self.config.back_to_top_threshold;
        if back_to_top != self.back_to_top {
            self.back_to_top = back_to_top;
            update.back_to_top = Some(back_to_top);
        }

        update
    }

    /// Apply a drawer event. Returns `true` when the drawer state changed.
    pub fn handle_drawer(&mut self, event: DrawerEvent) -> bool {
        let next = match (self.drawer, event) {
            (DrawerState::Open, DrawerEvent::Toggle) => DrawerState::Closed,
            (DrawerState::Closed, DrawerEvent::Toggle) => DrawerState::Open,
            (DrawerState::Open, DrawerEvent::Resized { width }) if width < self.config.drawer_breakpoint => {
                DrawerState::Open
            }
            (
                DrawerState::Open,
                DrawerEvent::OutsideClick
                | DrawerEvent::Escape
                | DrawerEvent::LinkClicked
                | DrawerEvent::Resized { .. },
            ) => DrawerState::Closed,
            (DrawerState::Closed, _) => DrawerState::Closed,
        };
        let changed = next != self.drawer;
        self.drawer = next;
        changed
    }

    /// Scroll offset that lands `section_top` just below the fixed header.
    pub fn scroll_target(&self, section_top: f64) -> f64 {
        (section_top - self.config.header_offset).max(0.0)
    }
}
