//! Minimal presentation surface over the live document.
//!
//! DESIGN
//! ======
//! Stateful controllers (theme, navigation chrome, reveal) write presentation
//! state through [`PresentationSurface`] instead of touching `web_sys`
//! directly. The browser implementation is [`DomSurface`]; [`MemorySurface`]
//! records writes so controllers are testable without a rendering
//! environment.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Element addressed by a surface operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target<'a> {
    /// The document root (`<html>`).
    Root,
    /// The document `<body>`.
    Body,
    /// The first element matching a CSS selector.
    Selector(&'a str),
}

impl Target<'_> {
    fn key(&self) -> String {
        match self {
            Self::Root => ":root".to_owned(),
            Self::Body => "body".to_owned(),
            Self::Selector(sel) => (*sel).to_owned(),
        }
    }
}

/// Attribute and class access on document elements.
///
/// Writes return `false` when the target element does not exist.
pub trait PresentationSurface {
    fn attribute(&self, target: Target<'_>, name: &str) -> Option<String>;
    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str) -> bool;
    fn add_class(&self, target: Target<'_>, class: &str) -> bool;
    fn remove_class(&self, target: Target<'_>, class: &str) -> bool;
    fn has_class(&self, target: Target<'_>, class: &str) -> bool;
    /// One inline style property; other inline declarations are untouched.
    fn style_property(&self, target: Target<'_>, property: &str) -> Option<String>;
    fn set_style_property(&self, target: Target<'_>, property: &str, value: &str) -> bool;
    /// Whether the target element exists.
    fn exists(&self, target: Target<'_>) -> bool;

    /// Add or remove `class` depending on `on`.
    fn toggle_class(&self, target: Target<'_>, class: &str, on: bool) -> bool {
        if on {
            self.add_class(target, class)
        } else {
            self.remove_class(target, class)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MemoryNode {
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// In-memory document: root and body always exist, selectors only once
/// registered with [`MemorySurface::with_element`].
#[derive(Debug)]
pub struct MemorySurface {
    nodes: RefCell<HashMap<String, MemoryNode>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(Target::Root.key(), MemoryNode::default());
        nodes.insert(Target::Body.key(), MemoryNode::default());
        Self {
            nodes: RefCell::new(nodes),
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element reachable through `selector`.
    #[must_use]
    pub fn with_element(self, selector: &str) -> Self {
        self.nodes
            .borrow_mut()
            .insert(selector.to_owned(), MemoryNode::default());
        self
    }

    /// Sorted class list of the target, empty when missing.
    pub fn classes(&self, target: Target<'_>) -> Vec<String> {
        self.nodes
            .borrow()
            .get(&target.key())
            .map(|node| node.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn with_node<R>(&self, target: Target<'_>, f: impl FnOnce(&mut MemoryNode) -> R) -> Option<R> {
        self.nodes.borrow_mut().get_mut(&target.key()).map(f)
    }
}

impl PresentationSurface for MemorySurface {
    fn attribute(&self, target: Target<'_>, name: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(&target.key())
            .and_then(|node| node.attributes.get(name).cloned())
    }

    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str) -> bool {
        self.with_node(target, |node| {
            node.attributes.insert(name.to_owned(), value.to_owned());
        })
        .is_some()
    }

    fn add_class(&self, target: Target<'_>, class: &str) -> bool {
        self.with_node(target, |node| {
            node.classes.insert(class.to_owned());
        })
        .is_some()
    }

    fn remove_class(&self, target: Target<'_>, class: &str) -> bool {
        self.with_node(target, |node| {
            node.classes.remove(class);
        })
        .is_some()
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(&target.key())
            .is_some_and(|node| node.classes.contains(class))
    }

    fn style_property(&self, target: Target<'_>, property: &str) -> Option<String> {
        self.nodes
            .borrow()
            .get(&target.key())
            .and_then(|node| node.styles.get(property).cloned())
    }

    fn set_style_property(&self, target: Target<'_>, property: &str, value: &str) -> bool {
        self.with_node(target, |node| {
            node.styles.insert(property.to_owned(), value.to_owned());
        })
        .is_some()
    }

    fn exists(&self, target: Target<'_>) -> bool {
        self.nodes.borrow().contains_key(&target.key())
    }
}

/// The live browser document. Without `csr` every element is missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
fn resolve(target: Target<'_>) -> Option<web_sys::Element> {
    let document = web_sys::window()?.document()?;
    match target {
        Target::Root => document.document_element(),
        Target::Body => document.body().map(Into::into),
        Target::Selector(sel) => document.query_selector(sel).unwrap_or_default(),
    }
}

impl PresentationSurface for DomSurface {
    fn attribute(&self, target: Target<'_>, name: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            resolve(target)?.get_attribute(name)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, name);
            None
        }
    }

    fn set_attribute(&self, target: Target<'_>, name: &str, value: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some_and(|el| el.set_attribute(name, value).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, name, value);
            false
        }
    }

    fn add_class(&self, target: Target<'_>, class: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some_and(|el| el.class_list().add_1(class).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, class);
            false
        }
    }

    fn remove_class(&self, target: Target<'_>, class: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some_and(|el| el.class_list().remove_1(class).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, class);
            false
        }
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some_and(|el| el.class_list().contains(class))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, class);
            false
        }
    }

    fn style_property(&self, target: Target<'_>, property: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let el = resolve(target)?;
            let value = el.dyn_ref::<web_sys::HtmlElement>()?.style().get_property_value(property).ok()?;
            (!value.is_empty()).then_some(value)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, property);
            None
        }
    }

    fn set_style_property(&self, target: Target<'_>, property: &str, value: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some_and(|el| {
                el.dyn_ref::<web_sys::HtmlElement>()
                    .is_some_and(|html| html.style().set_property(property, value).is_ok())
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, property, value);
            false
        }
    }

    fn exists(&self, target: Target<'_>) -> bool {
        #[cfg(feature = "csr")]
        {
            resolve(target).is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
            false
        }
    }
}
