//! Incremental construction of element trees.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::domain::element::Element;

/// Shared handle to a live element tree.
///
/// `RefCell` lets the holder of a handle mutate the tree after it has been
/// handed out by [`ElementBuilder::build`].
pub type ElementRef = Rc<RefCell<Element>>;

/// Assembles an [`Element`] tree under a fixed root name.
///
/// The root is only reachable through the builder's methods until it is
/// handed out with [`ElementBuilder::build`] or one of the conversions.
#[derive(Debug)]
pub struct ElementBuilder {
    root_name: String,
    root: ElementRef,
}

impl ElementBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        let root = Rc::new(RefCell::new(Element::named(root_name.clone())));
        Self { root_name, root }
    }

    /// Alias of [`ElementBuilder::new`].
    pub fn init(root_name: impl Into<String>) -> Self {
        Self::new(root_name)
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Number of children under the root.
    pub fn len(&self) -> usize {
        self.root.borrow().children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a leaf element to the root.
    #[instrument(level = "trace", skip(self, name, text))]
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let child = Element::new(name, text);
        debug!(root = %self.root_name, child = %child.name(), "add child");
        self.root.borrow_mut().add_child(child);
    }

    /// Appends a leaf element to the root and returns the builder for chaining.
    pub fn add_child_fluent(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.add_child(name, text);
        self
    }

    /// Appends a prebuilt, possibly nested, element to the root.
    #[instrument(level = "trace", skip(self, element), fields(child = %element.name()))]
    pub fn add_element(&mut self, element: Element) -> &mut Self {
        self.root.borrow_mut().add_child(element);
        self
    }

    /// Drops all accumulated children by starting a fresh root.
    ///
    /// Handles obtained from [`ElementBuilder::build`] before the call keep
    /// pointing at the old tree and are left untouched.
    #[instrument(level = "debug", skip(self), fields(root = %self.root_name))]
    pub fn clear(&mut self) {
        self.root = Rc::new(RefCell::new(Element::named(self.root_name.clone())));
    }

    /// Hands out the live root. No copy is made.
    pub fn build(&self) -> ElementRef {
        Rc::clone(&self.root)
    }

    /// Consumes the builder and returns the tree.
    ///
    /// The tree is cloned only when a handle from [`ElementBuilder::build`]
    /// is still alive.
    pub fn into_element(self) -> Element {
        Rc::try_unwrap(self.root)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| {
                let element = shared.borrow().clone();
                element
            })
    }

    /// Same as `build().borrow().render()`.
    pub fn render(&self) -> String {
        self.root.borrow().render()
    }
}

impl From<&ElementBuilder> for ElementRef {
    fn from(builder: &ElementBuilder) -> Self {
        builder.build()
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.into_element()
    }
}
