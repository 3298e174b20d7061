// SPDX-License-Identifier: MPL-2.0
//! Document access port definition.
//!
//! This module defines the [`DocumentAccess`] trait: the capability surface the
//! engine needs from a rendered document. Implementations decide how elements
//! are stored; the engine only ever sees [`ElementId`] handles.
//!
//! # Contract
//!
//! - Queries run against the document's *current* tree. Elements detached
//!   since the last query must not be returned.
//! - Query results are in document (pre-order) order.
//! - Writes to a handle that no longer refers to an attached element are
//!   allowed and may be ignored.

// =============================================================================
// ElementId
// =============================================================================

/// Opaque handle to an element of a [`DocumentAccess`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Callback run when a bound element is activated (clicked, pressed).
pub type Listener = Box<dyn Fn() + Send>;

// =============================================================================
// DocumentAccess Trait
// =============================================================================

/// Port for querying and mutating a rendered document.
///
/// # Example
///
/// ```ignore
/// use nalam_i18n::application::port::DocumentAccess;
///
/// fn label_images(document: &mut impl DocumentAccess, alt: &str) {
///     for image in document.marked_elements("data-i18n-alt") {
///         document.set_attribute(image, "alt", alt);
///     }
/// }
/// ```
pub trait DocumentAccess {
    /// Returns the document root (the `<html>` element).
    fn root(&self) -> ElementId;

    /// Returns every element carrying `attribute`, whatever its value.
    fn marked_elements(&self, attribute: &str) -> Vec<ElementId>;

    /// Returns every element whose class list contains `class`.
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// Returns the first descendant of `ancestor` (excluding itself) whose
    /// class list contains `class`.
    fn first_descendant_with_class(&self, ancestor: ElementId, class: &str) -> Option<ElementId>;

    /// Returns the first `<meta>` element whose `name` attribute equals `name`.
    fn meta_element(&self, name: &str) -> Option<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    /// Replaces all children of `element` with a single text node.
    fn set_text_content(&mut self, element: ElementId, text: &str);

    /// Replaces all children of `element` with the given markup, unsanitized.
    fn set_inner_markup(&mut self, element: ElementId, markup: &str);

    /// Sets the whole `class` attribute.
    fn set_class_name(&mut self, element: ElementId, class_name: &str);

    /// Removes one class from the class list. Removing an absent class is a no-op.
    fn remove_class(&mut self, element: ElementId, class: &str);

    fn set_title(&mut self, title: &str);

    /// Registers `listener` to run whenever `element` is activated.
    fn on_activate(&mut self, element: ElementId, listener: Listener);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_round_trips_index() {
        let id = ElementId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id, ElementId::new(42));
    }
}
