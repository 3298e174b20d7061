// SPDX-License-Identifier: MPL-2.0
//! In-memory document tree.
//!
//! [`Document`] is an arena of element, text and raw-markup nodes implementing
//! [`DocumentAccess`]. Children replaced by `set_text_content` or
//! `set_inner_markup` are freed and their slots recycled, so an [`ElementId`]
//! taken from a replaced subtree must not be used afterwards. Elements moved
//! out with [`Document::remove`] stay allocated and can be re-appended.

use super::markup;
use crate::application::port::{DocumentAccess, ElementId, Listener};
use std::fmt;

const TITLE_TAG: &str = "title";
const HEAD_TAG: &str = "head";
const META_TAG: &str = "meta";

// =============================================================================
// Nodes
// =============================================================================

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Element(ElementData),
    Text(String),
    /// Markup kept verbatim (comments, unparsable fragments, unknown entities).
    Raw(String),
    /// A freed slot waiting for reuse.
    Vacant,
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<usize>,
}

impl ElementData {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }
}

#[derive(Debug)]
struct Slot {
    node: Node,
    parent: Option<usize>,
}

// =============================================================================
// Document
// =============================================================================

pub struct Document {
    slots: Vec<Slot>,
    root: usize,
    doctype: Option<String>,
    listeners: Vec<(ElementId, Listener)>,
    free: Vec<usize>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.slots.len())
            .field("root", &self.root)
            .field("doctype", &self.doctype)
            .field("listeners", &self.listeners.len())
            .field("free", &self.free.len())
            .finish()
    }
}

impl Document {
    /// Creates a document whose root is an empty `<html>` element.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("html")
    }

    #[must_use]
    pub fn with_root(tag: &str) -> Self {
        let mut document = Self {
            slots: Vec::new(),
            root: 0,
            doctype: None,
            listeners: Vec::new(),
            free: Vec::new(),
        };
        document.root = document.alloc(Node::Element(ElementData {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }));
        document
    }

    #[must_use]
    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    pub fn set_doctype(&mut self, doctype: Option<String>) {
        self.doctype = doctype;
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        ElementId::new(self.alloc(Node::Element(ElementData {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        })))
    }

    /// Creates an element and appends it to `parent`.
    pub fn append_element(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let element = self.create_element(tag);
        self.append_child(parent, element);
        element
    }

    /// Moves `child` (with its subtree) to the end of `parent`'s children.
    ///
    /// Appending an element to itself or into its own subtree is ignored.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.element(parent).is_none() || parent == child {
            return;
        }
        // Only an element with children can be an ancestor of `parent`.
        let has_children = self.element(child).is_some_and(|data| !data.children.is_empty());
        if has_children && self.is_within(parent.index(), child.index()) {
            return;
        }
        self.detach(child.index());
        self.link(parent.index(), child.index());
    }

    pub fn append_text(&mut self, parent: ElementId, text: &str) {
        if self.element(parent).is_some() {
            let node = self.alloc(Node::Text(text.to_string()));
            self.link(parent.index(), node);
        }
    }

    pub(crate) fn append_raw(&mut self, parent: ElementId, raw: &str) {
        if self.element(parent).is_some() {
            let node = self.alloc(Node::Raw(raw.to_string()));
            self.link(parent.index(), node);
        }
    }

    /// Detaches `element` from its parent. The root cannot be removed.
    pub fn remove(&mut self, element: ElementId) {
        if element.index() != self.root {
            self.detach(element.index());
        }
    }

    /// Returns `true` if `element` is the root or reachable from it.
    #[must_use]
    pub fn is_attached(&self, element: ElementId) -> bool {
        self.is_within(element.index(), self.root)
    }

    #[must_use]
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.element(element).map(|data| data.tag.as_str())
    }

    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.element(element)
            .is_some_and(|data| data.has_class(class))
    }

    /// Returns the concatenated text of `element`'s subtree, comments excluded.
    #[must_use]
    pub fn text_content(&self, element: ElementId) -> String {
        let mut text = String::new();
        self.collect_text(element.index(), &mut text);
        text
    }

    /// Serializes `element`'s children.
    #[must_use]
    pub fn inner_markup(&self, element: ElementId) -> String {
        markup::render_children(self, element)
    }

    /// Returns the text of the first `<title>` element.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.first_element_where(|data| data.is(TITLE_TAG))
            .map(|title| self.text_content(title))
    }

    /// Returns the child elements of `element`, in order.
    #[must_use]
    pub fn child_elements(&self, element: ElementId) -> Vec<ElementId> {
        self.element(element)
            .map(|data| {
                data.children
                    .iter()
                    .copied()
                    .filter(|child| matches!(self.node(*child), Some(Node::Element(_))))
                    .map(ElementId::new)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Runs every listener bound to `element` and returns how many ran.
    pub fn activate(&self, element: ElementId) -> usize {
        let mut fired = 0;
        for (target, listener) in &self.listeners {
            if *target == element {
                listener();
                fired += 1;
            }
        }
        fired
    }

    /// Number of allocated slots, live or vacant.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn node(&self, index: usize) -> Option<&Node> {
        self.slots.get(index).map(|slot| &slot.node)
    }

    /// Promotes a detached element to document root.
    pub(crate) fn set_root(&mut self, element: ElementId) {
        if self.element(element).is_some() {
            self.detach(element.index());
            self.root = element.index();
        }
    }

    fn element(&self, element: ElementId) -> Option<&ElementData> {
        match self.node(element.index()) {
            Some(Node::Element(data)) => Some(data),
            _ => None,
        }
    }

    fn element_mut(&mut self, element: ElementId) -> Option<&mut ElementData> {
        match self.slots.get_mut(element.index()).map(|slot| &mut slot.node) {
            Some(Node::Element(data)) => Some(data),
            _ => None,
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = Slot { node, parent: None };
                return index;
            }
        }
        self.slots.push(Slot { node, parent: None });
        self.slots.len() - 1
    }

    /// `true` when `index` is `ancestor` or lies below it.
    fn is_within(&self, index: usize, ancestor: usize) -> bool {
        let mut current = Some(index);
        while let Some(index) = current {
            if index == ancestor {
                return true;
            }
            current = self.slots.get(index).and_then(|slot| slot.parent);
        }
        false
    }

    fn link(&mut self, parent: usize, child: usize) {
        if let Some(Slot {
            node: Node::Element(data),
            ..
        }) = self.slots.get_mut(parent)
        {
            data.children.push(child);
        }
        if let Some(slot) = self.slots.get_mut(child) {
            slot.parent = Some(parent);
        }
    }

    fn detach(&mut self, index: usize) {
        let Some(parent) = self.slots.get_mut(index).and_then(|slot| slot.parent.take()) else {
            return;
        };
        if let Some(Slot {
            node: Node::Element(data),
            ..
        }) = self.slots.get_mut(parent)
        {
            data.children.retain(|child| *child != index);
        }
    }

    fn clear_children(&mut self, element: ElementId) {
        let children = self
            .element_mut(element)
            .map(|data| std::mem::take(&mut data.children))
            .unwrap_or_default();
        let mut freed = Vec::new();
        let mut stack = children;
        while let Some(index) = stack.pop() {
            let Some(slot) = self.slots.get_mut(index) else {
                continue;
            };
            if let Node::Element(data) = std::mem::replace(&mut slot.node, Node::Vacant) {
                stack.extend(data.children);
            }
            slot.parent = None;
            freed.push(index);
        }
        if !freed.is_empty() {
            self.listeners
                .retain(|(target, _)| !freed.contains(&target.index()));
            self.free.extend(freed);
        }
    }

    fn collect_text(&self, from: usize, out: &mut String) {
        let mut stack = vec![from];
        while let Some(index) = stack.pop() {
            match self.node(index) {
                Some(Node::Text(text)) => out.push_str(text),
                Some(Node::Raw(raw)) if !raw.starts_with("<!--") => out.push_str(raw),
                Some(Node::Element(data)) => stack.extend(data.children.iter().rev()),
                _ => {}
            }
        }
    }

    /// Attached elements under `from` (inclusive), in document order.
    fn elements_from(&self, from: usize) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack = vec![from];
        while let Some(index) = stack.pop() {
            if let Some(Node::Element(data)) = self.node(index) {
                found.push(ElementId::new(index));
                stack.extend(data.children.iter().rev());
            }
        }
        found
    }

    fn elements_where(&self, predicate: impl Fn(&ElementData) -> bool) -> Vec<ElementId> {
        self.elements_from(self.root)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(&predicate))
            .collect()
    }

    fn first_element_where(&self, predicate: impl Fn(&ElementData) -> bool) -> Option<ElementId> {
        self.elements_from(self.root)
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&predicate))
    }
}

impl DocumentAccess for Document {
    fn root(&self) -> ElementId {
        ElementId::new(self.root)
    }

    fn marked_elements(&self, attribute: &str) -> Vec<ElementId> {
        self.elements_where(|data| data.attribute(attribute).is_some())
    }

    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements_where(|data| data.has_class(class))
    }

    fn first_descendant_with_class(&self, ancestor: ElementId, class: &str) -> Option<ElementId> {
        self.elements_from(ancestor.index())
            .into_iter()
            .skip(1)
            .find(|id| self.has_class(*id, class))
    }

    fn meta_element(&self, name: &str) -> Option<ElementId> {
        self.first_element_where(|data| data.is(META_TAG) && data.attribute("name") == Some(name))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)
            .and_then(|data| data.attribute(name))
            .map(str::to_string)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(data) = self.element_mut(element) else {
            return;
        };
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn set_text_content(&mut self, element: ElementId, text: &str) {
        self.clear_children(element);
        if !text.is_empty() {
            self.append_text(element, text);
        }
    }

    fn set_inner_markup(&mut self, element: ElementId, markup: &str) {
        self.clear_children(element);
        if let Err(error) = markup::parse_fragment_into(self, element, markup) {
            tracing::debug!(%error, "keeping unparsable markup verbatim");
            self.clear_children(element);
            self.append_raw(element, markup);
        }
    }

    fn set_class_name(&mut self, element: ElementId, class_name: &str) {
        self.set_attribute(element, "class", class_name);
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        let Some(classes) = self.attribute(element, "class") else {
            return;
        };
        if !classes.split_whitespace().any(|c| c == class) {
            return;
        }
        let remaining: Vec<&str> = classes.split_whitespace().filter(|c| *c != class).collect();
        self.set_attribute(element, "class", &remaining.join(" "));
    }

    fn set_title(&mut self, title: &str) {
        let element = match self.first_element_where(|data| data.is(TITLE_TAG)) {
            Some(element) => element,
            None => {
                let parent = self
                    .first_element_where(|data| data.is(HEAD_TAG))
                    .unwrap_or(ElementId::new(self.root));
                self.append_element(parent, TITLE_TAG)
            }
        };
        self.set_text_content(element, title);
    }

    fn on_activate(&mut self, element: ElementId, listener: Listener) {
        self.listeners.push((element, listener));
    }
}
