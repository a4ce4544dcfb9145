use log::debug;

use crate::{Element, ElementMut, ElementRef};

/// What a visitor wants to happen after visiting a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Continue,
    SkipDescendants,
    Exit,
}

/// Depth-first, pre-order walk over an element and all of its descendants
pub fn navigate(element: &dyn Element, visit: &mut dyn FnMut(&dyn Element) -> Navigation) {
    walk(element, visit);
}

pub fn navigate_mut(
    element: &mut dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element) -> Navigation,
) {
    walk_mut(element, visit);
}

/// Walks two trees in lockstep.
///
/// At each node only the leading children whose types agree on both sides are visited; the
/// walk truncates at the first mismatch.
pub fn navigate_zipped(
    a: &dyn Element,
    b: &dyn Element,
    visit: &mut dyn FnMut(&dyn Element, &dyn Element) -> Navigation,
) {
    walk_zipped(a, b, visit);
}

pub fn navigate_zipped_mut(
    destination: &mut dyn Element,
    source: &dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element, &dyn Element) -> Navigation,
) {
    walk_zipped_mut(destination, source, visit);
}

pub fn navigate_zipped3_mut(
    destination: &mut dyn Element,
    a: &dyn Element,
    b: &dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element, &dyn Element, &dyn Element) -> Navigation,
) {
    walk_zipped3_mut(destination, a, b, visit);
}

pub(crate) fn child_count(kind: ElementRef<'_>) -> usize {
    match kind {
        ElementRef::Component(component) => component.child_count(),
        ElementRef::Array(array) => array.length(),
        ElementRef::Property(_) => 0,
    }
}

fn child_of(kind: ElementRef<'_>, index: usize) -> Option<&dyn Element> {
    match kind {
        ElementRef::Component(component) => component.child(index),
        ElementRef::Array(array) => array.slot(index),
        ElementRef::Property(_) => None,
    }
}

fn same_shape(a: ElementRef<'_>, b: ElementRef<'_>) -> bool {
    matches!(
        (a, b),
        (ElementRef::Component(_), ElementRef::Component(_))
            | (ElementRef::Array(_), ElementRef::Array(_))
            | (ElementRef::Property(_), ElementRef::Property(_))
    )
}

pub(crate) fn zipped_count(a: ElementRef<'_>, b: ElementRef<'_>) -> usize {
    if !same_shape(a, b) {
        debug!("zipped navigation across elements of different shape, skipping children");
        return 0;
    }
    let count = child_count(a).min(child_count(b));
    (0..count)
        .take_while(|index| match (child_of(a, *index), child_of(b, *index)) {
            (Some(x), Some(y)) => x.element_type_id() == y.element_type_id(),
            _ => false,
        })
        .count()
}

fn for_each_child_mut(
    element: &mut dyn Element,
    count: usize,
    mut visit: impl FnMut(usize, &mut dyn Element) -> bool,
) -> bool {
    match element.kind_mut() {
        ElementMut::Component(component) => {
            for index in 0..count {
                if let Some(child) = component.child_mut(index) {
                    if visit(index, child) {
                        return true;
                    }
                }
            }
        }
        ElementMut::Array(array) => {
            for index in 0..count {
                if let Some(child) = array.slot_mut(index) {
                    if visit(index, child) {
                        return true;
                    }
                }
            }
        }
        ElementMut::Property(_) => {}
    }
    false
}

// Each walker returns true when the visitor asked to exit.

fn walk(element: &dyn Element, visit: &mut dyn FnMut(&dyn Element) -> Navigation) -> bool {
    match visit(element) {
        Navigation::Exit => return true,
        Navigation::SkipDescendants => return false,
        Navigation::Continue => {}
    }
    let kind = element.kind();
    for index in 0..child_count(kind) {
        if let Some(child) = child_of(kind, index) {
            if walk(child, visit) {
                return true;
            }
        }
    }
    false
}

fn walk_mut(
    element: &mut dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element) -> Navigation,
) -> bool {
    match visit(&mut *element) {
        Navigation::Exit => return true,
        Navigation::SkipDescendants => return false,
        Navigation::Continue => {}
    }
    let count = child_count(element.kind());
    for_each_child_mut(element, count, |_, child| walk_mut(child, visit))
}

fn walk_zipped(
    a: &dyn Element,
    b: &dyn Element,
    visit: &mut dyn FnMut(&dyn Element, &dyn Element) -> Navigation,
) -> bool {
    match visit(a, b) {
        Navigation::Exit => return true,
        Navigation::SkipDescendants => return false,
        Navigation::Continue => {}
    }
    let (kind_a, kind_b) = (a.kind(), b.kind());
    for index in 0..zipped_count(kind_a, kind_b) {
        if let (Some(x), Some(y)) = (child_of(kind_a, index), child_of(kind_b, index)) {
            if walk_zipped(x, y, visit) {
                return true;
            }
        }
    }
    false
}

fn walk_zipped_mut(
    destination: &mut dyn Element,
    source: &dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element, &dyn Element) -> Navigation,
) -> bool {
    match visit(&mut *destination, source) {
        Navigation::Exit => return true,
        Navigation::SkipDescendants => return false,
        Navigation::Continue => {}
    }
    let source_kind = source.kind();
    let count = zipped_count(destination.kind(), source_kind);
    for_each_child_mut(destination, count, |index, child| {
        match child_of(source_kind, index) {
            Some(source_child) => walk_zipped_mut(child, source_child, visit),
            None => false,
        }
    })
}

fn walk_zipped3_mut(
    destination: &mut dyn Element,
    a: &dyn Element,
    b: &dyn Element,
    visit: &mut dyn FnMut(&mut dyn Element, &dyn Element, &dyn Element) -> Navigation,
) -> bool {
    match visit(&mut *destination, a, b) {
        Navigation::Exit => return true,
        Navigation::SkipDescendants => return false,
        Navigation::Continue => {}
    }
    let (kind_a, kind_b) = (a.kind(), b.kind());
    let count = zipped_count(destination.kind(), kind_a).min(zipped_count(kind_a, kind_b));
    for_each_child_mut(destination, count, |index, child| {
        match (child_of(kind_a, index), child_of(kind_b, index)) {
            (Some(x), Some(y)) => walk_zipped3_mut(child, x, y, visit),
            _ => false,
        }
    })
}
