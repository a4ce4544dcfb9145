use crate::{Element, ElementMut, ElementRef};

use super::navigate::{navigate_zipped3_mut, Navigation};

/// Blends `from` and `to` into `destination`, `t = 0` being `from` and `t = 1` being `to`.
///
/// Leaves follow their declared [`Interpolation`](crate::Interpolation). Components with a
/// custom routine handle their whole subtree.
pub fn interpolate_into(
    from: &dyn Element,
    to: &dyn Element,
    destination: &mut dyn Element,
    t: f32,
) {
    navigate_zipped3_mut(destination, from, to, &mut |destination, from, to| {
        match (destination.kind_mut(), from.kind(), to.kind()) {
            (ElementMut::Property(destination), ElementRef::Property(from), ElementRef::Property(to)) => {
                destination.interpolate_value(from, to, t);
                Navigation::Continue
            }
            (
                ElementMut::Component(destination),
                ElementRef::Component(from),
                ElementRef::Component(to),
            ) => {
                if destination.custom_interpolate(from, to, t) {
                    Navigation::SkipDescendants
                } else {
                    Navigation::Continue
                }
            }
            _ => Navigation::Continue,
        }
    });
}
