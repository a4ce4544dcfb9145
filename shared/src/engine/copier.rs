use crate::{Element, ElementMut, ElementRef};

use super::navigate::{
    child_count, navigate_mut, navigate_zipped, navigate_zipped_mut, zipped_count, Navigation,
};

/// Makes `destination` equal to `source` in every shared field, absent values included
pub fn copy_to(source: &dyn Element, destination: &mut dyn Element) {
    navigate_zipped_mut(destination, source, &mut |destination, source| {
        if let (ElementMut::Property(destination), ElementRef::Property(source)) =
            (destination.kind_mut(), source.kind())
        {
            destination.copy_value_from(source);
        }
        Navigation::Continue
    });
}

/// Like [`copy_to`], but a property is only overwritten when the source has a value
pub fn merge_to(source: &dyn Element, destination: &mut dyn Element) {
    navigate_zipped_mut(destination, source, &mut |destination, source| {
        if let (ElementMut::Property(destination), ElementRef::Property(source)) =
            (destination.kind_mut(), source.kind())
        {
            destination.merge_value_from(source);
        }
        Navigation::Continue
    });
}

/// Structural equality: same types and shape, and every leaf equal under its own rule
pub fn equal_to(a: &dyn Element, b: &dyn Element) -> bool {
    compare(a, b, |a, b| a.value_equals(b))
}

/// Equality under prediction tolerances, used to check a predicted state against the server
pub fn predicted_equal_to(predicted: &dyn Element, verified: &dyn Element) -> bool {
    compare(predicted, verified, |a, b| a.value_predicted(b))
}

fn compare(
    a: &dyn Element,
    b: &dyn Element,
    leaf_equals: impl Fn(&dyn crate::PropertyBase, &dyn crate::PropertyBase) -> bool,
) -> bool {
    let mut equal = true;
    navigate_zipped(a, b, &mut |a, b| {
        let count = child_count(a.kind());
        // the zipped walk stops at the first child whose types differ
        if a.element_type_id() != b.element_type_id()
            || count != child_count(b.kind())
            || count != zipped_count(a.kind(), b.kind())
        {
            equal = false;
            return Navigation::Exit;
        }
        if let (ElementRef::Property(a), ElementRef::Property(b)) = (a.kind(), b.kind()) {
            if !leaf_equals(a, b) {
                equal = false;
                return Navigation::Exit;
            }
        }
        Navigation::Continue
    });
    equal
}

/// Clears every property in the tree
pub fn reset(element: &mut dyn Element) {
    navigate_mut(element, &mut |element| {
        if let ElementMut::Property(property) = element.kind_mut() {
            property.clear();
        }
        Navigation::Continue
    });
}

/// Sets every property in the tree to its type's zero value
pub fn zero(element: &mut dyn Element) {
    navigate_mut(element, &mut |element| {
        if let ElementMut::Property(property) = element.kind_mut() {
            property.zero();
        }
        Navigation::Continue
    });
}

/// Allocates an independent deep copy
pub fn clone_element(element: &dyn Element) -> Box<dyn Element> {
    element.box_clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component, element_types, property, ArrayElement, Container, Property};

    component! {
        struct Sample {
            health: Property<u8>,
            speed: Property<f32>,
            scores: ArrayElement<Property<u16>> = ArrayElement::new(3),
        }
    }

    #[test]
    fn copy_includes_absent() {
        let mut source = Sample::default();
        source.health.set(5);
        let mut destination = Sample::default();
        destination.speed.set(2.0);

        copy_to(&source, &mut destination);

        assert_eq!(destination.health.get(), Some(&5));
        assert!(!destination.speed.has_value());
        assert!(equal_to(&source, &destination));
    }

    #[test]
    fn merge_is_selective() {
        let mut source = Sample::default();
        source.health.set(9);
        let mut destination = Sample::default();
        destination.health.set(1);
        destination.speed.set(4.0);

        merge_to(&source, &mut destination);

        assert_eq!(destination.health.get(), Some(&9));
        assert_eq!(destination.speed.get(), Some(&4.0));
    }

    #[test]
    fn arrays_are_compared_slot_by_slot() {
        let mut a = Sample::default();
        let b = Sample::default();
        assert!(equal_to(&a, &b));

        a.scores[2].set(1);
        assert!(!equal_to(&a, &b));
    }

    #[test]
    fn different_lengths_are_unequal() {
        let a = ArrayElement::<Property<u8>>::new(2);
        let b = ArrayElement::<Property<u8>>::new(3);

        assert!(!equal_to(&a, &b));
    }

    property! {
        struct Health(Property<u8>);
    }

    property! {
        struct Armor(Property<u16>);
    }

    property! {
        struct Speed(Property<f32>);
    }

    #[test]
    fn containers_with_diverging_schemas_are_unequal() {
        let mut a = Container::new(&element_types![Health, Armor]);
        a.require_mut::<Health>().set(1);
        a.require_mut::<Armor>().set(500);
        let mut b = Container::new(&element_types![Health, Speed]);
        b.require_mut::<Health>().set(1);
        b.require_mut::<Speed>().set(9.0);

        assert!(!equal_to(&a, &b));
        assert!(!predicted_equal_to(&a, &b));
    }

    #[test]
    fn zero_then_reset() {
        let mut sample = Sample::default();

        zero(&mut sample);
        assert_eq!(sample.scores[1].get(), Some(&0));

        reset(&mut sample);
        assert!(!sample.health.has_value());
    }

    #[test]
    fn cloned_is_independent() {
        let mut original = Sample::default();
        original.health.set(3);

        let mut cloned = clone_element(&original);
        let cloned_sample = cloned.downcast_mut::<Sample>().unwrap();
        assert!(equal_to(&original, cloned_sample));

        cloned_sample.health.set(4);
        assert_eq!(original.health.get(), Some(&3));
    }
}
