use crate::{Element, ElementRef};

use super::navigate::{navigate, Navigation};

/// Comma-separated values of every property in the tree, `None` for absent ones
pub fn stringify(element: &dyn Element) -> String {
    let mut out = String::new();
    let mut first = true;
    navigate(element, &mut |element| {
        if let ElementRef::Property(property) = element.kind() {
            if !first {
                out.push_str(", ");
            }
            first = false;
            // writing into a String cannot fail
            let _ = property.fmt_value(&mut out);
        }
        Navigation::Continue
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component, Property};

    component! {
        struct Row {
            a: Property<u8>,
            b: Property<f32>,
        }
    }

    #[test]
    fn lists_values() {
        let mut row = Row::default();
        row.a.set(3);

        assert_eq!(stringify(&row), "3, None");
    }
}
