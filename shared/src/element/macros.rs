/// Declares a component: a struct whose fields are its children, in declaration order.
///
/// ```
/// use replica_shared::{component, Property};
///
/// component! {
///     pub struct StampComponent {
///         pub tick: Property<u32>,
///         pub time_us: Property<u32> = Property::new().elapsed(),
///     }
/// }
/// ```
///
/// A field initializer sets the declaration-time default, including property metadata.
#[macro_export]
macro_rules! component {
    (@init $ty:ty) => {
        <$ty as ::std::default::Default>::default()
    };
    (@init $ty:ty, $init:expr) => {
        $init
    };
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => {
        1usize + $crate::component!(@count $($tail)*)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty $(= $init:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::component!(@init $field_ty $(, $init)?), )*
                }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::equal_to(self, other)
            }
        }

        impl $crate::Element for $name {
            fn kind(&self) -> $crate::ElementRef<'_> {
                $crate::ElementRef::Component(self)
            }

            fn kind_mut(&mut self) -> $crate::ElementMut<'_> {
                $crate::ElementMut::Component(self)
            }

            fn box_clone(&self) -> ::std::boxed::Box<dyn $crate::Element> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }

        impl $crate::Component for $name {
            fn child_count(&self) -> usize {
                $crate::component!(@count $($field)*)
            }

            #[allow(unused_variables)]
            fn child(&self, index: usize) -> ::std::option::Option<&dyn $crate::Element> {
                let children: [&dyn $crate::Element; $crate::component!(@count $($field)*)] =
                    [$(&self.$field),*];
                children.get(index).copied()
            }

            #[allow(unused_variables)]
            fn child_mut(&mut self, index: usize) -> ::std::option::Option<&mut dyn $crate::Element> {
                let children: [&mut dyn $crate::Element; $crate::component!(@count $($field)*)] =
                    [$(&mut self.$field),*];
                children.into_iter().nth(index)
            }
        }
    };
}

/// Declares a named property type wrapping another property, so it gets its own identity in
/// containers and registries.
///
/// ```
/// use replica_shared::{property, Property};
///
/// property! {
///     pub struct HealthProperty(Property<u8>);
/// }
/// ```
#[macro_export]
macro_rules! property {
    (@init $ty:ty) => {
        <$ty as ::std::default::Default>::default()
    };
    (@init $ty:ty, $init:expr) => {
        $init
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($inner:ty) $(= $init:expr)?;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name(pub $inner);

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self($crate::property!(@init $inner $(, $init)?))
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $inner {
                &mut self.0
            }
        }

        impl $crate::Element for $name {
            fn kind(&self) -> $crate::ElementRef<'_> {
                $crate::ElementRef::Property(self)
            }

            fn kind_mut(&mut self) -> $crate::ElementMut<'_> {
                $crate::ElementMut::Property(self)
            }

            fn box_clone(&self) -> ::std::boxed::Box<dyn $crate::Element> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }

        impl $crate::PropertyBase for $name {
            fn has_value(&self) -> bool {
                $crate::PropertyBase::has_value(&self.0)
            }

            fn clear(&mut self) {
                $crate::PropertyBase::clear(&mut self.0)
            }

            fn zero(&mut self) {
                $crate::PropertyBase::zero(&mut self.0)
            }

            fn meta(&self) -> &$crate::PropertyMeta {
                $crate::PropertyBase::meta(&self.0)
            }

            fn write(&self, writer: &mut dyn $crate::ByteWrite) {
                $crate::PropertyBase::write(&self.0, writer)
            }

            fn read(&mut self, reader: &mut $crate::ByteReader) -> ::std::result::Result<(), $crate::SerdeErr> {
                $crate::PropertyBase::read(&mut self.0, reader)
            }

            fn value_equals(&self, other: &dyn $crate::PropertyBase) -> bool {
                $crate::Element::as_any(other)
                    .downcast_ref::<Self>()
                    .is_some_and(|other| $crate::PropertyBase::value_equals(&self.0, &other.0))
            }

            fn value_predicted(&self, other: &dyn $crate::PropertyBase) -> bool {
                $crate::Element::as_any(other)
                    .downcast_ref::<Self>()
                    .is_some_and(|other| $crate::PropertyBase::value_predicted(&self.0, &other.0))
            }

            fn copy_value_from(&mut self, other: &dyn $crate::PropertyBase) {
                match $crate::Element::as_any(other).downcast_ref::<Self>() {
                    Some(other) => $crate::PropertyBase::copy_value_from(&mut self.0, &other.0),
                    None => $crate::warn_mismatch($crate::Element::type_name(self), other),
                }
            }

            fn merge_value_from(&mut self, other: &dyn $crate::PropertyBase) {
                match $crate::Element::as_any(other).downcast_ref::<Self>() {
                    Some(other) => $crate::PropertyBase::merge_value_from(&mut self.0, &other.0),
                    None => $crate::warn_mismatch($crate::Element::type_name(self), other),
                }
            }

            fn interpolate_value(
                &mut self,
                from: &dyn $crate::PropertyBase,
                to: &dyn $crate::PropertyBase,
                t: f32,
            ) {
                match (
                    $crate::Element::as_any(from).downcast_ref::<Self>(),
                    $crate::Element::as_any(to).downcast_ref::<Self>(),
                ) {
                    (Some(from), Some(to)) => {
                        $crate::PropertyBase::interpolate_value(&mut self.0, &from.0, &to.0, t)
                    }
                    _ => $crate::warn_mismatch($crate::Element::type_name(self), to),
                }
            }

            fn fmt_value(&self, out: &mut dyn ::std::fmt::Write) -> ::std::fmt::Result {
                $crate::PropertyBase::fmt_value(&self.0, out)
            }
        }
    };
}

/// Declares a named container type whose children are chosen at runtime.
#[macro_export]
macro_rules! container {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name(pub $crate::Container);

        impl $name {
            /// # Panics
            ///
            /// Panics if `types` names the same element type twice.
            pub fn new(types: &[$crate::ElementType]) -> Self {
                Self($crate::Container::new(types))
            }

            pub fn try_new(
                types: &[$crate::ElementType],
            ) -> ::std::result::Result<Self, $crate::ElementError> {
                $crate::Container::try_new(types).map(Self)
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::Container;

            fn deref(&self) -> &$crate::Container {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $crate::Container {
                &mut self.0
            }
        }

        impl $crate::Element for $name {
            fn kind(&self) -> $crate::ElementRef<'_> {
                $crate::ElementRef::Component(&self.0)
            }

            fn kind_mut(&mut self) -> $crate::ElementMut<'_> {
                $crate::ElementMut::Component(&mut self.0)
            }

            fn box_clone(&self) -> ::std::boxed::Box<dyn $crate::Element> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Declares a named fixed-length array element type.
#[macro_export]
macro_rules! array_element {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident([$item:ty; $length:expr]);
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name(pub $crate::ArrayElement<$item>);

        impl $name {
            pub const LENGTH: usize = $length;
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self($crate::ArrayElement::new($length))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::equal_to(self, other)
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::ArrayElement<$item>;

            fn deref(&self) -> &$crate::ArrayElement<$item> {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $crate::ArrayElement<$item> {
                &mut self.0
            }
        }

        impl $crate::Element for $name {
            fn kind(&self) -> $crate::ElementRef<'_> {
                $crate::ElementRef::Array(&self.0)
            }

            fn kind_mut(&mut self) -> $crate::ElementMut<'_> {
                $crate::ElementMut::Array(&mut self.0)
            }

            fn box_clone(&self) -> ::std::boxed::Box<dyn $crate::Element> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}
