use super::Element;

/// An element with an ordered, fixed set of children: generated components and containers.
pub trait Component: Element {
    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<&dyn Element>;
    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Element>;

    /// Blends `from` and `to` into `self` with custom semantics.
    ///
    /// Returns false to fall back to leaf-wise interpolation of the children. When it returns
    /// true the children are not visited.
    fn custom_interpolate(&mut self, from: &dyn Component, to: &dyn Component, t: f32) -> bool {
        let _ = (from, to, t);
        false
    }
}

/// An element holding a fixed-length run of same-typed children
pub trait ArrayBase: Element {
    fn length(&self) -> usize;
    fn slot(&self, index: usize) -> Option<&dyn Element>;
    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Element>;
}
