//! Un-nesting of the left-associated pairs an `and` chain produces.
//!
//! `combine(a).and(b).and(c)` yields `((a, b), c)`; passing [`flatten3`] to
//! `map` turns that into `(a, b, c)`.
//!
//! ```ignore
//! let signed = combine(sign()).and(digits()).and(fraction()).map(flatten3);
//! ```

#[inline]
pub fn flatten3<A, B, C>(((a, b), c): ((A, B), C)) -> (A, B, C) {
    (a, b, c)
}

#[inline]
pub fn flatten4<A, B, C, D>((((a, b), c), d): (((A, B), C), D)) -> (A, B, C, D) {
    (a, b, c, d)
}

#[inline]
pub fn flatten5<A, B, C, D, E>(
    ((((a, b), c), d), e): ((((A, B), C), D), E),
) -> (A, B, C, D, E) {
    (a, b, c, d, e)
}

#[inline]
pub fn flatten6<A, B, C, D, E, F>(
    (((((a, b), c), d), e), f): (((((A, B), C), D), E), F),
) -> (A, B, C, D, E, F) {
    (a, b, c, d, e, f)
}

#[inline]
pub fn flatten7<A, B, C, D, E, F, G>(
    ((((((a, b), c), d), e), f), g): ((((((A, B), C), D), E), F), G),
) -> (A, B, C, D, E, F, G) {
    (a, b, c, d, e, f, g)
}

#[inline]
pub fn flatten8<A, B, C, D, E, F, G, H>(
    (((((((a, b), c), d), e), f), g), h): (((((((A, B), C), D), E), F), G), H),
) -> (A, B, C, D, E, F, G, H) {
    (a, b, c, d, e, f, g, h)
}
