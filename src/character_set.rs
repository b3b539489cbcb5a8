//! Byte lookup tables for the heading scanner, anchor derivation and the
//! HTML escaper.

/// Builds a `[bool; 256]` table with every byte of the given literals set.
/// Usable in `const` and `static` items.
macro_rules! character_set {
    () => {{
        [false; 256]
    }};

    ($value:literal $(,$rest:literal)*) => {{
        const A: &[u8] = $value;
        let mut a = character_set!($($rest),*);
        let mut i = 0;
        while i < A.len() {
            a[A[i] as usize] = true;
            i += 1;
        }
        a
    }}
}

pub(crate) use character_set;

/// Membership test for a `char` against a byte table. Anything outside ASCII
/// is never a member.
#[inline]
pub(crate) fn contains(set: &[bool; 256], c: char) -> bool {
    c.is_ascii() && set[c as usize]
}
