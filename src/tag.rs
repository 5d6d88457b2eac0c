//! Member tags.
//!
//! Tags identify the members of a [`Sum`]. Members with distinct tags are ordered
//! **alphabetically** by tag: strings are compared lexicographically by their UTF-8 bytes, which
//! is the same as comparing Unicode scalar values. This differs from `#[derive(PartialOrd, Ord)]`,
//! which orders variants by declaration.
//!
//! [`Sum`]: crate::Sum

use alloc::string::{String, ToString};
use core::cmp::Ordering;
#[cfg(not(feature = "std"))]
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use thiserror::Error;

use crate::Sum;

/// A tag that is not a member of the closed set of tags of a [`Sum`].
///
/// [`Sum`]: crate::Sum
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("`{tag}` is not a member tag of `{sum}`"))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownTagError {
    pub tag: String,
    pub sum: &'static str,
}

#[cfg(not(feature = "std"))]
impl Display for UnknownTagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a member tag of `{}`", self.tag, self.sum)
    }
}

/// Compares the tags of two members.
pub fn cmp_tags(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Strips the `r#` prefix from a raw identifier.
///
/// The tag of a variant declared as `r#match` is `match`.
#[doc(hidden)]
pub const fn unraw(ident: &'static str) -> &'static str {
    match ident.as_bytes() {
        [b'r', b'#', rest @ ..] => match core::str::from_utf8(rest) {
            Ok(rest) => rest,
            Err(_) => ident,
        },
        _ => ident,
    }
}

/// Returns `true` if `tag` names a member of `S`.
pub fn is_member<S>(tag: &str) -> bool
where
    S: Sum,
{
    S::TAGS.contains(&tag)
}

/// Verifies that the tag of `value` is in [`Sum::TAGS`].
///
/// [`Sum::TAGS`]: crate::Sum::TAGS
pub fn check<S>(value: &S) -> Result<(), UnknownTagError>
where
    S: Sum,
{
    let tag = value.tag();
    if is_member::<S>(tag) {
        Ok(())
    }
    else {
        #[cfg(feature = "log")]
        log::debug!(
            "rejected tag `{}` of `{}`; expected one of {:?}",
            tag,
            core::any::type_name::<S>(),
            S::TAGS,
        );
        Err(UnknownTagError {
            tag: tag.to_string(),
            sum: core::any::type_name::<S>(),
        })
    }
}
