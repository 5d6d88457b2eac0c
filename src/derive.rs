use alloc::format;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};

use crate::cmp::{Equivalence, Order};
use crate::kind::{EqKind, Kind, OrdKind, ShowKind};
use crate::show::Show;
use crate::tag::{self, UnknownTagError};
use crate::{Sum, VisitMember, VisitMembers};

struct Equals;

impl VisitMembers<EqKind> for Equals {
    type Output = bool;

    fn visit<T>(self, instance: &<EqKind as Kind>::Instance<T>, left: &T, right: &T) -> bool {
        instance.equals(left, right)
    }
}

struct Compare;

impl VisitMembers<OrdKind> for Compare {
    type Output = Ordering;

    fn visit<T>(self, instance: &<OrdKind as Kind>::Instance<T>, left: &T, right: &T) -> Ordering {
        instance.compare(left, right)
    }
}

struct Render;

impl VisitMember<ShowKind> for Render {
    type Output = String;

    fn visit<T>(self, instance: &<ShowKind as Kind>::Instance<T>, payload: &T) -> String {
        instance.show(payload)
    }
}

fn check_both<S>(a: &S, b: &S) -> Result<(), UnknownTagError>
where
    S: Sum,
{
    tag::check(a)?;
    tag::check(b)
}

/// [`Equivalence`] derived for a [`Sum`].
///
/// See [`derive_eq`].
///
/// [`Equivalence`]: crate::cmp::Equivalence
/// [`Sum`]: crate::Sum
pub struct SumEq<S>
where
    S: Sum,
{
    members: S::Members<EqKind>,
}

impl<S> SumEq<S>
where
    S: Sum,
{
    /// Like [`Equivalence::equals`], but fails if either tag is not in [`Sum::TAGS`].
    ///
    /// [`Equivalence::equals`]: crate::cmp::Equivalence::equals
    /// [`Sum::TAGS`]: crate::Sum::TAGS
    pub fn try_equals(&self, a: &S, b: &S) -> Result<bool, UnknownTagError> {
        check_both(a, b).map(|_| self.equals(a, b))
    }

    /// Unwraps the members this instance was derived from.
    pub fn into_members(self) -> S::Members<EqKind> {
        self.members
    }
}

impl<S> Debug for SumEq<S>
where
    S: Sum,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SumEq")
            .field("tags", &S::TAGS)
            .finish_non_exhaustive()
    }
}

impl<S> Equivalence<S> for SumEq<S>
where
    S: Sum,
{
    fn equals(&self, a: &S, b: &S) -> bool {
        if a.tag() != b.tag() {
            return false;
        }
        a.visit_members::<EqKind, _>(b, &self.members, Equals).unwrap_or(true)
    }
}

/// Derives an [`Equivalence`] for a [`Sum`] from the [`Equivalence`]s of its payloads.
///
/// Members with different tags are never equivalent. Members with the same tag are equivalent if
/// their payloads are equivalent by the corresponding instance in `members`, or if they have no
/// payload.
///
/// The derived instance is a lawful equivalence relation if the instances in `members` are.
///
/// # Examples
///
/// ```rust
/// use tagsum::cmp::{self, Natural};
/// use tagsum::kind::EqKind;
/// use tagsum::Equivalence;
///
/// tagsum::sum! {
///     enum Token {
///         Comma,
///         Word(String),
///         Number(i64),
///     }
///     struct TokenMembers;
/// }
///
/// let eq = tagsum::derive_eq::<Token>(TokenMembers::<EqKind> {
///     Word: Box::new(cmp::from_equals(|a: &String, b: &String| a.eq_ignore_ascii_case(b))),
///     Number: Box::new(Natural),
/// });
///
/// assert!(eq.equals(&Token::Word("Rain".into()), &Token::Word("RAIN".into())));
/// assert!(eq.equals(&Token::Comma, &Token::Comma));
/// assert!(!eq.equals(&Token::Number(1), &Token::Comma));
/// ```
///
/// [`Equivalence`]: crate::cmp::Equivalence
/// [`Sum`]: crate::Sum
pub fn derive_eq<S>(members: S::Members<EqKind>) -> SumEq<S>
where
    S: Sum,
{
    SumEq { members }
}

/// [`Order`] derived for a [`Sum`].
///
/// See [`derive_ord`].
///
/// [`Order`]: crate::cmp::Order
/// [`Sum`]: crate::Sum
pub struct SumOrd<S>
where
    S: Sum,
{
    members: S::Members<OrdKind>,
}

impl<S> SumOrd<S>
where
    S: Sum,
{
    /// Like [`Order::compare`], but fails if either tag is not in [`Sum::TAGS`].
    ///
    /// [`Order::compare`]: crate::cmp::Order::compare
    /// [`Sum::TAGS`]: crate::Sum::TAGS
    pub fn try_compare(&self, a: &S, b: &S) -> Result<Ordering, UnknownTagError> {
        check_both(a, b).map(|_| self.compare(a, b))
    }

    /// Unwraps the members this instance was derived from.
    pub fn into_members(self) -> S::Members<OrdKind> {
        self.members
    }
}

impl<S> Debug for SumOrd<S>
where
    S: Sum,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SumOrd")
            .field("tags", &S::TAGS)
            .finish_non_exhaustive()
    }
}

impl<S> Equivalence<S> for SumOrd<S>
where
    S: Sum,
{
    fn equals(&self, a: &S, b: &S) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<S> Order<S> for SumOrd<S>
where
    S: Sum,
{
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let (ta, tb) = (a.tag(), b.tag());
        if ta != tb {
            return tag::cmp_tags(ta, tb);
        }
        a.visit_members::<OrdKind, _>(b, &self.members, Compare)
            .unwrap_or(Ordering::Equal)
    }
}

/// Derives an [`Order`] for a [`Sum`] from the [`Order`]s of its payloads.
///
/// Members with different tags are ordered **alphabetically by tag** (see [`tag::cmp_tags`]), not
/// by declaration order. Members with the same tag are ordered by the corresponding instance in
/// `members`, or are `Ordering::Equal` if they have no payload.
///
/// The equivalence of the derived instance is `compare(a, b) == Ordering::Equal`. It agrees with
/// [`derive_eq`] given instances whose orderings agree with their equivalences.
///
/// [`derive_eq`]: crate::derive_eq
/// [`Order`]: crate::cmp::Order
/// [`Sum`]: crate::Sum
/// [`tag::cmp_tags`]: crate::tag::cmp_tags
pub fn derive_ord<S>(members: S::Members<OrdKind>) -> SumOrd<S>
where
    S: Sum,
{
    SumOrd { members }
}

/// [`Show`] derived for a [`Sum`].
///
/// See [`derive_show`].
///
/// [`Show`]: crate::show::Show
/// [`Sum`]: crate::Sum
pub struct SumShow<S>
where
    S: Sum,
{
    members: S::Members<ShowKind>,
}

impl<S> SumShow<S>
where
    S: Sum,
{
    /// Like [`Show::show`], but fails if the tag is not in [`Sum::TAGS`].
    ///
    /// [`Show::show`]: crate::show::Show::show
    /// [`Sum::TAGS`]: crate::Sum::TAGS
    pub fn try_show(&self, value: &S) -> Result<String, UnknownTagError> {
        tag::check(value).map(|_| self.show(value))
    }

    /// Unwraps the members this instance was derived from.
    pub fn into_members(self) -> S::Members<ShowKind> {
        self.members
    }
}

impl<S> Debug for SumShow<S>
where
    S: Sum,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SumShow")
            .field("tags", &S::TAGS)
            .finish_non_exhaustive()
    }
}

impl<S> Show<S> for SumShow<S>
where
    S: Sum,
{
    fn show(&self, value: &S) -> String {
        let tag = value.tag();
        match value.visit_member::<ShowKind, _>(&self.members, Render) {
            Some(payload) => format!("{} {}", tag, payload),
            None => tag.to_string(),
        }
    }
}

/// Derives a [`Show`] for a [`Sum`] from the [`Show`]s of its payloads.
///
/// A member with a payload is rendered as its tag, a space, and its payload as rendered by the
/// corresponding instance in `members`. A member without a payload is rendered as its tag alone.
///
/// [`Show`]: crate::show::Show
/// [`Sum`]: crate::Sum
pub fn derive_show<S>(members: S::Members<ShowKind>) -> SumShow<S>
where
    S: Sum,
{
    SumShow { members }
}
