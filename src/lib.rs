//! Equivalence, total ordering, and rendering derived for tagged unions.
//!
//! A tagged union (or sum type) is a value that is exactly one of a closed set of *members*. Each
//! member is identified by a *tag* and may carry a *payload*. In Rust, this is an `enum` whose
//! variants are either unit variants or carry a single field.
//!
//! This crate derives [`Equivalence`], [`Order`], and [`Show`] instances for an entire [`Sum`]
//! from instances for the payloads of its members. Instances are only given for members that
//! carry a payload: members without a payload are equivalent to themselves and render as their
//! tag alone.
//!
//! | Derivation      | Same Tag               | Different Tags                 | No Payload    |
//! |-----------------|------------------------|--------------------------------|---------------|
//! | [`derive_eq`]   | payload `Equivalence`  | `false`                        | `true`        |
//! | [`derive_ord`]  | payload `Order`        | tags compared alphabetically   | `Equal`       |
//! | [`derive_show`] | `"{tag} {payload}"`    |                                | `"{tag}"`     |
//!
//! **Members with different tags are ordered alphabetically by tag, not by declaration order.**
//! This differs from `#[derive(PartialOrd, Ord)]`.
//!
//! # Members
//!
//! The input of a derivation is a *members* type: a struct with exactly one field per
//! payload-carrying member, named after that member. The [`sum!`] macro declares an enum together
//! with its members type. The members type is generic over a [`Kind`], which selects the instance
//! type of its fields, so the same struct is used for all derivations.
//!
//! Because members are a struct, instances are required for exactly the members that carry a
//! payload and their types must agree with the payload types. Anything else is a compile error.
//!
//! # Examples
//!
//! ```rust
//! use core::cmp::Ordering;
//! use tagsum::cmp::{self, Natural};
//! use tagsum::kind::OrdKind;
//! use tagsum::Order;
//!
//! tagsum::sum! {
//!     #[derive(Clone, Copy, Debug)]
//!     pub enum Weather {
//!         Sun,
//!         Rain(u32),
//!         Hail(u32),
//!     }
//!     pub struct WeatherMembers;
//! }
//!
//! let ord = tagsum::derive_ord::<Weather>(WeatherMembers::<OrdKind> {
//!     Rain: Box::new(Natural),
//!     Hail: Box::new(cmp::reverse(Natural)),
//! });
//!
//! // "Hail" < "Rain" < "Sun", regardless of payloads.
//! assert_eq!(ord.compare(&Weather::Hail(9), &Weather::Rain(1)), Ordering::Less);
//! assert_eq!(ord.compare(&Weather::Sun, &Weather::Rain(1)), Ordering::Greater);
//! assert_eq!(ord.compare(&Weather::Rain(1), &Weather::Rain(2)), Ordering::Less);
//! assert_eq!(ord.compare(&Weather::Hail(1), &Weather::Hail(2)), Ordering::Greater);
//! assert_eq!(ord.compare(&Weather::Sun, &Weather::Sun), Ordering::Equal);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod derive;
mod macros;

pub mod cmp;
pub mod kind;
pub mod show;
pub mod tag;

use crate::kind::Kind;

pub use crate::cmp::{Equivalence, Order};
pub use crate::derive::{derive_eq, derive_ord, derive_show, SumEq, SumOrd, SumShow};
pub use crate::show::Show;
pub use crate::tag::UnknownTagError;

/// A tagged union.
///
/// This is the only capability that derivations require of a type: given a value, identify its
/// member by tag and hand its payload (if any) to a visitor along with the instance for that
/// payload. Implementations are typically generated by [`sum!`], but may also be written by hand
/// (e.g., for generic types).
///
/// # Contract
///
/// Implementations must be deterministic: repeated calls on the same value must yield the same tag
/// and visit an equivalent payload.
///
/// Derivations do not validate implementations. In particular, derivations determine whether a
/// member carries a payload **only** by whether [`visit_member`] and [`visit_members`] call the
/// visitor. A hand-written implementation that visits a payload for a member that has none will
/// have that member rendered as `"{tag} {payload}"`, and one that does not visit the payload of a
/// member that has one will have that member compared as if it had no payload and rendered as its
/// tag alone.
///
/// [`visit_member`]: crate::Sum::visit_member
/// [`visit_members`]: crate::Sum::visit_members
pub trait Sum: Sized {
    /// The members type: one `K::Instance<P>` for each member with payload type `P`.
    type Members<K: Kind>;

    /// The tags of all members in declaration order.
    const TAGS: &'static [&'static str];

    fn tag(&self) -> &str;

    /// Visits the payload of this member and its instance in `members`.
    ///
    /// Returns `None` if this member has no payload.
    fn visit_member<K, V>(&self, members: &Self::Members<K>, visitor: V) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMember<K>;

    /// Visits the payloads of this member and `other` and their instance in `members`.
    ///
    /// Returns `None` if the members differ or have no payload.
    fn visit_members<K, V>(
        &self,
        other: &Self,
        members: &Self::Members<K>,
        visitor: V,
    ) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMembers<K>;
}

/// A function over the payload of a member and its instance.
pub trait VisitMember<K>
where
    K: Kind,
{
    type Output;

    fn visit<T>(self, instance: &K::Instance<T>, payload: &T) -> Self::Output;
}

/// A function over the payloads of two members with the same tag and their instance.
pub trait VisitMembers<K>
where
    K: Kind,
{
    type Output;

    fn visit<T>(self, instance: &K::Instance<T>, left: &T, right: &T) -> Self::Output;
}

mod sealed {
    pub trait Sealed {}
}
