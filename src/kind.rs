//! Behavior kinds.
//!
//! A [`Kind`] is a type constructor that selects which behavior a set of
//! [members][`Sum::Members`] holds. Because [`Kind::Instance`] is a generic associated type, one
//! members type serves every derivation: `Members<EqKind>` holds an [`Equivalence`] per
//! payload-carrying variant, `Members<OrdKind>` holds an [`Order`], and so on.
//!
//! | Kind         | Instance Type                              | Derivation      |
//! |--------------|--------------------------------------------|-----------------|
//! | [`EqKind`]   | `Box<dyn Equivalence<T> + Send + Sync>`    | [`derive_eq`]   |
//! | [`OrdKind`]  | `Box<dyn Order<T> + Send + Sync>`          | [`derive_ord`]  |
//! | [`ShowKind`] | `Box<dyn Show<T> + Send + Sync>`           | [`derive_show`] |
//!
//! Instances are boxed so that members of differing payload types can be stored side by side
//! without naming each instance type. A concrete instance coerces into its member field, so
//! `Box::new(Natural)` is sufficient when writing a members literal.
//!
//! [`derive_eq`]: crate::derive_eq
//! [`derive_ord`]: crate::derive_ord
//! [`derive_show`]: crate::derive_show
//! [`Equivalence`]: crate::cmp::Equivalence
//! [`Kind`]: crate::kind::Kind
//! [`Kind::Instance`]: crate::kind::Kind::Instance
//! [`Order`]: crate::cmp::Order
//! [`Show`]: crate::show::Show
//! [`Sum::Members`]: crate::Sum::Members

use alloc::boxed::Box;

use crate::cmp::{Equivalence, Order};
use crate::sealed::Sealed;
use crate::show::Show;

/// A type constructor over payload types.
pub trait Kind: Sealed {
    type Instance<T>;
}

/// Selects [`Equivalence`] instances.
///
/// [`Equivalence`]: crate::cmp::Equivalence
#[derive(Debug)]
pub enum EqKind {}

impl Kind for EqKind {
    type Instance<T> = Box<dyn Equivalence<T> + Send + Sync>;
}

impl Sealed for EqKind {}

/// Selects [`Order`] instances.
///
/// [`Order`]: crate::cmp::Order
#[derive(Debug)]
pub enum OrdKind {}

impl Kind for OrdKind {
    type Instance<T> = Box<dyn Order<T> + Send + Sync>;
}

impl Sealed for OrdKind {}

/// Selects [`Show`] instances.
///
/// [`Show`]: crate::show::Show
#[derive(Debug)]
pub enum ShowKind {}

impl Kind for ShowKind {
    type Instance<T> = Box<dyn Show<T> + Send + Sync>;
}

impl Sealed for ShowKind {}

/// The [`Equivalence`] member instance for payload type `T`.
///
/// [`Equivalence`]: crate::cmp::Equivalence
pub type EqOf<T> = <EqKind as Kind>::Instance<T>;

/// The [`Order`] member instance for payload type `T`.
///
/// [`Order`]: crate::cmp::Order
pub type OrdOf<T> = <OrdKind as Kind>::Instance<T>;

/// The [`Show`] member instance for payload type `T`.
///
/// [`Show`]: crate::show::Show
pub type ShowOf<T> = <ShowKind as Kind>::Instance<T>;
