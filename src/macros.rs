/// Declares an enum and implements [`Sum`] for it.
///
/// The first item is the enum. Its variants must be unit variants or single-field tuple variants
/// (the field is the payload). The second item names the members type that is generated for the
/// enum: a struct generic over a [`Kind`] with exactly one public field per payload-carrying
/// variant, named after that variant. Unit variants have no field.
///
/// Because the members type is an ordinary struct, a members literal that omits a payload-carrying
/// variant, names a unit variant, or provides an instance for the wrong payload type is rejected
/// by the compiler.
///
/// If no variant carries a payload, the members type has no public fields and is constructed with
/// `Default::default()` or `new`.
///
/// The tag of a variant is its name. Raw identifiers lose their prefix: the tag of `r#match` is
/// `match`.
///
/// # Examples
///
/// ```rust
/// use tagsum::cmp::Natural;
/// use tagsum::kind::{EqKind, ShowKind};
/// use tagsum::show::Show;
/// use tagsum::Equivalence;
///
/// tagsum::sum! {
///     #[derive(Clone, Copy, Debug)]
///     pub enum Weather {
///         Sun,
///         Rain(u32),
///     }
///     pub struct WeatherMembers;
/// }
///
/// let eq = tagsum::derive_eq::<Weather>(WeatherMembers::<EqKind> {
///     Rain: Box::new(Natural),
/// });
/// assert!(eq.equals(&Weather::Rain(1), &Weather::Rain(1)));
/// assert!(!eq.equals(&Weather::Rain(1), &Weather::Sun));
///
/// let show = tagsum::derive_show::<Weather>(WeatherMembers::<ShowKind> {
///     Rain: Box::new(Natural),
/// });
/// assert_eq!(show.show(&Weather::Sun), "Sun");
/// assert_eq!(show.show(&Weather::Rain(3)), "Rain 3");
/// ```
///
/// [`Kind`]: crate::kind::Kind
/// [`Sum`]: crate::Sum
#[macro_export]
macro_rules! sum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident $(($payload:ty))?
            ),*
            $(,)?
        }
        $(#[$members_meta:meta])*
        $members_vis:vis struct $members:ident;
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member $(($payload))?,
            )*
        }

        $crate::__members! {
            @munch
            [$(#[$members_meta])*]
            [$members_vis]
            $members
            []
            $($member $(($payload))?),*
        }

        impl $crate::Sum for $name {
            type Members<__K: $crate::kind::Kind> = $members<__K>;

            const TAGS: &'static [&'static str] = &[
                $($crate::tag::unraw(::core::stringify!($member))),*
            ];

            fn tag(&self) -> &str {
                match *self {
                    $(
                        Self::$member $(($crate::__wildcard!($payload)))? => {
                            $crate::tag::unraw(::core::stringify!($member))
                        }
                    )*
                }
            }

            #[allow(unused_variables)]
            fn visit_member<__K, __V>(
                &self,
                members: &$members<__K>,
                visitor: __V,
            ) -> ::core::option::Option<__V::Output>
            where
                __K: $crate::kind::Kind,
                __V: $crate::VisitMember<__K>,
            {
                match self {
                    $($(
                        Self::$member(payload) => ::core::option::Option::Some(
                            visitor.visit::<$payload>(&members.$member, payload),
                        ),
                    )?)*
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn visit_members<__K, __V>(
                &self,
                other: &Self,
                members: &$members<__K>,
                visitor: __V,
            ) -> ::core::option::Option<__V::Output>
            where
                __K: $crate::kind::Kind,
                __V: $crate::VisitMembers<__K>,
            {
                match (self, other) {
                    $($(
                        (Self::$member(left), Self::$member(right)) => {
                            ::core::option::Option::Some(
                                visitor.visit::<$payload>(&members.$member, left, right),
                            )
                        }
                    )?)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

// Collects the payload-carrying members of a `sum!` invocation into the fields of its members
// type. Unit members are dropped.
#[doc(hidden)]
#[macro_export]
macro_rules! __members {
    (
        @munch [$($meta:tt)*] [$($vis:tt)*] $members:ident [$($field:tt)*]
    ) => {
        $crate::__members! {
            @emit [$($meta)*] [$($vis)*] $members [$($field)*]
        }
    };
    (
        @munch [$($meta:tt)*] [$($vis:tt)*] $members:ident [$($field:tt)*]
        $member:ident ($payload:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::__members! {
            @munch [$($meta)*] [$($vis)*] $members [$($field)* $member: $payload,]
            $($($rest)*)?
        }
    };
    (
        @munch [$($meta:tt)*] [$($vis:tt)*] $members:ident [$($field:tt)*]
        $member:ident $(, $($rest:tt)*)?
    ) => {
        $crate::__members! {
            @munch [$($meta)*] [$($vis)*] $members [$($field)*]
            $($($rest)*)?
        }
    };
    (
        @emit [$($meta:tt)*] [$($vis:tt)*] $members:ident []
    ) => {
        $($meta)*
        $($vis)* struct $members<__K: $crate::kind::Kind> {
            kind: ::core::marker::PhantomData<fn() -> __K>,
        }

        impl<__K: $crate::kind::Kind> $members<__K> {
            #[allow(dead_code)]
            pub const fn new() -> Self {
                Self {
                    kind: ::core::marker::PhantomData,
                }
            }
        }

        impl<__K: $crate::kind::Kind> ::core::default::Default for $members<__K> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
    (
        @emit [$($meta:tt)*] [$($vis:tt)*] $members:ident [$($member:ident: $payload:ty,)+]
    ) => {
        $($meta)*
        #[allow(non_snake_case)]
        $($vis)* struct $members<__K: $crate::kind::Kind> {
            $(
                pub $member: <__K as $crate::kind::Kind>::Instance<$payload>,
            )+
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wildcard {
    ($($discard:tt)*) => {
        _
    };
}
