use core::cmp::Ordering;
use core::marker::PhantomData;
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use std::sync::Arc;
use std::thread;

use tagsum::cmp::{self, Natural};
use tagsum::kind::{EqKind, Kind, OrdKind, ShowKind};
use tagsum::show::{self, Show};
use tagsum::{
    derive_eq, derive_ord, derive_show, Equivalence, Order, Sum, SumEq, SumOrd, SumShow,
    VisitMember, VisitMembers,
};

tagsum::sum! {
    #[derive(Clone, Copy, Debug)]
    enum S {
        A(i64),
        B,
        C(i64),
        D,
    }
    struct SMembers;
}

impl Arbitrary for S {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => S::A(i64::arbitrary(g)),
            1 => S::B,
            2 => S::C(i64::arbitrary(g)),
            _ => S::D,
        }
    }
}

fn eq() -> SumEq<S> {
    derive_eq::<S>(SMembers::<EqKind> {
        A: Box::new(Natural),
        C: Box::new(cmp::from_equals(|x: &i64, y: &i64| {
            *x == 42 || *y == 42 || x == y
        })),
    })
}

fn ord() -> SumOrd<S> {
    derive_ord::<S>(SMembers::<OrdKind> {
        A: Box::new(Natural),
        C: Box::new(cmp::reverse(Natural)),
    })
}

fn show() -> SumShow<S> {
    derive_show::<S>(SMembers::<ShowKind> {
        A: Box::new(Natural),
        C: Box::new(show::from_show(|x: &i64| {
            Natural.show(x).chars().rev().collect::<String>()
        })),
    })
}

// Names that collide with common generic parameter names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
struct K(u8);

impl core::fmt::Display for K {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

tagsum::sum! {
    #[derive(Clone, Copy, Debug)]
    enum V {
        Visible(u8),
        Keyed(K),
        Hidden,
    }
    struct VMembers;
}

// Tags are arbitrary strings and no member carries a payload.
#[derive(Clone, Debug)]
struct Valueless(String);

struct ValuelessMembers<K>(PhantomData<fn() -> K>)
where
    K: Kind;

impl<K> Default for ValuelessMembers<K>
where
    K: Kind,
{
    fn default() -> Self {
        ValuelessMembers(PhantomData)
    }
}

impl Sum for Valueless {
    type Members<K: Kind> = ValuelessMembers<K>;

    const TAGS: &'static [&'static str] = &[];

    fn tag(&self) -> &str {
        &self.0
    }

    fn visit_member<K, V>(&self, _: &ValuelessMembers<K>, _: V) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMember<K>,
    {
        None
    }

    fn visit_members<K, V>(&self, _: &Self, _: &ValuelessMembers<K>, _: V) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMembers<K>,
    {
        None
    }
}

// A generic sum type, which `sum!` does not support.
#[derive(Clone, Debug)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[allow(non_snake_case)]
struct EitherMembers<K, L, R>
where
    K: Kind,
{
    Left: K::Instance<L>,
    Right: K::Instance<R>,
}

impl<L, R> Sum for Either<L, R> {
    type Members<K: Kind> = EitherMembers<K, L, R>;

    const TAGS: &'static [&'static str] = &["Left", "Right"];

    fn tag(&self) -> &str {
        match self {
            Either::Left(_) => "Left",
            Either::Right(_) => "Right",
        }
    }

    fn visit_member<K, V>(&self, members: &EitherMembers<K, L, R>, visitor: V) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMember<K>,
    {
        Some(match self {
            Either::Left(left) => visitor.visit(&members.Left, left),
            Either::Right(right) => visitor.visit(&members.Right, right),
        })
    }

    fn visit_members<K, V>(
        &self,
        other: &Self,
        members: &EitherMembers<K, L, R>,
        visitor: V,
    ) -> Option<V::Output>
    where
        K: Kind,
        V: VisitMembers<K>,
    {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => Some(visitor.visit(&members.Left, a, b)),
            (Either::Right(a), Either::Right(b)) => Some(visitor.visit(&members.Right, a, b)),
            _ => None,
        }
    }
}

#[test]
fn eq_different_members_are_not_equivalent() {
    let eq = eq();
    assert!(!eq.equals(&S::A(1), &S::C(1)));
    assert!(!eq.equals(&S::B, &S::C(1)));
    assert!(!eq.equals(&S::B, &S::D));
}

#[quickcheck]
fn eq_different_members_are_not_equivalent_for_any_payload(x: i64, y: i64) {
    let eq = eq();
    assert!(!eq.equals(&S::A(x), &S::C(y)));
    assert!(!eq.equals(&S::C(x), &S::A(y)));
    assert!(!eq.equals(&S::A(x), &S::B));
    assert!(!eq.equals(&S::D, &S::C(x)));
}

#[test]
fn eq_same_members_use_member_instance() {
    let eq = eq();
    assert!(eq.equals(&S::A(1), &S::A(1)));
    assert!(!eq.equals(&S::A(1), &S::A(2)));
    assert!(!eq.equals(&S::A(1), &S::A(42)));
    assert!(eq.equals(&S::C(1), &S::C(1)));
    assert!(!eq.equals(&S::C(1), &S::C(2)));
    assert!(eq.equals(&S::C(1), &S::C(42)));
}

#[test]
fn eq_members_without_payloads_are_equivalent() {
    let eq = eq();
    assert!(eq.equals(&S::B, &S::B));
    assert!(eq.equals(&S::D, &S::D));
}

#[test]
fn ord_different_members_without_payloads_are_alphabetical() {
    let ord = ord();
    assert_eq!(ord.compare(&S::B, &S::D), Ordering::Less);
    assert_eq!(ord.compare(&S::D, &S::B), Ordering::Greater);
}

#[quickcheck]
fn ord_different_members_are_alphabetical_for_any_payload(x: i64, y: i64) {
    let ord = ord();
    assert_eq!(ord.compare(&S::A(x), &S::C(y)), Ordering::Less);
    assert_eq!(ord.compare(&S::A(y), &S::C(x)), Ordering::Less);
    assert_eq!(ord.compare(&S::A(x), &S::B), Ordering::Less);
    assert_eq!(ord.compare(&S::C(x), &S::A(y)), Ordering::Greater);
    assert_eq!(ord.compare(&S::C(y), &S::A(x)), Ordering::Greater);
    assert_eq!(ord.compare(&S::B, &S::A(x)), Ordering::Greater);
}

#[test]
fn ord_same_members_without_payloads_are_equal() {
    let ord = ord();
    assert_eq!(ord.compare(&S::B, &S::B), Ordering::Equal);
    assert_eq!(ord.compare(&S::D, &S::D), Ordering::Equal);
}

#[test]
fn ord_same_members_use_member_instance() {
    let ord = ord();
    assert_eq!(ord.compare(&S::A(1), &S::A(2)), Ordering::Less);
    assert_eq!(ord.compare(&S::C(1), &S::C(2)), Ordering::Greater);
    assert_eq!(ord.compare(&S::C(2), &S::C(2)), Ordering::Equal);
}

#[quickcheck]
fn ord_is_consistent_with_eq(x: S, y: S) {
    let ord = ord();
    let eq = derive_eq::<S>(SMembers::<EqKind> {
        A: Box::new(Natural),
        C: Box::new(Natural),
    });
    assert_eq!(ord.compare(&x, &y) == Ordering::Equal, eq.equals(&x, &y));
    assert_eq!(ord.equals(&x, &y), eq.equals(&x, &y));
}

#[quickcheck]
fn ord_is_antisymmetric(x: S, y: S) {
    let ord = ord();
    assert_eq!(ord.compare(&x, &y), ord.compare(&y, &x).reverse());
}

#[test]
fn show_members_without_payloads_as_tag() {
    assert_eq!(show().show(&S::B), "B");
    assert_eq!(show().show(&S::D), "D");
}

#[quickcheck]
fn show_any_member_without_payload_as_tag(tag: String) -> TestResult {
    if tag.is_empty() {
        return TestResult::discard();
    }
    let show = derive_show::<Valueless>(Default::default());
    TestResult::from_bool(show.show(&Valueless(tag.clone())) == tag)
}

#[test]
fn show_members_with_payloads_using_member_instance() {
    assert_eq!(show().show(&S::A(42)), "A 42");
    assert_eq!(show().show(&S::C(42)), "C 24");
}

#[quickcheck]
fn derivation_is_idempotent(x: S, y: S) {
    let (eq1, eq2) = (eq(), eq());
    let (ord1, ord2) = (ord(), ord());
    let (show1, show2) = (show(), show());
    assert_eq!(eq1.equals(&x, &y), eq2.equals(&x, &y));
    assert_eq!(ord1.compare(&x, &y), ord2.compare(&x, &y));
    assert_eq!(show1.show(&x), show2.show(&x));
}

#[test]
fn hand_written_generic_sum() {
    type E = Either<u8, String>;

    let eq = derive_eq::<E>(EitherMembers::<EqKind, u8, String> {
        Left: Box::new(Natural),
        Right: Box::new(Natural),
    });
    let ord = derive_ord::<E>(EitherMembers::<OrdKind, u8, String> {
        Left: Box::new(Natural),
        Right: Box::new(cmp::contramap(Natural, |text: &String| text.len())),
    });
    let show = derive_show::<E>(EitherMembers::<ShowKind, u8, String> {
        Left: Box::new(Natural),
        Right: Box::new(show::from_show(|text: &String| format!("{:?}", text))),
    });

    assert!(eq.equals(&Either::Left(1), &Either::Left(1)));
    assert!(!eq.equals(&Either::Left(1), &Either::Right("1".into())));
    assert_eq!(
        ord.compare(&Either::Right("ab".into()), &Either::Right("z".into())),
        Ordering::Greater,
    );
    assert_eq!(
        ord.compare(&Either::Right(String::new()), &Either::Left(0)),
        Ordering::Greater,
    );
    assert_eq!(show.show(&Either::Right("hail".into())), "Right \"hail\"");
    assert_eq!(show.show(&Either::Left(3)), "Left 3");
}

#[test]
fn sum_names_do_not_collide_with_generated_code() {
    let eq = derive_eq::<V>(VMembers::<EqKind> {
        Visible: Box::new(Natural),
        Keyed: Box::new(Natural),
    });
    let ord = derive_ord::<V>(VMembers::<OrdKind> {
        Visible: Box::new(Natural),
        Keyed: Box::new(Natural),
    });
    let show = derive_show::<V>(VMembers::<ShowKind> {
        Visible: Box::new(Natural),
        Keyed: Box::new(Natural),
    });

    assert_eq!(V::TAGS, &["Visible", "Keyed", "Hidden"]);
    assert!(eq.equals(&V::Keyed(K(1)), &V::Keyed(K(1))));
    assert!(!eq.equals(&V::Visible(1), &V::Hidden));
    assert_eq!(ord.compare(&V::Hidden, &V::Visible(0)), Ordering::Less);
    assert_eq!(ord.compare(&V::Keyed(K(2)), &V::Keyed(K(1))), Ordering::Greater);
    assert_eq!(show.show(&V::Visible(1)), "Visible 1");
    assert_eq!(show.show(&V::Keyed(K(4))), "Keyed #4");
    assert_eq!(show.show(&V::Hidden), "Hidden");
}

#[test]
fn try_operations_reject_unknown_tags() {
    let eq = derive_eq::<Valueless>(Default::default());
    let ord = derive_ord::<Valueless>(Default::default());
    let show = derive_show::<Valueless>(Default::default());
    let x = Valueless("Fog".into());

    let error = eq.try_equals(&x, &x).unwrap_err();
    assert_eq!(error.tag, "Fog");
    assert!(error
        .to_string()
        .starts_with("`Fog` is not a member tag of"));
    assert!(ord.try_compare(&x, &x).is_err());
    assert!(show.try_show(&x).is_err());

    // The infallible operations trust the implementation.
    assert!(eq.equals(&x, &x));
    assert_eq!(show.show(&x), "Fog");
}

#[test]
fn derived_instances_are_shared_between_threads() {
    let ord = Arc::new(ord());
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let ord = Arc::clone(&ord);
            thread::spawn(move || ord.compare(&S::A(i), &S::A(i + 1)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ordering::Less);
    }
}
