use tagsum::cmp::Natural;
use tagsum::kind::OrdKind;

tagsum::sum! {
    enum A {
        A1,
        A2(u32),
    }
    struct AMembers;
}

fn main() {
    let _ = tagsum::derive_ord::<A>(AMembers::<OrdKind> {
        A1: Box::new(Natural),
        A2: Box::new(Natural),
    });
}
