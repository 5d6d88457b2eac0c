use tagsum::cmp::Natural;
use tagsum::kind::EqKind;

tagsum::sum! {
    enum A {
        A1,
        A2(u32),
        A3(String),
    }
    struct AMembers;
}

fn main() {
    let _ = tagsum::derive_eq::<A>(AMembers::<EqKind> {
        A2: Box::new(Natural),
    });
}
