use tagsum::kind::EqKind;

tagsum::sum! {
    enum A {
        A1,
        A2(u32),
    }
    struct AMembers;
}

fn main() {
    let _ = tagsum::derive_eq::<A>(AMembers::<EqKind> {});
}
