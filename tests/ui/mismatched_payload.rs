use tagsum::cmp::Natural;
use tagsum::kind::{ShowKind, ShowOf};

tagsum::sum! {
    enum A {
        A1,
        A2(u32),
    }
    struct AMembers;
}

fn main() {
    let instance: ShowOf<String> = Box::new(Natural);
    let _ = tagsum::derive_show::<A>(AMembers::<ShowKind> {
        A2: instance,
    });
}
