use enumlogic::{EnumModel, Enumlogic, Validate};

#[derive(Enumlogic, Default)]
struct Tagged<T> {
    #[enumlogic(values("draft", "published"), allow_nil)]
    state: Option<i64>,
    payload: T,
}

fn main() {
    let mut tagged = Tagged::<u8>::default();
    tagged.set_state("draft");
    assert!(tagged.is_draft());
    assert!(tagged.is_valid());
    assert_eq!(Tagged::<u8>::STATES.len(), 2);
    assert!(<Tagged<u8> as EnumModel>::is_enum("state"));
    let _ = tagged.payload;
}
