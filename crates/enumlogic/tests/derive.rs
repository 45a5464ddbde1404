//! End-to-end behavior of `#[derive(Enumlogic)]`.

use enumlogic::{
    hash32, AttributeStore, EnumDefinition, EnumModel, Enumlogic, MemoryStore, Validate,
    DEFAULT_MESSAGE,
};
use pretty_assertions::assert_eq;

#[derive(Enumlogic, Default, Debug)]
struct Computer {
    #[enumlogic(values("apple", "dell", "hp"))]
    kind: Option<i64>,
}

#[derive(Enumlogic, Default, Debug)]
struct Branded {
    #[enumlogic(labels("apple" = "Apple", "dell" = "Dell", "hp" = "HP"))]
    kind: Option<i64>,
}

#[derive(Enumlogic, Default, Debug)]
struct Laptop {
    #[enumlogic(values("apple", "dell", "hp"), namespace)]
    kind: Option<i64>,
    #[enumlogic(values("apple", "lenovo"), namespace, allow_nil)]
    vendor: Option<i64>,
    serial: String,
}

#[derive(Enumlogic, Default, Debug)]
struct Car {
    #[enumlogic(values("tesla", "bmw", "moskvich"), allow_nil)]
    model: Option<i64>,
}

#[derive(Enumlogic, Default, Debug)]
struct Order {
    #[enumlogic(
        labels("new" = "New", "in-transit" = "In Transit", "Delivered" = "Delivered"),
        allow_blank,
        message = "is not a known status",
        denominator = 1000,
        constant = "STATES"
    )]
    status: Option<i64>,
}

#[derive(Enumlogic, Default, Debug)]
struct Ticket {
    #[enumlogic(values("low", "high"), message = "must be low or high")]
    priority: Option<i64>,
}

#[derive(Enumlogic, Default, Debug)]
struct Printer {
    #[enumlogic(values("hewlett packard", "hewlett-packard", "epson"))]
    maker: Option<i64>,
}

fn code(value: &str) -> i64 {
    i64::from(hash32(value) / 100_000)
}

#[test]
fn constant_lists_values_in_order() {
    assert_eq!(Computer::KINDS, &["apple", "dell", "hp"]);
    assert_eq!(Branded::KINDS, &["apple", "dell", "hp"]);
}

#[test]
fn options_for_list() {
    let options: Vec<(&str, &str)> = Computer::kind_options()
        .iter()
        .map(|(text, value)| (text.as_str(), value.as_str()))
        .collect();
    assert_eq!(options, vec![("apple", "apple"), ("dell", "dell"), ("hp", "hp")]);
}

#[test]
fn options_for_labels() {
    let options: Vec<(&str, &str)> = Branded::kind_options()
        .iter()
        .map(|(text, value)| (text.as_str(), value.as_str()))
        .collect();
    assert_eq!(options, vec![("Apple", "apple"), ("Dell", "dell"), ("HP", "hp")]);
}

#[test]
fn set_then_read_every_accessor() {
    let mut c = Branded::default();
    c.set_kind("dell");

    assert_eq!(c.kind_int(), Some(code("dell")));
    assert_eq!(c.kind(), Some("dell"));
    assert_eq!(c.kind_key(), Some("dell"));
    assert_eq!(c.kind_text(), Some("Dell"));
}

#[test]
fn text_for_list_is_value() {
    let mut c = Computer::default();
    c.set_kind("hp");
    assert_eq!(c.kind_text(), Some("hp"));
}

#[test]
fn text_is_none_for_undeclared_value() {
    let mut c = Branded::default();
    c.set_kind("ibm");
    assert_eq!(c.kind_text(), None);
    assert_eq!(c.kind_int(), Some(code("ibm")));
}

#[test]
fn legacy_integer_decodes_to_nothing() {
    let c = Computer { kind: Some(-1) };
    assert_eq!(c.kind(), None);
    assert_eq!(c.kind_key(), None);
    assert_eq!(c.kind_text(), None);
    assert_eq!(c.kind_int(), Some(-1));
    assert!(!c.is_apple());
}

#[test]
fn predicates() {
    let mut c = Computer::default();
    c.set_kind("apple");
    assert!(c.is_apple());
    assert!(!c.is_dell());
    assert!(!c.is_hp());

    c.set_kind("dell");
    assert!(c.is_dell());
    assert!(!c.is_apple());
}

#[test]
fn namespaced_predicates() {
    let mut laptop = Laptop::default();
    laptop.set_kind("apple");
    laptop.set_vendor("lenovo");

    assert!(laptop.is_apple_kind());
    assert!(!laptop.is_apple_vendor());
    assert!(laptop.is_lenovo_vendor());
    assert!(!laptop.is_dell_kind());
    assert_eq!(laptop.serial, "");
}

#[test]
fn blank_setter_is_noop() {
    let mut c = Computer::default();
    c.set_kind("");
    assert_eq!(c.kind_int(), None);

    c.set_kind("hp");
    c.set_kind("  ");
    assert_eq!(c.kind(), Some("hp"));
}

#[test]
fn normalized_keys() {
    let mut order = Order::default();
    order.set_status("in-transit");
    assert_eq!(order.status_key(), Some("in_transit"));
    assert_eq!(order.status_text(), Some("In Transit"));
    assert!(order.is_in_transit());

    order.set_status("Delivered");
    assert_eq!(order.status_key(), Some("delivered"));
    assert!(order.is_delivered());
}

#[test]
fn custom_constant_and_denominator() {
    assert_eq!(Order::STATES, &["new", "in-transit", "Delivered"]);
    assert_eq!(Order::status_definition().constant_name(), "STATES");
    assert_eq!(Order::status_value("new"), i64::from(hash32("new") / 1000));

    let mut order = Order::default();
    order.set_status("new");
    assert_eq!(order.status_int(), Some(i64::from(hash32("new") / 1000)));

    // The type-level encoder ignores per-field denominators.
    assert_eq!(Order::enum_int_for("new"), code("new"));
    assert_ne!(Order::enum_int_for("new"), Order::status_value("new"));
}

#[test]
fn validates_inclusion() {
    let mut c = Computer::default();
    c.set_kind("blah");
    assert!(!c.is_valid());
    assert_eq!(c.validate().get("kind"), [DEFAULT_MESSAGE.to_string()]);
    assert_eq!(
        c.validate().full_messages(),
        vec!["Kind is not included in the list".to_string()]
    );

    c.set_kind("dell");
    assert!(c.is_valid());
}

#[test]
fn unset_field_fails_without_allowances() {
    assert!(!Computer::default().is_valid());
}

#[test]
fn allow_nil_passes_unset() {
    let car = Car::default();
    assert!(car.is_valid());
    assert!(!car.is_tesla());
    assert!(!car.is_bmw());
    assert!(!car.is_moskvich());
}

#[test]
fn allow_blank_passes_blank_input() {
    let mut order = Order::default();
    order.set_status("");
    assert!(order.is_valid());
    assert_eq!(order.status(), None);
}

#[test]
fn undecodable_code_is_blank() {
    let order = Order { status: Some(-3) };
    assert!(order.is_valid());
}

#[test]
fn custom_message() {
    let mut ticket = Ticket::default();
    ticket.set_priority("urgent");
    assert_eq!(
        ticket.validate().full_messages(),
        vec!["Priority must be low or high".to_string()]
    );
}

#[test]
fn only_failing_fields_are_reported() {
    let mut laptop = Laptop::default();
    laptop.set_kind("acer");
    let errors = laptop.validate();
    assert_eq!(errors.get("kind"), [DEFAULT_MESSAGE.to_string()]);
    assert!(!errors.contains("vendor"));
}

#[test]
fn enum_model_surface() {
    assert!(Computer::is_enum("kind"));
    assert!(!Computer::is_enum("some_other_field"));
    assert_eq!(Laptop::ENUM_FIELDS, &["kind", "vendor"]);
    assert!(!Laptop::is_enum("serial"));

    let def = Laptop::enum_definition("vendor").expect("declared");
    assert_eq!(def.values().collect::<Vec<_>>(), vec!["apple", "lenovo"]);
    assert!(Laptop::enum_definition("serial").is_none());
}

#[test]
fn enum_int_for_and_field_value() {
    assert_eq!(Car::enum_int_for("tesla"), code("tesla"));
    assert_eq!(Car::model_value("tesla"), code("tesla"));
    assert_eq!(Car::model_value("unknown"), code("unknown"));
}

#[test]
fn stored_integer_is_the_persisted_value() {
    let mut car = Car::default();
    car.set_model("tesla");

    // Persist and reload through a plain integer column.
    let row = MemoryStore::new().with("model", car.model_int().expect("set"));
    let reloaded = Car {
        model: row.read_attribute("model"),
    };
    assert_eq!(reloaded.model_key(), Some("tesla"));
    assert_eq!(reloaded.model_text(), Some("tesla"));
    assert_eq!(reloaded.model_int(), Some(code("tesla")));
}

#[test]
fn definition_is_shared_across_instances() {
    let a = Computer::kind_definition();
    let b = Computer::kind_definition();
    assert!(std::ptr::eq(a, b));

    let expected = a as *const EnumDefinition as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| Computer::kind_definition() as *const EnumDefinition as usize)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}

#[test]
fn values_sharing_a_key_share_a_predicate() {
    assert_eq!(Printer::MAKERS, &["hewlett packard", "hewlett-packard", "epson"]);

    let mut printer = Printer::default();
    for value in ["hewlett packard", "hewlett-packard"] {
        printer.set_maker(value);
        assert_eq!(printer.maker(), Some(value));
        assert_eq!(printer.maker_key(), Some("hewlett_packard"));
        assert!(printer.is_hewlett_packard());
        assert!(!printer.is_epson());
        assert!(printer.is_valid());
    }
}
