use enumlogic::Enumlogic;

#[derive(Enumlogic, Default)]
pub struct Part {
    #[enumlogic(labels("bolt" = "Bolt", "hex nut" = "Hex Nut"), namespace)]
    r#type: Option<i64>,
    #[enumlogic(values("steel", "brass"), denominator = 1000, constant = "METALS")]
    material: Option<i64>,
}

fn main() {
    let mut part = Part::default();
    part.set_type("hex nut");
    part.set_material(String::from("brass"));
    assert_eq!(part.r#type(), Some("hex nut"));
    assert_eq!(part.type_key(), Some("hex_nut"));
    assert!(part.is_hex_nut_type());
    assert!(part.is_brass());
    assert_eq!(Part::METALS, &["steel", "brass"]);
    assert_eq!(Part::TYPES.len(), 2);
    assert_eq!(Part::type_options().get("Hex Nut").map(String::as_str), Some("hex nut"));
}
