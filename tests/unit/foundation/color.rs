use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    assert_eq!(
        Color::parse("#ff0000").unwrap(),
        Color::rgba(1.0, 0.0, 0.0, 1.0)
    );
    assert_eq!(
        Color::parse("#fff").unwrap(),
        Color::rgba(1.0, 1.0, 1.0, 1.0)
    );

    let c = Color::parse("#0000ff80").unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_css_functions() {
    let c = Color::parse("rgba(59, 130, 246, 0.5)").unwrap();
    assert_eq!(c.rgb8(), [59, 130, 246]);
    assert_eq!(c.alpha(), 0.5);

    let c = Color::parse("RGB(16,185,129)").unwrap();
    assert_eq!(c.rgb8(), [16, 185, 129]);
    assert_eq!(c.alpha(), 1.0);
}

#[test]
fn rejects_malformed_colors() {
    for bad in [
        "#12345",
        "#zzzzzz",
        "rgba(1, 2, 3",
        "rgb(1, 2)",
        "rgb(300, 0, 0)",
        "rgba(0, 0, 0, 2)",
        "purple",
        "#ééé",
        "#+f+f+f",
        "#+1+2+3+4",
    ] {
        assert!(Color::parse(bad).is_err(), "{bad} should be rejected");
    }
}

#[test]
fn css_output_is_canonical() {
    assert_eq!(Color::parse("#9C40FF").unwrap().to_css(), "#9c40ff");
    assert_eq!(
        Color::parse("rgba(99, 102, 241, 0.5)").unwrap().to_css(),
        "rgba(99, 102, 241, 0.5)"
    );
    assert_eq!(Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff).to_string(), "#e5e7eb");
}

#[test]
fn deserializes_strings_objects_and_arrays() {
    let c: Color = serde_json::from_value(json!("#ffaa40")).unwrap();
    assert_eq!(c.rgb8(), [0xff, 0xaa, 0x40]);

    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([0.1, 0.2])).is_err());
}

#[test]
fn serializes_as_css_string() {
    let c = Color::parse("rgba(5, 150, 105, 0.5)").unwrap();
    assert_eq!(
        serde_json::to_value(c).unwrap(),
        json!("rgba(5, 150, 105, 0.5)")
    );
}
