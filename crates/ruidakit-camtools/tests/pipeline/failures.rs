use ruidakit_camtools::{
    ContainerTemplate, ConversionError, ConversionOptions, NumericParsePolicy, RuidaConverter,
};

fn converter(policy: NumericParsePolicy) -> RuidaConverter {
    let template = ContainerTemplate::from_bytes(&[0u8; 600]).unwrap();
    RuidaConverter::new(
        template,
        ConversionOptions {
            numeric_policy: policy,
            ..Default::default()
        },
    )
}

#[test]
fn test_no_path_element() {
    let svg = br#"<svg width="50mm" height="50mm"><rect width="10" height="10"/></svg>"#;
    let result = converter(NumericParsePolicy::Zero).convert_to_bytes(svg);
    assert!(matches!(result, Err(ConversionError::MissingPathData)));
}

#[test]
fn test_no_dimensions() {
    let svg = br#"<svg><path d="M0,0 L10,10"/></svg>"#;
    let result = converter(NumericParsePolicy::Zero).convert_to_bytes(svg);
    assert!(matches!(result, Err(ConversionError::MissingDimensions)));
}

#[test]
fn test_path_without_supported_commands() {
    let svg = br#"<svg width="10mm" height="10mm"><path d="Q1,1 2,2"/></svg>"#;
    let result = converter(NumericParsePolicy::Zero).convert_to_bytes(svg);
    assert!(matches!(result, Err(ConversionError::EmptyGeometry)));
}

#[test]
fn test_malformed_number_depends_on_policy() {
    let svg = br#"<svg width="10mm" height="10mm"><path d="M0,0 L5,-"/></svg>"#;
    let lenient = converter(NumericParsePolicy::Zero).plan(svg).unwrap();
    assert_eq!(lenient.len(), 2);
    assert_eq!(lenient[1].y, 50_000);

    let strict = converter(NumericParsePolicy::Fail).plan(svg);
    assert!(matches!(
        strict,
        Err(ConversionError::NumericParseError { token }) if token == "-"
    ));
}
