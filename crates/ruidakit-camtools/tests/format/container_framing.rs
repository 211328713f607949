use ruidakit_camtools::ruida::{HEADER_LEN, TRAILER_LEN};
use ruidakit_camtools::{decode_container, ContainerTemplate, ConversionOptions, Opcode, RuidaConverter};
use std::io::Write;

fn write_template() -> tempfile::NamedTempFile {
    let mut bytes: Vec<u8> = (0..HEADER_LEN as u32).map(|i| (i * 7 % 256) as u8).collect();
    bytes.extend(std::iter::repeat(0x42).take(300));
    bytes.extend_from_slice(&[0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file
}

#[test]
fn test_framing_is_copied_byte_for_byte() {
    let file = write_template();
    let template_bytes = std::fs::read(file.path()).unwrap();
    let template = ContainerTemplate::load(file.path()).unwrap();
    let converter = RuidaConverter::new(template, ConversionOptions::default());

    let svg = br#"<svg viewBox="0 0 20 20"><path d="M1 1 L19 1 L19 19 L1 19 Z"/></svg>"#;
    let out = converter.convert_to_bytes(svg).unwrap();

    assert_eq!(&out[..HEADER_LEN], &template_bytes[..HEADER_LEN]);
    assert_eq!(
        &out[out.len() - TRAILER_LEN..],
        &template_bytes[template_bytes.len() - TRAILER_LEN..]
    );
}

#[test]
fn test_output_decodes_back_to_commands() {
    let file = write_template();
    let template = ContainerTemplate::load(file.path()).unwrap();
    let converter = RuidaConverter::new(template, ConversionOptions::default());

    let svg = br#"<svg width="50mm" height="50mm"><path d="M0,0 L10,0 L10,10 Z"/></svg>"#;
    let planned = converter.plan(svg).unwrap();
    let decoded = decode_container(&converter.convert_to_bytes(svg).unwrap()).unwrap();

    assert_eq!(decoded.commands, planned);
    assert_eq!(decoded.commands.len(), 4);
    assert_eq!(decoded.commands[0].opcode, Opcode::MoveAbsolute);
    assert_eq!(decoded.commands[3].point(), decoded.commands[0].point());
    assert_eq!(decoded.trailer, vec![0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6]);
}
