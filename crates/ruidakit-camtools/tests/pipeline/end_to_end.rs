use ruidakit_camtools::ruida::{scramble, HEADER_LEN, TRAILER_LEN};
use ruidakit_camtools::{ContainerTemplate, ConversionOptions, RuidaConverter};

fn template_bytes() -> Vec<u8> {
    let mut bytes = b"RDWORKV8".to_vec();
    bytes.resize(HEADER_LEN, 0x5A);
    bytes.extend_from_slice(&[0x89; 64]); // body of the template job, discarded
    bytes.extend_from_slice(&[0xD7, 0x60, 0x00, 0x00, 0x00, 0x00]);
    bytes
}

fn converter() -> RuidaConverter {
    let template = ContainerTemplate::from_bytes(&template_bytes()).unwrap();
    RuidaConverter::new(template, ConversionOptions::default())
}

#[test]
fn test_diagonal_line_full_container() {
    let svg = br#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" width="50mm" height="50mm" viewBox="0 0 50 50">
  <path d="M0,0 L50,50" stroke="black" fill="none"/>
</svg>"#;

    let bytes = converter().convert_to_bytes(svg).unwrap();

    // MOVE (0, 50000) then CUT (50000, 0), each XORed with 0xAC
    let raw: Vec<u8> = vec![
        0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x50, 0xC3, 0x00, 0x00, //
        0x02, 0x01, 0x50, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
    let expected_body = scramble(&raw);

    let template = template_bytes();
    assert_eq!(bytes.len(), HEADER_LEN + 20 + TRAILER_LEN);
    assert_eq!(&bytes[..HEADER_LEN], &template[..HEADER_LEN]);
    assert_eq!(&bytes[HEADER_LEN..HEADER_LEN + 20], expected_body.as_slice());
    assert_eq!(&bytes[bytes.len() - TRAILER_LEN..], &template[template.len() - TRAILER_LEN..]);
    assert_eq!(bytes[HEADER_LEN], 0x04 ^ 0xAC);
}

#[test]
fn test_closed_square_with_viewbox() {
    let svg = br#"<svg viewBox="0 0 100 100"><path d="M10,10 h80 v80 h-80 z"/></svg>"#;
    let commands = converter().plan(svg).unwrap();

    let points: Vec<(i32, i32)> = commands.iter().map(|c| (c.x, c.y)).collect();
    assert_eq!(
        points,
        vec![
            (5_000, 45_000),
            (45_000, 45_000),
            (45_000, 5_000),
            (5_000, 5_000),
            (5_000, 45_000),
        ]
    );
}

#[test]
fn test_arc_is_straight_line_to_endpoint() {
    let svg = br#"<svg width="50mm" height="50mm"><path d="M0,25 A25,25 0 0 1 50,25"/></svg>"#;
    let commands = converter().plan(svg).unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!((commands[1].x, commands[1].y), (50_000, 25_000));
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = std::sync::Arc::new(converter());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let converter = std::sync::Arc::clone(&converter);
            std::thread::spawn(move || {
                let svg = format!(r#"<svg width="50mm" height="50mm"><path d="M0,0 L{i},{i}"/></svg>"#);
                converter.convert_to_bytes(svg.as_bytes()).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), HEADER_LEN + 20 + TRAILER_LEN);
    }
}
