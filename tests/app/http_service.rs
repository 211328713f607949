use ruidakit::server::{self, ServerState};
use ruidakit::{ContainerTemplate, ConversionOptions, RuidaConverter, ServerSettings};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};

struct RawResponse {
    status: u16,
    head: String,
    body: Vec<u8>,
}

fn send(addr: SocketAddr, request: &[u8]) -> RawResponse {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(request).unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).unwrap();

    let split = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = String::from_utf8_lossy(&raw[..split]).to_string();
    let status = head.split_whitespace().nth(1).unwrap().parse().unwrap();
    RawResponse {
        status,
        head,
        body: raw[split + 4..].to_vec(),
    }
}

fn post(path: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut request = format!(
        "POST {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: {}\r\nContent-Length: {}\r\n\r\n",
        path,
        content_type,
        body.len()
    )
    .into_bytes();
    request.extend_from_slice(body);
    request
}

#[test]
fn test_upload_service_end_to_end() {
    let template = ContainerTemplate::from_bytes(&[0x11; 600]).unwrap();
    let settings = ServerSettings {
        port: 0,
        max_upload_bytes: 4096,
        ..ServerSettings::default()
    };
    let state = ServerState::new(
        RuidaConverter::new(template, ConversionOptions::default()),
        settings,
    );

    let server = server::bind(state).unwrap();
    let addr = server.addr();
    let shutdown = server.shutdown_handle();
    let handle = std::thread::spawn(move || server.run());

    let page = send(
        addr,
        b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    );
    assert_eq!(page.status, 200);
    assert!(String::from_utf8_lossy(&page.body).contains("multipart/form-data"));

    let svg = br#"<svg width="50mm" height="50mm"><path d="M0,0 L50,50"/></svg>"#;
    let mut form = b"--B0und\r\nContent-Disposition: form-data; name=\"svg\"; filename=\"d.svg\"\r\nContent-Type: image/svg+xml\r\n\r\n".to_vec();
    form.extend_from_slice(svg);
    form.extend_from_slice(b"\r\n--B0und--\r\n");
    let job = send(addr, &post("/convert", "multipart/form-data; boundary=B0und", &form));
    assert_eq!(job.status, 200);
    assert!(job.head.contains("attachment; filename=\"output.rd\""));
    assert_eq!(job.body.len(), 512 + 20 + 6);
    assert_eq!(job.body[512], 0x04 ^ 0xAC);

    let rejected = send(addr, &post("/convert", "image/svg+xml", b"<svg></svg>"));
    assert_eq!(rejected.status, 422);

    let too_big = send(addr, &post("/convert", "image/svg+xml", &[b' '; 5000]));
    assert_eq!(too_big.status, 413);

    let wrong_method = send(
        addr,
        b"GET /convert HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    );
    assert_eq!(wrong_method.status, 405);

    shutdown.shutdown();
    handle.join().unwrap().unwrap();
}
