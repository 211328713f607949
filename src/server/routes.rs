//! Request routing for the upload service.
//!
//! Routing is kept apart from the socket so each endpoint can be driven
//! directly with a method, a URL and a body.

use super::multipart;
use ruidakit_camtools::RuidaConverter;
use ruidakit_settings::ServerSettings;
use tiny_http::Method;
use tracing::{debug, warn};

/// Upload page served at `/`
pub const INDEX_HTML: &str = include_str!("../../web/index.html");

/// Form field carrying the drawing
pub const UPLOAD_FIELD: &str = "svg";

pub mod mime {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// State shared by every request thread
#[derive(Debug)]
pub struct ServerState {
    pub converter: RuidaConverter,
    pub settings: ServerSettings,
}

impl ServerState {
    pub fn new(converter: RuidaConverter, settings: ServerSettings) -> Self {
        Self {
            converter,
            settings,
        }
    }
}

/// Result of reading a request body
#[derive(Debug)]
pub enum Upload {
    Body(Vec<u8>),
    TooLarge,
    Unreadable(String),
}

/// Response ready to be written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// File name for `Content-Disposition: attachment`
    pub attachment: Option<String>,
    /// Value of the `Allow` header on 405
    pub allow: Option<&'static str>,
}

impl Reply {
    fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: mime::PLAIN,
            body: message.into().into_bytes(),
            attachment: None,
            allow: None,
        }
    }

    fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: mime::HTML,
            body: body.as_bytes().to_vec(),
            attachment: None,
            allow: None,
        }
    }

    fn download(body: Vec<u8>, filename: &str) -> Self {
        Self {
            status: 200,
            content_type: mime::OCTET_STREAM,
            body,
            attachment: Some(filename.to_string()),
            allow: None,
        }
    }
}

/// Dispatch one request. `read_body` is only called for uploads.
pub fn route(
    method: &Method,
    url: &str,
    content_type: Option<&str>,
    read_body: impl FnOnce() -> Upload,
    state: &ServerState,
) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    debug!("{} {}", method, path);

    match path {
        "/" | "/index.html" => match method {
            Method::Get | Method::Head => Reply::html(INDEX_HTML),
            _ => method_not_allowed("GET"),
        },
        "/convert" => {
            if *method != Method::Post {
                return method_not_allowed("POST");
            }
            match read_body() {
                Upload::Body(body) => convert_upload(&body, content_type, state),
                Upload::TooLarge => Reply::text(
                    413,
                    format!(
                        "Upload exceeds the {} byte limit",
                        state.settings.max_upload_bytes
                    ),
                ),
                Upload::Unreadable(reason) => {
                    warn!("Failed to read upload: {}", reason);
                    Reply::text(400, "Failed to read SVG data")
                }
            }
        }
        _ => Reply::text(404, "404 Not Found"),
    }
}

fn method_not_allowed(allow: &'static str) -> Reply {
    let mut reply = Reply::text(405, format!("Only {} method is allowed", allow));
    reply.allow = Some(allow);
    reply
}

fn convert_upload(body: &[u8], content_type: Option<&str>, state: &ServerState) -> Reply {
    let svg = match content_type.and_then(multipart::boundary) {
        Some(boundary) => match multipart::find_field(body, boundary, UPLOAD_FIELD) {
            Some(svg) => svg,
            None => return Reply::text(400, "Failed to read SVG file from form"),
        },
        None => body,
    };
    if svg.iter().all(u8::is_ascii_whitespace) {
        return Reply::text(400, "Empty SVG upload");
    }

    match state.converter.convert_to_bytes(svg) {
        Ok(bytes) => Reply::download(bytes, &state.settings.download_filename),
        Err(e) => {
            warn!("Conversion failed: {}", e);
            Reply::text(422, e.to_string())
        }
    }
}
