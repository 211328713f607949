//! HTTP upload service.
//!
//! `GET /` serves an upload form; `POST /convert` turns the uploaded SVG
//! into a `.rd` download. Requests run on a small worker pool and share
//! only the immutable converter.

mod multipart;
mod routes;

pub use routes::{route, Reply, ServerState, Upload, INDEX_HTML, UPLOAD_FIELD};

use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{error, info};

/// Worker threads handling requests
const WORKER_THREADS: usize = 4;

/// Bound server ready to accept requests
pub struct UploadServer {
    server: Arc<Server>,
    addr: SocketAddr,
    state: Arc<ServerState>,
}

/// Stops a running [`UploadServer`] from another thread
#[derive(Clone)]
pub struct ShutdownHandle(Arc<Server>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.unblock();
    }
}

/// Bind the listening socket without entering the request loop.
pub fn bind(state: ServerState) -> Result<UploadServer> {
    let requested = state.settings.address();
    let addr = requested
        .to_socket_addrs()
        .with_context(|| format!("Invalid listen address {}", requested))?
        .next()
        .ok_or_else(|| anyhow!("No socket address for {}", requested))?;

    let server = Server::http(addr).map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;
    let addr = server.server_addr().to_ip().unwrap_or(addr);
    info!("Listening on http://{}", addr);

    Ok(UploadServer {
        server: Arc::new(server),
        addr,
        state: Arc::new(state),
    })
}

impl UploadServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.server))
    }

    /// Run the request loop until the server is unblocked.
    pub fn run(self) -> Result<()> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(WORKER_THREADS)
            .thread_name(|i| format!("ruidakit-http-{}", i))
            .build()
            .context("Failed to create request thread pool")?;

        for request in self.server.incoming_requests() {
            let state = Arc::clone(&self.state);
            pool.spawn(move || {
                if let Err(e) = handle_request(request, &state) {
                    error!("Request error: {:#}", e);
                }
            });
        }

        info!("Server on {} stopped", self.addr);
        Ok(())
    }
}

fn handle_request(mut request: Request, state: &ServerState) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_string();
    let content_type = header_value(&request, "Content-Type");
    let limit = state.settings.max_upload_bytes;

    let reply = route(
        &method,
        &url,
        content_type.as_deref(),
        || read_body(&mut request, limit),
        state,
    );
    respond(request, reply)
}

fn read_body(request: &mut Request, limit: u64) -> Upload {
    let declared = request.body_length();
    read_limited(request.as_reader(), declared, limit)
}

/// Read at most `limit` bytes; anything longer is `TooLarge`.
fn read_limited(reader: impl Read, declared: Option<usize>, limit: u64) -> Upload {
    if declared.is_some_and(|len| len as u64 > limit) {
        return Upload::TooLarge;
    }

    let mut body = Vec::new();
    match reader.take(limit.saturating_add(1)).read_to_end(&mut body) {
        Ok(_) if body.len() as u64 > limit => Upload::TooLarge,
        Ok(_) => Upload::Body(body),
        Err(e) => Upload::Unreadable(e.to_string()),
    }
}

fn respond(request: Request, reply: Reply) -> Result<()> {
    let mut response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(make_header("Content-Type", reply.content_type)?);

    if let Some(filename) = &reply.attachment {
        let disposition = format!("attachment; filename=\"{}\"", filename);
        response = response.with_header(make_header("Content-Disposition", &disposition)?);
    }
    if let Some(allow) = reply.allow {
        response = response.with_header(make_header("Allow", allow)?);
    }

    request.respond(response)?;
    Ok(())
}

fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
        .map(|h| h.value.to_string())
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|_| anyhow!("Invalid header {}: {}", key, value))
}
