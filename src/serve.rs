//! Static host for the site and its content store.
//!
//! Built on `tiny_http`. Request resolution:
//!
//! ```text
//!   GET <prefix>/<name>.json ──► [content].dir/<name>.json   (404 if absent)
//!   GET <path>               ──► [serve].root/<path>         (file or dir/index.html)
//!   GET <route>              ──► [serve].root/index.html     (extensionless, client routing)
//!   anything else            ──► 404
//! ```

use crate::{
    config::{SiteConfig, cfg},
    content::DocumentName,
    log,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Ports tried after the configured one is taken.
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Serve until Ctrl+C.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c.serve.interface.parse()?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{addr}");
    log!("serve"; "documents from {}", c.content.dir.display());

    handle_requests(&server, &c);
    Ok(())
}

/// Answer requests until the server is unblocked.
fn handle_requests(server: &Server, config: &SiteConfig) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config) {
            log!("serve"; "request error: {e}");
        }
    }
}

/// Bind `base_port`, moving up one port at a time while it is in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {base_port} in use, using {port} instead");
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {max_retries} attempts (ports {base_port}-{}): {}",
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Resolution
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    File(PathBuf),
    NotFound,
}

/// Map a request URL to a file on disk.
fn resolve(url: &str, config: &SiteConfig) -> Resolved {
    let raw_path = url.split(['?', '#']).next().unwrap_or_default();
    let Ok(path) = urlencoding::decode(raw_path) else {
        return Resolved::NotFound;
    };
    let path = path.as_ref();

    // A non-empty prefix reserves its namespace for the store; at the root
    // only document names do.
    let prefix = &config.content.prefix;
    if let Some(file) = strip_prefix(path, prefix)
        && (is_document(file) || !prefix.trim_end_matches('/').is_empty())
    {
        return resolve_document(file, &config.content.dir);
    }

    let request_path = path.trim_matches('/');
    if !is_safe(request_path) {
        return Resolved::NotFound;
    }

    let root = &config.serve.root;
    let local_path = root.join(request_path);
    if local_path.is_file() {
        return Resolved::File(local_path);
    }

    let index = if local_path.is_dir() {
        local_path.join("index.html")
    } else if Path::new(request_path).extension().is_none() {
        root.join("index.html")
    } else {
        return Resolved::NotFound;
    };

    if index.is_file() {
        Resolved::File(index)
    } else {
        Resolved::NotFound
    }
}

/// The file name after `<prefix>/`, if `path` is under the prefix.
fn strip_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix.trim_end_matches('/'))?;
    rest.strip_prefix('/').filter(|file| !file.contains('/'))
}

/// Only the store's own documents are served from the content directory.
fn resolve_document(file: &str, dir: &Path) -> Resolved {
    let path = dir.join(file);
    if is_document(file) && path.is_file() {
        Resolved::File(path)
    } else {
        Resolved::NotFound
    }
}

fn is_document(file: &str) -> bool {
    DocumentName::ALL.iter().any(|name| name.file_name() == file)
}

/// Reject `..` and absolute components so requests stay under the root.
fn is_safe(request_path: &str) -> bool {
    Path::new(request_path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// ============================================================================
// Response Helpers
// ============================================================================

fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    match resolve(request.url(), config) {
        Resolved::File(path) => serve_file(request, &path),
        Resolved::NotFound => serve_not_found(request),
    }
}

fn header(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value).map_err(|()| anyhow!("invalid header value `{value}`"))
}

fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = Response::from_data(content).with_header(header(guess_content_type(path))?);
    request.respond(response)?;
    Ok(())
}

fn serve_not_found(request: Request) -> Result<()> {
    let response = Response::from_string("404 Not Found")
        .with_status_code(StatusCode(404))
        .with_header(header("text/plain; charset=utf-8")?);
    request.respond(response)?;
    Ok(())
}

/// Guess MIME content type from file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
