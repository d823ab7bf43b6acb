//! NTRIP wire helpers: request heads, response heads, chunked transfer
//! decoding and source tables.
//!
//! NTRIP rides on HTTP/1.1 but uses its own status lines (`ICY 200 OK`,
//! `SOURCETABLE 200 OK`), so these helpers accept any `<token> <code> <reason>`
//! first line. Nothing here does I/O.

use base64::{engine::general_purpose, Engine as _};

pub const USER_AGENT: &str = "NTRIP GNSS/1.0";
pub const NTRIP_VERSION: &str = "Ntrip/2.0";

/// Upper bound on a response head before we give up on the peer.
pub const MAX_HEAD_LEN: usize = 8 * 1024;

/// Stream acceptance line sent by a caster.
pub const ICY_OK: &str = "ICY 200 OK\r\n";

// ── Requests ──────────────────────────────────────────────────────────────────

/// `Authorization` header value for HTTP Basic.
pub fn basic_auth(user: &str, password: &str) -> String {
    let token = general_purpose::STANDARD.encode(format!("{user}:{password}"));
    format!("Basic {token}")
}

/// Build an NTRIP 2.0 `GET` request head.
///
/// `path` is sent as-is after a leading `/`; pass `""` for the source table.
pub fn get_request(
    host: &str,
    port: u16,
    path: &str,
    user: &str,
    password: &str,
    keep_alive: bool,
) -> String {
    let connection = if keep_alive { "keep-alive" } else { "close" };
    format!(
        "GET /{path} HTTP/1.1\r\n\
         Host: {host}:{port}\r\n\
         Ntrip-Version: {NTRIP_VERSION}\r\n\
         User-Agent: {USER_AGENT}\r\n\
         Authorization: {}\r\n\
         Connection: {connection}\r\n\
         \r\n",
        basic_auth(user, password)
    )
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// First token of the status line (`HTTP/1.1`, `ICY`, `SOURCETABLE`).
    pub protocol: String,
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_chunked(&self) -> bool {
        self.header("Transfer-Encoding")
            .map(|v| v.to_ascii_lowercase().contains("chunked"))
            .unwrap_or(false)
    }

    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")?.trim().parse().ok()
    }
}

/// Find the end of a response head (`\r\n\r\n`) in `buf`.
///
/// Returns the parsed head and the number of bytes it occupied, `Ok(None)`
/// if more input is needed.
pub fn parse_response_head(buf: &[u8]) -> Result<Option<(ResponseHead, usize)>, HttpError> {
    let end = match find(buf, b"\r\n\r\n") {
        Some(pos) => pos,
        None if buf.len() > MAX_HEAD_LEN => return Err(HttpError::HeadTooLarge),
        None => return Ok(None),
    };
    let text = std::str::from_utf8(&buf[..end])
        .map_err(|_| HttpError::Malformed("response head is not UTF-8".into()))?;

    let mut lines = text.split("\r\n");
    let status_line = lines.next().unwrap_or_default();
    let mut parts = status_line.splitn(3, ' ');
    let protocol = parts.next().unwrap_or_default().to_string();
    let status = parts
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| HttpError::Malformed(format!("bad status line: {status_line}")))?;
    let reason = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    for line in lines {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| HttpError::Malformed(format!("bad header line: {line}")))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    Ok(Some((
        ResponseHead {
            protocol,
            status,
            reason,
            headers,
        },
        end + 4,
    )))
}

/// Request line of an incoming caster connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub method: String,
    pub path: String,
}

/// Parse the head of a client request. Header lines are skipped.
///
/// Returns `Ok(None)` until the blank line terminating the head arrives.
pub fn parse_request_head(buf: &[u8]) -> Result<Option<(RequestHead, usize)>, HttpError> {
    let end = match find(buf, b"\r\n\r\n") {
        Some(pos) => pos,
        None if buf.len() > MAX_HEAD_LEN => return Err(HttpError::HeadTooLarge),
        None => return Ok(None),
    };
    let text = std::str::from_utf8(&buf[..end])
        .map_err(|_| HttpError::Malformed("request head is not UTF-8".into()))?;
    let request_line = text.split("\r\n").next().unwrap_or_default();

    let mut parts = request_line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(_version)) if path.starts_with('/') => Ok(Some((
            RequestHead {
                method: method.to_string(),
                path: path.to_string(),
            },
            end + 4,
        ))),
        _ => Err(HttpError::Malformed(format!("bad request line: {request_line}"))),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ── Chunked transfer decoding ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkState {
    /// Reading the hex size line.
    Size,
    /// `remaining` payload bytes still to copy.
    Data { remaining: usize },
    /// Expecting the CRLF after a chunk's data.
    DataEnd,
    /// Zero-size chunk seen; skipping trailers up to the final blank line.
    Trailer,
    Done,
}

/// Incremental decoder for `Transfer-Encoding: chunked` bodies.
///
/// Feed it whatever bytes arrive; decoded payload is appended to `out`.
#[derive(Debug)]
pub struct ChunkedDecoder {
    state: ChunkState,
    line: Vec<u8>,
}

impl Default for ChunkedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedDecoder {
    pub fn new() -> Self {
        Self {
            state: ChunkState::Size,
            line: Vec::new(),
        }
    }

    /// True once the terminating zero-size chunk and trailers were consumed.
    pub fn is_done(&self) -> bool {
        self.state == ChunkState::Done
    }

    pub fn feed(&mut self, mut input: &[u8], out: &mut Vec<u8>) -> Result<(), HttpError> {
        while !input.is_empty() {
            match self.state {
                ChunkState::Done => return Ok(()),
                ChunkState::Data { remaining } => {
                    let n = remaining.min(input.len());
                    out.extend_from_slice(&input[..n]);
                    input = &input[n..];
                    self.state = if n == remaining {
                        ChunkState::DataEnd
                    } else {
                        ChunkState::Data {
                            remaining: remaining - n,
                        }
                    };
                }
                ChunkState::Size | ChunkState::DataEnd | ChunkState::Trailer => {
                    let Some(line) = self.take_line(&mut input)? else {
                        continue;
                    };
                    self.state = match self.state {
                        ChunkState::Size => {
                            let size = parse_chunk_size(&line)?;
                            if size == 0 {
                                ChunkState::Trailer
                            } else {
                                ChunkState::Data { remaining: size }
                            }
                        }
                        ChunkState::DataEnd if line.is_empty() => ChunkState::Size,
                        ChunkState::DataEnd => {
                            return Err(HttpError::BadChunk("missing CRLF after chunk data".into()))
                        }
                        ChunkState::Trailer if line.is_empty() => ChunkState::Done,
                        other => other,
                    };
                }
            }
        }
        Ok(())
    }

    /// Accumulate into `self.line` until LF; return the line without CRLF.
    fn take_line(&mut self, input: &mut &[u8]) -> Result<Option<Vec<u8>>, HttpError> {
        match input.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                self.line.extend_from_slice(&input[..pos]);
                *input = &input[pos + 1..];
                let mut line = std::mem::take(&mut self.line);
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => {
                self.line.extend_from_slice(input);
                *input = &[];
                if self.line.len() > MAX_HEAD_LEN {
                    return Err(HttpError::BadChunk("chunk line too long".into()));
                }
                Ok(None)
            }
        }
    }
}

fn parse_chunk_size(line: &[u8]) -> Result<usize, HttpError> {
    let text = std::str::from_utf8(line)
        .map_err(|_| HttpError::BadChunk("size line is not UTF-8".into()))?;
    // Chunk extensions after ';' are ignored.
    let hex = text.split(';').next().unwrap_or_default().trim();
    usize::from_str_radix(hex, 16)
        .map_err(|_| HttpError::BadChunk(format!("bad chunk size: {hex:?}")))
}

// ── Source tables ─────────────────────────────────────────────────────────────

/// Mount point names from the `STR;<name>;...` records of a source table.
pub fn parse_source_table(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| line.trim().strip_prefix("STR;"))
        .filter_map(|rest| rest.split(';').next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// One `STR` record advertising a single RTCM3 stream.
pub fn stream_record(mountpoint: &str, lat: &str, lon: &str) -> String {
    format!(
        "STR;{mountpoint};{mountpoint};RTCM 3;;2;GPS+GLO+GAL+BDS+QZSS;GNSS;VN;{lat};{lon};0;0;GNSS;none;N;N;9600;\r\n"
    )
}

/// Complete `SOURCETABLE 200 OK` response for a caster with one stream.
///
/// `Content-Length` covers the records and the `ENDSOURCETABLE` line; a
/// closing blank line follows.
pub fn source_table_response(mountpoint: &str, lat: &str, lon: &str) -> String {
    let body = format!("{}ENDSOURCETABLE\r\n", stream_record(mountpoint, lat, lon));
    format!(
        "SOURCETABLE 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{body}\r\n",
        body.len()
    )
}

/// Minimal status-only HTTP response.
pub fn status_response(code: u16) -> String {
    let reason = match code {
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "Error",
    };
    format!("HTTP/1.1 {code} {reason}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response head exceeds {MAX_HEAD_LEN} bytes")]
    HeadTooLarge,

    #[error("bad chunked encoding: {0}")]
    BadChunk(String),
}
