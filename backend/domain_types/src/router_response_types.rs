/// Raw provider reply as read off the wire.
#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}

impl Response {
    /// Body as text for diagnostics. Invalid UTF-8 is replaced, never rejected.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.response).into_owned()
    }
}
