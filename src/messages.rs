//! Request envelope shared between the app and the background handler.
//!
//! The kinds form a closed set; each request is answered with a plain-text
//! response echoed back to the app together with the request it answers.

use serde::{Deserialize, Serialize};

/// A request sent from the app to the background handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Request {
    /// Ask the background to reload the page surface.
    ReloadRequest,
    /// Ask the background to open a URL in a new tab.
    OpenTabRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keeps_the_wire_shape() {
        let open = Request::OpenTabRequest("https://example.com/docs".into());
        let json = serde_json::to_string(&open).unwrap();
        assert_eq!(
            json,
            r#"{"type":"openTabRequest","payload":"https://example.com/docs"}"#
        );

        let reload = serde_json::to_string(&Request::ReloadRequest).unwrap();
        assert_eq!(reload, r#"{"type":"reloadRequest"}"#);
    }
}
