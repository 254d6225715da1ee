//! `docker-compose.yml` service fragments.
//!
//! Each provisioning step that owns a container contributes one service
//! block. Blocks are delimited by a marker comment so that a second run
//! can tell which services are already there.

/// Seed content for `docker-compose.yml`; fragments are appended below it.
pub const COMPOSE_HEADER: &str = "version: \"3.8\"\n\nservices:\n";

const MARKER_PREFIX: &str = "# >>> stackseed:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeFragment {
    pub service: String,
    /// Service body, already indented under `services:`.
    pub body: String,
}

impl ComposeFragment {
    pub fn new(service: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            body: body.into(),
        }
    }

    pub fn marker(&self) -> String {
        format!("{MARKER_PREFIX}{}", self.service)
    }

    /// Marker line followed by the body, newline terminated.
    pub fn render(&self) -> String {
        let mut out = format!("  {}\n", self.marker());
        out.push_str(&self.body);
        if !self.body.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// Append this fragment to an existing document.
    ///
    /// Returns `None` when the document already carries this service's
    /// marker. An empty document gets [`COMPOSE_HEADER`] first.
    pub fn merge_into(&self, existing: &str) -> Option<String> {
        let marker = self.marker();
        if existing.lines().any(|line| line.trim() == marker) {
            return None;
        }

        let mut doc = if existing.trim().is_empty() {
            COMPOSE_HEADER.to_string()
        } else {
            existing.to_string()
        };
        if !doc.ends_with('\n') {
            doc.push('\n');
        }
        doc.push_str(&self.render());
        Some(doc)
    }
}
