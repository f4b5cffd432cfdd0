use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackProps {
    #[serde(rename = "type")]
    pub kind: SnackKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SnackProps {
    pub fn new(kind: SnackKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackItem {
    pub id: String,
    #[serde(flatten)]
    pub props: SnackProps,
}

impl SnackItem {
    pub fn kind(&self) -> SnackKind {
        self.props.kind
    }

    pub fn title(&self) -> &str {
        &self.props.title
    }

    pub fn description(&self) -> Option<&str> {
        self.props.description.as_deref()
    }
}

/// Active notifications, oldest first.
///
/// Owned by whoever renders them. Ids come from a counter that lives as long
/// as the queue, so `clear` never makes an id come back.
#[derive(Debug, Default)]
pub struct SnackQueue {
    snacks: Vec<SnackItem>,
    counter: u64,
}

impl SnackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, props: SnackProps) -> String {
        self.counter += 1;
        let id = format!("snack-{}", self.counter);
        debug!("Showing {:?} snack {}: {}", props.kind, id, props.title);
        self.snacks.push(SnackItem {
            id: id.clone(),
            props,
        });
        id
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(index) = self.snacks.iter().position(|snack| snack.id == id) {
            self.snacks.remove(index);
        }
    }

    pub fn success(&mut self, title: impl Into<String>, description: Option<&str>) -> String {
        self.show_kind(SnackKind::Success, title, description)
    }

    pub fn error(&mut self, title: impl Into<String>, description: Option<&str>) -> String {
        self.show_kind(SnackKind::Error, title, description)
    }

    pub fn info(&mut self, title: impl Into<String>, description: Option<&str>) -> String {
        self.show_kind(SnackKind::Info, title, description)
    }

    fn show_kind(&mut self, kind: SnackKind, title: impl Into<String>, description: Option<&str>) -> String {
        let mut props = SnackProps::new(kind, title);
        props.description = description.map(str::to_string);
        self.show(props)
    }

    pub fn clear(&mut self) {
        self.snacks.clear();
    }

    pub fn snacks(&self) -> &[SnackItem] {
        &self.snacks
    }

    pub fn get(&self, id: &str) -> Option<&SnackItem> {
        self.snacks.iter().find(|snack| snack.id == id)
    }

    pub fn len(&self) -> usize {
        self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty()
    }
}
