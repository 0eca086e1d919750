/// One selectable label from the tag catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption {
    pub name: String,
    pub description: Option<String>,
}

impl TagOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }
}
