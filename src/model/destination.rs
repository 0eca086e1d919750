/// One tag configured on a tag-supporting destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTag {
    pub id: u64,
    pub name: String,
}

/// The posting destination, resolved once per wizard run into a
/// capability-tagged variant rather than re-checked ad hoc.
#[derive(Debug, Clone)]
pub enum Destination {
    /// Ordinary text channel; summaries are posted as plain messages and no
    /// tags are applied.
    Plain { channel_id: u64 },
    /// Forum channel supporting threaded posts with applied tags.
    TaggedForum {
        channel_id: u64,
        tags: Vec<DestinationTag>,
    },
}

impl Destination {
    pub fn channel_id(&self) -> u64 {
        match self {
            Destination::Plain { channel_id } => *channel_id,
            Destination::TaggedForum { channel_id, .. } => *channel_id,
        }
    }

    pub fn supports_tags(&self) -> bool {
        matches!(self, Destination::TaggedForum { .. })
    }

    /// The destination's configured tag set; empty for plain channels.
    pub fn tags(&self) -> &[DestinationTag] {
        match self {
            Destination::Plain { .. } => &[],
            Destination::TaggedForum { tags, .. } => tags,
        }
    }
}
