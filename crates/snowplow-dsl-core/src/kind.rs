//! The closed set of event kinds the DSL can dispatch.

use std::fmt;
use std::str::FromStr;

use crate::error::DslError;
use crate::schema::{self, SchemaId};

/// Event kinds recognized by the dispatch helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A page was shown or hidden.
    PageView,
    /// An element was clicked.
    Click,
    /// A list of arbitrary items was shown.
    Impression,
    /// A list of products was shown.
    GoodsImpression,
    /// A single item was shown.
    SingleImpression,
}

impl EventKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::PageView,
        Self::Click,
        Self::Impression,
        Self::GoodsImpression,
        Self::SingleImpression,
    ];

    /// The snake-case tag for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PageView => "page_view",
            Self::Click => "click",
            Self::Impression => "impression",
            Self::GoodsImpression => "goods_impression",
            Self::SingleImpression => "single_impression",
        }
    }

    /// The schema every record of this kind is tagged with.
    #[must_use]
    pub fn schema(self) -> SchemaId {
        match self {
            Self::PageView => schema::PAGE_VIEW,
            Self::Click => schema::CLICK,
            Self::Impression | Self::GoodsImpression | Self::SingleImpression => {
                schema::IMPRESSIONS
            }
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = DslError;

    /// Parses a snake-case tag (`"page_view"`) or a type name (`"PageView"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page_view" | "PageView" => Ok(Self::PageView),
            "click" | "Click" => Ok(Self::Click),
            "impression" | "Impression" => Ok(Self::Impression),
            "goods_impression" | "GoodsImpression" => Ok(Self::GoodsImpression),
            "single_impression" | "SingleImpression" => Ok(Self::SingleImpression),
            other => Err(DslError::UnsupportedKind(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for kind in EventKind::ALL {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_type_names_are_accepted() {
        assert_eq!("GoodsImpression".parse::<EventKind>().unwrap(), EventKind::GoodsImpression);
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let err = "banner".parse::<EventKind>().unwrap_err();

        match err {
            DslError::UnsupportedKind(name) => assert_eq!(name, "banner"),
            other => panic!("expected UnsupportedKind, got {other:?}"),
        }
    }

    #[test]
    fn test_impression_variants_share_one_schema() {
        assert_eq!(EventKind::Impression.schema(), schema::IMPRESSIONS);
        assert_eq!(EventKind::GoodsImpression.schema(), schema::IMPRESSIONS);
        assert_eq!(EventKind::SingleImpression.schema(), schema::IMPRESSIONS);
        assert_eq!(EventKind::PageView.schema(), schema::PAGE_VIEW);
    }
}
