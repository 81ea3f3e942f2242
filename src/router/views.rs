/// Every feature view mounted under the main layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ViewId {
    CalendarView,
    DocList,
    DocDetail,
    DocUpload,
    ForumList,
    ForumPost,
    ForumDetail,
    MarketList,
    ProductDetail,
    ProverbList,
    ProverbDetail,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CalendarView => "calendar-view",
            Self::DocList => "doc-list",
            Self::DocDetail => "doc-detail",
            Self::DocUpload => "doc-upload",
            Self::ForumList => "forum-list",
            Self::ForumPost => "forum-post",
            Self::ForumDetail => "forum-detail",
            Self::MarketList => "market-list",
            Self::ProductDetail => "product-detail",
            Self::ProverbList => "proverb-list",
            Self::ProverbDetail => "proverb-detail",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CalendarView => "Calendrier",
            Self::DocList => "Documentation",
            Self::DocDetail => "Document",
            Self::DocUpload => "Déposer un document",
            Self::ForumList => "Forum",
            Self::ForumPost => "Nouveau sujet",
            Self::ForumDetail => "Discussion",
            Self::MarketList => "Marché",
            Self::ProductDetail => "Produit",
            Self::ProverbList => "Proverbes",
            Self::ProverbDetail => "Proverbe",
        }
    }

    /// Detail views read an `:id` segment.
    pub fn takes_id(&self) -> bool {
        matches!(
            self,
            Self::DocDetail | Self::ForumDetail | Self::ProductDetail | Self::ProverbDetail
        )
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_views_take_id() {
        assert!(ViewId::ForumDetail.takes_id());
        assert!(!ViewId::ForumPost.takes_id());
        assert_eq!(ViewId::DocUpload.to_string(), "doc-upload");
    }
}
