use crate::common::{
    resources::{
        AGRICULTURAL_NEWS,
        EVENTS,
        EXPERTS,
        Event,
        Expert,
        FARMING_TIPS,
        FarmingTip,
        GOVERNMENT_SCHEMES,
        GovernmentScheme,
        NewsItem,
    },
    team::{TEAM_MEMBERS, TeamMember},
};

/// Source of the collections shown on the info pages. Views only go through
/// this trait, so the compiled-in content below can later be swapped for a
/// backend-served implementation without touching them.
pub trait ContentProvider {
    fn team_members(&self) -> &[TeamMember];
    fn farming_tips(&self) -> &[FarmingTip];
    fn government_schemes(&self) -> &[GovernmentScheme];
    fn agricultural_news(&self) -> &[NewsItem];
    fn experts(&self) -> &[Expert];
    fn events(&self) -> &[Event];
}

pub struct StaticContent;

impl ContentProvider for StaticContent {
    fn team_members(&self) -> &[TeamMember] {
        TEAM_MEMBERS
    }

    fn farming_tips(&self) -> &[FarmingTip] {
        FARMING_TIPS
    }

    fn government_schemes(&self) -> &[GovernmentScheme] {
        GOVERNMENT_SCHEMES
    }

    fn agricultural_news(&self) -> &[NewsItem] {
        AGRICULTURAL_NEWS
    }

    fn experts(&self) -> &[Expert] {
        EXPERTS
    }

    fn events(&self) -> &[Event] {
        EVENTS
    }
}

pub static CONTENT: StaticContent = StaticContent;

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_returns_full_collections() {
        let provider: &dyn ContentProvider = &CONTENT;
        assert_eq!(3, provider.team_members().len());
        assert_eq!(4, provider.farming_tips().len());
        assert_eq!(3, provider.government_schemes().len());
        assert_eq!(3, provider.agricultural_news().len());
        assert_eq!(3, provider.experts().len());
        assert_eq!(3, provider.events().len());
    }
}
