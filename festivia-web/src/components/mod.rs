pub(crate) mod loading;
pub(crate) mod page_nav;
pub(crate) mod stat_card;
