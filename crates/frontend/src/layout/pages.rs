//! Pages reachable from the sidebar: the single source of keys and titles.

/// A page rendered in the center zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    EcommerceDashboard,
    OrderList,
}

impl Page {
    pub fn all() -> [Page; 2] {
        [Page::EcommerceDashboard, Page::OrderList]
    }

    /// Key used in the sidebar and in the `?active=` query.
    pub fn key(&self) -> &'static str {
        match self {
            Page::EcommerceDashboard => "d400_ecommerce",
            Page::OrderList => "a001_order_list",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|page| page.key() == key)
    }

    /// Breadcrumb title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::EcommerceDashboard => "eCommerce",
            Page::OrderList => "Orders",
        }
    }

    /// Breadcrumb section.
    pub fn section(&self) -> &'static str {
        match self {
            Page::EcommerceDashboard => "Dashboards",
            Page::OrderList => "Pages",
        }
    }
}
