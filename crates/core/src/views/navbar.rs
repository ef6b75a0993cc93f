use crate::routing::Route;

/// A labelled link to a route.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Top navigation: brand on the left, page links on the right.
#[derive(Debug, Clone)]
pub struct Navbar {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            brand: "Teleskop",
            links: vec![
                NavLink { label: "API", route: Route::Home },
                NavLink { label: "Assets", route: Route::Assets },
                NavLink { label: "Contact", route: Route::Contact },
            ],
        }
    }

    /// Compact menu entries; the landing page is "Home" here.
    pub fn menu_links(&self) -> Vec<NavLink> {
        self.links
            .iter()
            .map(|l| NavLink {
                label: if l.route == Route::Home { "Home" } else { l.label },
                route: l.route.clone(),
            })
            .collect()
    }

    /// The link for `route`, if the navbar has one.
    pub fn active(&self, route: &Route) -> Option<&NavLink> {
        self.links.iter().find(|l| &l.route == route)
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}
