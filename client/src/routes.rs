//! Named navigation destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components only ever name a `Destination`; the path strings live
//! here so the router table in `app` and every link agree.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every page the navigation chrome links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Menu,
    Offers,
    About,
    Contact,
    Cart,
    Wishlist,
    Login,
    Signup,
    Profile,
    Orders,
    Addresses,
    AdminDashboard,
    AdminOrders,
    AdminMenu,
    AdminUsers,
    AdminCoupons,
    AdminReports,
    Privacy,
    Terms,
}

/// Primary links in the header and mobile menu.
pub const MAIN_LINKS: &[Destination] = &[
    Destination::Home,
    Destination::Menu,
    Destination::Offers,
    Destination::About,
    Destination::Contact,
];

pub const ADMIN_LINKS: &[Destination] = &[
    Destination::AdminDashboard,
    Destination::AdminOrders,
    Destination::AdminMenu,
    Destination::AdminUsers,
    Destination::AdminCoupons,
    Destination::AdminReports,
];

pub const USER_LINKS: &[Destination] = &[
    Destination::Profile,
    Destination::Orders,
    Destination::Wishlist,
    Destination::Cart,
    Destination::Addresses,
];

pub const FOOTER_LINKS: &[Destination] = &[
    Destination::Menu,
    Destination::Offers,
    Destination::About,
    Destination::Contact,
    Destination::Privacy,
    Destination::Terms,
];

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::Offers => "/offers",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Cart => "/cart",
            Self::Wishlist => "/wishlist",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Profile => "/profile",
            Self::Orders => "/orders",
            Self::Addresses => "/addresses",
            Self::AdminDashboard => "/admin",
            Self::AdminOrders => "/admin/orders",
            Self::AdminMenu => "/admin/menu",
            Self::AdminUsers => "/admin/users",
            Self::AdminCoupons => "/admin/coupons",
            Self::AdminReports => "/admin/reports",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::Offers => "Offers",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Cart => "Cart",
            Self::Wishlist => "Wishlist",
            Self::Login => "Login",
            Self::Signup => "Sign up",
            Self::Profile => "Profile",
            Self::Orders => "My orders",
            Self::Addresses => "Addresses",
            Self::AdminDashboard => "Dashboard",
            Self::AdminOrders => "Orders",
            Self::AdminMenu => "Menu items",
            Self::AdminUsers => "Users",
            Self::AdminCoupons => "Coupons",
            Self::AdminReports => "Reports",
            Self::Privacy => "Privacy",
            Self::Terms => "Terms",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Menu | Self::AdminMenu => "🍽",
            Self::Offers | Self::AdminCoupons => "％",
            Self::About => "ℹ",
            Self::Contact => "✉",
            Self::Cart => "🛒",
            Self::Wishlist => "♡",
            Self::Login | Self::Signup | Self::Profile | Self::AdminUsers => "👤",
            Self::Orders | Self::AdminOrders => "🧾",
            Self::Addresses => "📍",
            Self::AdminDashboard => "▦",
            Self::AdminReports => "📈",
            Self::Privacy | Self::Terms => "§",
        }
    }

    /// Section roots only match themselves so they don't light up on every
    /// page beneath them.
    fn exact_match_only(self) -> bool {
        matches!(self, Self::Home | Self::AdminDashboard)
    }

    /// Whether `pathname` is this destination or a page nested under it.
    pub fn is_active(self, pathname: &str) -> bool {
        let path = self.path();
        let pathname = match pathname.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        if pathname == path {
            return true;
        }
        !self.exact_match_only()
            && pathname
                .strip_prefix(path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}
