//! The site's route table.
//!
//! Browsing is ungated, including plant details; only the profile view
//! requires a signed-in user. Booking a consultation is gated at the action
//! instead (see [`crate::booking`]).

use greennest_core::ItemId;
use greennest_session::RouteAccess;

/// A named destination in the site.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Signup,
    ForgotPassword,
    Plants,
    PlantDetails,
    PlantOfTheWeek,
    Blog,
    BlogDetails,
    Profile,
}

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    /// The `:id` path parameter for detail pages.
    pub item: Option<ItemId>,
    /// The path as requested, kept for use as a post-login return path.
    pub path: String,
}

impl RouteMatch {
    pub fn access(&self) -> RouteAccess {
        match self.page {
            Page::Profile => RouteAccess::Protected,
            _ => RouteAccess::Public,
        }
    }
}

/// Match a request path against the route table.
///
/// Trailing slashes are tolerated; unknown paths return `None` (the caller
/// renders its error page).
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let (page, item) = match segments.as_slice() {
        [] => (Page::Home, None),
        ["login"] => (Page::Login, None),
        ["signup"] => (Page::Signup, None),
        ["forgot-password"] => (Page::ForgotPassword, None),
        ["plants"] => (Page::Plants, None),
        ["plants", id] => (Page::PlantDetails, Some(ItemId::from(*id))),
        ["plant-of-the-week"] => (Page::PlantOfTheWeek, None),
        ["blog"] => (Page::Blog, None),
        ["blog", id] => (Page::BlogDetails, Some(ItemId::from(*id))),
        ["profile"] => (Page::Profile, None),
        _ => return None,
    };

    Some(RouteMatch {
        page,
        item,
        path: path.to_string(),
    })
}
