//! Locators for the widgets the page objects touch.
//!
//! These are object names in the application's UI tree. Keep them here, never inline,
//! so a renamed widget is a one-line fix.

pub const COMMUNITIES_PORTAL_LAYOUT: &str =
    "mainWindow_communitiesPortalLayout_CommunitiesPortalLayout";
pub const CREATE_NEW_COMMUNITY_BUTTON: &str = "mainWindow_Create_New_Community_StatusButton";

pub const CREATE_COMMUNITIES_BANNER: &str = "mainWindow_createCommunitiesBanner_StatusBanner";
pub const CREATE_COMMUNITIES_BANNER_BUTTON: &str =
    "mainWindow_createCommunitiesBanner_Create_New_Community_StatusButton";

pub const COMMUNITY_SCREEN_LAYOUT: &str = "mainWindow_communityLoader_Loader";

/// Every locator with a short description, for the `locators` command.
pub const ALL: &[(&str, &str)] = &[
    ("Communities portal layout", COMMUNITIES_PORTAL_LAYOUT),
    ("Create new community button", CREATE_NEW_COMMUNITY_BUTTON),
    ("Create communities banner", CREATE_COMMUNITIES_BANNER),
    ("Create communities banner button", CREATE_COMMUNITIES_BANNER_BUTTON),
    ("Community screen layout", COMMUNITY_SCREEN_LAYOUT),
];
