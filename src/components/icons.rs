//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use erp_core::Page;
use erp_core::grid::RowAction;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownWideNarrow as SortDesc, LuArrowUpNarrowWide as SortAsc, LuBell as Bell,
        LuChevronDown as ChevronDown, LuDownload as Download, LuEye as View, LuKey as Key,
        LuLayoutDashboard as Dashboard, LuLayoutGrid as Grid, LuLogOut as Logout,
        LuMaximize2 as Maximize, LuPackage as Articles, LuPencil as Edit, LuPlus as Plus,
        LuSearch as Search, LuSettings as Settings, LuShoppingCart as Purchases,
        LuTrash as Trash, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as Maximize, BsBell as Bell, BsBox as Articles,
        BsBoxArrowRight as Logout, BsCart as Purchases, BsChevronDown as ChevronDown,
        BsDownload as Download, BsEye as View, BsGear as Settings, BsGrid as Grid,
        BsKey as Key, BsPencil as Edit, BsPeople as Users, BsPlusLg as Plus,
        BsSearch as Search, BsSortDown as SortDesc, BsSortUp as SortAsc,
        BsSpeedometer2 as Dashboard, BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(USERS, Users);
themed_icon!(ARTICLES, Articles);
themed_icon!(PURCHASES, Purchases);
themed_icon!(SETTINGS, Settings);
themed_icon!(SEARCH, Search);
themed_icon!(GRID, Grid);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CLOSE, Close);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(PLUS, Plus);
themed_icon!(VIEW, View);
themed_icon!(EDIT, Edit);
themed_icon!(KEY, Key);
themed_icon!(TRASH, Trash);
themed_icon!(BELL, Bell);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(LOGOUT, Logout);

/// Sidebar and tab icon for a page.
pub fn page_icon(page: Page) -> Icon {
    match page {
        Page::Dashboard => DASHBOARD,
        Page::Users => USERS,
        Page::Articles => ARTICLES,
        Page::Purchases => PURCHASES,
        Page::Settings => SETTINGS,
    }
}

/// Button icon for a row action.
pub fn action_icon(action: RowAction) -> Icon {
    match action {
        RowAction::View => VIEW,
        RowAction::Edit => EDIT,
        RowAction::ChangePassword => KEY,
        RowAction::Delete => TRASH,
    }
}
