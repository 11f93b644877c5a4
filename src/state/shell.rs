//! App shell state: drawer routes, header title and the search toggle.

/// Top-level destinations, in drawer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    LatestUpdates,
    WallpapersList,
    MyList,
    MyFavoriteWallpapers,
    RecentlyWatched,
    Settings,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::LatestUpdates,
        Route::WallpapersList,
        Route::MyList,
        Route::MyFavoriteWallpapers,
        Route::RecentlyWatched,
        Route::Settings,
    ];

    /// Stable route key
    pub fn key(self) -> &'static str {
        match self {
            Route::LatestUpdates => "LatestUpdates",
            Route::WallpapersList => "WallpapersList",
            Route::MyList => "MyList",
            Route::MyFavoriteWallpapers => "MyFavoriteWallpapers",
            Route::RecentlyWatched => "RecentlyWatched",
            Route::Settings => "Settings",
        }
    }

    /// Human-readable label for the drawer and the header
    pub fn label(self) -> &'static str {
        match self {
            Route::LatestUpdates => "Latest Updates",
            Route::WallpapersList => "Wallpapers List",
            Route::MyList => "My List",
            Route::MyFavoriteWallpapers => "My Favorite Wallpapers",
            Route::RecentlyWatched => "Recently Watched",
            Route::Settings => "Settings",
        }
    }

    /// Only Latest Updates has a real screen; the rest are placeholders
    pub fn is_gallery(self) -> bool {
        self == Route::LatestUpdates
    }
}

/// What the header title area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderContent<'a> {
    Title(&'static str),
    Search(&'a str),
}

#[derive(Debug, Clone, Default)]
pub struct ShellState {
    active: Route,
    drawer_open: bool,
    is_searching: bool,
    /// Kept for a future search feature; nothing reads it for filtering yet
    search_query: String,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Route {
        self.active
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Switch screens. Closes the drawer, and the search field loses focus.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = route.key(), "navigate");
        self.active = route;
        self.drawer_open = false;
        self.is_searching = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Header search control
    pub fn toggle_search(&mut self) {
        self.is_searching = !self.is_searching;
    }

    pub fn set_query(&mut self, query: String) {
        self.search_query = query;
    }

    /// The search field lost focus: fall back to the title
    pub fn blur_search(&mut self) {
        self.is_searching = false;
    }

    pub fn header(&self) -> HeaderContent<'_> {
        if self.is_searching {
            HeaderContent::Search(&self.search_query)
        } else {
            HeaderContent::Title(self.active.label())
        }
    }
}
