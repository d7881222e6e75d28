/// The two client-side screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Profile => "/profile",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Comments Dashboard",
            Route::Profile => "Profile",
        }
    }
}
