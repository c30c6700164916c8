use thiserror::Error;

/// A string route id that does not name any [`Destination`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route `{0}`")]
pub struct UnknownRoute(pub String);

/// Top-level screens reachable from the side drawer. The set is closed;
/// nothing is added or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Home,
    Search,
    Library,
    LikedSongs,
    CreatePlaylist,
    YourEpisodes,
}

impl Destination {
    /// Drawer order. The first entry is the fallback default.
    pub const ALL: [Destination; 6] = [
        Destination::Home,
        Destination::Search,
        Destination::Library,
        Destination::LikedSongs,
        Destination::CreatePlaylist,
        Destination::YourEpisodes,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Search => "search",
            Destination::Library => "library",
            Destination::LikedSongs => "liked",
            Destination::CreatePlaylist => "create",
            Destination::YourEpisodes => "episodes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Destination::Home => "Home",
            Destination::Search => "Search",
            Destination::Library => "Your Library",
            Destination::LikedSongs => "Liked Songs",
            Destination::CreatePlaylist => "Create Playlist",
            Destination::YourEpisodes => "Your Episodes",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Destination::Home => "",
            Destination::Search => "",
            Destination::Library => "󰲸",
            Destination::LikedSongs => "",
            Destination::CreatePlaylist => "",
            Destination::YourEpisodes => "",
        }
    }

    pub fn from_route(route: &str) -> Result<Self, UnknownRoute> {
        Self::ALL
            .iter()
            .find(|dest| dest.route() == route)
            .copied()
            .ok_or_else(|| UnknownRoute(route.to_string()))
    }

    /// Position in [`Self::ALL`], used to seed the drawer cursor.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|dest| *dest == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_round_trip() {
        for dest in Destination::ALL {
            assert_eq!(Destination::from_route(dest.route()), Ok(dest));
        }
    }

    #[test]
    fn test_unknown_route_is_an_error() {
        let err = Destination::from_route("podcasts").unwrap_err();
        assert_eq!(err, UnknownRoute("podcasts".to_string()));
    }

    #[test]
    fn test_default_is_first_member() {
        assert_eq!(Destination::default(), Destination::ALL[0]);
        assert_eq!(Destination::default(), Destination::Home);
    }

    #[test]
    fn test_index_matches_drawer_order() {
        assert_eq!(Destination::Home.index(), 0);
        assert_eq!(Destination::YourEpisodes.index(), 5);
    }
}
