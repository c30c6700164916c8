use crate::nav::{Destination, HomeTab};

/// Display payload for a non-tabbed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCopy {
    pub title: &'static str,
    pub description: &'static str,
}

const SONGS: &[&str] = &[
    "Blinding Lights - The Weeknd",
    "Bohemian Rhapsody - Queen",
    "Billie Jean - Michael Jackson",
    "Smells Like Teen Spirit - Nirvana",
    "Rolling in the Deep - Adele",
    "Hotel California - Eagles",
    "Lose Yourself - Eminem",
    "Viva la Vida - Coldplay",
];

const ALBUMS: &[&str] = &[
    "Abbey Road - The Beatles",
    "Thriller - Michael Jackson",
    "The Dark Side of the Moon - Pink Floyd",
    "Back in Black - AC/DC",
    "Rumours - Fleetwood Mac",
    "Nevermind - Nirvana",
];

const ARTISTS: &[&str] = &[
    "Queen",
    "Taylor Swift",
    "Kendrick Lamar",
    "Daft Punk",
    "Radiohead",
    "Arctic Monkeys",
];

/// Static copy for every destination. Total over the closed set, so an
/// unrenderable screen is unrepresentable.
pub fn screen_copy(dest: Destination) -> ScreenCopy {
    match dest {
        Destination::Home => ScreenCopy {
            title: "Home",
            description: "Your music at a glance",
        },
        Destination::Search => ScreenCopy {
            title: "Search",
            description: "Search for music, podcasts and more",
        },
        Destination::Library => ScreenCopy {
            title: "Your Library",
            description: "Playlists and albums you've saved",
        },
        Destination::LikedSongs => ScreenCopy {
            title: "Liked Songs",
            description: "All your liked songs in one place",
        },
        Destination::CreatePlaylist => ScreenCopy {
            title: "Create Playlist",
            description: "Name your playlist and start adding songs",
        },
        Destination::YourEpisodes => ScreenCopy {
            title: "Your Episodes",
            description: "Podcast episodes you've saved for later",
        },
    }
}

/// Fixed sample rows for each Home tab, in display order.
pub fn tab_items(tab: HomeTab) -> &'static [&'static str] {
    match tab {
        HomeTab::Songs => SONGS,
        HomeTab::Albums => ALBUMS,
        HomeTab::Artists => ARTISTS,
    }
}

pub fn tab_icon(tab: HomeTab) -> &'static str {
    match tab {
        HomeTab::Songs => "",
        HomeTab::Albums => "",
        HomeTab::Artists => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_copy_is_pinned() {
        let copy = screen_copy(Destination::Search);
        assert_eq!(copy.title, "Search");
        assert_eq!(copy.description, "Search for music, podcasts and more");
    }

    #[test]
    fn test_album_samples_are_six_in_order() {
        let albums = tab_items(HomeTab::Albums);
        assert_eq!(albums.len(), 6);
        assert_eq!(albums[0], "Abbey Road - The Beatles");
        assert_eq!(albums[5], "Nevermind - Nirvana");
    }

    #[test]
    fn test_every_screen_has_copy() {
        for dest in Destination::ALL {
            let copy = screen_copy(dest);
            assert!(!copy.title.is_empty());
            assert!(!copy.description.is_empty());
        }
    }

    #[test]
    fn test_every_tab_has_rows() {
        for tab in HomeTab::ALL {
            assert!(!tab_items(tab).is_empty());
        }
    }
}
