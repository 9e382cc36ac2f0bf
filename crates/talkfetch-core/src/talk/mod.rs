//! Talk values and video URL derivation.
//!
//! A talk's video lives at `https://video.fosdem.org/{year}/{room}/{id}.mp4`,
//! where year and id come from the talk's schedule page URL and the room is a
//! normalized form of the calendar location.

mod location;
mod path;

pub use location::normalize_location;
pub use path::path_year_and_id;

/// Base of every derived video URL.
const VIDEO_BASE_URL: &str = "https://video.fosdem.org";

/// One schedule entry mapped to exactly one downloadable video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    url: String,
    year: String,
    id: String,
}

impl Talk {
    pub fn new(url: impl Into<String>, year: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            year: year.into(),
            id: id.into(),
        }
    }

    /// Remote video URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Builds a [`Talk`] from a calendar event's reference URL and location.
///
/// Never fails: a reference URL without path segments yields empty year and
/// id, and therefore a malformed but well-defined video URL.
///
/// # Examples
///
/// - `("https://fosdem.org/2024/schedule/event/talkA/", "Janson Room")`
///   → `https://video.fosdem.org/2024/janson/talkA.mp4`
pub fn derive_talk(reference_url: &str, location: &str) -> Talk {
    let (year, id) = path_year_and_id(reference_url);
    let room = normalize_location(location);
    let url = format!("{}/{}/{}/{}.mp4", VIDEO_BASE_URL, year, room, id);
    Talk { url, year, id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_talk_janson() {
        let talk = derive_talk("https://fosdem.org/2024/schedule/event/talkA/", "Janson Room");
        assert_eq!(talk.url(), "https://video.fosdem.org/2024/janson/talkA.mp4");
        assert_eq!(talk.year(), "2024");
        assert_eq!(talk.id(), "talkA");
    }

    #[test]
    fn derive_talk_dotted_room() {
        let talk = derive_talk(
            "https://fosdem.org/2023/schedule/event/rust_async/",
            "H.1302 (Depage)",
        );
        assert_eq!(
            talk.url(),
            "https://video.fosdem.org/2023/h1302/rust_async.mp4"
        );
    }

    #[test]
    fn derive_talk_without_path() {
        let talk = derive_talk("https://fosdem.org/", "K.1.105");
        assert_eq!(talk.year(), "");
        assert_eq!(talk.id(), "");
        assert_eq!(talk.url(), "https://video.fosdem.org//k1105/.mp4");
    }

    #[test]
    fn talk_new_keeps_fields() {
        let talk = Talk::new("http://127.0.0.1/a.mp4", "2025", "a");
        assert_eq!(talk.url(), "http://127.0.0.1/a.mp4");
        assert_eq!(talk.year(), "2025");
        assert_eq!(talk.id(), "a");
    }
}
