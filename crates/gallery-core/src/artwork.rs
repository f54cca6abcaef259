/// Opaque handle to an artwork's image asset, typically a path relative to
/// the hosting page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkRecord {
    pub title: String,
    pub artist: String,
    pub image: ImageRef,
}

impl ArtworkRecord {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, image: ImageRef) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            image,
        }
    }
}

/// The five artworks hung in the default gallery, in ring order.
pub fn default_catalog() -> Vec<ArtworkRecord> {
    [
        ("Max Verstappen", "Max Verstappen", "max_verstappen.jpg"),
        ("You Luke Huge", "You Luke", "you_luke_huge.png"),
        ("Mercy", "Mercy", "mercy.jpg"),
        ("Def Hop On Later", "Def Hop On Later", "def_hop_on_later.png"),
        ("Groundbreaking", "Groundbreaking", "groundbreaking.jpg"),
    ]
    .into_iter()
    .map(|(title, artist, image)| ArtworkRecord::new(title, artist, ImageRef::new(image)))
    .collect()
}
