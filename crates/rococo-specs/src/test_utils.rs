use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::SpecsConfig;
use crate::entities::{Artist, EntityType, ImageMetadata, Museum, Painting};
use crate::store::memory::MemRepository;

pub const FRANCE: Uuid = Uuid::from_u128(0xbcb125cd_159f_4e89_b954_8e6ca25ad973);
pub const USA: Uuid = Uuid::from_u128(0x5298412e_2578_4780_b412_e3b189da86fe);
pub const RUSSIA: Uuid = Uuid::from_u128(0x7b2f5a3c_1d2e_4f60_8a9b_0c1d2e3f4a5b);

/// A small, fully in-memory gallery: catalog plus one repository per entity.
pub struct TestEnv {
    pub catalog: Catalog,
    pub artists: MemRepository<Artist>,
    pub museums: MemRepository<Museum>,
    pub paintings: MemRepository<Painting>,
    pub images: MemRepository<ImageMetadata>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config(&SpecsConfig::default())
    }

    pub fn with_config(config: &SpecsConfig) -> Self {
        let artists = artists();
        let museums = museums();
        let paintings = paintings(&artists, &museums);
        let images = images(&artists, &paintings);

        Self {
            catalog: Catalog::new(config).expect("fixture catalog must build"),
            artists: MemRepository::with_records(artists),
            museums: MemRepository::with_records(museums),
            paintings: MemRepository::with_records(paintings),
            images: MemRepository::with_records(images),
        }
    }
}

pub fn artist(name: &str) -> Artist {
    Artist {
        id: Uuid::new_v4(),
        name: name.to_string(),
        biography: None,
        created_date: None,
    }
}

pub fn museum(title: &str, city: &str, country_id: Uuid) -> Museum {
    Museum {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        country_id: Some(country_id),
        city: Some(city.to_string()),
        created_date: None,
    }
}

pub fn painting(title: &str, artist_id: Uuid, museum_id: Option<Uuid>) -> Painting {
    Painting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        artist_id,
        museum_id,
    }
}

pub fn image(entity_type: EntityType, entity_id: Uuid) -> ImageMetadata {
    ImageMetadata {
        id: Uuid::new_v4(),
        entity_type,
        entity_id,
        format: "png".to_string(),
        content_hash: None,
    }
}

pub fn artists() -> Vec<Artist> {
    ["Rembrandt", "Claude Monet", "Ivan Shishkin", "Vincent van Gogh"]
        .into_iter()
        .map(artist)
        .collect()
}

pub fn museums() -> Vec<Museum> {
    vec![
        museum("Orsay Museum", "Paris", FRANCE),
        museum("Museum of Modern Art", "New York", USA),
        museum("Hermitage Museum", "Saint Petersburg", RUSSIA),
        museum("Louvre", "Paris", FRANCE),
        museum("Metropolitan Museum of Art", "New York", USA),
    ]
}

/// One painting per artist, hung in museums in fixture order; the last has no museum.
pub fn paintings(artists: &[Artist], museums: &[Museum]) -> Vec<Painting> {
    let titles = ["The Night Watch", "Water Lilies", "Morning in a Pine Forest", "The Starry Night"];
    artists
        .iter()
        .zip(titles)
        .enumerate()
        .map(|(i, (artist, title))| {
            let museum_id = museums.get(i).filter(|_| i + 1 < artists.len()).map(|m| m.id);
            painting(title, artist.id, museum_id)
        })
        .collect()
}

pub fn images(artists: &[Artist], paintings: &[Painting]) -> Vec<ImageMetadata> {
    artists
        .iter()
        .map(|a| image(EntityType::Artist, a.id))
        .chain(paintings.iter().map(|p| image(EntityType::Painting, p.id)))
        .collect()
}
