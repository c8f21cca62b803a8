//! Startup factory for every entity composer.

use tracing::info;

use crate::composer::SpecComposer;
use crate::config::SpecsConfig;
use crate::entities::{artists, images, museums, paintings};
use crate::entities::{ArtistFilter, ImageFilter, MuseumFilter, PaintingFilter};
use crate::error::Result;

/// All entity composers, built once at startup and shared read-only.
///
/// Construction fails on the first misconfigured binding; a service should
/// refuse to start rather than serve requests with a partial catalog.
pub struct Catalog {
    pub artists: SpecComposer<ArtistFilter>,
    pub museums: SpecComposer<MuseumFilter>,
    pub paintings: SpecComposer<PaintingFilter>,
    pub images: SpecComposer<ImageFilter>,
}

impl Catalog {
    pub fn new(config: &SpecsConfig) -> Result<Self> {
        let catalog = Self {
            artists: artists::specs(config)?,
            museums: museums::specs(config)?,
            paintings: paintings::specs(config)?,
            images: images::specs(config)?,
        };
        info!(distinct = ?config.distinct(), "entity composers ready");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::QueryExecutor;
    use crate::test_utils::{TestEnv, FRANCE, USA};

    #[test]
    fn builds_with_default_config() {
        let catalog = Catalog::new(&SpecsConfig::default()).unwrap();

        assert_eq!(catalog.artists.entity(), "artist");
        assert_eq!(catalog.museums.entity(), "museum");
        assert_eq!(catalog.paintings.entity(), "painting");
        assert_eq!(catalog.images.entity(), "image");
    }

    #[test]
    fn every_empty_filter_is_identity() {
        let catalog = Catalog::new(&SpecsConfig::default()).unwrap();

        assert!(catalog
            .artists
            .find_by_criteria(&Default::default())
            .is_identity());
        assert!(catalog
            .museums
            .find_by_criteria(&Default::default())
            .is_identity());
        assert!(catalog
            .paintings
            .find_by_criteria(&Default::default())
            .is_identity());
        assert!(catalog
            .images
            .find_by_criteria(&Default::default())
            .is_identity());
    }

    #[test]
    fn museum_search_by_query_and_country() {
        let env = TestEnv::new();
        let filter = MuseumFilter {
            query: Some("museum".into()),
            country_id: Some(FRANCE),
            ..Default::default()
        };

        let spec = env.catalog.museums.find_by_criteria(&filter);
        let titles: Vec<_> = env
            .museums
            .find_all(&spec)
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Orsay Museum"]);
    }

    #[test]
    fn museum_search_by_country() {
        let env = TestEnv::new();
        let filter = MuseumFilter {
            country_id: Some(USA),
            ..Default::default()
        };

        let spec = env.catalog.museums.find_by_criteria(&filter);
        let titles: Vec<_> = env
            .museums
            .find_all(&spec)
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Museum of Modern Art", "Metropolitan Museum of Art"]
        );
    }

    #[test]
    fn images_for_one_type() {
        let env = TestEnv::new();
        let filter = ImageFilter {
            entity_type: Some(crate::entities::EntityType::Painting),
            ..Default::default()
        };

        let spec = env.catalog.images.find_by_criteria(&filter);
        let found = env.images.find_all(&spec).unwrap();
        assert_eq!(found.len(), 4);
    }
}
