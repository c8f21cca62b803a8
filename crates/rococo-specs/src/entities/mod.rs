//! # Entity Catalogue
//!
//! One module per searchable entity type. Each module owns:
//!
//! - the entity's `const` attribute table and `static` [`Schema`](crate::schema::Schema),
//! - its filter value (request criteria, every field optional),
//! - its stored record type (implements [`Record`](crate::store::Record)),
//! - a `specs()` factory that binds matchers to schema fields.
//!
//! | Entity | Filter fields | Bindings |
//! |--------|---------------|----------|
//! | artist | `query` | PartialText → `name` |
//! | museum | `query`, `countryId`, `city` | PartialText → `title`, EqualId → `countryId`, PartialText → `city` |
//! | painting | `query`, `artistId`, `museumId` | PartialText → `title`, EqualId → `artistId`, EqualId → `museumId` |
//! | image | `entityType`, `entityIds` | EqualEnum → `entityType`, InIdSet → `entityId` |

pub mod artists;
pub mod images;
pub mod museums;
pub mod paintings;

pub use artists::{Artist, ArtistFilter};
pub use images::{EntityType, ImageFilter, ImageMetadata};
pub use museums::{Museum, MuseumFilter};
pub use paintings::{Painting, PaintingFilter};
