//! Built-in backends.
//!
//! | Backend | Category | Subcategory |
//! |---|---|---|
//! | [`ElementBackend`] | `Solids` / `Liquids` / `Gases` | element class |
//! | [`TileBackend`] | `Buildings` | `Tiles` |
//! | [`NetworkBackend`] | `Networks` | network layer |
//! | [`OrderBackend`] | `Orders` | order kind, or `Build` |
//! | [`BiomeBackend`] | `Biomes` | `Zones` |
//! | [`EntityBackend`] | host supplied | host supplied |

pub mod biome;
pub mod element;
pub mod entity;
pub mod network;
pub mod order;
pub mod tile;

pub use biome::BiomeBackend;
pub use element::ElementBackend;
pub use entity::EntityBackend;
pub use network::NetworkBackend;
pub use order::OrderBackend;
pub use tile::TileBackend;

use crate::backend::Backend;

/// One of each built-in backend, in refresh order.
pub fn standard() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(ElementBackend),
        Box::new(TileBackend),
        Box::new(NetworkBackend),
        Box::new(OrderBackend),
        Box::new(BiomeBackend),
        Box::new(EntityBackend),
    ]
}
