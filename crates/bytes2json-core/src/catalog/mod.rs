//! Schemas of every known exported config table.
//!
//! Each entry is keyed by the table's canonical name, which is also the
//! stem of the exported file (`buff.bytes` decodes with the `buff` entry).
//! Field order inside each schema is the order the exporter writes; any
//! change to it must bump [`CATALOG_VERSION`].

use serde::Serialize;

use crate::schema::Schema;

pub mod achievement;
pub mod buff;
pub mod effect_icon;
pub mod effect_info;
pub mod equip;
pub mod items_cat1;
pub mod items_cat13;
pub mod mintmark;
pub mod monsters;
pub mod moves;
pub mod new_super_design;
pub mod pet_book;
pub mod pet_skin;
pub mod profile_photo;
pub mod skill_effect;
pub mod skill_types;
pub mod suit;
pub mod types_relation;

/// Version of the catalog field orders.
pub const CATALOG_VERSION: u32 = 1;

/// One known table: its name and root schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(serialize_with = "serialize_root")]
    pub root: &'static Schema,
}

fn serialize_root<S: serde::Serializer>(
    root: &&'static Schema,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(root.name)
}

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "achievement",
        description: "achievement types, branches and rules",
        root: &achievement::ROOT,
    },
    CatalogEntry {
        name: "buff",
        description: "status effect descriptions",
        root: &buff::ROOT,
    },
    CatalogEntry {
        name: "effectIcon",
        description: "effect icons shown on pets",
        root: &effect_icon::ROOT,
    },
    CatalogEntry {
        name: "effectInfo",
        description: "effect texts and parameter types",
        root: &effect_info::ROOT,
    },
    CatalogEntry {
        name: "equip",
        description: "equipment and rank descriptions",
        root: &equip::ROOT,
    },
    CatalogEntry {
        name: "itemsOptimizeCatItems1",
        description: "items, category 1",
        root: &items_cat1::ROOT,
    },
    CatalogEntry {
        name: "itemsOptimizeCatItems13",
        description: "items, category 13",
        root: &items_cat13::ROOT,
    },
    CatalogEntry {
        name: "mintmark",
        description: "mintmarks and mintmark classes",
        root: &mintmark::ROOT,
    },
    CatalogEntry {
        name: "monsters",
        description: "monster stats and learnable moves",
        root: &monsters::ROOT,
    },
    CatalogEntry {
        name: "moves",
        description: "move table",
        root: &moves::ROOT,
    },
    CatalogEntry {
        name: "newSuperDesign",
        description: "challenge designs",
        root: &new_super_design::ROOT,
    },
    CatalogEntry {
        name: "petBook",
        description: "pet handbook",
        root: &pet_book::ROOT,
    },
    CatalogEntry {
        name: "petSkin",
        description: "pet skins",
        root: &pet_skin::ROOT,
    },
    CatalogEntry {
        name: "profilePhoto",
        description: "avatar frames and portraits",
        root: &profile_photo::ROOT,
    },
    CatalogEntry {
        name: "skillEffect",
        description: "move side effect texts",
        root: &skill_effect::ROOT,
    },
    CatalogEntry {
        name: "skillTypes",
        description: "elemental types",
        root: &skill_types::ROOT,
    },
    CatalogEntry {
        name: "suit",
        description: "clothing suits",
        root: &suit::ROOT,
    },
    CatalogEntry {
        name: "typesRelation",
        description: "type effectiveness multipliers",
        root: &types_relation::ROOT,
    },
];

/// Find a catalog entry by name.
///
/// An exact match wins; otherwise names are compared ignoring ASCII case,
/// so `petbook` finds `petBook`.
///
/// # Examples
/// ```
/// use bytes2json_core::catalog;
///
/// assert_eq!(catalog::lookup("petbook").map(|entry| entry.name), Some("petBook"));
/// assert!(catalog::lookup("unknown").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .or_else(|| CATALOG.iter().find(|entry| entry.name.eq_ignore_ascii_case(name)))
}

/// Catalog names, in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}
