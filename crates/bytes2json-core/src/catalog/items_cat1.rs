//! `itemsOptimizeCatItems1.bytes`: items of category 1 (equipment-like,
//! with lifetime and repair pricing).

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static ITEM: Schema = schema!("IItemsItem" {
    "Bean" => Int32,
    "Hide" => Int32,
    "ID" => Int32,
    "LifeTime" => Int32,
    "Max" => Int32,
    "Name" => Text,
    "Price" => Int32,
    "RepairPrice" => Int32,
    "Sort" => Int32,
    "UseMax" => Int32,
    "VipOnly" => Int32,
    "actionDir" => Int32,
    "catID" => Int32,
    "isSpecial" => Int32,
    "purpose" => Int32,
    "speed" => Float32,
    "type" => Text,
    "wd" => Int32,
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "items" => OptionalArray(Element::Record(&ITEM)),
});
