//! `suit.bytes`: clothing suits.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static ITEM: Schema = schema!("ISuitItem" {
    "cloths" => OptionalArray(Element::Int32),
    "id" => Int32,
    "name" => Text,
    "suitdes" => Text,
    "tranSpeed" => Float32,
    "transform" => Int32,
});

pub static SUITS: Schema = schema!("IRoot" {
    "item" => OptionalArray(Element::Record(&ITEM)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "root" => OptionalStruct(&SUITS),
});
