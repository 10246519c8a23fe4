//! `skillTypes.bytes`: elemental types and their names.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static ITEM: Schema = schema!("ISkillTypeItem" {
    "att" => Text,
    "cn" => Text,
    "en" => OptionalArray(Element::Text),
    "id" => Int32,
    "is_dou" => Int32,
});

pub static TYPES: Schema = schema!("IRoot" {
    "item" => OptionalArray(Element::Record(&ITEM)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "root" => OptionalStruct(&TYPES),
});
