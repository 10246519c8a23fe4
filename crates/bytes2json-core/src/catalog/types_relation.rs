//! `typesRelation.bytes`: type effectiveness multipliers.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static OPPONENT: Schema = schema!("IOpponentItem" {
    "multiple" => Float32,
    "type" => Text,
});

pub static RELATION: Schema = schema!("IRelationItem" {
    "opponent" => OptionalArray(Element::Record(&OPPONENT)),
    "type" => Text,
});

pub static RELATIONS: Schema = schema!("IRoot" {
    "relation" => OptionalArray(Element::Record(&RELATION)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "root" => OptionalStruct(&RELATIONS),
});
