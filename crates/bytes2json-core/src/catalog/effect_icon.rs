//! `effectIcon.bytes`: effect icons and their targeting metadata.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static EFFECT: Schema = schema!("IEffectItem" {
    "Id" => Int32,
    "analyze" => Text,
    "args" => Text,
    "come" => Text,
    "des" => OptionalArray(Element::Text),
    "effectId" => Int32,
    "iconId" => Int32,
    "intensify" => Int32,
    "isAdv" => Int32,
    "kind" => OptionalArray(Element::Int32),
    "label" => Int32,
    "limitedType" => Int32,
    "petId" => OptionalArray(Element::Int32),
    "specificId" => OptionalArray(Element::Int32),
    "tag" => OptionalArray(Element::Text),
    "target" => Int32,
    "tips" => Text,
    "to" => Int32,
    "type" => Int32,
});

pub static EFFECTS: Schema = schema!("IRoot" {
    "effect" => OptionalArray(Element::Record(&EFFECT)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "root" => OptionalStruct(&EFFECTS),
});
