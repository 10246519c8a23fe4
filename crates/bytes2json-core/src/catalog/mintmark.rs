//! `mintmark.bytes`: mintmarks (stat inscriptions) and their classes.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static MINTMARK: Schema = schema!("IMintMarkItem" {
    "Arg" => OptionalArray(Element::Int32),
    "BaseAttriValue" => OptionalArray(Element::Int32),
    "Connect" => Int32,
    "Des" => Text,
    "EffectDes" => Text,
    "ExtraAttriValue" => OptionalArray(Element::Int32),
    "Grade" => Int32,
    "Hide" => Int32,
    "ID" => Int32,
    "Level" => Int32,
    "Max" => Int32,
    "MaxAttriValue" => OptionalArray(Element::Int32),
    "MintmarkClass" => Int32,
    "MonsterID" => OptionalArray(Element::Int32),
    "MoveID" => OptionalArray(Element::Int32),
    "Quality" => Int32,
    "Rare" => Int32,
    "Rarity" => Int32,
    "TotalConsume" => Int32,
    "Type" => Int32,
});

pub static MINTMARK_CLASS: Schema = schema!("IMintmarkClassItem" {
    "ClassName" => Text,
    "ID" => Int32,
});

pub static MINTMARKS: Schema = schema!("IMintMarks" {
    "MintMark" => OptionalArray(Element::Record(&MINTMARK)),
    "MintmarkClass" => OptionalArray(Element::Record(&MINTMARK_CLASS)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "MintMarks" => OptionalStruct(&MINTMARKS),
});
