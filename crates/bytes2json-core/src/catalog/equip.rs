//! `equip.bytes`: equipment and per-rank descriptions.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static RANK: Schema = schema!("IRankItem" {
    "Desc" => Text,
    "Lv" => Int32,
});

pub static EQUIP: Schema = schema!("IEquipItem" {
    "Desc" => Text,
    "ItemID" => Int32,
    "Name" => Text,
    "Quality" => Int32,
    "Rank" => OptionalArray(Element::Record(&RANK)),
    "SuitID" => Int32,
});

pub static EQUIPS: Schema = schema!("IEquips" {
    "Equip" => OptionalArray(Element::Record(&EQUIP)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "Equips" => OptionalStruct(&EQUIPS),
});
