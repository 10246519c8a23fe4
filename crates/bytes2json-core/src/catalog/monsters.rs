//! `monsters.bytes`: monster base stats, evolution and learnable moves.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static SP_MOVE: Schema = schema!("ISpMoveItem" {
    "Id" => Int32,
    "Rec" => Int32,
    "Tag" => Int32,
    "tag" => Int32,
});

pub static MOVE: Schema = schema!("IMoveItem" {
    "Id" => Int32,
    "LearningLv" => Int32,
    "Rec" => Int32,
    "Tag" => Int32,
});

pub static LEARNABLE_MOVES: Schema = schema!("ILearnableMoves" {
    "AdvMove" => OptionalArray(Element::Record(&SP_MOVE)),
    "Move" => OptionalArray(Element::Record(&MOVE)),
    "SpMove" => OptionalArray(Element::Record(&SP_MOVE)),
});

pub static MONSTER: Schema = schema!("IMonsterItem" {
    "Atk" => Int32,
    "CharacterAttrParam" => Int32,
    "Combo" => Int32,
    "Def" => Int32,
    "DefName" => Text,
    "EvolvFlag" => Int32,
    "EvolvesTo" => Int32,
    "EvolvingLv" => Int32,
    "ExtraMoves" => OptionalStruct(&LEARNABLE_MOVES),
    "FreeForbidden" => Int32,
    "Gender" => Int32,
    "HP" => Int32,
    "ID" => Int32,
    "LearnableMoves" => OptionalStruct(&LEARNABLE_MOVES),
    "Move" => OptionalStruct(&MOVE),
    "PetClass" => Int32,
    "RealId" => Int32,
    "ShowExtraMoves" => OptionalStruct(&LEARNABLE_MOVES),
    "SpAtk" => Int32,
    "SpDef" => Int32,
    "SpExtraMoves" => OptionalStruct(&LEARNABLE_MOVES),
    "Spd" => Int32,
    "Support" => Int32,
    "Transform" => Int32,
    "Type" => Int32,
    "Vip" => Int32,
    "isFlyPet" => Int32,
    "isRidePet" => Int32,
});

pub static MONSTERS: Schema = schema!("IMonsters" {
    "Monster" => OptionalArray(Element::Record(&MONSTER)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "Monsters" => OptionalStruct(&MONSTERS),
});
