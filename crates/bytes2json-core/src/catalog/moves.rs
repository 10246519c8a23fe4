//! `moves.bytes`: the move (skill) table.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static MOVE: Schema = schema!("IMoveItem" {
    "Accuracy" => Int32,
    "AtkNum" => Int32,
    "AtkType" => Int32,
    "Category" => Int32,
    "CritRate" => Int32,
    "FriendSideEffect" => OptionalArray(Element::Int32),
    "FriendSideEffectArg" => OptionalArray(Element::Int32),
    "ID" => Int32,
    "MaxPP" => Int32,
    "MonID" => Int32,
    "MustHit" => Int32,
    "Name" => Text,
    "Power" => Int32,
    "Priority" => Int32,
    "SideEffect" => OptionalArray(Element::Int32),
    "SideEffectArg" => OptionalArray(Element::Int32),
    "Type" => Int32,
    "info" => Text,
    "ordinary" => Int32,
});

pub static MOVES: Schema = schema!("IMoves" {
    "Move" => OptionalArray(Element::Record(&MOVE)),
    "_text" => Text,
});

pub static MOVES_TBL: Schema = schema!("IMovesTbl" {
    "Moves" => OptionalStruct(&MOVES),
});

pub static ROOT: Schema = schema!("IMovesRoot" {
    "MovesTbl" => OptionalStruct(&MOVES_TBL),
});
