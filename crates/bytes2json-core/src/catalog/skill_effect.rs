//! `skillEffect.bytes`: textual descriptions of move side effects.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static INFO: Schema = schema!("ISkillEffectInfo" {
    "Bosseffective" => Int32,
    "argsNum" => Int32,
    "formattingAdjustment" => Text,
    "id" => Int32,
    "ifTextItalic" => Text,
    "info" => Text,
    "isif" => Int32,
    "tagA" => Text,
    "tagAboss" => Int32,
    "tagB" => Text,
    "tagBboss" => Int32,
    "tagC" => Text,
    "tagCboss" => Int32,
});

pub static ROOT: Schema = schema!("SkillEffectConfig" {
    "data" => OptionalArray(Element::Record(&INFO)),
});
