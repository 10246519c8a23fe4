//! `effectInfo.bytes`: effect text templates and parameter types.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static EFFECT: Schema = schema!("IEffectItem" {
    "analyze" => Text,
    "argsNum" => Int32,
    "id" => Int32,
    "info" => Text,
    "key" => Text,
    "param" => OptionalArray(Element::Int32),
    "type" => Int32,
});

pub static PARAM_TYPE: Schema = schema!("IParamTypeItem" {
    "id" => Int32,
    "params" => Text,
});

pub static TABLES: Schema = schema!("IEffectInfoRoot" {
    "Effect" => OptionalArray(Element::Record(&EFFECT)),
    "ParamType" => OptionalArray(Element::Record(&PARAM_TYPE)),
});

pub static ROOT: Schema = schema!("EffectInfoConfig" {
    "root" => OptionalStruct(&TABLES),
});
