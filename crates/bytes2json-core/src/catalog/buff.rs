//! `buff.bytes`: status effect descriptions.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static BUFF_INFO: Schema = schema!("IBuffInfo" {
    "Desc" => Text,
    "Tag" => Text,
    "desc_tag" => Text,
    "icon" => OptionalArray(Element::Int32),
    "icontype" => Int32,
    "id" => Int32,
});

pub static ROOT: Schema = schema!("BuffConfig" {
    "data" => OptionalArray(Element::Record(&BUFF_INFO)),
});
