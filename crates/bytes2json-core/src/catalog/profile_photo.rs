//! `profilePhoto.bytes`: avatar frames and portraits.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static INFO: Schema = schema!("IProfilePhotoInfo" {
    "checkown" => Int32,
    "desc" => Text,
    "finishTime" => Int32,
    "goto" => Text,
    "hide" => Int32,
    "icon" => Int32,
    "id" => Int32,
    "name" => Text,
    "rarity" => Int32,
    "spine" => Text,
    "tab" => Int32,
    "text" => Text,
    "type" => Int32,
    "unavailable" => Int32,
    "unlocktype" => Int32,
});

pub static ROOT: Schema = schema!("ProfilePhotoConfig" {
    "data" => OptionalArray(Element::Record(&INFO)),
});
