//! `petSkin.bytes`: pet skins and how they are obtained.

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static SKIN_KIND: Schema = schema!("ISkinKindItem" {
    "ID" => Int32,
    "LifeTime" => Int32,
    "SkinType" => Int32,
    "Type" => Int32,
    "Year" => Int32,
});

pub static SKIN: Schema = schema!("ISkinItem" {
    "Go" => Text,
    "GoType" => Text,
    "ID" => Int32,
    "Jumptarget" => Int32,
    "MonID" => Int32,
    "Name" => Text,
    "SkinKind" => OptionalArray(Element::Record(&SKIN_KIND)),
    "Type" => Int32,
});

pub static PET_SKINS: Schema = schema!("IPetSkins" {
    "Skin" => OptionalArray(Element::Record(&SKIN)),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "PetSkins" => OptionalStruct(&PET_SKINS),
});
