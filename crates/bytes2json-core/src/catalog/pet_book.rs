//! `petBook.bytes`: the pet handbook (hot pets, hotspots, recommended
//! mintmarks).

use crate::schema;
use crate::schema::{Element, FieldKind::*, Schema};

pub static PLACE: Schema = schema!("IPlaceItem" {
    "Desc" => Text,
    "Go" => Text,
    "ID" => Int32,
    "ImageID" => Int32,
    "Label" => Int32,
    "Mintmark" => OptionalArray(Element::Int32),
    "Redirect" => Text,
    "monID" => Int32,
    "type" => Int32,
});

pub static BRANCH: Schema = schema!("IBranchItem" {
    "ID" => Int32,
    "intro" => Text,
    "place" => OptionalArray(Element::Record(&PLACE)),
    "title" => Text,
});

pub static TYPE: Schema = schema!("ITypeItem" {
    "Branch" => OptionalArray(Element::Record(&BRANCH)),
    "ID" => Int32,
});

pub static PET_DATA: Schema = schema!("IPetDataItem" {
    "TagA" => Int32,
    "TagB" => OptionalArray(Element::Int32),
    "id" => Int32,
    "pid" => Int32,
});

pub static HOT_PET: Schema = schema!("IHotPet" {
    "PetData" => OptionalArray(Element::Record(&PET_DATA)),
    "type" => OptionalArray(Element::Record(&TYPE)),
});

pub static ITEM: Schema = schema!("IItem" {
    "intro" => Text,
    "place" => OptionalArray(Element::Record(&PLACE)),
});

pub static HOTSPOT: Schema = schema!("IHotspot" {
    "item" => OptionalStruct(&ITEM),
});

pub static MONSTER: Schema = schema!("IMonsterItem" {
    "DefName" => Text,
    "Features" => Text,
    "ID" => Int32,
    "Target" => Text,
});

pub static REC_MINTMARK: Schema = schema!("IRecMintmark" {
    "place" => OptionalArray(Element::Record(&PLACE)),
});

pub static BOOK: Schema = schema!("IRoot" {
    "HotPet" => OptionalStruct(&HOT_PET),
    "Hotspot" => OptionalStruct(&HOTSPOT),
    "Monster" => OptionalArray(Element::Record(&MONSTER)),
    "RecMintmark" => OptionalStruct(&REC_MINTMARK),
});

pub static ROOT: Schema = schema!("IRootInterface" {
    "root" => OptionalStruct(&BOOK),
});
